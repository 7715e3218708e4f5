//! Command implementations for all promptgrade commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use promptgrade_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Score(args) => crate::commands::score::execute(ctx, args),
            Commands::Batch(args) => crate::commands::batch::execute(ctx, args),
            Commands::Catalog => crate::commands::catalog::execute(ctx),
            Commands::Config(args) => crate::commands::config::execute(ctx, args),
        }
    }
}
