//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use promptgrade_core::config::{Config, ConfigSource};
use promptgrade_core::engine::Engine;
use promptgrade_core::error::Result;

/// Resolve the effective configuration, applying CLI overrides
pub fn load_config(cli: &Cli, cwd: &Path) -> Result<(Config, ConfigSource)> {
    let explicit = cli.config.as_ref().map(|p| {
        if p.is_absolute() {
            p.clone()
        } else {
            cwd.join(p)
        }
    });

    let (mut config, source) = Config::discover(explicit.as_deref(), cwd)?;

    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    tracing::debug!(source = %source, locale = %config.locale, "config resolved");
    Ok((config, source))
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a Path, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    pub fn load_config(&self) -> Result<(Config, ConfigSource)> {
        load_config(self.cli, self.cwd)
    }

    /// Build a scoring engine from the effective configuration
    pub fn engine(&self) -> Result<Engine<'static>> {
        let (config, _) = self.load_config()?;
        Engine::new(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("promptgrade {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A rubric-based prompt quality scorer.");
        println!();
        println!("Run `promptgrade --help` for usage information.");
        Ok(())
    }
}
