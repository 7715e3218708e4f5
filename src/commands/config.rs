//! `promptgrade config` - show or save the effective configuration

use serde_json::json;

use crate::cli::{ConfigArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records};
use promptgrade_core::error::{GradeError, Result};
use promptgrade_core::records;

/// Execute the config command
pub fn execute(ctx: &CommandContext, args: &ConfigArgs) -> Result<()> {
    let (config, source) = ctx.load_config()?;

    if let Some(path) = &args.save {
        let path = if path.is_absolute() {
            path.clone()
        } else {
            ctx.cwd.join(path)
        };
        config
            .save(&path)
            .map_err(|e| GradeError::io_operation("write config", path.display(), e))?;
        tracing::info!(path = %path.display(), "saved config");

        if ctx.cli.format == OutputFormat::Human {
            if !ctx.cli.quiet {
                println!("Saved configuration to {}", path.display());
            }
            return Ok(());
        }
    }

    match ctx.cli.format {
        OutputFormat::Json => {
            print_json(&json!({
                "source": source.to_string(),
                "config": config,
            }))?;
        }
        OutputFormat::Records => {
            let mut lines = vec![records::header_line(
                "config",
                &[("source", format!("\"{}\"", records::escape_quotes(&source.to_string())))],
            )];
            lines.extend(records::body_lines("config", &config.to_toml()?));
            print_records(lines);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("# source: {}", source);
            }
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
