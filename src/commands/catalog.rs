//! `promptgrade catalog` - show the evidence behind the rubric
//!
//! Lists each feature's importance, rationale and example phrasings next to
//! the weight and markers in effect after configuration, followed by the
//! temperature recommendation.

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records};
use promptgrade_core::error::Result;
use promptgrade_core::records;

/// Execute the catalog command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let engine = ctx.engine()?;
    let catalog = engine.catalog();
    let rules = engine.calculator().detector().rules();

    match ctx.cli.format {
        OutputFormat::Json => {
            print_json(&json!({
                "catalog": catalog,
                "rules": rules,
            }))?;
        }
        OutputFormat::Records => {
            let mut lines = vec![records::header_line(
                "catalog",
                &[("locale", catalog.locale.to_string())],
            )];
            lines.extend(records::catalog_lines(catalog));
            print_records(lines);
        }
        OutputFormat::Human => {
            println!("Evidence catalog ({})", catalog.locale);

            for entry in &catalog.entries {
                println!();
                let weight = engine.calculator().detector().weight(entry.category);
                println!(
                    "{}  importance {}  weight {}",
                    entry.category, entry.importance, weight
                );
                println!("  {}", entry.rationale);
                if !ctx.cli.quiet {
                    println!("  examples: {}", entry.examples.join("; "));
                    if let Some(rule) = rules.iter().find(|r| r.category == entry.category) {
                        println!("  markers: {}", rule.keywords.join(", "));
                    }
                    println!("  when missing: {}", entry.missing_suggestion);
                }
            }

            let temperature = &catalog.temperature;
            println!();
            println!(
                "temperature  importance {}  value {}",
                temperature.importance, temperature.value
            );
            println!("  {}", temperature.rationale);
            println!("  {}", temperature.recommendation);
        }
    }

    Ok(())
}
