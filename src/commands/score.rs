//! `promptgrade score` - score one prompt
//!
//! Prints the total and sub-scores, strengths with their evidence,
//! weaknesses, ranked suggestions, the improved prompt and the recommended
//! temperature.

use crate::cli::{OutputFormat, ScoreArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{indent, print_json, print_records};
use crate::commands::input;
use promptgrade_core::engine::{Engine, Evaluation};
use promptgrade_core::error::Result;
use promptgrade_core::records;

/// Execute the score command
pub fn execute(ctx: &CommandContext, args: &ScoreArgs) -> Result<()> {
    let engine = ctx.engine()?;
    trace_command!(ctx.cli, ctx.start, "build_engine");

    let text = match &args.text {
        Some(text) => text.clone(),
        None => input::read_to_string(args.file.as_deref())?,
    };
    trace_command!(ctx.cli, ctx.start, "read_input");

    let evaluation = engine.evaluate(&text);
    trace_command!(ctx.cli, ctx.start, "evaluate");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&evaluation)?,
        OutputFormat::Records => print_records(records_output(&engine, &evaluation)),
        OutputFormat::Human => {
            if ctx.cli.quiet {
                println!("{}", evaluation.score.total_score);
            } else {
                print_human(&engine, &evaluation);
            }
        }
    }

    Ok(())
}

fn records_output(engine: &Engine, evaluation: &Evaluation) -> Vec<String> {
    let config = engine.config();
    let mut lines = vec![records::header_line(
        "score",
        &[
            ("locale", config.locale.to_string()),
            ("threshold", config.scoring.label_threshold.to_string()),
        ],
    )];
    lines.push(records::score_line(None, &evaluation.score));
    lines.extend(records::feature_lines(&evaluation.score));
    lines.extend(evaluation.suggestions.iter().map(records::suggestion_line));
    lines.extend(records::body_lines("improved", &evaluation.improved_prompt));
    lines
}

fn print_human(engine: &Engine, evaluation: &Evaluation) {
    let score = &evaluation.score;
    let verdict = if score.is_high_quality() {
        "high quality"
    } else {
        "low quality"
    };

    println!(
        "Score: {:.2} / 100 ({}, threshold {})",
        score.total_score,
        verdict,
        engine.config().scoring.label_threshold
    );
    println!(
        "  accuracy {}  length {}",
        score.accuracy_score, score.length_score
    );

    if !score.strengths.is_empty() {
        println!();
        println!("Strengths:");
        for strength in &score.strengths {
            println!("  + {} (+{})", strength.category, strength.impact);
            println!("    {}", strength.evidence);
        }
    }

    if !score.weaknesses.is_empty() {
        println!();
        println!("Weaknesses:");
        for weakness in &score.weaknesses {
            println!("  - {} ({})", weakness.category, weakness.impact);
            println!("    {}", weakness.evidence);
        }
    }

    if !evaluation.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for (i, suggestion) in evaluation.suggestions.iter().enumerate() {
            println!(
                "  {}. [{}] {} (priority {})",
                i + 1,
                suggestion.category,
                suggestion.advice,
                suggestion.priority
            );
            println!("     template: {}", suggestion.template);
            println!("     sources: {}", suggestion.citations.join("; "));
        }
    }

    println!();
    println!("Improved prompt:");
    println!("{}", indent(&evaluation.improved_prompt, "  "));

    let temperature = &engine.catalog().temperature;
    println!();
    println!(
        "Recommended temperature: {} ({})",
        score.temperature_setting, temperature.recommendation
    );
}
