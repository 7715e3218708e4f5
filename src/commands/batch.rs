//! `promptgrade batch` - score every row of a dataset
//!
//! Rows come from a JSON Lines file (one object per line) or a directory of
//! `.txt`/`.md` prompts. Ctrl-C stops the run before the next row; the rows
//! scored so far are still reported and the command exits non-zero.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::json;

use crate::cli::{BatchArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{print_json, print_records};
use crate::commands::input;
use promptgrade_core::{bail_invalid, bail_usage};
use promptgrade_core::batch::{BatchSummary, CancelToken, ScoredBatch};
use promptgrade_core::config::SamplingMode;
use promptgrade_core::engine::Engine;
use promptgrade_core::error::{GradeError, Result};
use promptgrade_core::feature::FeatureCategory;
use promptgrade_core::records;
use promptgrade_core::rows::{self, FieldSelection, JsonRecord, TEXT_FIELD};

/// Field scored when none is given and the rows have one
const DEFAULT_FIELD: &str = "prompt";

/// Rows between progress lines
const PROGRESS_EVERY: usize = 100;

/// Execute the batch command
pub fn execute(ctx: &CommandContext, args: &BatchArgs) -> Result<()> {
    if let Some(field) = args.field.iter().find(|f| f.trim().is_empty()) {
        bail_invalid!("field name", format!("{:?}", field));
    }
    if let (Some(input), Some(output)) = (&args.file, &args.output) {
        if input == output {
            bail_usage!("--output must not overwrite the input file");
        }
    }

    let (mut config, _) = ctx.load_config()?;
    if args.full_scan {
        config.sampling.mode = SamplingMode::Full;
    }
    let engine = Engine::new(config)?;
    trace_command!(ctx.cli, ctx.start, "build_engine");

    let records = match &args.dir {
        Some(dir) => rows::read_text_dir(dir)?,
        None => rows::read_jsonl(input::open(args.file.as_deref())?)?,
    };
    trace_command!(ctx.cli, ctx.start, "load_rows");

    let selection = field_selection(args, &records);
    tracing::debug!(fields = ?selection.fields, rows = records.len(), "batch input");

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    let _ = ctrlc::set_handler(move || {
        handler_token.cancel();
    });

    let show_progress = ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet;
    let mut progress = |done: usize, total: usize| {
        let checkpoint = done % PROGRESS_EVERY == 0 || done == total;
        if show_progress && checkpoint && total >= PROGRESS_EVERY {
            eprintln!("Scored {}/{} rows", done, total);
        }
    };

    let batch = engine.score_rows(&records, &selection, Some(&mut progress), &cancel);
    let summary = engine.summarize(batch.results());
    trace_command!(ctx.cli, ctx.start, "score_rows");

    if let Some(path) = &args.output {
        write_results(path, &batch)?;
    }

    let include_rows = args.output.is_none();
    let top = engine.config().sampling.top_patterns;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json_report(&batch, &summary, top, include_rows))?,
        OutputFormat::Records => {
            print_records(records_report(&engine, &batch, &summary, top, include_rows))
        }
        OutputFormat::Human => print_human(ctx, &batch, &summary, top, include_rows),
    }

    if batch.interrupted {
        return Err(GradeError::Interrupted);
    }

    Ok(())
}

/// Fields to score: the explicit `--field` list, else `text` for
/// directories, else `prompt` or the first string field of the rows
fn field_selection(args: &BatchArgs, records: &[(usize, JsonRecord)]) -> FieldSelection {
    let fields = if !args.field.is_empty() {
        args.field.clone()
    } else if args.dir.is_some() {
        vec![TEXT_FIELD.to_string()]
    } else {
        let available = rows::text_fields(records.iter().map(|(_, r)| r));
        if available.is_empty() || available.iter().any(|f| f == DEFAULT_FIELD) {
            vec![DEFAULT_FIELD.to_string()]
        } else {
            tracing::info!(field = %available[0], "no prompt field, scoring first text field");
            vec![available[0].clone()]
        }
    };

    FieldSelection::new(fields).with_separator(args.separator.clone())
}

/// One JSON row result per line
fn write_results(path: &Path, batch: &ScoredBatch) -> Result<()> {
    let file = File::create(path).map_err(|e| GradeError::io_operation("create", path.display(), e))?;
    let mut writer = BufWriter::new(file);
    for row in &batch.rows {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = batch.rows.len(), "wrote row results");
    Ok(())
}

fn patterns_json(pairs: Vec<(FeatureCategory, usize)>) -> Vec<serde_json::Value> {
    pairs
        .into_iter()
        .map(|(category, count)| json!({ "category": category, "count": count }))
        .collect()
}

fn json_report(
    batch: &ScoredBatch,
    summary: &BatchSummary,
    top: usize,
    include_rows: bool,
) -> serde_json::Value {
    let mut report = json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "total": batch.total,
        "scored": batch.rows.len(),
        "interrupted": batch.interrupted,
        "summary": summary,
        "top_strengths": patterns_json(summary.top_strengths(top)),
        "top_weaknesses": patterns_json(summary.top_weaknesses(top)),
    });

    if include_rows {
        if let Some(obj) = report.as_object_mut() {
            obj.insert("rows".to_string(), json!(batch.rows));
        }
    }

    report
}

fn records_report(
    engine: &Engine,
    batch: &ScoredBatch,
    summary: &BatchSummary,
    top: usize,
    include_rows: bool,
) -> Vec<String> {
    let mut lines = vec![records::header_line(
        "batch",
        &[
            ("locale", engine.config().locale.to_string()),
            ("sampling", summary.sampling.mode.to_string()),
            ("total", batch.total.to_string()),
            ("scored", batch.rows.len().to_string()),
            ("interrupted", batch.interrupted.to_string()),
        ],
    )];
    if include_rows {
        lines.extend(
            batch
                .rows
                .iter()
                .map(|row| records::score_line(Some(row.index), &row.score)),
        );
    }
    lines.push(records::summary_line(summary));
    lines.extend(records::pattern_lines(summary, top));
    lines
}

fn print_human(
    ctx: &CommandContext,
    batch: &ScoredBatch,
    summary: &BatchSummary,
    top: usize,
    include_rows: bool,
) {
    if ctx.cli.quiet {
        println!("{:.2}", summary.mean_score);
        return;
    }

    if include_rows {
        for row in &batch.rows {
            let missing: Vec<&str> = row.score.weaknesses.iter().map(|w| w.category.as_str()).collect();
            let verdict = if row.score.is_high_quality() { "high" } else { "low" };
            if missing.is_empty() {
                println!("#{:<5} {:>6.2}  {}", row.index, row.score.total_score, verdict);
            } else {
                println!(
                    "#{:<5} {:>6.2}  {:<4}  missing: {}",
                    row.index,
                    row.score.total_score,
                    verdict,
                    missing.join(", ")
                );
            }
        }
        println!();
    }

    if batch.interrupted {
        println!("Interrupted after {} of {} rows", batch.rows.len(), batch.total);
    }

    println!("Rows: {}", summary.count);
    println!("Mean score: {:.2}", summary.mean_score);
    println!(
        "High quality: {} ({:.1}%)  Low quality: {}",
        summary.high_count, summary.quality_ratio, summary.low_count
    );
    if let Some(mean) = summary.high_mean_score {
        println!("High-quality mean: {:.2}", mean);
    }
    if let (Some(mean), Some(gap)) = (summary.low_mean_score, summary.improvement_gap) {
        println!("Low-quality mean: {:.2} ({:.2} below threshold)", mean, gap);
    }

    let sample_note = match summary.sampling.mode {
        SamplingMode::Prefix => format!(
            " (first {} high / {} low)",
            summary.sampling.high_quality_sample, summary.sampling.low_quality_sample
        ),
        SamplingMode::Full => String::new(),
    };

    let strengths = summary.top_strengths(top);
    if !strengths.is_empty() {
        println!("Common strengths{}:", sample_note);
        for (category, count) in strengths {
            println!("  {} x{}", category, count);
        }
    }

    let weaknesses = summary.top_weaknesses(top);
    if !weaknesses.is_empty() {
        println!("Common weaknesses{}:", sample_note);
        for (category, count) in weaknesses {
            println!("  {} x{}", category, count);
        }
    }
}
