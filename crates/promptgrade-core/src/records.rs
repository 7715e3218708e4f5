//! Line builders for the records output format
//!
//! Every line starts with a one-letter tag:
//!
//! ```text
//! H promptgrade=1 records=1 mode=score locale=ko threshold=75
//! S total=45 accuracy=50 length=0 label=0 temperature=0.4
//! F weakness role impact=-25 "..."
//! G role priority=25 "..."
//! B improved
//! ...
//! B-END
//! A count=10 mean=61.5 high=3 low=7 ratio=30 high_mean=88 low_mean=50 gap=25
//! P weakness steps count=5
//! E role importance=95 "..."
//! T value=0.4 importance=70 "..."
//! ```

use crate::batch::BatchSummary;
use crate::catalog::EvidenceCatalog;
use crate::feature::FeatureSignal;
use crate::score::ScoreResult;
use crate::suggest::Suggestion;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Quote a free-text field, folding line breaks into spaces
fn quoted(s: &str) -> String {
    let single_line: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    format!("\"{}\"", escape_quotes(&single_line.join(" ")))
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// `H` line opening a records document
pub fn header_line(mode: &str, extra_fields: &[(&str, String)]) -> String {
    let mut parts = vec!["H promptgrade=1 records=1".to_string(), format!("mode={}", mode)];
    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }
    parts.join(" ")
}

/// `S` line with the sub-scores of one result; `index` is set for batch rows
pub fn score_line(index: Option<usize>, result: &ScoreResult) -> String {
    let prefix = index.map(|i| format!(" index={}", i)).unwrap_or_default();
    format!(
        "S{} total={} accuracy={} length={} label={} temperature={}",
        prefix,
        result.total_score,
        result.accuracy_score,
        result.length_score,
        result.label,
        result.temperature_setting
    )
}

fn feature_line(kind: &str, signal: &FeatureSignal) -> String {
    format!(
        "F {} {} impact={} {}",
        kind,
        signal.category,
        signal.impact,
        quoted(&signal.evidence)
    )
}

/// `F` lines, strengths first, then weaknesses
pub fn feature_lines(result: &ScoreResult) -> Vec<String> {
    result
        .strengths
        .iter()
        .map(|s| feature_line("strength", s))
        .chain(result.weaknesses.iter().map(|w| feature_line("weakness", w)))
        .collect()
}

/// `G` line for one ranked suggestion
pub fn suggestion_line(suggestion: &Suggestion) -> String {
    format!(
        "G {} priority={} {}",
        suggestion.category,
        suggestion.priority,
        quoted(&suggestion.advice)
    )
}

/// Body terminator line
pub const BODY_END: &str = "B-END";

/// `B id` ... `B-END` block carrying multi-line text verbatim. A body line
/// that would read as the terminator gets a leading backslash, as does one
/// that already starts with a backslash.
pub fn body_lines(id: &str, body: &str) -> Vec<String> {
    let mut lines = vec![format!("B {}", id)];
    lines.extend(body.lines().map(escape_body_line));
    lines.push(BODY_END.to_string());
    lines
}

fn escape_body_line(line: &str) -> String {
    if line == BODY_END || line.starts_with('\\') {
        format!("\\{}", line)
    } else {
        line.to_string()
    }
}

/// `A` line with the batch statistics
pub fn summary_line(summary: &BatchSummary) -> String {
    format!(
        "A count={} mean={:.2} high={} low={} ratio={:.1} high_mean={} low_mean={} gap={}",
        summary.count,
        summary.mean_score,
        summary.high_count,
        summary.low_count,
        summary.quality_ratio,
        optional(summary.high_mean_score.map(round2)),
        optional(summary.low_mean_score.map(round2)),
        optional(summary.improvement_gap.map(round2)),
    )
}

/// `P` lines for the top strength and weakness patterns
pub fn pattern_lines(summary: &BatchSummary, top: usize) -> Vec<String> {
    let strengths = summary
        .top_strengths(top)
        .into_iter()
        .map(|(c, n)| format!("P strength {} count={}", c, n));
    let weaknesses = summary
        .top_weaknesses(top)
        .into_iter()
        .map(|(c, n)| format!("P weakness {} count={}", c, n));
    strengths.chain(weaknesses).collect()
}

/// `E` lines for every catalog entry, then the `T` temperature line
pub fn catalog_lines(catalog: &EvidenceCatalog) -> Vec<String> {
    let mut lines: Vec<String> = catalog
        .entries
        .iter()
        .map(|e| format!("E {} importance={} {}", e.category, e.importance, quoted(e.rationale)))
        .collect();
    lines.push(format!(
        "T value={} importance={} {}",
        catalog.temperature.value,
        catalog.temperature.importance,
        quoted(catalog.temperature.recommendation)
    ));
    lines
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchAggregator;
    use crate::catalog::Locale;
    use crate::config::{Config, LABEL_THRESHOLD};
    use crate::score::ScoreCalculator;

    fn result(text: &str) -> ScoreResult {
        ScoreCalculator::new(EvidenceCatalog::builtin(Locale::Ko), &Config::default()).score(text)
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
    }

    #[test]
    fn test_header_line() {
        let line = header_line("score", &[("locale", "ko".to_string())]);
        assert_eq!(line, "H promptgrade=1 records=1 mode=score locale=ko");
    }

    #[test]
    fn test_score_line() {
        let r = result(&"x".repeat(5000));
        assert_eq!(
            score_line(None, &r),
            "S total=45 accuracy=50 length=0 label=0 temperature=0.4"
        );
        assert!(score_line(Some(3), &r).starts_with("S index=3 total=45 "));
    }

    #[test]
    fn test_feature_lines_are_single_line() {
        let r = result("당신은 시인입니다");
        let lines = feature_lines(&r);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("F strength role impact=25 \""));
        assert!(lines[1].starts_with("F weakness steps impact=-20 \""));
        assert!(lines.iter().all(|l| !l.contains('\n')));
    }

    #[test]
    fn test_body_lines_keep_text() {
        let lines = body_lines("improved", "첫 줄\n\n둘째 줄");
        assert_eq!(lines, vec!["B improved", "첫 줄", "", "둘째 줄", "B-END"]);
    }

    #[test]
    fn test_body_lines_escape_terminator() {
        let lines = body_lines("improved", "위\nB-END\n\\B-END\n아래");
        assert_eq!(
            lines,
            vec!["B improved", "위", "\\B-END", "\\\\B-END", "아래", "B-END"]
        );
        assert_eq!(lines.iter().filter(|l| *l == BODY_END).count(), 1);
    }

    #[test]
    fn test_summary_line_for_empty_batch() {
        let results: Vec<ScoreResult> = Vec::new();
        let summary =
            BatchAggregator::new(Default::default(), LABEL_THRESHOLD).summarize(&results);
        assert_eq!(
            summary_line(&summary),
            "A count=0 mean=0.00 high=0 low=0 ratio=0.0 high_mean=- low_mean=- gap=-"
        );
        assert!(pattern_lines(&summary, 3).is_empty());
    }

    #[test]
    fn test_pattern_lines() {
        let results = vec![result("요약"), result("정리")];
        let summary =
            BatchAggregator::new(Default::default(), LABEL_THRESHOLD).summarize(&results);
        let lines = pattern_lines(&summary, 2);
        assert_eq!(
            lines,
            vec!["P weakness role count=2", "P weakness steps count=2"]
        );
    }

    #[test]
    fn test_catalog_lines() {
        let lines = catalog_lines(EvidenceCatalog::builtin(Locale::En));
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("E role importance=95 "));
        assert!(lines[4].starts_with("T value=0.4 importance=70 "));
    }
}
