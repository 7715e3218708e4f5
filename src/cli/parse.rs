use promptgrade_core::catalog::Locale;
use promptgrade_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse rubric locale from string
pub fn parse_locale(s: &str) -> std::result::Result<Locale, String> {
    s.parse::<Locale>().map_err(|e| e.to_string())
}
