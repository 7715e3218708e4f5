use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Prompt file (`-` or absent reads stdin)
    #[arg(conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Score this text instead of reading a file
    #[arg(long, short)]
    pub text: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// JSON Lines file with one object per row (`-` reads stdin)
    #[arg(required_unless_present = "dir", conflicts_with = "dir")]
    pub file: Option<PathBuf>,

    /// Score every .txt and .md file under a directory instead
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Field holding the prompt text (repeat to combine several fields)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Separator placed between combined fields
    #[arg(long, default_value = " ")]
    pub separator: String,

    /// Mine patterns from every row instead of the leading sample
    #[arg(long)]
    pub full_scan: bool,

    /// Write one JSON result per row to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Write the effective configuration to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
