//! CLI commands for promptgrade

pub mod batch;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod format;
pub mod input;
pub mod score;
