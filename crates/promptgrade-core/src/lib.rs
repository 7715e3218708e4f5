//! Promptgrade Core Library
//!
//! Rubric-based prompt quality scoring: feature detection, weighted
//! scoring, ranked suggestions, prompt synthesis and batch statistics.

pub mod batch;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod feature;
pub mod format;
pub mod logging;
pub mod records;
pub mod rows;
pub mod score;
pub mod suggest;
pub mod synth;
