mod batch;
mod catalog;
mod config;
mod score;
