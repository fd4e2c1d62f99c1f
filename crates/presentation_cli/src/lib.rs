//! WeatherBot CLI library
//!
//! Argument parsing lives here so the binary and its tests share one
//! definition.

pub mod cli;

pub use cli::{Cli, Commands};
