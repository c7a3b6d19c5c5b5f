// src/cli.rs

//! CLI argument parsing using `clap` for the demo binary.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dagwalk`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagwalk",
    version,
    about = "Build small directed graphs and walk them.",
    long_about = None
)]
pub struct CliArgs {
    /// Which built-in demonstration graph to run.
    #[arg(long, value_enum, value_name = "NAME", default_value = "dressing")]
    pub demo: Demo,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGWALK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Built-in demonstration graphs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// "Getting dressed" dependency chain on an acyclic graph.
    Dressing,
    /// Diamond-shaped digraph showing DFS vs BFS visit order.
    Diamond,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
