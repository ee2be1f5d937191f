//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// SQLBridge - Oracle to SQL Server syntax tree converter
#[derive(Parser, Debug)]
#[command(name = "sqlbridge")]
#[command(about = "Convert Oracle SQL syntax trees into SQL Server form", long_about = None)]
#[command(version)]
pub struct Args {
    /// Input files (reads from stdin if none provided)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// What the input files contain
    #[arg(short, long, default_value = "sql", value_enum)]
    pub input: InputFormat,

    /// Output format
    #[arg(short, long, default_value = "sql", value_enum)]
    pub format: OutputFormat,

    /// Comma-separated list of converters to disable (e.g., aggregate-over-expression)
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    pub disable_converter: Vec<String>,

    /// JSON converter configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress diagnostics on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,
}

/// Input format
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum InputFormat {
    /// SQL text
    Sql,
    /// Source syntax tree as JSON
    Json,
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered T-SQL text
    Sql,
    /// Converted tree and diagnostics as JSON
    Json,
    /// Indented outline of the converted tree
    Tree,
}
