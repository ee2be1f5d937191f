//! SQLBridge CLI - Oracle to SQL Server syntax tree converter

use sqlbridge_cli::cli;
use sqlbridge_cli::input::{self, InputSource};
use sqlbridge_cli::output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use sqlbridge_core::converters::all_converters;
use sqlbridge_core::{convert_sql, ConvertedDocument, ConverterConfig, DocumentConverter, SyntaxNode};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cli::{Args, InputFormat, OutputFormat};
use output::{format_diagnostics, format_json, format_sql, format_tree, ConvertedFile};

/// Parse or conversion errors in at least one input.
const EXIT_FAILURE: u8 = 1;
/// Configuration error (e.g. unreadable config or unknown converter name).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    let converter = match build_converter(&args) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("sqlbridge: error: {e:#}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match run(&args, &converter) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("sqlbridge: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Builds the dispatcher from `--config` and `--disable-converter`.
fn build_converter(args: &Args) -> Result<DocumentConverter> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ConverterConfig::default(),
    };

    for name in &args.disable_converter {
        if !config.disabled_converters.contains(name) {
            config.disabled_converters.push(name.clone());
        }
    }

    let known: Vec<&'static str> = all_converters().iter().map(|c| c.name()).collect();
    for name in &config.disabled_converters {
        if !known.contains(&name.as_str()) {
            bail!(
                "unknown converter '{name}' (available: {})",
                known.join(", ")
            );
        }
    }

    DocumentConverter::new(config).context("Failed to build converter registry")
}

fn load_config(path: &Path) -> Result<ConverterConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Converts every input and writes the result.
///
/// Returns true if any input failed to convert.
fn run(args: &Args, converter: &DocumentConverter) -> Result<bool> {
    let sources = input::read_input(&args.files)?;

    let mut has_errors = false;
    let mut converted = Vec::with_capacity(sources.len());
    for source in &sources {
        match convert_source(source, args.input, converter) {
            Ok(document) => converted.push(ConvertedFile {
                name: source.name.clone(),
                document,
            }),
            Err(e) => {
                eprintln!("sqlbridge: error: {}: {e:#}", source.name);
                has_errors = true;
            }
        }
    }

    if !args.quiet {
        let diagnostics = format_diagnostics(&converted, io::stderr().is_terminal());
        eprint!("{diagnostics}");
    }

    if converted.is_empty() {
        return Ok(has_errors);
    }

    let output_str = match args.format {
        OutputFormat::Sql => format_sql(&converted),
        OutputFormat::Tree => format_tree(&converted),
        OutputFormat::Json => {
            format_json(&converted, args.compact).context("Failed to serialize output")?
        }
    };

    write_output(&args.output, &output_str)?;

    Ok(has_errors)
}

fn convert_source(
    source: &InputSource,
    format: InputFormat,
    converter: &DocumentConverter,
) -> Result<ConvertedDocument> {
    match format {
        InputFormat::Sql => Ok(convert_sql(&source.content, converter)?),
        InputFormat::Json => {
            let tree: SyntaxNode = serde_json::from_str(&source.content)
                .context("Failed to parse syntax tree JSON")?;
            Ok(converter.convert_document(&tree)?)
        }
    }
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    } else {
        io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        // Ensure newline at end for terminal output
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
