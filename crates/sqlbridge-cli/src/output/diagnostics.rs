//! Human-readable diagnostics for stderr.

use super::ConvertedFile;
use owo_colors::OwoColorize;
use sqlbridge_core::Severity;
use std::fmt::Write;

/// Format the diagnostics of every file, one per line.
///
/// Returns an empty string when there is nothing to report.
pub fn format_diagnostics(files: &[ConvertedFile], colored: bool) -> String {
    let mut out = String::new();

    for file in files {
        for diagnostic in &file.document.diagnostics {
            let severity = match diagnostic.severity {
                Severity::Error if colored => "ERROR".red().to_string(),
                Severity::Warning if colored => "WARN".yellow().to_string(),
                Severity::Info if colored => "INFO".blue().to_string(),
                Severity::Error => "ERROR".to_string(),
                Severity::Warning => "WARN".to_string(),
                Severity::Info => "INFO".to_string(),
            };
            let code = if colored {
                diagnostic.code.dimmed().to_string()
            } else {
                diagnostic.code.clone()
            };

            let _ = writeln!(
                out,
                "{}: [{severity}] {code}: {}",
                file.name, diagnostic.message
            );
        }
    }

    out
}
