//! SQL and tree outline output formatting.

use super::ConvertedFile;
use sqlbridge_core::render_sql;

/// Render each converted file as T-SQL.
///
/// With more than one file, each script is preceded by a `-- name` comment.
pub fn format_sql(files: &[ConvertedFile]) -> String {
    format_each(files, "-- ", |file| render_sql(&file.document.root))
}

/// Render each converted tree as an indented outline.
pub fn format_tree(files: &[ConvertedFile]) -> String {
    format_each(files, "# ", |file| file.document.root.outline())
}

fn format_each(
    files: &[ConvertedFile],
    header_prefix: &str,
    render: impl Fn(&ConvertedFile) -> String,
) -> String {
    let labelled = files.len() > 1;
    files
        .iter()
        .map(|file| {
            let body = render(file);
            if labelled {
                format!("{header_prefix}{}\n{body}\n", file.name)
            } else {
                format!("{body}\n")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
