//! JSON output formatting.

use super::ConvertedFile;

/// Format the converted files as a JSON array.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_json(files: &[ConvertedFile], compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(files)
    } else {
        serde_json::to_string_pretty(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlbridge_core::{convert_sql, ConverterConfig, DocumentConverter};

    fn converted(sql: &str) -> Vec<ConvertedFile> {
        let converter = DocumentConverter::new(ConverterConfig::default()).unwrap();
        vec![ConvertedFile {
            name: "query.sql".to_string(),
            document: convert_sql(sql, &converter).unwrap(),
        }]
    }

    #[test]
    fn test_json_pretty() {
        let json = format_json(&converted("SELECT 1"), false).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"name\": \"query.sql\""));
    }

    #[test]
    fn test_json_compact_flattens_document() {
        let json = format_json(&converted("SELECT first_value(a) OVER (ORDER BY b) FROM t"), true)
            .unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["root"]["kind"], "document");
        assert_eq!(value[0]["diagnostics"], serde_json::json!([]));
    }
}
