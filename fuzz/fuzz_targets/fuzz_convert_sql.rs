//! Fuzz target for the SQL-to-SQL pipeline.
//!
//! Parses, converts and renders arbitrary input; none of it may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sqlbridge_core::{convert_sql, render_sql, ConverterConfig, DocumentConverter};

fuzz_target!(|data: &[u8]| {
    let Ok(sql) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(converter) = DocumentConverter::new(ConverterConfig::default()) else {
        return;
    };
    if let Ok(converted) = convert_sql(sql, &converter) {
        let _ = render_sql(&converted.root);
    }
});
