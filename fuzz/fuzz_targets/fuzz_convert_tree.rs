//! Fuzz target for the converters on malformed source trees.
//!
//! Trees are built from source-grammar kinds in arbitrary shapes, so the
//! over-expression rewrite sees nodes its grammar would never produce.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sqlbridge_core::grammar::oracle::{attributes, kinds};
use sqlbridge_core::{ConverterConfig, DocumentConverter, SyntaxNode};

const KINDS: &[&str] = &[
    kinds::OVER_EXPRESSION,
    kinds::OVER_EXPRESSION_PARAMS,
    kinds::IDENTIFIER,
    kinds::NAME_PART,
    kinds::FUNCTION_ARGUMENTS,
    kinds::EXPRESSION_LIST,
    kinds::ANALYTIC_CLAUSE,
    kinds::RAW_EXPRESSION,
    "unknown-kind",
];

#[derive(Debug, Arbitrary)]
struct FuzzNode {
    kind_idx: u8,
    text: Option<String>,
    children: Vec<FuzzNode>,
}

impl FuzzNode {
    fn build(&self) -> SyntaxNode {
        let mut node = SyntaxNode::new(KINDS[self.kind_idx as usize % KINDS.len()]);
        if let Some(text) = &self.text {
            node.set_attribute(attributes::TEXT, text.as_str());
        }
        for child in &self.children {
            node.push_child(child.build());
        }
        node
    }
}

fuzz_target!(|input: FuzzNode| {
    let Ok(converter) = DocumentConverter::new(ConverterConfig::default()) else {
        return;
    };
    let _ = converter.convert_document(&input.build());
});
