//! Qualified-name extraction from identifier subtrees.
//!
//! Unquoted identifiers are case-insensitive in the source grammar and fold to
//! upper case; quoted identifiers keep their spelling.

use crate::grammar::oracle::{attributes, kinds};
use crate::tree::SyntaxNode;
use serde::Serialize;

/// One part of a qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    /// Spelling as written, without surrounding quotes.
    pub text: String,
    /// Case-normalized spelling used for comparisons.
    pub canonical: String,
    pub quoted: bool,
}

impl Identifier {
    pub fn new(text: impl Into<String>, quoted: bool) -> Self {
        let text = text.into();
        let canonical = if quoted {
            text.clone()
        } else {
            text.to_uppercase()
        };
        Self {
            text,
            canonical,
            quoted,
        }
    }

    /// Builds an identifier from a raw segment that may still carry its quotes.
    pub fn from_segment(segment: &str) -> Self {
        if is_quoted_identifier(segment) {
            Self::new(unquote_identifier(segment), true)
        } else {
            Self::new(segment.trim(), false)
        }
    }
}

/// An ordered, non-empty sequence of identifier parts (`pkg.func` has two).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualifiedName {
    parts: Vec<Identifier>,
}

impl QualifiedName {
    /// Returns `None` when `parts` is empty.
    pub fn new(parts: Vec<Identifier>) -> Option<Self> {
        if parts.is_empty() {
            None
        } else {
            Some(Self { parts })
        }
    }

    pub fn parts(&self) -> &[Identifier] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn last(&self) -> &Identifier {
        // Non-empty by construction.
        &self.parts[self.parts.len() - 1]
    }

    /// Returns the single part of a one-part name.
    pub fn single(&self) -> Option<&Identifier> {
        match self.parts.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Canonical spellings joined with dots.
    pub fn canonical(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.canonical.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Extracts the qualified name of an identifier subtree.
///
/// Name parts are taken from `name-part` children when present; otherwise the
/// node's own `text` attribute is split on dots outside of quotes. A
/// `name-part` without `text` makes the whole name unreadable.
pub fn qualified_name(identifier: &SyntaxNode) -> Option<QualifiedName> {
    let name_parts: Vec<&SyntaxNode> = identifier
        .children()
        .iter()
        .filter(|child| child.is(kinds::NAME_PART))
        .collect();

    if !name_parts.is_empty() {
        let parts = name_parts
            .into_iter()
            .map(|part| {
                let text = part.attribute(attributes::TEXT)?;
                let quoted = part.attribute(attributes::QUOTED) == Some("true");
                Some(Identifier::new(text, quoted))
            })
            .collect::<Option<Vec<_>>>()?;
        return QualifiedName::new(parts);
    }

    let text = identifier.attribute(attributes::TEXT)?;
    QualifiedName::new(
        split_qualified_identifiers(text)
            .iter()
            .map(|segment| Identifier::from_segment(segment))
            .collect(),
    )
}

/// Splits `a."b.c".[d]` into its dot-separated segments, keeping quotes.
pub fn split_qualified_identifiers(name: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = name.chars().peekable();
    let mut active_quote: Option<char> = None;

    while let Some(ch) = chars.next() {
        if let Some(q) = active_quote {
            current.push(ch);
            if ch == q {
                if matches!(q, '"' | '`') {
                    if let Some(&next) = chars.peek() {
                        if next == q {
                            current.push(next);
                            chars.next();
                            continue;
                        }
                    }
                }
                active_quote = None;
            }
            continue;
        }

        match ch {
            '"' | '`' => {
                active_quote = Some(ch);
                current.push(ch);
            }
            '[' => {
                active_quote = Some(']');
                current.push(ch);
            }
            '.' => {
                if !current.trim().is_empty() {
                    parts.push(current.trim().to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }

    parts
}

pub fn is_quoted_identifier(part: &str) -> bool {
    let trimmed = part.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => {
            matches!((first, last), ('"', '"') | ('`', '`') | ('[', ']'))
        }
        _ => false,
    }
}

pub fn unquote_identifier(part: &str) -> String {
    let trimmed = part.trim();
    if !is_quoted_identifier(trimmed) {
        return trimmed.to_string();
    }
    let inner = &trimmed[1..trimmed.len() - 1];
    match trimmed.chars().next() {
        Some('"') => inner.replace("\"\"", "\""),
        Some('`') => inner.replace("``", "`"),
        _ => inner.to_string(),
    }
}
