//! Replace the generated region of a README in place.
//!
//! The region starts at the first line beginning with `| Function` and runs
//! up to the last occurrence of the end anchor (`# FAQ` by default). The
//! anchor is written back after the new content so the next run finds the
//! same region again.

use regex::Regex;
use std::sync::LazyLock;

/// Anchor that ends the generated region unless overridden.
pub const DEFAULT_ANCHOR: &str = "# FAQ";

static RE_TABLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\| Function\b").unwrap());

/// Outcome of a splice attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Splice {
    /// The region was found; holds the full updated document.
    Replaced(String),
    /// No line starts with the table header.
    MissingHeader,
    /// The table header exists but no anchor follows it.
    MissingAnchor,
}

/// Replace the region between the table header and `anchor` with `content`.
///
/// Text before the header and from the anchor onwards is kept byte for byte.
pub fn splice(document: &str, content: &str, anchor: &str) -> Splice {
    let Some(header) = RE_TABLE_HEADER.find(document) else {
        return Splice::MissingHeader;
    };
    let start = header.start();
    let Some(offset) = document[start..].rfind(anchor) else {
        return Splice::MissingAnchor;
    };
    let end = start + offset;

    let mut output = String::with_capacity(start + content.len() + document.len() - end);
    output.push_str(&document[..start]);
    output.push_str(content);
    output.push_str(&document[end..]);
    Splice::Replaced(output)
}
