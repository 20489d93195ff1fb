//! Rust doc comment extraction.
//!
//! Parses a source file with `syn` and collects the `///` documentation
//! attached to each top-level function:
//! - free `fn` items
//! - methods in `impl` blocks at file level
//!
//! Nested modules are not descended into.

use anyhow::{anyhow, Result};
use syn::{Attribute, Expr, ExprLit, ImplItem, Item, Lit, Meta};

/// Documentation attached to one function declaration.
#[derive(Debug, PartialEq, Eq)]
pub struct FnDoc {
    pub ident: String,
    /// Doc lines with the filler space stripped, each terminated by `\n`.
    pub doc: String,
}

/// Parse Rust source and return every top-level function, in source order.
pub fn parse(source: &str) -> Result<Vec<FnDoc>> {
    let file = syn::parse_file(source).map_err(|e| {
        let start = e.span().start();
        anyhow!("{}:{}: {}", start.line, start.column + 1, e)
    })?;

    let mut fns = Vec::new();
    for item in &file.items {
        match item {
            Item::Fn(f) => fns.push(FnDoc {
                ident: f.sig.ident.to_string(),
                doc: doc_text(&f.attrs),
            }),
            Item::Impl(imp) => {
                for impl_item in &imp.items {
                    if let ImplItem::Fn(m) = impl_item {
                        fns.push(FnDoc {
                            ident: m.sig.ident.to_string(),
                            doc: doc_text(&m.attrs),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    Ok(fns)
}

/// Documentation for the named function.
///
/// Declarations sharing a name (the same method on several types) have
/// their docs concatenated. Returns `None` if no declaration matches.
pub fn doc_for(fns: &[FnDoc], name: &str) -> Option<String> {
    let mut matched = fns.iter().filter(|f| f.ident == name).peekable();
    matched.peek()?;
    Some(matched.map(|f| f.doc.as_str()).collect())
}

/// Rebuild doc comment text from `#[doc = "..."]` attributes.
fn doc_text(attrs: &[Attribute]) -> String {
    let mut doc = String::new();
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        // #[doc(hidden)] and friends carry no text
        let Meta::NameValue(nv) = &attr.meta else {
            continue;
        };
        let Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) = &nv.value
        else {
            continue;
        };
        // block comments arrive as one attribute spanning several lines
        for line in s.value().split('\n') {
            doc.push_str(strip_filler(line));
            doc.push('\n');
        }
    }
    doc
}

/// `/// text` parses to `" text"`; drop the single space after the marker.
fn strip_filler(line: &str) -> &str {
    line.strip_prefix(' ').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_doc() {
        let src = "/// Filter returns a new slice...\n/// second line.\npub fn filter() {}\n";
        let fns = parse(src).unwrap();
        assert_eq!(fns.len(), 1);
        assert_eq!(fns[0].ident, "filter");
        assert_eq!(fns[0].doc, "Filter returns a new slice...\nsecond line.\n");
    }

    #[test]
    fn bare_marker_becomes_blank_line() {
        let src = "/// First paragraph.\n///\n/// Second paragraph.\nfn first() {}\n";
        let fns = parse(src).unwrap();
        assert_eq!(fns[0].doc, "First paragraph.\n\nSecond paragraph.\n");
    }

    #[test]
    fn extra_indentation_kept() {
        let src = "/// Example:\n///\n///     let x = 1;\nfn example() {}\n";
        let fns = parse(src).unwrap();
        assert_eq!(fns[0].doc, "Example:\n\n    let x = 1;\n");
    }

    #[test]
    fn undocumented_function_has_empty_doc() {
        let fns = parse("pub fn bare() {}\n").unwrap();
        assert_eq!(fns[0].doc, "");
    }

    #[test]
    fn plain_comments_and_hidden_attrs_ignored() {
        let src = "// not documentation\n#[doc(hidden)]\n#[inline]\n/// Visible.\nfn f() {}\n";
        let fns = parse(src).unwrap();
        assert_eq!(fns[0].doc, "Visible.\n");
    }

    #[test]
    fn impl_methods_collected_in_order() {
        let src = r#"
pub struct Strings(Vec<String>);
pub struct Ints(Vec<i64>);

impl Strings {
    /// Strings version.
    pub fn reverse(&self) -> Self { todo!() }
}

impl Ints {
    /// Ints version.
    pub fn reverse(&self) -> Self { todo!() }

    pub fn sum(&self) -> i64 { 0 }
}
"#;
        let fns = parse(src).unwrap();
        let idents: Vec<_> = fns.iter().map(|f| f.ident.as_str()).collect();
        assert_eq!(idents, ["reverse", "reverse", "sum"]);
        assert_eq!(
            doc_for(&fns, "reverse").as_deref(),
            Some("Strings version.\nInts version.\n")
        );
        assert_eq!(doc_for(&fns, "sum").as_deref(), Some(""));
    }

    #[test]
    fn nested_module_not_descended() {
        let src = "mod inner {\n    /// Hidden away.\n    pub fn deep() {}\n}\n";
        let fns = parse(src).unwrap();
        assert!(fns.is_empty());
    }

    #[test]
    fn doc_for_missing_name() {
        let fns = parse("/// Doc.\nfn present() {}\n").unwrap();
        assert_eq!(doc_for(&fns, "absent"), None);
    }

    #[test]
    fn block_doc_comment_split_into_lines() {
        let src = "/** Block doc.\n second line. */\nfn block() {}\n";
        let fns = parse(src).unwrap();
        assert_eq!(fns[0].doc, "Block doc.\nsecond line. \n");
    }

    #[test]
    fn malformed_source_is_an_error() {
        assert!(parse("fn broken( {\n").is_err());
    }
}
