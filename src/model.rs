//! Data model for generated documentation — format-agnostic.

use crate::catalog::Applicability;

/// A documented function: catalog metadata joined with its doc comment.
#[derive(Debug, Clone)]
pub struct FunctionRecord {
    pub name: String,
    pub applicability: Applicability,
    /// Complexity annotation, e.g. "O(n)"
    pub big_o: String,
    /// Doc comment lines, each terminated by `\n`. Empty when undocumented.
    pub doc: String,
}

impl FunctionRecord {
    /// Leading paragraph of the doc comment, joined onto one line.
    ///
    /// Every line up to the first blank one is followed by a single space,
    /// so a one-line doc `"Foo.\n"` gives `"Foo. "`.
    pub fn brief(&self) -> String {
        let mut brief = String::new();
        for line in self.doc.split('\n') {
            if line.is_empty() {
                break;
            }
            brief.push_str(line);
            brief.push(' ');
        }
        brief
    }
}
