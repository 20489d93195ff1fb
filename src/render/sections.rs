//! Per-function reference sections.

use crate::model::FunctionRecord;

/// Render `## name` followed by the full doc text for every record.
pub fn render_sections(records: &[FunctionRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&format!("## {}\n\n{}\n", record.name, record.doc));
    }
    output
}
