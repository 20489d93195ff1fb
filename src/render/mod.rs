//! Markdown rendering: the summary table followed by one section per function.

pub mod sections;
pub mod table;

use crate::model::FunctionRecord;

/// Render the table and the per-function sections, in record order.
pub fn render(records: &[FunctionRecord]) -> String {
    let mut output = table::render_table(records);
    output.push('\n');
    output.push_str(&sections::render_sections(records));
    output
}
