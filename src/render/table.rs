//! Fixed-width markdown summary table.
//!
//! Column layout:
//!
//! ```text
//! | Function | String | Number | Struct | Maps | Big-O    | Description |
//! ```
//!
//! The name column grows with the longest function name; every other column
//! has a fixed width so existing tables diff cleanly.

use crate::catalog::Category;
use crate::model::FunctionRecord;

/// Title of the first column. The splicer looks for a line starting with
/// `| Function` to find the table.
pub const NAME_TITLE: &str = "Function";

const BIG_O_TITLE: &str = "Big-O";
const BIG_O_WIDTH: usize = 8;
const TICK: &str = "✓";

/// Render header, separator and one row per record.
pub fn render_table(records: &[FunctionRecord]) -> String {
    let width = name_width(records);
    let mut output = String::new();

    // Header
    output.push_str(&format!("| {} | ", pad(NAME_TITLE, width + 2)));
    for category in Category::ALL {
        output.push_str(category.title());
        output.push_str(" | ");
    }
    output.push_str(&format!("{} | Description |\n", pad(BIG_O_TITLE, BIG_O_WIDTH)));

    // Separator
    output.push_str(&format!("| {} | ", "-".repeat(width + 2)));
    for category in Category::ALL {
        let len = category.title().len();
        output.push_str(&format!(":{}: | ", "-".repeat(len - 2)));
    }
    output.push_str(&format!(":{}: | ----------- |\n", "-".repeat(BIG_O_WIDTH - 2)));

    for record in records {
        output.push_str(&render_row(record, width));
    }

    output
}

fn render_row(record: &FunctionRecord, width: usize) -> String {
    let mut row = format!("| {} | ", pad(&format!("`{}`", record.name), width + 2));
    for category in Category::ALL {
        let tick = if record.applicability.contains(category) {
            TICK
        } else {
            " "
        };
        row.push_str(&pad(tick, category.title().len()));
        row.push_str(" | ");
    }
    row.push_str(&format!(
        "{} | {} |\n",
        pad(&record.big_o, BIG_O_WIDTH),
        record.brief()
    ));
    row
}

/// Width of the longest function name, never narrower than the column title
/// minus the two backticks that wrap each name.
fn name_width(records: &[FunctionRecord]) -> usize {
    records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(NAME_TITLE.len() - 2)
}

/// Right-pad to `width` display characters. Longer text is left as is.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
