//! Fixed-width table rendering for the contact list
//!
//! Column widths are fixed at 4/20/20/20/10. Values wider than their
//! column are not truncated, so the border misaligns for oversized values.

use crate::record::Record;

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(4),
        "-".repeat(20),
        "-".repeat(20),
        "-".repeat(20),
        "-".repeat(10),
    )
}

/// Render the contact list as a bordered table.
///
/// Headers are centered, values right-aligned, rows indexed from 1 in
/// iteration order with a border line after every row. An empty list
/// renders a single notice instead of a table.
pub fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "Contact list is empty.".to_string();
    }

    let line = border();
    let mut lines = Vec::with_capacity(3 + records.len() * 2);

    lines.push(line.clone());
    lines.push(format!(
        "| {:^4} | {:^20} | {:^20} | {:^20} | {:^10} |",
        "№", "Name", "Lastname", "Phone numbers", "Birth date",
    ));
    lines.push(line.clone());

    for (idx, record) in records.iter().enumerate() {
        lines.push(format!(
            "| {:^4} | {:>20} | {:>20} | {:>20} | {:>10} |",
            idx + 1,
            record.name,
            record.lastname,
            record.phone,
            record.birthdate,
        ));
        lines.push(line.clone());
    }

    lines.join("\n")
}
