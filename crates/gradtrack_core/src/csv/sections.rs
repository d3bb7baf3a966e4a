//! Multi-section CSV export.
//!
//! # Responsibility
//! - Snapshot the whole tracker database into one CSV blob, one block per
//!   section.
//!
//! # Invariants
//! - Block order is the canonical section order.
//! - Each block is `# Section: <Name>`, a header line of column names in
//!   column order, then one line per row; blocks are separated by a blank
//!   line. Export-only: no decoder exists for this format.

use crate::csv::quote::escape_field;
use crate::model::section::{SectionData, SectionKind, TrackerDb};

/// Encodes all sections into a UTF-8 CSV export blob.
pub fn export_sections(db: &TrackerDb) -> Vec<u8> {
    let blocks: Vec<String> = SectionKind::ALL
        .iter()
        .map(|kind| section_block(kind.display_name(), db.section(*kind)))
        .collect();
    blocks.join("\n\n").into_bytes()
}

fn section_block(name: &str, section: &SectionData) -> String {
    let mut lines = Vec::with_capacity(section.rows.len() + 2);
    lines.push(format!("# Section: {name}"));

    let header: Vec<&str> = section
        .columns
        .iter()
        .map(|column| column.name.as_str())
        .collect();
    lines.push(header.join(","));

    for row in &section.rows {
        let cells: Vec<String> = section
            .columns
            .iter()
            .map(|column| escape_field(SectionData::cell(row, &column.name)))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}
