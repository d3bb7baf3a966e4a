//! Dashboard projections: upcoming deadlines and per-section summaries.
//!
//! # Invariants
//! - Deadline collection only reads the first date-typed column named
//!   `deadline` (case-insensitive) per section.
//! - Rows whose status marks them completed for their section are excluded.
//! - The deadline window is `[0, 30]` days inclusive, ascending by days
//!   left.

use crate::model::section::{ColumnType, SectionData, SectionKind, TrackerDb};
use crate::view::dates::parse_flexible_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Inclusive upper bound of the upcoming-deadline window, in days.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// One upcoming-deadline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineItem {
    pub section: SectionKind,
    pub name: String,
    pub deadline: NaiveDate,
    pub days_left: i64,
}

/// Collects rows across all sections whose deadline falls within the next
/// 30 days and whose status does not mark them completed, ascending by days
/// left.
pub fn upcoming_deadlines(db: &TrackerDb, today: NaiveDate) -> Vec<DeadlineItem> {
    let mut items = Vec::new();

    for kind in SectionKind::ALL {
        let section = db.section(kind);
        let Some(deadline_column) = section
            .columns
            .iter()
            .find(|column| {
                column.kind == ColumnType::Date && column.name.to_lowercase() == "deadline"
            })
        else {
            continue;
        };
        let status_column = section.column_of_type(ColumnType::Status);

        for row in &section.rows {
            if let Some(status_column) = status_column {
                let status = SectionData::cell(row, &status_column.name).to_lowercase();
                if status == kind.completed_status() {
                    continue;
                }
            }

            let cell = SectionData::cell(row, &deadline_column.name);
            let Some(deadline) = parse_flexible_date(cell) else {
                continue;
            };
            let days_left = (deadline - today).num_days();
            if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_left) {
                continue;
            }

            let name = row
                .get("Name")
                .cloned()
                .unwrap_or_else(|| "Untitled".to_string());
            items.push(DeadlineItem {
                section: kind,
                name,
                deadline,
                days_left,
            });
        }
    }

    items.sort_by_key(|item| item.days_left);
    items
}

/// Per-section totals plus status/priority breakdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub section: SectionKind,
    pub total_rows: usize,
    /// `label: count` pairs joined by `, `, labels in lexicographic order.
    pub status_breakdown: String,
    pub priority_breakdown: String,
}

/// Summarizes every section: row count plus breakdowns of whichever columns
/// are tagged status and priority.
pub fn section_summaries(db: &TrackerDb) -> Vec<SectionSummary> {
    SectionKind::ALL
        .iter()
        .map(|kind| {
            let section = db.section(*kind);
            SectionSummary {
                section: *kind,
                total_rows: section.rows.len(),
                status_breakdown: breakdown(section, ColumnType::Status),
                priority_breakdown: breakdown(section, ColumnType::Priority),
            }
        })
        .collect()
}

fn breakdown(section: &SectionData, kind: ColumnType) -> String {
    let Some(column) = section.column_of_type(kind) else {
        return String::new();
    };

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &section.rows {
        let value = match row.get(&column.name) {
            Some(value) => value.as_str(),
            None => "N/A",
        };
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}
