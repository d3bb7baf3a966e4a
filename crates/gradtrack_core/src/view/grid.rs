//! Grid projections: substring filtering and toggled, type-aware sorting.
//!
//! # Invariants
//! - Filtering matches a row when any column value contains the query,
//!   case-insensitively.
//! - Date columns sort by parsed date; unparseable dates order before any
//!   parsed date in ascending order. Other columns sort by case-insensitive
//!   lexicographic comparison.
//! - Sorting is stable; ties keep store order.

use crate::model::section::{ColumnType, Row, SectionData};
use crate::view::dates::parse_flexible_date;
use std::cmp::Ordering;

/// Grid sort selection with toggle semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self::new()
    }
}

impl SortState {
    /// No sort key; insertion order.
    pub fn new() -> Self {
        Self {
            key: None,
            ascending: true,
        }
    }

    /// Selects `key`: re-selecting the current key flips the direction,
    /// selecting a new key resets to ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key.to_string());
            self.ascending = true;
        }
    }
}

/// Returns a filtered, sorted snapshot of the section's rows.
pub fn grid_rows(section: &SectionData, query: &str, sort: &SortState) -> Vec<Row> {
    let mut rows: Vec<Row> = section
        .rows
        .iter()
        .filter(|row| row_matches(section, row, query))
        .cloned()
        .collect();

    if let Some(key) = sort.key.as_deref() {
        let kind = section
            .columns
            .iter()
            .find(|column| column.name == key)
            .map(|column| column.kind);
        rows.sort_by(|a, b| {
            let ordering = compare_cells(
                SectionData::cell(a, key),
                SectionData::cell(b, key),
                kind,
            );
            if sort.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }

    rows
}

/// True when any column value contains `query` case-insensitively.
/// An empty query matches every row.
pub fn row_matches(section: &SectionData, row: &Row, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    section
        .columns
        .iter()
        .any(|column| SectionData::cell(row, &column.name).to_lowercase().contains(&needle))
}

fn compare_cells(a: &str, b: &str, kind: Option<ColumnType>) -> Ordering {
    if kind == Some(ColumnType::Date) {
        // Option ordering puts unparseable (None) before any parsed date.
        return parse_flexible_date(a).cmp(&parse_flexible_date(b));
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}
