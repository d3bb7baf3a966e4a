//! Dynamic-schema section model.
//!
//! # Responsibility
//! - Model a named table with user-editable columns and string-valued rows.
//! - Own the default schema and the one-time status-column backfill.
//!
//! # Invariants
//! - Column names are unique within a section.
//! - A row may omit any column key; an absent key reads as the empty string.
//! - Cell values carry no type information; `ColumnType` drives
//!   interpretation at read time only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One stored row: column name to untyped string value.
///
/// Keys are column names. A missing key is equivalent to `""`; writers are
/// not required to seed every column.
pub type Row = BTreeMap<String, String>;

/// Presentation/parsing tag for a column.
///
/// Changing a column's type never rewrites stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Link,
    Date,
    Notes,
    Status,
    Priority,
}

impl ColumnType {
    /// Parses the persisted lowercase tag. Unknown input yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "link" => Some(Self::Link),
            "date" => Some(Self::Date),
            "notes" => Some(Self::Notes),
            "status" => Some(Self::Status),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }

    /// Lowercase tag used in persisted documents and type pickers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Link => "link",
            Self::Date => "date",
            Self::Notes => "notes",
            Self::Status => "status",
            Self::Priority => "priority",
        }
    }
}

/// Column descriptor: display name plus interpretation tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    /// Serialized as `type` to match the persisted document schema.
    #[serde(rename = "type")]
    pub kind: ColumnType,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Fixed section identities of the tracker database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Universities,
    Professors,
    Scholarships,
}

impl SectionKind {
    /// All sections in canonical display/export order.
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Universities,
        SectionKind::Professors,
        SectionKind::Scholarships,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Universities => "Universities",
            Self::Professors => "Professors",
            Self::Scholarships => "Scholarships",
        }
    }

    /// Canonical "not started" label seeded into status cells of new rows.
    pub fn not_started_status(self) -> &'static str {
        match self {
            Self::Universities | Self::Scholarships => "Not Applied",
            Self::Professors => "Not Mailed",
        }
    }

    /// Lowercased status value that marks a row as completed for deadline
    /// dashboards.
    pub fn completed_status(self) -> &'static str {
        match self {
            Self::Universities | Self::Scholarships => "applied",
            Self::Professors => "mailed",
        }
    }
}

/// Status vocabulary offered by status-cell pickers.
pub const STATUS_OPTIONS: [&str; 7] = [
    "Not Contacted",
    "Contacted",
    "Awaiting Response",
    "Interview Scheduled",
    "Submitted",
    "Accepted",
    "Rejected",
];

/// Priority vocabulary offered by priority-cell pickers.
pub const PRIORITY_OPTIONS: [&str; 4] = ["Low", "Medium", "High", "Urgent"];

/// Default label seeded into priority cells of new rows.
pub fn default_priority_label() -> &'static str {
    PRIORITY_OPTIONS[1]
}

/// One named table: ordered column schema plus ordered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionData {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Row>,
}

impl SectionData {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Returns the first column tagged with `kind`, if any.
    pub fn column_of_type(&self, kind: ColumnType) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.kind == kind)
    }

    /// Returns the cell value for `row` under `column_name`, with an absent
    /// key reading as the empty string.
    pub fn cell<'a>(row: &'a Row, column_name: &str) -> &'a str {
        row.get(column_name).map_or("", String::as_str)
    }

    /// Produces `base`, or `base 2`, `base 3`, ... — the first name not yet
    /// used by an existing column.
    pub fn unique_column_name(&self, base: &str) -> String {
        let existing: Vec<&str> = self
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect();
        if !existing.contains(&base) {
            return base.to_string();
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{base} {suffix}");
            if !existing.contains(&candidate.as_str()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

/// The full persisted database: one independent section per identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerDb {
    pub universities: SectionData,
    pub professors: SectionData,
    pub scholarships: SectionData,
}

impl TrackerDb {
    /// Builds the seed database: default column sets, zero rows.
    pub fn default_db() -> Self {
        let universities = SectionData::new(vec![
            ColumnDef::new("Name", ColumnType::Text),
            ColumnDef::new("Country", ColumnType::Text),
            ColumnDef::new("Website", ColumnType::Link),
            ColumnDef::new("Status", ColumnType::Status),
        ]);

        let professors = SectionData::new(vec![
            ColumnDef::new("Name", ColumnType::Text),
            ColumnDef::new("Country", ColumnType::Text),
            ColumnDef::new("Email", ColumnType::Text),
            ColumnDef::new("University", ColumnType::Text),
            ColumnDef::new("Department", ColumnType::Text),
            ColumnDef::new("Website", ColumnType::Link),
            ColumnDef::new("Research Interests", ColumnType::Notes),
            ColumnDef::new("Status", ColumnType::Status),
            ColumnDef::new("Deadline", ColumnType::Date),
            ColumnDef::new("Priority", ColumnType::Priority),
            ColumnDef::new("Notes", ColumnType::Notes),
        ]);

        let scholarships = SectionData::new(vec![
            ColumnDef::new("Name", ColumnType::Text),
            ColumnDef::new("Country", ColumnType::Text),
            ColumnDef::new("Description", ColumnType::Notes),
            ColumnDef::new("Deadline", ColumnType::Date),
            ColumnDef::new("Amount", ColumnType::Text),
            ColumnDef::new("Eligibility", ColumnType::Notes),
            ColumnDef::new("Link", ColumnType::Link),
            ColumnDef::new("Notes", ColumnType::Notes),
        ]);

        Self {
            universities,
            professors,
            scholarships,
        }
    }

    pub fn section(&self, kind: SectionKind) -> &SectionData {
        match kind {
            SectionKind::Universities => &self.universities,
            SectionKind::Professors => &self.professors,
            SectionKind::Scholarships => &self.scholarships,
        }
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> &mut SectionData {
        match kind {
            SectionKind::Universities => &mut self.universities,
            SectionKind::Professors => &mut self.professors,
            SectionKind::Scholarships => &mut self.scholarships,
        }
    }

    /// One-time backfill for documents saved before status columns became
    /// mandatory. Idempotent: a second run leaves the database unchanged.
    ///
    /// - Every section gains a status-typed column when it has none. The
    ///   column name is uniquified against existing names so the
    ///   unique-name invariant survives documents that already carry a
    ///   text column called `Status`.
    /// - Universities/scholarships rows are seeded with the section's
    ///   not-started label when the column is added.
    /// - Professors rows always normalize the legacy vocabulary
    ///   (`Contacted` -> `Mailed`, `Not Contacted` -> `Not Mailed`).
    pub fn migrate_status_columns(&mut self) {
        for kind in [SectionKind::Universities, SectionKind::Scholarships] {
            let section = self.section_mut(kind);
            if section.column_of_type(ColumnType::Status).is_none() {
                let name = section.unique_column_name("Status");
                section
                    .columns
                    .push(ColumnDef::new(name.clone(), ColumnType::Status));
                for row in &mut section.rows {
                    row.insert(name.clone(), kind.not_started_status().to_string());
                }
            }
        }

        let professors = self.section_mut(SectionKind::Professors);
        if professors.column_of_type(ColumnType::Status).is_none() {
            let name = professors.unique_column_name("Status");
            professors
                .columns
                .push(ColumnDef::new(name, ColumnType::Status));
        }
        let status_name = professors
            .column_of_type(ColumnType::Status)
            .map(|column| column.name.clone());
        if let Some(status_name) = status_name {
            for row in &mut professors.rows {
                let current = SectionData::cell(row, &status_name).trim();
                let replacement = match current {
                    "Contacted" => Some("Mailed"),
                    "Not Contacted" => Some("Not Mailed"),
                    _ => None,
                };
                if let Some(replacement) = replacement {
                    row.insert(status_name.clone(), replacement.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnDef, ColumnType, SectionData, SectionKind, TrackerDb};

    #[test]
    fn unique_column_name_increments_suffix() {
        let section = SectionData::new(vec![
            ColumnDef::new("New Column", ColumnType::Text),
            ColumnDef::new("New Column 2", ColumnType::Text),
        ]);
        assert_eq!(section.unique_column_name("New Column"), "New Column 3");
    }

    #[test]
    fn default_db_has_a_status_column_per_required_section() {
        let db = TrackerDb::default_db();
        assert!(db
            .universities
            .column_of_type(ColumnType::Status)
            .is_some());
        assert!(db.professors.column_of_type(ColumnType::Status).is_some());
        // Scholarships historically lacked one; migration adds it.
        let mut db = db;
        db.migrate_status_columns();
        assert!(db
            .scholarships
            .column_of_type(ColumnType::Status)
            .is_some());
    }

    #[test]
    fn completed_status_labels_match_section_vocabulary() {
        assert_eq!(SectionKind::Universities.completed_status(), "applied");
        assert_eq!(SectionKind::Professors.completed_status(), "mailed");
        assert_eq!(SectionKind::Scholarships.completed_status(), "applied");
    }
}
