//! Tracker database service: row/column CRUD with save-on-mutation.
//!
//! # Responsibility
//! - Own the in-memory tracker database for the process lifetime.
//! - Apply section-local row/column mutations and persist after each one.
//! - Run the one-time status-column backfill at open time.
//!
//! # Invariants
//! - Every successful mutation ends with a full-document save.
//! - A malformed or absent persisted document degrades to the default
//!   schema; opening never fails on document contents.
//! - Out-of-range row/column indices are silent no-ops and skip the save.

use crate::model::section::{
    default_priority_label, ColumnDef, ColumnType, Row, SectionData, SectionKind, TrackerDb,
};
use crate::repo::document_repo::{DocumentRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the whole tracker database document.
pub const DB_DOCUMENT_KEY: &str = "gradtrack:v1-custom-columns";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error for tracker persistence operations.
///
/// Mutations only fail on storage or encoding problems; the mutations
/// themselves are total over their input domain.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    Encode(serde_json::Error),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode tracker document: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Mutable column attribute selector for `update_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    Name,
    Type,
}

/// Owning facade over the tracker database and its persistence.
pub struct TrackerService<R: DocumentRepository> {
    repo: R,
    db: TrackerDb,
}

impl<R: DocumentRepository> TrackerService<R> {
    /// Loads the persisted database (or builds the default one), applies the
    /// status-column backfill, and saves the result.
    pub fn open(repo: R) -> ServiceResult<Self> {
        let db = match repo.load(DB_DOCUMENT_KEY)? {
            Some(document) => match serde_json::from_str::<TrackerDb>(&document) {
                Ok(db) => db,
                Err(err) => {
                    warn!(
                        "event=db_load module=service status=degraded reason=decode_failed error={err}"
                    );
                    TrackerDb::default_db()
                }
            },
            None => {
                info!("event=db_load module=service status=ok reason=no_prior_data");
                TrackerDb::default_db()
            }
        };

        let mut service = Self { repo, db };
        service.db.migrate_status_columns();
        service.persist()?;
        Ok(service)
    }

    /// Read access to the full database for views and export.
    pub fn db(&self) -> &TrackerDb {
        &self.db
    }

    /// Read access to one section.
    pub fn section(&self, kind: SectionKind) -> &SectionData {
        self.db.section(kind)
    }

    /// Appends a row pre-populated with per-column-type defaults: the
    /// section's not-started label for status columns, the default priority
    /// label for priority columns, empty string otherwise.
    pub fn add_row(&mut self, kind: SectionKind) -> ServiceResult<()> {
        let section = self.db.section_mut(kind);
        let mut row = Row::new();
        for column in &section.columns {
            let value = match column.kind {
                ColumnType::Status => kind.not_started_status(),
                ColumnType::Priority => default_priority_label(),
                _ => "",
            };
            row.insert(column.name.clone(), value.to_string());
        }
        section.rows.push(row);
        self.persist()
    }

    /// Removes the row at `index`. Out-of-range indices are ignored.
    pub fn delete_row(&mut self, kind: SectionKind, index: usize) -> ServiceResult<()> {
        let section = self.db.section_mut(kind);
        if index >= section.rows.len() {
            debug!("event=delete_row module=service status=noop reason=index_out_of_range index={index}");
            return Ok(());
        }
        section.rows.remove(index);
        self.persist()
    }

    /// Sets one cell. Out-of-range row indices are ignored.
    pub fn update_cell(
        &mut self,
        kind: SectionKind,
        row_index: usize,
        column_name: &str,
        value: impl Into<String>,
    ) -> ServiceResult<()> {
        let section = self.db.section_mut(kind);
        let Some(row) = section.rows.get_mut(row_index) else {
            debug!("event=update_cell module=service status=noop reason=index_out_of_range index={row_index}");
            return Ok(());
        };
        row.insert(column_name.to_string(), value.into());
        self.persist()
    }

    /// Appends a text column named `New Column` (uniquified with ` 2`, ` 3`,
    /// ... against existing names) and seeds the key to `""` on every
    /// existing row. Returns the assigned name.
    pub fn add_column(&mut self, kind: SectionKind) -> ServiceResult<String> {
        let section = self.db.section_mut(kind);
        let name = section.unique_column_name("New Column");
        section
            .columns
            .push(ColumnDef::new(name.clone(), ColumnType::Text));
        for row in &mut section.rows {
            row.insert(name.clone(), String::new());
        }
        self.persist()?;
        Ok(name)
    }

    /// Removes the column at `index` and purges its key from every row.
    /// Out-of-range indices are ignored.
    pub fn delete_column(&mut self, kind: SectionKind, index: usize) -> ServiceResult<()> {
        let section = self.db.section_mut(kind);
        if index >= section.columns.len() {
            debug!("event=delete_column module=service status=noop reason=index_out_of_range index={index}");
            return Ok(());
        }
        let removed = section.columns.remove(index);
        for row in &mut section.rows {
            row.remove(&removed.name);
        }
        self.persist()
    }

    /// Updates one column attribute. Out-of-range indices are ignored.
    ///
    /// - `ColumnField::Name`: renames the column and migrates every row's
    ///   value to the new key (absent old keys migrate as `""`). A rename to
    ///   the same name changes nothing.
    /// - `ColumnField::Type`: retags the column without touching stored
    ///   values; an unknown type string leaves the tag unchanged.
    pub fn update_column(
        &mut self,
        kind: SectionKind,
        index: usize,
        field: ColumnField,
        value: &str,
    ) -> ServiceResult<()> {
        let section = self.db.section_mut(kind);
        if index >= section.columns.len() {
            debug!("event=update_column module=service status=noop reason=index_out_of_range index={index}");
            return Ok(());
        }

        match field {
            ColumnField::Name => {
                let old_name = section.columns[index].name.clone();
                if old_name != value {
                    section.columns[index].name = value.to_string();
                    for row in &mut section.rows {
                        let old_value = row.remove(&old_name).unwrap_or_default();
                        row.insert(value.to_string(), old_value);
                    }
                }
            }
            ColumnField::Type => {
                if let Some(parsed) = ColumnType::parse(value) {
                    section.columns[index].kind = parsed;
                }
            }
        }
        self.persist()
    }

    fn persist(&self) -> ServiceResult<()> {
        let document = serde_json::to_string(&self.db).map_err(ServiceError::Encode)?;
        self.repo.save(DB_DOCUMENT_KEY, &document)?;
        Ok(())
    }
}
