//! Core domain logic for GradTrack, a local single-user tracker for
//! graduate-school applications.
//! This crate is the single source of truth for business invariants; UI
//! shells call in through the service and view APIs.

pub mod csv;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    ApplicationRecord, ApplicationStatus, InteractionKind, InteractionLog, LinkItem,
};
pub use model::section::{
    default_priority_label, ColumnDef, ColumnType, Row, SectionData, SectionKind, TrackerDb,
    PRIORITY_OPTIONS, STATUS_OPTIONS,
};
pub use repo::document_repo::{
    DocumentRepository, RepoError, RepoResult, SqliteDocumentRepository,
};
pub use service::tracker_service::{
    ColumnField, ServiceError, ServiceResult, TrackerService, DB_DOCUMENT_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
