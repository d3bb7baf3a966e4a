//! Derived, read-only projections over the tracker database.
//!
//! # Responsibility
//! - Date parsing and days-until computation for deadline cells.
//! - Grid filtering and type-aware sorting.
//! - Dashboard projections: upcoming deadlines and section summaries.
//!
//! # Invariants
//! - Nothing in this module mutates the database.
//! - Unparseable dates read as absent values, never as errors.

pub mod dashboard;
pub mod dates;
pub mod grid;
