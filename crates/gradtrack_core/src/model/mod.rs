//! Domain model for the application tracker.
//!
//! # Responsibility
//! - Define the dynamic-schema section model behind the spreadsheet grids.
//! - Define the richer single-table `ApplicationRecord` shape behind CSV
//!   import/export.
//!
//! # Invariants
//! - Column names are unique within a section.
//! - Cell values stay untyped strings; interpretation lives in `view`.

pub mod record;
pub mod section;
