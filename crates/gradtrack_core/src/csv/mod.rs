//! CSV encode/decode for export and import blobs.
//!
//! # Responsibility
//! - Encode the multi-section database into a `# Section:` block export.
//! - Round-trip flat application-record tables.
//!
//! # Invariants
//! - The codec works on byte buffers only; file access belongs to callers.
//! - Decoding degrades field-by-field and never fails on malformed rows.

pub mod quote;
pub mod records;
pub mod sections;
