//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key/value document access contract used by services.
//! - Isolate SQLite query details from business orchestration.
//!
//! # Invariants
//! - Repositories treat document payloads as opaque text; JSON shaping
//!   happens in the service layer.

pub mod document_repo;
