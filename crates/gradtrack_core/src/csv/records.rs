//! Flat application-record CSV codec.
//!
//! # Responsibility
//! - Encode application records into the fixed 12-column table.
//! - Decode that table back into records with per-field degradation.
//!
//! # Invariants
//! - Column order matches `RECORD_HEADER` exactly.
//! - Decoding never fails: missing columns read as empty, unknown
//!   status/stage values degrade to `Researching`, bad priorities to 0,
//!   bad deadlines to no deadline.

use crate::csv::quote::{escape_field, split_fields, split_records};
use crate::model::record::{ApplicationRecord, ApplicationStatus, LinkItem};
use crate::view::dates::parse_flexible_datetime;
use log::{info, warn};

/// Fixed header of the flat record table.
pub const RECORD_HEADER: &str = "Professor Name,Email,University,Department,Interests,\
Deadline,Status,Stage,Priority,ColorHex,Notes,Links";

/// Separator between serialized `title:url` link pairs.
const LINK_SEPARATOR: &str = " | ";

/// Header handling on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Drop the first record when it looks like the header (contains
    /// `professor name` case-insensitively). Matches legacy exports of
    /// unknown provenance.
    Auto,
    /// The first record is a header; always drop it.
    Skip,
    /// There is no header; keep every record.
    Keep,
}

/// Encodes records into a UTF-8 CSV blob with the fixed header.
pub fn export_records(records: &[ApplicationRecord]) -> Vec<u8> {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(RECORD_HEADER.to_string());

    for record in records {
        let deadline = record
            .deadline
            .map(|deadline| deadline.to_rfc3339())
            .unwrap_or_default();
        let links = record
            .links
            .iter()
            .map(|link| format!("{}:{}", link.title, link.url))
            .collect::<Vec<_>>()
            .join(LINK_SEPARATOR);

        let priority = record.priority_level.to_string();
        // Notes flatten to one visual line; quoting still protects commas.
        let notes = record.notes.replace('\n', " ");

        let fields = [
            record.professor_name.as_str(),
            record.email.as_str(),
            record.university_name.as_str(),
            record.department.as_str(),
            record.research_interests.as_str(),
            deadline.as_str(),
            record.status.as_str(),
            record.stage.as_str(),
            priority.as_str(),
            record.color_hex.as_deref().unwrap_or(""),
            notes.as_str(),
            links.as_str(),
        ]
        .map(escape_field);
        lines.push(fields.join(","));
    }

    lines.join("\n").into_bytes()
}

/// Decodes a flat record table from a UTF-8 CSV blob.
///
/// Non-UTF-8 input yields an empty import rather than an error.
pub fn import_records(bytes: &[u8], header: HeaderPolicy) -> Vec<ApplicationRecord> {
    let Ok(text) = std::str::from_utf8(bytes) else {
        warn!("event=csv_import module=csv status=degraded reason=not_utf8");
        return Vec::new();
    };

    let mut records = split_records(text);
    let drop_first = match header {
        HeaderPolicy::Skip => !records.is_empty(),
        HeaderPolicy::Keep => false,
        HeaderPolicy::Auto => records
            .first()
            .is_some_and(|first| first.to_lowercase().contains("professor name")),
    };
    if drop_first {
        records.remove(0);
    }

    let imported: Vec<ApplicationRecord> = records
        .iter()
        .map(|record| decode_record(record))
        .collect();
    info!(
        "event=csv_import module=csv status=ok records={}",
        imported.len()
    );
    imported
}

fn decode_record(line: &str) -> ApplicationRecord {
    let fields = split_fields(line);
    let field = |index: usize| fields.get(index).map_or("", String::as_str);

    let mut record = ApplicationRecord::new();
    record.professor_name = field(0).to_string();
    record.email = field(1).to_string();
    record.university_name = field(2).to_string();
    record.department = field(3).to_string();
    record.research_interests = field(4).to_string();
    record.deadline = parse_flexible_datetime(field(5));
    record.status = ApplicationStatus::parse_or_default(field(6));
    record.stage = ApplicationStatus::parse_or_default(field(7));
    record.priority_level = field(8).trim().parse().unwrap_or(0);
    record.color_hex = match field(9) {
        "" => None,
        value => Some(value.to_string()),
    };
    record.notes = field(10).to_string();
    record.links = decode_links(field(11));
    record
}

/// Decodes `title:url` pairs joined by `|`. Fragments without a colon are
/// dropped; the first colon splits title from URL so scheme colons survive.
fn decode_links(value: &str) -> Vec<LinkItem> {
    value
        .split('|')
        .filter_map(|fragment| {
            let (title, url) = fragment.split_once(':')?;
            let title = title.trim();
            let url = url.trim();
            if title.is_empty() && url.is_empty() {
                return None;
            }
            Some(LinkItem::new(title, url))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::decode_links;

    #[test]
    fn links_split_on_first_colon_only() {
        let links = decode_links("Lab:https://lab.example/a | Scholar:https://scholar.example");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Lab");
        assert_eq!(links[0].url, "https://lab.example/a");
        assert_eq!(links[1].url, "https://scholar.example");
    }

    #[test]
    fn fragments_without_colon_are_dropped() {
        assert!(decode_links("no-url-here").is_empty());
        assert!(decode_links("").is_empty());
    }
}
