//! RFC4180-style field quoting and record splitting.
//!
//! # Responsibility
//! - Escape single fields for CSV output.
//! - Split CSV text into records and records into fields, honoring quotes.
//!
//! # Invariants
//! - `escape_field` quotes only when the value contains a comma, quote, or
//!   newline; inner quotes are doubled.
//! - Splitting tolerates unbalanced quotes with a best-effort result rather
//!   than an error.

/// Escapes one field for CSV output.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Splits CSV text into logical records.
///
/// Newlines inside quoted fields stay part of their record; records that end
/// up blank after trimming are dropped.
pub fn split_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut record = String::new();
    let mut in_quotes = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                record.push(ch);
            }
            '\n' if !in_quotes => {
                push_record(&mut records, &mut record);
            }
            '\r' if !in_quotes => {}
            _ => record.push(ch),
        }
    }
    push_record(&mut records, &mut record);

    records
}

fn push_record(records: &mut Vec<String>, record: &mut String) {
    if !record.trim().is_empty() {
        records.push(std::mem::take(record));
    } else {
        record.clear();
    }
}

/// Splits one record into fields, honoring quoted fields with embedded
/// commas, newlines, and doubled quotes.
pub fn split_fields(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);

    fields
}
