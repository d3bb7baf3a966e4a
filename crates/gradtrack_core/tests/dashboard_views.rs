use chrono::NaiveDate;
use gradtrack_core::view::dashboard::{section_summaries, upcoming_deadlines};
use gradtrack_core::view::dates::days_until;
use gradtrack_core::view::grid::{grid_rows, SortState};
use gradtrack_core::{ColumnDef, ColumnType, Row, SectionData, SectionKind, TrackerDb};

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn date_str(days_out: i64) -> String {
    (today() + chrono::Duration::days(days_out))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn days_until_handles_future_past_and_absent_values() {
    assert_eq!(days_until("2024-01-08", today()), Some(7));
    assert_eq!(days_until("2023-12-25", today()), Some(-7));
    assert_eq!(days_until("", today()), None);
    assert_eq!(days_until("soonish", today()), None);
}

#[test]
fn filter_matches_any_column_case_insensitively() {
    let section = SectionData {
        columns: vec![
            ColumnDef::new("Name", ColumnType::Text),
            ColumnDef::new("Country", ColumnType::Text),
        ],
        rows: vec![
            row(&[("Name", "MIT"), ("Country", "USA")]),
            row(&[("Name", "ETH"), ("Country", "Switzerland")]),
            row(&[("Name", "Oxford")]),
        ],
    };

    let sort = SortState::new();
    assert_eq!(grid_rows(&section, "switz", &sort).len(), 1);
    assert_eq!(grid_rows(&section, "USA", &sort).len(), 1);
    // Matches in any column, not just Name.
    assert_eq!(grid_rows(&section, "s", &sort).len(), 2);
    // Empty query returns everything.
    assert_eq!(grid_rows(&section, "", &sort).len(), 3);
    assert_eq!(grid_rows(&section, "mars", &sort).len(), 0);
}

#[test]
fn text_sort_is_case_insensitive_and_toggles_direction() {
    let section = SectionData {
        columns: vec![ColumnDef::new("Name", ColumnType::Text)],
        rows: vec![
            row(&[("Name", "beta")]),
            row(&[("Name", "Alpha")]),
            row(&[("Name", "gamma")]),
        ],
    };

    let mut sort = SortState::new();
    sort.toggle("Name");
    let names: Vec<String> = grid_rows(&section, "", &sort)
        .iter()
        .map(|r| r["Name"].clone())
        .collect();
    assert_eq!(names, vec!["Alpha", "beta", "gamma"]);

    sort.toggle("Name");
    let names: Vec<String> = grid_rows(&section, "", &sort)
        .iter()
        .map(|r| r["Name"].clone())
        .collect();
    assert_eq!(names, vec!["gamma", "beta", "Alpha"]);
}

#[test]
fn date_sort_parses_values_and_sinks_unparseable_ones() {
    let section = SectionData {
        columns: vec![
            ColumnDef::new("Name", ColumnType::Text),
            ColumnDef::new("Deadline", ColumnType::Date),
        ],
        rows: vec![
            row(&[("Name", "late"), ("Deadline", "2024-06-01")]),
            row(&[("Name", "none"), ("Deadline", "")]),
            row(&[("Name", "early"), ("Deadline", "2024-02-01")]),
            row(&[("Name", "garbage"), ("Deadline", "whenever")]),
        ],
    };

    let mut sort = SortState::new();
    sort.toggle("Deadline");
    let names: Vec<String> = grid_rows(&section, "", &sort)
        .iter()
        .map(|r| r["Name"].clone())
        .collect();
    // Unparseable values order before any parsed date, keeping store order
    // among themselves.
    assert_eq!(names, vec!["none", "garbage", "early", "late"]);

    sort.toggle("Deadline");
    let names: Vec<String> = grid_rows(&section, "", &sort)
        .iter()
        .map(|r| r["Name"].clone())
        .collect();
    // Ties among unparseable values keep store order under the stable sort.
    assert_eq!(names, vec!["late", "early", "none", "garbage"]);
}

#[test]
fn upcoming_deadlines_applies_status_window_and_ordering() {
    let mut db = TrackerDb::default_db();
    db.migrate_status_columns();

    // Professors: Mailed rows are done and excluded even inside the window.
    db.professors.rows.push(row(&[
        ("Name", "Dr. Done"),
        ("Status", "Mailed"),
        ("Deadline", &date_str(5)),
    ]));
    db.professors.rows.push(row(&[
        ("Name", "Dr. Soon"),
        ("Status", "Not Mailed"),
        ("Deadline", &date_str(20)),
    ]));

    // Universities: >30 days out is excluded.
    db.universities.columns.push(ColumnDef::new("Deadline", ColumnType::Date));
    db.universities.rows.push(row(&[
        ("Name", "Far U"),
        ("Status", "Not Applied"),
        ("Deadline", &date_str(40)),
    ]));

    // Scholarships: 10 days out ranks before the professor at 20.
    db.scholarships.rows.push(row(&[
        ("Name", "Fulbright"),
        ("Status", "Not Applied"),
        ("Deadline", &date_str(10)),
    ]));

    let items = upcoming_deadlines(&db, today());
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Fulbright", "Dr. Soon"]);
    assert_eq!(items[0].days_left, 10);
    assert_eq!(items[0].section, SectionKind::Scholarships);
    assert_eq!(items[1].days_left, 20);
}

#[test]
fn upcoming_deadlines_includes_today_and_thirty_days_out() {
    let mut db = TrackerDb::default_db();
    db.migrate_status_columns();

    db.scholarships.rows.push(row(&[
        ("Name", "Due Today"),
        ("Status", "Not Applied"),
        ("Deadline", &date_str(0)),
    ]));
    db.scholarships.rows.push(row(&[
        ("Name", "Edge"),
        ("Status", "Not Applied"),
        ("Deadline", &date_str(30)),
    ]));
    db.scholarships.rows.push(row(&[
        ("Name", "Overdue"),
        ("Status", "Not Applied"),
        ("Deadline", &date_str(-1)),
    ]));

    let names: Vec<String> = upcoming_deadlines(&db, today())
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["Due Today", "Edge"]);
}

#[test]
fn upcoming_deadlines_skips_unparseable_dates_and_names_untitled_rows() {
    let mut db = TrackerDb::default_db();
    db.migrate_status_columns();

    db.scholarships.rows.push(row(&[
        ("Name", "No Date"),
        ("Status", "Not Applied"),
        ("Deadline", "sometime"),
    ]));
    db.scholarships
        .rows
        .push(row(&[("Status", "Not Applied"), ("Deadline", &date_str(3))]));

    let items = upcoming_deadlines(&db, today());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Untitled");
}

#[test]
fn section_summaries_count_rows_and_break_down_tagged_columns() {
    let mut db = TrackerDb::default_db();
    db.migrate_status_columns();

    db.professors.rows.push(row(&[
        ("Name", "Dr. A"),
        ("Status", "Mailed"),
        ("Priority", "High"),
    ]));
    db.professors.rows.push(row(&[
        ("Name", "Dr. B"),
        ("Status", "Not Mailed"),
        ("Priority", "High"),
    ]));
    // Row without a priority key counts as N/A.
    db.professors
        .rows
        .push(row(&[("Name", "Dr. C"), ("Status", "Mailed")]));

    let summaries = section_summaries(&db);
    let professors = summaries
        .iter()
        .find(|summary| summary.section == SectionKind::Professors)
        .unwrap();

    assert_eq!(professors.total_rows, 3);
    assert_eq!(professors.status_breakdown, "Mailed: 2, Not Mailed: 1");
    assert_eq!(professors.priority_breakdown, "High: 2, N/A: 1");
}

#[test]
fn summaries_cover_all_sections_even_when_empty() {
    let db = TrackerDb::default_db();
    let summaries = section_summaries(&db);

    assert_eq!(summaries.len(), 3);
    assert!(summaries.iter().all(|summary| summary.total_rows == 0));
    assert!(summaries
        .iter()
        .all(|summary| summary.status_breakdown.is_empty()));
}
