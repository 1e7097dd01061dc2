//! FILENAME: tests/test_sorting.rs
//! Integration tests for column sorting: derived columns, stability, and
//! the header-click toggle protocol.

mod common;

use common::SectorFixture;
use dataset::Record;
use view_engine::{fields, sort_records, SortDirection, SortState};

fn sectors(rows: &[Record]) -> Vec<&str> {
    rows.iter().map(|r| r.text(fields::SECTOR)).collect()
}

// ============================================================================
// COMPARATOR TESTS
// ============================================================================

#[test]
fn test_ascending_and_descending_reverse_each_other() {
    let mut asc = SectorFixture::records();
    sort_records(&mut asc, fields::SEPARATED_LINES, SortDirection::Ascending);
    assert_eq!(sectors(&asc), vec!["21", "11", "12", "10", "20"]);

    let mut desc = SectorFixture::records();
    sort_records(&mut desc, fields::SEPARATED_LINES, SortDirection::Descending);
    let mut reversed: Vec<&str> = sectors(&desc);
    reversed.reverse();
    assert_eq!(sectors(&asc), reversed);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let mut records = Vec::new();
    for sector in ["30", "31", "32"] {
        let mut r = Record::new();
        r.set(fields::SECTOR, sector);
        r.set(fields::TARGET, 100.0);
        records.push(r);
    }

    let mut asc = records.clone();
    sort_records(&mut asc, fields::TARGET, SortDirection::Ascending);
    assert_eq!(sectors(&asc), vec!["30", "31", "32"]);

    // Descending reverses the comparator, not the slice: ties keep input
    // order here too.
    let mut desc = records;
    sort_records(&mut desc, fields::TARGET, SortDirection::Descending);
    assert_eq!(sectors(&desc), vec!["30", "31", "32"]);
}

#[test]
fn test_total_column_is_derived() {
    let mut records = SectorFixture::records();
    sort_records(&mut records, fields::COLUMN_TOTAL, SortDirection::Descending);
    // Totals: 10=100, 11=100, 12=100, 20=100, 21=60. Four-way tie keeps
    // input order ahead of the smaller total.
    assert_eq!(sectors(&records), vec!["10", "11", "12", "20", "21"]);
}

#[test]
fn test_progress_column_handles_zero_total() {
    let mut a = Record::new();
    a.set(fields::SECTOR, "A");
    a.set(fields::SEPARATED_LINES, 10.0);
    a.set(fields::REMAINING_LINES, 0.0);

    let mut b = Record::new();
    b.set(fields::SECTOR, "B");
    b.set(fields::SEPARATED_LINES, 5.0);
    b.set(fields::REMAINING_LINES, 5.0);

    // No lines at all reads as 0% rather than poisoning the comparator.
    let mut c = Record::new();
    c.set(fields::SECTOR, "C");

    let mut records = vec![c, b, a];
    sort_records(&mut records, fields::COLUMN_PROGRESS, SortDirection::Descending);
    assert_eq!(sectors(&records), vec!["A", "B", "C"]);
}

#[test]
fn test_text_sort_ignores_case() {
    let mut records = Vec::new();
    for (sector, description) in [("1", "zebra"), ("2", "ÁGUA"), ("3", "Armazém")] {
        let mut r = Record::new();
        r.set(fields::SECTOR, sector);
        r.set(fields::SECTOR_DESCRIPTION, description);
        records.push(r);
    }
    sort_records(
        &mut records,
        fields::SECTOR_DESCRIPTION,
        SortDirection::Ascending,
    );
    // Lowercased comparison puts "armazém" before "zebra" despite the
    // original capitals; "água" sorts after ASCII letters by code point.
    assert_eq!(sectors(&records), vec!["3", "1", "2"]);
}

#[test]
fn test_records_missing_the_column_sort_first_ascending() {
    let mut with = Record::new();
    with.set(fields::SECTOR, "10");
    with.set(fields::TARGET, 50.0);
    let mut without = Record::new();
    without.set(fields::SECTOR, "11");

    let mut records = vec![with, without];
    sort_records(&mut records, fields::TARGET, SortDirection::Ascending);
    assert_eq!(sectors(&records), vec!["11", "10"]);
}

// ============================================================================
// TOGGLE PROTOCOL
// ============================================================================

#[test]
fn test_header_clicks_toggle_then_reset() {
    let mut state = SortState::new();
    assert_eq!(state.request(fields::COLUMN_TOTAL), SortDirection::Ascending);
    assert_eq!(state.request(fields::COLUMN_TOTAL), SortDirection::Descending);

    // Switching columns always restarts ascending.
    assert_eq!(state.request(fields::SECTOR), SortDirection::Ascending);
    assert_eq!(
        state.active(),
        Some((fields::SECTOR, SortDirection::Ascending))
    );
}
