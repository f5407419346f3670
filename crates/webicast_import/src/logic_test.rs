// --- File: crates/webicast_import/src/logic_test.rs ---
use crate::logic::{parse_workbook, ImportError};
use crate::template::{template_workbook_bytes, SAMPLE_ROWS, TEMPLATE_HEADERS};
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use webicast_common::WebinarStatus;

fn workbook_from_rows(headers: &[&str], rows: &[Vec<&str>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, *value)
                .unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

#[test]
fn template_round_trips_through_the_parser() {
    let bytes = template_workbook_bytes().unwrap();
    let webinars = parse_workbook(&bytes).unwrap();

    assert_eq!(webinars.len(), SAMPLE_ROWS.len());
    // Order preserved
    assert_eq!(webinars[0].webinar_id, "WEB-001");
    assert_eq!(webinars[9].webinar_id, "WEB-010");
    assert_eq!(webinars[0].name, "Digital Marketing Trends 2025");
    assert_eq!(webinars[0].presenter.email, "john.smith@company.com");
    assert_eq!(webinars[0].attendee.phone.as_deref(), Some("+1-555-0201"));

    for webinar in &webinars {
        assert_eq!(webinar.status, WebinarStatus::Pending);
        assert!(webinar.presenter_link.is_none());
    }

    // Fresh internal ids, all distinct
    let ids: HashSet<_> = webinars.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids.len(), webinars.len());
}

#[test]
fn snake_case_headers_are_recognized() {
    let bytes = workbook_from_rows(
        &["webinar_id", "webinar_name", "date", "time", "presenter_email"],
        &[vec![
            "WEB-042",
            "Rustacean Hour",
            "2025-08-01",
            "09:30",
            "host@example.com",
        ]],
    );
    let webinars = parse_workbook(&bytes).unwrap();

    assert_eq!(webinars.len(), 1);
    assert_eq!(webinars[0].webinar_id, "WEB-042");
    assert_eq!(webinars[0].name, "Rustacean Hour");
    assert_eq!(webinars[0].time, "09:30");
    assert_eq!(webinars[0].presenter.email, "host@example.com");
    // Columns absent from the sheet stay empty
    assert!(webinars[0].attendee.email.is_empty());
}

#[test]
fn headers_only_sheet_yields_no_records() {
    let bytes = workbook_from_rows(&TEMPLATE_HEADERS, &[]);
    let webinars = parse_workbook(&bytes).unwrap();
    assert!(webinars.is_empty());
}

#[test]
fn blank_rows_are_skipped() {
    let bytes = workbook_from_rows(
        &["Webinar ID", "Webinar Name"],
        &[
            vec!["WEB-001", "First"],
            vec!["", ""],
            vec!["WEB-002", "Second"],
        ],
    );
    let webinars = parse_workbook(&bytes).unwrap();
    assert_eq!(webinars.len(), 2);
    assert_eq!(webinars[1].webinar_id, "WEB-002");
}

#[test]
fn unknown_columns_are_ignored() {
    let bytes = workbook_from_rows(
        &["Webinar ID", "Budget", "Webinar Name"],
        &[vec!["WEB-007", "99999", "Hidden Column Test"]],
    );
    let webinars = parse_workbook(&bytes).unwrap();
    assert_eq!(webinars[0].webinar_id, "WEB-007");
    assert_eq!(webinars[0].name, "Hidden Column Test");
}

#[test]
fn numeric_date_and_time_cells_convert_from_excel_serials() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in ["Webinar ID", "Date", "Time"].iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    worksheet.write_string(1, 0, "WEB-050").unwrap();
    // 45858 days past the 1899-12-30 epoch is 2025-07-20; 0.5 of a day is noon
    worksheet.write_number(1, 1, 45_858.0).unwrap();
    worksheet.write_number(1, 2, 0.5).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let webinars = parse_workbook(&bytes).unwrap();
    assert_eq!(webinars.len(), 1);
    assert_eq!(webinars[0].date, "2025-07-20");
    assert_eq!(webinars[0].time, "12:00");
    assert!(webinars[0].start_instant().is_ok());
}

#[test]
fn garbage_bytes_are_a_parse_error() {
    let err = parse_workbook(b"definitely not a spreadsheet").unwrap_err();
    assert!(matches!(err, ImportError::Parse(_)));
}
