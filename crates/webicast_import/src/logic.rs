// --- File: crates/webicast_import/src/logic.rs ---
//! Turns an uploaded workbook into an ordered sequence of webinar records.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::{Duration, NaiveDate};
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;
use webicast_common::{Webinar, WebinarStatus};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read workbook: {0}")]
    Parse(String),
    #[error("Workbook contains no worksheets")]
    NoSheet,
}

/// The columns a row can map onto. Headers are matched after
/// normalization, so both `Webinar ID` and `webinar_id` land here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    WebinarId,
    Name,
    Date,
    Time,
    PresenterName,
    PresenterEmail,
    PresenterPhone,
    AttendeeName,
    AttendeeEmail,
    AttendeePhone,
}

fn header_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

fn field_for_header(raw: &str) -> Option<Field> {
    match header_key(raw).as_str() {
        "webinar_id" => Some(Field::WebinarId),
        "webinar_name" | "name" => Some(Field::Name),
        "date" => Some(Field::Date),
        "time" => Some(Field::Time),
        "presenter_name" => Some(Field::PresenterName),
        "presenter_email" => Some(Field::PresenterEmail),
        "presenter_phone" => Some(Field::PresenterPhone),
        "attendee_name" => Some(Field::AttendeeName),
        "attendee_email" => Some(Field::AttendeeEmail),
        "attendee_phone" => Some(Field::AttendeePhone),
        _ => None,
    }
}

/// Excel stores dates as days since 1899-12-30 and times as day fractions.
/// Cells without an explicit date format arrive as plain floats, so the
/// date/time columns convert serials themselves.
fn serial_date(serial: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

fn serial_time(serial: f64) -> String {
    let secs = ((serial.fract() * 86_400.0).round() as u32) % 86_400;
    format!("{:02}:{:02}", secs / 3_600, (secs % 3_600) / 60)
}

/// Renders one cell as text. Date and time columns get the formats the
/// rest of the system expects even when the sheet stores real datetime
/// cells or raw serial numbers instead of strings.
fn cell_text(cell: &Data, field: Field) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => match field {
            Field::Date => serial_date(*f)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            Field::Time => serial_time(*f),
            _ => {
                if f.fract() == 0.0 {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
        },
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => match field {
                Field::Date => naive.format("%Y-%m-%d").to_string(),
                Field::Time => naive.format("%H:%M").to_string(),
                _ => naive.format("%Y-%m-%d %H:%M").to_string(),
            },
            None => String::new(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
    }
}

/// Parses the first worksheet into webinar records.
///
/// The first row is the header; unknown columns are ignored and rows
/// with no recognized content are skipped. Every record gets a fresh
/// internal id and starts out `pending`.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<Webinar>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ImportError::Parse(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheet)?
        .map_err(|e| ImportError::Parse(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };

    let columns: Vec<Option<Field>> = header_row
        .iter()
        .map(|cell| match cell {
            Data::String(s) => field_for_header(s),
            _ => None,
        })
        .collect();

    let mut webinars = Vec::new();
    for row in rows {
        let mut webinar = Webinar {
            id: Uuid::new_v4().to_string(),
            status: WebinarStatus::Pending,
            ..Webinar::default()
        };
        let mut has_content = false;

        for (cell, field) in row.iter().zip(columns.iter()) {
            let Some(field) = field else { continue };
            let value = cell_text(cell, *field);
            if value.is_empty() {
                continue;
            }
            has_content = true;
            match field {
                Field::WebinarId => webinar.webinar_id = value,
                Field::Name => webinar.name = value,
                Field::Date => webinar.date = value,
                Field::Time => webinar.time = value,
                Field::PresenterName => webinar.presenter.name = value,
                Field::PresenterEmail => webinar.presenter.email = value,
                Field::PresenterPhone => webinar.presenter.phone = Some(value),
                Field::AttendeeName => webinar.attendee.name = value,
                Field::AttendeeEmail => webinar.attendee.email = value,
                Field::AttendeePhone => webinar.attendee.phone = Some(value),
            }
        }

        if has_content {
            webinars.push(webinar);
        }
    }

    debug!(count = webinars.len(), "Parsed webinar records from workbook");
    Ok(webinars)
}
