// --- File: crates/webicast_common/src/calendar_link.rs ---
//! Builds Google Calendar "create event" deep links.

use chrono::{DateTime, Utc};
use serde::Serialize;

const RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Compact UTC timestamp the calendar UI expects (`YYYYMMDDTHHMMSSZ`).
const COMPACT_UTC: &str = "%Y%m%dT%H%M%SZ";

#[derive(Serialize)]
struct RenderQuery<'a> {
    action: &'static str,
    text: &'a str,
    dates: String,
    details: &'a str,
    location: &'a str,
    sf: &'static str,
    output: &'static str,
}

/// Returns a URL that opens the calendar web UI pre-filled with an event.
///
/// Pure and deterministic. Malformed input can only produce a malformed
/// link, never a failure.
pub fn build_calendar_link(
    title: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    description: &str,
    location: &str,
) -> String {
    let query = RenderQuery {
        action: "TEMPLATE",
        text: title,
        dates: format!("{}/{}", start.format(COMPACT_UTC), end.format(COMPACT_UTC)),
        details: description,
        location,
        sf: "true",
        output: "xml",
    };
    match serde_urlencoded::to_string(&query) {
        Ok(encoded) => format!("{RENDER_URL}?{encoded}"),
        // Only reachable if a field fails to encode, which plain strings never do
        Err(_) => RENDER_URL.to_string(),
    }
}
