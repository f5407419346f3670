// --- File: crates/webicast_import/src/template.rs ---
//! Generates the downloadable sample workbook uploaders start from.

use rust_xlsxwriter::{Workbook, XlsxError};

pub const TEMPLATE_HEADERS: [&str; 10] = [
    "Webinar ID",
    "Webinar Name",
    "Date",
    "Time",
    "Presenter Name",
    "Presenter Email",
    "Presenter Phone",
    "Attendee Name",
    "Attendee Email",
    "Attendee Phone",
];

pub const SAMPLE_ROWS: [[&str; 10]; 10] = [
    [
        "WEB-001",
        "Digital Marketing Trends 2025",
        "2025-07-20",
        "10:00",
        "John Smith",
        "john.smith@company.com",
        "+1-555-0101",
        "Alice Johnson",
        "alice.johnson@email.com",
        "+1-555-0201",
    ],
    [
        "WEB-002",
        "AI in Healthcare",
        "2025-07-20",
        "14:30",
        "Dr. Sarah Davis",
        "sarah.davis@hospital.com",
        "+1-555-0102",
        "Bob Wilson",
        "bob.wilson@email.com",
        "+1-555-0202",
    ],
    [
        "WEB-003",
        "Remote Work Best Practices",
        "2025-07-21",
        "09:00",
        "Mike Chen",
        "mike.chen@tech.com",
        "+1-555-0103",
        "Carol Brown",
        "carol.brown@email.com",
        "+1-555-0203",
    ],
    [
        "WEB-004",
        "Financial Planning for Entrepreneurs",
        "2025-07-21",
        "16:00",
        "Emma Rodriguez",
        "emma.rodriguez@finance.com",
        "+1-555-0104",
        "David Lee",
        "david.lee@email.com",
        "+1-555-0204",
    ],
    [
        "WEB-005",
        "Cybersecurity Fundamentals",
        "2025-07-22",
        "11:00",
        "James Taylor",
        "james.taylor@security.com",
        "+1-555-0105",
        "Lisa Garcia",
        "lisa.garcia@email.com",
        "+1-555-0205",
    ],
    [
        "WEB-006",
        "Cloud Computing Basics",
        "2025-07-22",
        "13:30",
        "Rachel Kim",
        "rachel.kim@cloud.com",
        "+1-555-0106",
        "Tom Anderson",
        "tom.anderson@email.com",
        "+1-555-0206",
    ],
    [
        "WEB-007",
        "Sustainable Business Practices",
        "2025-07-23",
        "10:30",
        "Alex Green",
        "alex.green@sustainability.com",
        "+1-555-0107",
        "Sophie Miller",
        "sophie.miller@email.com",
        "+1-555-0207",
    ],
    [
        "WEB-008",
        "Data Analytics for Beginners",
        "2025-07-23",
        "15:00",
        "Kevin Zhang",
        "kevin.zhang@analytics.com",
        "+1-555-0108",
        "Nina Patel",
        "nina.patel@email.com",
        "+1-555-0208",
    ],
    [
        "WEB-009",
        "Mobile App Development",
        "2025-07-24",
        "12:00",
        "Oliver Johnson",
        "oliver.johnson@mobile.com",
        "+1-555-0109",
        "Ryan Thompson",
        "ryan.thompson@email.com",
        "+1-555-0209",
    ],
    [
        "WEB-010",
        "E-commerce Growth Strategies",
        "2025-07-24",
        "17:30",
        "Maya Singh",
        "maya.singh@ecommerce.com",
        "+1-555-0110",
        "Chris Wilson",
        "chris.wilson@email.com",
        "+1-555-0210",
    ],
];

/// Builds the sample workbook in memory.
pub fn template_workbook_bytes() -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Webinars")?;

    for (col, header) in TEMPLATE_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
        worksheet.set_column_width(col as u16, 20)?;
    }
    for (row, record) in SAMPLE_ROWS.iter().enumerate() {
        for (col, value) in record.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    workbook.save_to_buffer()
}
