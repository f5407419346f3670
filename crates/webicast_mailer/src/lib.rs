// --- File: crates/webicast_mailer/src/lib.rs ---
// Declare modules within this crate
pub mod dispatch;
pub mod doc;
pub mod handlers;
pub mod routes;
pub mod templates;
#[cfg(test)]
mod templates_test;
