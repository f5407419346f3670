// --- File: crates/webicast_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod doc;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod logic;
pub mod oauth;
#[cfg(test)]
mod oauth_test;
pub mod routes;
