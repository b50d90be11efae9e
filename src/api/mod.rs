//! Fetch operations against the stats.nba.com API.
//!
//! Each operation validates its parameters, then issues the network call
//! through a [`crate::retry::Retrier`] so transient failures are retried
//! and terminal ones degrade to an empty table.

pub mod game;
pub mod http;
pub mod player;
pub mod team;
pub mod teams;

use chrono::NaiveDate;

/// Season used when an endpoint requires one and the caller has no say
/// (the players directory).
pub const DEFAULT_SEASON: &str = "2025-26";

/// Convert an ISO `YYYY-MM-DD` date to the `MM/DD/YYYY` form the stats
/// API expects. Input that is not ISO (already converted, or invalid) is
/// returned unchanged; validation happens before this point.
pub fn format_date_api(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
