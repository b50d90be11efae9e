//! NBA Data Fetch CLI Library
//!
//! A Rust library and CLI for fetching NBA statistics (players, teams,
//! game logs, box scores) from the stats.nba.com API and persisting them
//! as CSV files.
//!
//! ## Features
//!
//! - **Reliability layer**: every outbound call runs through a retry
//!   wrapper with per-attempt timeouts, capped exponential backoff, and a
//!   configurable fallback when retries are exhausted
//! - **Error taxonomy**: a closed set of error kinds so callers can make
//!   retry/propagation decisions without inspecting transport errors
//! - **Input validation**: player/team/game identifiers, seasons, and
//!   dates are normalized to canonical forms before any network call
//! - **CSV persistence**: fetched tables land as CSV files under `data/`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_data::{api, storage};
//! use std::path::Path;
//!
//! # fn example() -> nba_data::Result<()> {
//! let client = api::http::build_client()?;
//! let games = api::player::games_by_season(&client, "2544", "2022-23")?;
//! storage::write_csv(&games, Path::new("data/2544_games_2022-23.csv"))?;
//! # Ok(())
//! # }
//! ```
//!
//! Transient API failures (timeouts, rate limits, 5xx) are retried and,
//! if still failing, degrade to an empty table so batch scripts see "no
//! data" instead of a crash. Validation and not-found errors always
//! propagate.

pub mod api;
pub mod cli;
pub mod error;
pub mod logging;
pub mod retry;
pub mod storage;
pub mod table;
pub mod validate;

// Re-export commonly used types
pub use error::{ErrorKind, NbaError, Result};
pub use retry::{OnExhaustion, Retrier, RetryPolicy};
pub use table::DataTable;
pub use validate::TeamIdentifier;
