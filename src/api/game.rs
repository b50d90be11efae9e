//! Game fetch operations: traditional box scores.

use reqwest::blocking::Client;

use super::http;
use crate::retry::{Retrier, RetryPolicy};
use crate::table::DataTable;
use crate::validate;
use crate::Result;

/// Fetch per-player traditional box score lines for one game
/// (`boxscoretraditionalv2`, `PlayerStats` result set).
pub fn boxscore(client: &Client, game_id: &str) -> Result<DataTable> {
    let game_id = validate::validate_game_id(game_id)?;

    let retrier = Retrier::new(RetryPolicy::default());
    let table = retrier.run("boxscore_traditional", |timeout| {
        let params = [
            ("GameID", game_id.clone()),
            ("StartPeriod", "0".to_string()),
            ("EndPeriod", "10".to_string()),
            ("StartRange", "0".to_string()),
            ("EndRange", "28800".to_string()),
            ("RangeType", "0".to_string()),
        ];
        http::get_stats(client, "boxscoretraditionalv2", &params, timeout)
            .and_then(|res| res.into_table("PlayerStats"))
    })?;
    Ok(table.unwrap_or_default())
}
