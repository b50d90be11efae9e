//! Player fetch operations: directory, per-season game log, career totals.

use reqwest::blocking::Client;

use super::http::{self, StatsResponse};
use super::DEFAULT_SEASON;
use crate::retry::{Retrier, RetryPolicy};
use crate::table::DataTable;
use crate::validate;
use crate::Result;

/// Fetch the full player directory (`commonallplayers`, all seasons).
pub fn fetch_players(client: &Client) -> Result<DataTable> {
    let retrier = Retrier::new(RetryPolicy::default());
    let table = retrier.run("common_all_players", |timeout| {
        let params = [
            ("LeagueID", "00".to_string()),
            ("Season", DEFAULT_SEASON.to_string()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];
        http::get_stats(client, "commonallplayers", &params, timeout)
            .and_then(|res: StatsResponse| res.into_table("CommonAllPlayers"))
    })?;
    Ok(table.unwrap_or_default())
}

/// Fetch a player's regular-season game log for one season
/// (`playergamelog`).
pub fn games_by_season(client: &Client, player_id: &str, season: &str) -> Result<DataTable> {
    let player_id = validate::validate_player_id(player_id)?;
    let season = validate::validate_season(season)?;

    let retrier = Retrier::new(RetryPolicy::default());
    let table = retrier.run("player_game_log", |timeout| {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("Season", season.clone()),
            ("SeasonType", "Regular Season".to_string()),
        ];
        http::get_stats(client, "playergamelog", &params, timeout)
            .and_then(|res| res.into_table("PlayerGameLog"))
    })?;
    Ok(table.unwrap_or_default())
}

/// Fetch a player's career regular-season totals (`playercareerstats`).
pub fn career_stats(client: &Client, player_id: &str) -> Result<DataTable> {
    let player_id = validate::validate_player_id(player_id)?;

    let retrier = Retrier::new(RetryPolicy::default());
    let table = retrier.run("player_career_stats", |timeout| {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("PerMode36", "Totals".to_string()),
        ];
        http::get_stats(client, "playercareerstats", &params, timeout)
            .and_then(|res| res.into_table("SeasonTotalsRegularSeason"))
    })?;
    Ok(table.unwrap_or_default())
}
