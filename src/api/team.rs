//! Team fetch operations: the static directory and the game finder.

use reqwest::blocking::Client;
use serde_json::json;

use super::http;
use super::teams::{normalize_team_id, TEAMS};
use super::format_date_api;
use crate::error::NbaError;
use crate::retry::{Retrier, RetryPolicy};
use crate::table::DataTable;
use crate::validate;
use crate::Result;

/// The franchise directory as a table. No network call; the list is
/// compiled in.
pub fn fetch_teams() -> DataTable {
    let mut table = DataTable::new(vec![
        "TEAM_ID".to_string(),
        "ABBREVIATION".to_string(),
        "FULL_NAME".to_string(),
    ]);
    for team in &TEAMS {
        table.push_row(vec![
            json!(team.id),
            json!(team.abbreviation),
            json!(team.full_name),
        ]);
    }
    table
}

/// Find a team's games within an optional date range and season
/// (`leaguegamefinder`).
///
/// `team_id` may be numeric, an abbreviation, or a full name; an
/// identifier that validates but names no known franchise is a
/// `TeamNotFound` error.
pub fn games(
    client: &Client,
    team_id: &str,
    date_from: Option<&str>,
    date_to: Option<&str>,
    season: Option<&str>,
) -> Result<DataTable> {
    let team_id = validate::validate_team_id(team_id)?;
    let date_from = validate::validate_date(date_from, "date_from", true)?;
    let date_to = validate::validate_date(date_to, "date_to", true)?;
    let season = match season {
        Some(s) => Some(validate::validate_season(s)?),
        None => None,
    };

    let team_id_num = normalize_team_id(&team_id).ok_or_else(|| NbaError::TeamNotFound {
        team_id: team_id.to_string(),
    })?;

    let retrier = Retrier::new(RetryPolicy::default());
    let table = retrier.run("league_game_finder", |timeout| {
        let mut params = vec![
            ("PlayerOrTeamAbbreviation", "T".to_string()),
            ("TeamIDNullable", team_id_num.to_string()),
        ];
        if let Some(from) = &date_from {
            params.push(("DateFromNullable", format_date_api(from)));
        }
        if let Some(to) = &date_to {
            params.push(("DateToNullable", format_date_api(to)));
        }
        if let Some(season) = &season {
            params.push(("SeasonNullable", season.clone()));
        }
        http::get_stats(client, "leaguegamefinder", &params, timeout)
            .and_then(|res| res.into_table("LeagueGameFinderResults"))
    })?;
    Ok(table.unwrap_or_default())
}
