//! Input validation for identifiers, seasons, dates, and game IDs.
//!
//! Every fetch operation runs its parameters through these validators
//! before touching the network. Each validator either returns the
//! canonical form of its input or a [`NbaError::Validation`] naming the
//! offending parameter; none of them performs I/O, and all of them are
//! idempotent on their own output.
//!
//! One deliberate contract, inherited from the project's history: the
//! literals `true`/`false` are rejected as identifiers even where a number
//! is expected. A boolean is never a meaningful entity ID, so it fails
//! validation rather than being coerced.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{NbaError, Result};


/// Earliest season the stats API covers (the league's founding year).
const MIN_SEASON_YEAR: u32 = 1946;
const MAX_SEASON_YEAR: u32 = 2100;

/// Game IDs are fixed-width, zero-padded digit strings.
pub const GAME_ID_LEN: usize = 10;

/// A validated team identifier: either a numeric franchise ID or a
/// non-empty name/abbreviation to be resolved against the team directory.
///
/// Case is preserved here; [`crate::api::teams::normalize_team_id`]
/// uppercases abbreviations at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamIdentifier {
    Id(u32),
    Name(String),
}

impl fmt::Display for TeamIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamIdentifier::Id(id) => write!(f, "{id}"),
            TeamIdentifier::Name(name) => write!(f, "{name}"),
        }
    }
}

/// True for the boolean literals in any casing.
fn is_boolean_word(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

/// True when the trimmed input is entirely ASCII digits (and non-empty).
/// Signs, decimal points, and exponents all fail this check, which is how
/// float-shaped input gets rejected.
fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a player ID.
///
/// Accepts a string of digits representing a positive integer and returns
/// it as `u32`. Rejects empty input, boolean literals, float shapes,
/// signed numbers, non-numeric text, and zero.
pub fn validate_player_id(value: &str) -> Result<u32> {
    let expected = "a positive integer";
    let trimmed = value.trim();

    if trimmed.is_empty() || is_boolean_word(trimmed) || !is_digits(trimmed) {
        return Err(NbaError::validation("player_id", value, expected));
    }

    let player_id: u32 = trimmed
        .parse()
        .map_err(|_| NbaError::validation("player_id", value, expected))?;

    if player_id == 0 {
        return Err(NbaError::validation(
            "player_id",
            value,
            "a positive integer (greater than 0)",
        ));
    }

    Ok(player_id)
}

/// Validate a team identifier.
///
/// A digit string becomes [`TeamIdentifier::Id`]; any other non-empty
/// string is trimmed and kept as [`TeamIdentifier::Name`] (abbreviation or
/// full name, case preserved). Existence against the team directory is a
/// separate concern, handled by `normalize_team_id`.
pub fn validate_team_id(value: &str) -> Result<TeamIdentifier> {
    let expected = "team ID (number), abbreviation (e.g., 'LAL'), or team name";
    let trimmed = value.trim();

    if trimmed.is_empty() || is_boolean_word(trimmed) {
        return Err(NbaError::validation("team_id", value, expected));
    }

    if is_digits(trimmed) {
        let id: u32 = trimmed
            .parse()
            .map_err(|_| NbaError::validation("team_id", value, expected))?;
        if id == 0 {
            return Err(NbaError::validation("team_id", value, "a positive team ID"));
        }
        return Ok(TeamIdentifier::Id(id));
    }

    Ok(TeamIdentifier::Name(trimmed.to_string()))
}

/// Validate a season string.
///
/// Accepts `"YYYY"` (year in 1946..=2100) or `"YYYY-YY"` where the suffix
/// is the following year modulo 100, zero-padded, so `"1999-00"` is the
/// valid century rollover and `"2022-25"` is rejected. Returns the trimmed
/// canonical string.
pub fn validate_season(value: &str) -> Result<String> {
    let expected = "season string in 'YYYY-YY' or 'YYYY' format (e.g., '2022-23', '2022')";
    let season = value.trim();

    if season.is_empty() {
        return Err(NbaError::validation("season", value, expected));
    }

    // "YYYY-YY" form
    if season.is_ascii() && season.len() == 7 && season.as_bytes()[4] == b'-' {
        let (start, suffix) = (&season[..4], &season[5..]);
        if is_digits(start) && is_digits(suffix) {
            let start_year: u32 = start
                .parse()
                .map_err(|_| NbaError::validation("season", value, expected))?;
            let end_suffix: u32 = suffix
                .parse()
                .map_err(|_| NbaError::validation("season", value, expected))?;

            if !(MIN_SEASON_YEAR..=MAX_SEASON_YEAR).contains(&start_year) {
                return Err(NbaError::validation(
                    "season",
                    value,
                    "year between 1946 and 2100",
                ));
            }

            let expected_suffix = (start_year + 1) % 100;
            if end_suffix != expected_suffix {
                return Err(NbaError::Validation {
                    parameter_name: "season".to_string(),
                    parameter_value: value.to_string(),
                    expected: format!("consecutive years (e.g., '{start_year}-{expected_suffix:02}')"),
                });
            }

            return Ok(season.to_string());
        }
        return Err(NbaError::validation("season", value, expected));
    }

    // "YYYY" form
    if season.len() == 4 && is_digits(season) {
        let year: u32 = season
            .parse()
            .map_err(|_| NbaError::validation("season", value, expected))?;
        if !(MIN_SEASON_YEAR..=MAX_SEASON_YEAR).contains(&year) {
            return Err(NbaError::validation(
                "season",
                value,
                "year between 1946 and 2100",
            ));
        }
        return Ok(season.to_string());
    }

    Err(NbaError::validation("season", value, expected))
}

/// Validate a date in strict `YYYY-MM-DD` form.
///
/// The string must parse to a real calendar date: `"2024-13-01"`,
/// `"2024-01-32"`, and `"2023-02-29"` all fail even though they match the
/// shape. With `allow_none`, a missing or blank value is `Ok(None)`
/// instead of an error.
pub fn validate_date(
    value: Option<&str>,
    parameter_name: &str,
    allow_none: bool,
) -> Result<Option<String>> {
    let expected = "date in 'YYYY-MM-DD' format";

    let raw = match value {
        Some(v) => v,
        None => {
            if allow_none {
                return Ok(None);
            }
            return Err(NbaError::validation(parameter_name, "", expected));
        }
    };

    let date_str = raw.trim();
    if date_str.is_empty() {
        if allow_none {
            return Ok(None);
        }
        return Err(NbaError::validation(parameter_name, raw, expected));
    }

    // Shape first: chrono would happily parse "2024-1-5".
    let shape_ok = date_str.is_ascii()
        && date_str.len() == 10
        && is_digits(&date_str[..4])
        && date_str.as_bytes()[4] == b'-'
        && is_digits(&date_str[5..7])
        && date_str.as_bytes()[7] == b'-'
        && is_digits(&date_str[8..]);
    if !shape_ok {
        return Err(NbaError::validation(parameter_name, raw, expected));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        NbaError::validation(parameter_name, raw, "a valid date in 'YYYY-MM-DD' format")
    })?;

    Ok(Some(date_str.to_string()))
}

/// Validate a game ID string: exactly ten digits, returned unchanged
/// (after trimming).
///
/// Game IDs encode game type in their prefix (`002` regular season, `004`
/// playoffs), but only length and digit-ness are enforced here.
pub fn validate_game_id(value: &str) -> Result<String> {
    let expected = "10-digit game ID (e.g., '0022400123')";
    let game_id = value.trim();

    if game_id.is_empty() || !is_digits(game_id) {
        return Err(NbaError::validation("game_id", value, expected));
    }

    if game_id.len() != GAME_ID_LEN {
        return Err(NbaError::validation("game_id", value, expected));
    }

    Ok(game_id.to_string())
}

/// Build a canonical game ID from a numeric value, zero-padded to ten
/// digits. Zero and values wider than ten digits are rejected.
pub fn game_id_from_u64(value: u64) -> Result<String> {
    if value == 0 {
        return Err(NbaError::validation(
            "game_id",
            value,
            "a positive game ID",
        ));
    }

    let game_id = format!("{value:0width$}", width = GAME_ID_LEN);
    if game_id.len() != GAME_ID_LEN {
        return Err(NbaError::validation(
            "game_id",
            value,
            "10-digit game ID (e.g., '0022400123')",
        ));
    }

    Ok(game_id)
}
