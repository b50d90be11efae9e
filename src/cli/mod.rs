//! CLI argument definitions and parsing.
//!
//! Identifier flags stay textual here; fetch operations run them through
//! the validators, so a bad `--player-id` surfaces as a validation error
//! from the operation rather than a parse failure.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "nba-data", about = "NBA Data Fetch CLI")]
pub struct NbaData {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch all NBA players and save to CSV.
    Players {
        /// Output CSV file path.
        #[clap(long, default_value = "data/players.csv")]
        output: String,
    },

    /// Fetch all NBA teams and save to CSV.
    Teams {
        /// Output CSV file path.
        #[clap(long, default_value = "data/teams.csv")]
        output: String,
    },

    /// Fetch a player's game log for a specific season.
    PlayerGames {
        /// NBA player ID.
        #[clap(long)]
        player_id: String,

        /// Season string (e.g. "2005", "2022-23").
        #[clap(long)]
        season: String,

        /// Output CSV file path (default: data/{player_id}_games_{season}.csv).
        #[clap(long)]
        output: Option<String>,
    },

    /// Fetch team games within a date range (league game finder) and save to CSV.
    TeamGameBoxscores {
        /// Team identifier: numeric ID, abbreviation (e.g. "LAL"), or full team name.
        #[clap(long)]
        team_id: String,

        /// Specific date (YYYY-MM-DD). Sets both date-from and date-to.
        #[clap(long)]
        date: Option<String>,

        /// Start date for the range (YYYY-MM-DD).
        #[clap(long)]
        date_from: Option<String>,

        /// End date for the range (YYYY-MM-DD).
        #[clap(long)]
        date_to: Option<String>,

        /// Season filter (e.g. "2023-24").
        #[clap(long)]
        season: Option<String>,

        /// Output CSV file path.
        #[clap(long, default_value = "data/demo_boxscores.csv")]
        output: String,
    },

    /// Fetch a player's career statistics.
    PlayerStats {
        /// NBA player ID.
        #[clap(long)]
        player_id: String,

        /// Output CSV file path (default: data/{player_id}_career.csv).
        #[clap(long)]
        output: Option<String>,
    },

    /// Fetch player box scores for a specific game.
    PlayerBoxscores {
        /// NBA game ID (e.g. "0022400123").
        #[clap(long)]
        game_id: String,

        /// Output CSV file path.
        #[clap(long, default_value = "data/player_boxscores.csv")]
        output: String,
    },

    /// Read and display a saved CSV file of NBA statistics.
    ReadStats {
        /// Name of the CSV file to read.
        filename: String,

        /// Directory where the file is located.
        #[clap(long, default_value = "data")]
        data_dir: String,
    },
}
