//! Entry point: parse CLI and dispatch to fetch operations.

use std::path::Path;
use std::process;

use anyhow::Context;
use clap::Parser;
use nba_data::{
    api,
    cli::{Commands, NbaData},
    storage,
};

fn main() {
    let app = NbaData::parse();

    if let Err(err) = run(app) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(app: NbaData) -> anyhow::Result<()> {
    match app.command {
        Commands::Players { output } => {
            let client = api::http::build_client()?;
            let players = api::player::fetch_players(&client)?;
            write_output(&players, &output)?;
        }

        Commands::Teams { output } => {
            let teams = api::team::fetch_teams();
            write_output(&teams, &output)?;
        }

        Commands::PlayerGames {
            player_id,
            season,
            output,
        } => {
            let client = api::http::build_client()?;
            let games = api::player::games_by_season(&client, &player_id, &season)?;
            let output =
                output.unwrap_or_else(|| format!("data/{player_id}_games_{season}.csv"));
            if games.is_empty() {
                println!("No games found for player {player_id} in {season}");
            }
            write_output(&games, &output)?;
        }

        Commands::TeamGameBoxscores {
            team_id,
            date,
            date_from,
            date_to,
            season,
            output,
        } => {
            // --date is shorthand for an equal from/to range.
            let date_from = date_from.or_else(|| date.clone());
            let date_to = date_to.or(date);

            let client = api::http::build_client()?;
            let games = api::team::games(
                &client,
                &team_id,
                date_from.as_deref(),
                date_to.as_deref(),
                season.as_deref(),
            )?;

            if games.is_empty() {
                println!("No games found for {team_id}");
            } else {
                println!("\nFound {} games:", games.len());
                let preview = games.select(&["GAME_ID", "GAME_DATE", "MATCHUP", "WL", "PTS"]);
                println!("{}", preview.to_display_string());
                write_output(&games, &output)?;
            }
        }

        Commands::PlayerStats { player_id, output } => {
            let client = api::http::build_client()?;
            let stats = api::player::career_stats(&client, &player_id)?;
            let output = output.unwrap_or_else(|| format!("data/{player_id}_career.csv"));
            if stats.is_empty() {
                println!("No career stats found for player {player_id}");
            }
            write_output(&stats, &output)?;
        }

        Commands::PlayerBoxscores { game_id, output } => {
            let client = api::http::build_client()?;
            let boxscore = api::game::boxscore(&client, &game_id)?;
            if boxscore.is_empty() {
                println!("No box score data found for game {game_id}");
            }
            write_output(&boxscore, &output)?;
        }

        Commands::ReadStats { filename, data_dir } => {
            storage::read_stats(&filename, Path::new(&data_dir))?;
        }
    }

    Ok(())
}

fn write_output(table: &nba_data::DataTable, output: &str) -> anyhow::Result<()> {
    storage::write_csv(table, Path::new(output))
        .with_context(|| format!("failed to write {output}"))
}
