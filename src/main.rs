//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_sync::{
    cli::{Commands, NbaSync},
    commands::{
        list_data::{handle_games, handle_players, handle_teams},
        notifications::handle_notifications,
        sync_data::{handle_sync, SyncParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaSync::parse();

    match app.command {
        Commands::Sync {
            api_key,
            season,
            page_size,
            clear_db,
            verbose,
            json,
        } => {
            handle_sync(SyncParams {
                api_key,
                season,
                page_size,
                clear_db,
                verbose,
                as_json: json,
            })
            .await?
        }

        Commands::Teams { json } => handle_teams(json)?,

        Commands::Players { team_id, json } => handle_players(team_id, json)?,

        Commands::Games { team_id, json } => handle_games(team_id, json)?,

        Commands::Notifications {
            unread,
            mark_read,
            json,
        } => handle_notifications(unread, mark_read, json)?,
    }

    Ok(())
}
