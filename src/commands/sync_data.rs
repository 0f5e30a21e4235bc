//! Sync command: run full reconciliation against the balldontlie API.

use super::resolve_api_key;
use crate::{
    bdl::BdlClient,
    cli::types::Season,
    storage::LeagueDatabase,
    sync::Synchronizer,
    Result,
};

/// Parameters for the sync command
#[derive(Debug)]
pub struct SyncParams {
    pub api_key: Option<String>,
    pub season: Option<Season>,
    pub page_size: u32,
    pub clear_db: bool,
    pub verbose: bool,
    pub as_json: bool,
}

/// Run a full sync and record the outcome in the notification feed.
pub async fn handle_sync(params: SyncParams) -> Result<()> {
    let api_key = resolve_api_key(params.api_key)?;

    let mut db = LeagueDatabase::new()?;
    if params.clear_db {
        db.clear_all_data()?;
        if params.verbose {
            println!("✓ Database cleared");
        }
    }

    let client = BdlClient::new(api_key);
    let mut sync = Synchronizer::new(client, db);
    let report = sync.run(params.season, params.page_size, params.verbose).await?;

    let message = format!(
        "{} teams, {} players, {} games",
        report.teams_synced, report.players_synced, report.games_synced
    );
    let mut db = sync.into_store();
    db.create_notification("Synchronization complete", &message, "info")?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("✓ Synchronization complete: {}", message);
    }

    Ok(())
}
