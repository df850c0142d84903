mod api;
mod commands;
mod config;
mod domain;
mod handlers;
mod repo;
mod storage;
mod view;

use std::str::FromStr;
use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};
use crate::api::ApiClient;
use crate::commands::DashboardCommand;
use crate::domain::DashboardSnapshot;
use crate::view::TerminalView;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    #[cfg(debug_assertions)]
    dotenvy::dotenv()?;

    pretty_env_logger::init();

    let app_config = config::AppConfig::from_env()?;
    let store_config = config::StoreConfig::from_env();
    let store = repo::establish_store(&store_config);
    let repos = repo::Repositories::new(&store, &app_config);
    let api = ApiClient::new(&app_config.api)?;

    let raw = std::fs::read_to_string(&app_config.snapshot_file)?;
    let snapshot = DashboardSnapshot::from_json(&raw)?;
    log::info!("dashboard loaded: {} announcement(s) for login {}",
        snapshot.announcements.len(), snapshot.login_key);

    let mut view = TerminalView::new(snapshot.announcements.clone());
    handlers::dashboard_load_handler(&repos, &mut view, &snapshot, Utc::now())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match DashboardCommand::from_str(line) {
            Ok(DashboardCommand::Dismiss(id)) => handlers::dismiss_cmd_handler(&mut view, &id)?,
            Ok(DashboardCommand::Phrase) => handlers::phrase_cmd_handler(&api).await?,
            Ok(DashboardCommand::Checkout(plan)) => handlers::checkout_cmd_handler(&api, plan).await?,
            Ok(DashboardCommand::Plan) => handlers::plan_cmd_handler(&snapshot)?,
            Ok(DashboardCommand::Help) => handlers::help_cmd_handler()?,
            Ok(DashboardCommand::Quit) => break,
            Err(err) => handlers::reply(format!("{err}; type 'help' for the command list")),
        }
    }
    Ok(())
}
