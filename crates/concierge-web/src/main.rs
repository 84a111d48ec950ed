//! HTTP host for the check-in concierge.
//!
//! Exposes the dispatch triggers, the WhatsApp webhook and the sent message
//! log, and runs one dispatch in the background at startup.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use database::Database;
use dispatcher::{DispatchConfig, Dispatcher, SqliteStore};
use reply_brain::ReplyBrain;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use whatsapp_cloud::WhatsAppClient;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dispatcher=debug")),
        )
        .init();

    // Load configuration; missing WhatsApp credentials stop here
    let config = Config::from_env()?;
    let whatsapp = WhatsAppClient::from_env()?;
    let verify_token = whatsapp.config().verify_token.clone();
    let brain = ReplyBrain::from_env()?;
    info!(addr = %config.addr, "Starting concierge web server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    let dispatcher = Dispatcher::new(
        Arc::new(SqliteStore::new(db.clone())),
        Arc::new(whatsapp),
        Arc::new(brain),
        DispatchConfig::from_env(),
    )?;

    // Build application state and router
    let state = AppState::new(db, dispatcher.clone(), verify_token);
    let app = routes::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Concierge web server listening");

    if config.dispatch_on_startup {
        tokio::spawn(async move {
            match dispatcher.run_dispatch_for_all_rooms().await {
                Ok(report) => info!(
                    found = report.found,
                    sent = report.sent,
                    "Startup dispatch finished"
                ),
                Err(e) => error!("Startup dispatch failed: {}", e),
            }
        });
    }

    axum::serve(listener, app).await?;

    Ok(())
}
