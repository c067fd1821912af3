mod config;
mod directory;
mod web;

use crate::{config::ServerConfig, directory::StockDirectory, web::WebState};
use anyhow::Result;
use leptos::config::get_configuration;
use marketpulse_app::api::SessionUser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = ServerConfig::from_env()?;
    info!(
        max_results = config.max_results,
        catalog = ?config.catalog,
        "starting marketpulse"
    );
    let directory = Arc::new(StockDirectory::from_config(&config)?);
    let conf = get_configuration(None)?;
    let state = WebState {
        leptos_options: conf.leptos_options,
        directory,
        session_user: SessionUser(config.user),
    };
    web::start_web(state).await
}
