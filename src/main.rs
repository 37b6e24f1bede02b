mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod nhl;
mod notify;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config,
    error::AppError,
    nhl::NhlClient,
    notify::{Notifier, PreferenceNotifier},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    startup::seed_admin(&db).await?;

    let http_client = reqwest::Client::new();
    let nhl = NhlClient::new(http_client.clone(), &config.nhl_api_url, &config.pool_team);
    let notifier: Arc<dyn Notifier> =
        Arc::new(PreferenceNotifier::from_config(http_client, &config)?);

    let scheduler_db = db.clone();
    let scheduler_nhl = nhl.clone();
    let scheduler_notifier = notifier.clone();
    let scheduler_state_path = config.state_file.clone();
    let scheduler_cron = config.poll_schedule.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::start_scheduler(
            scheduler_db,
            scheduler_nhl,
            scheduler_notifier,
            scheduler_state_path,
            scheduler_cron,
        )
        .await
        {
            error!("Rotation scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!(addr = %config.bind_addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
