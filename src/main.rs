use anyhow::Context;
use axum::Router;
use axum::extract::State;
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

mod api;
mod app_env;
mod domain;
mod dto;
mod external_connections;
mod logging;
mod persistence;
mod routing_utils;


/// Application data shared by every request handler
pub struct SharedData {
    pub ext_cxn: persistence::ExternalConnectivity,
}

/// Extractor for the shared application data
pub type AppState = State<Arc<SharedData>>;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    if dotenv().is_err() {
        println!("Starting without a .env file.");
    }
    let config = app_env::AppConfig::from_env();

    let otel_exporters = config
        .otel
        .as_ref()
        .map(logging::init_exporters)
        .transpose()?;
    logging::setup_logging_and_tracing(logging::init_env_filter()?, otel_exporters.as_ref());

    let db = persistence::connect_sqlite(&config.db_url)
        .await
        .with_context(|| format!("opening the todo store at {}", config.db_url))?;
    let shared_data = Arc::new(SharedData {
        ext_cxn: persistence::ExternalConnectivity::new(db),
    });

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("binding to {}", config.listen_addr))?;
    info!("Starting server on {}.", config.listen_addr);

    axum::serve(listener, build_router(shared_data))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Server stopped.");
    if let Some(exporters) = otel_exporters {
        exporters.shutdown();
    }

    Ok(())
}

/// Assembles every route in the application on top of the shared data
fn build_router(shared_data: Arc<SharedData>) -> Router {
    let router = Router::new()
        .nest("/api/todos", api::todo::todo_routes())
        .merge(api::page::page_routes())
        .merge(api::swagger_main::build_documentation());

    logging::attach_tracing_http(router).with_state(shared_data)
}

/// Resolves once the process is asked to stop, via Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Could not listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Could not listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown requested, draining in-flight requests.");
}
