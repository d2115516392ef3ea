mod config;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "repo-analyzer failed");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let mut leptos_options = get_configuration(None)
        .map_err(|e| ConfigError::Leptos(e.to_string()))?
        .leptos_options;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = site_root.to_string_lossy().as_ref().into();
    }

    let addr = config.addr();
    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, api_base = %client::config::api_base(), "repo-analyzer listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
