#![recursion_limit = "256"]

mod config;
mod routes;

use std::process::ExitCode;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Optional `.env` for local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "coverage-compass failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    match &config.identity {
        Some(identity) => tracing::info!(domain = %identity.domain, "identity provider configured"),
        None => tracing::warn!("IDENTITY_DOMAIN/IDENTITY_CLIENT_ID not set; sign-up redirects disabled"),
    }

    let app = routes::leptos_app(&config).map_err(ServerError::Leptos)?;
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "coverage-compass listening");
    axum::serve(listener, app).await?;
    Ok(())
}
