use crate::error::{ConfigError, InitializationError};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub const ENV_VAR_PREFIX: &str = "DATA_SYNC__";
pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
pub const SETTINGS_FILE: &str = "Settings.toml";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub postgres: PostgresConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostgresConfig {
    pub connection_string: String,
}

impl PostgresConfig {
    /// Parses the connection string once so a malformed URL fails at startup
    /// instead of on the first request.
    pub fn connect_options(&self) -> Result<PgConnectOptions, InitializationError> {
        PgConnectOptions::from_str(&self.connection_string).map_err(InitializationError::Db)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

/// Settings file first, then the bare `DATABASE_URL`, then `DATA_SYNC__` variables.
pub fn config_figment() -> Figment {
    Figment::new()
        .merge(Toml::file(SETTINGS_FILE))
        .merge(
            Env::raw()
                .only(&[DATABASE_URL_ENV_VAR])
                .map(|_| "postgres.connection_string".into()),
        )
        .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    Ok(config_figment().extract::<Config>()?)
}

pub mod error {
    use thiserror::Error;
    use tracing::dispatcher::SetGlobalDefaultError;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
    }

    #[derive(Debug, Error)]
    pub enum InitializationError {
        #[error(transparent)]
        Tracing(#[from] SetGlobalDefaultError),
        #[error(transparent)]
        Config(#[from] ConfigError),
        #[error("invalid postgres connection string: {0}")]
        Db(#[from] sqlx::Error),
        #[error(transparent)]
        Io(#[from] std::io::Error),
    }
}

pub fn init_tracing() -> Result<(), InitializationError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(env_filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub async fn shutdown_listener(token: Option<CancellationToken>) {
    let ctrl_c = signal::ctrl_c();
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(name: "signal.ctrlc.received", "received Ctrl+C signal, shutting down"),
        _ = terminate => info!(name: "signal.sigterm.received", "received SIGTERM signal, shutting down"),
    }

    if let Some(token) = token {
        token.cancel();
    }
}
