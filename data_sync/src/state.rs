use axum::extract::FromRef;
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Db,
}

/// Connection settings for the gateway. Every request opens its own
/// connection from these and closes it before responding.
#[derive(Clone)]
pub struct Db {
    connect_options: PgConnectOptions,
}

impl Db {
    pub fn new(connect_options: PgConnectOptions) -> Self {
        Self { connect_options }
    }

    pub async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect_with(&self.connect_options).await
    }
}
