use crate::state::Db;
use crate::v1::api_models::DataSyncResponse;
use crate::v1::db::queries::{self, QueryError};
use crate::v1::error::ApiError;
use crate::v1::extractors::params::{DataType, DataTypeParam};
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use sqlx::{Connection, PgConnection};
use tracing::{debug, warn};

/// On success, returns `200 OK` with the requested categories as JSON.
///
/// A single connection is opened for the request and closed before returning,
/// whether or not the queries succeeded. Any failure discards results already
/// fetched.
pub async fn get_data(
    State(db): State<Db>,
    DataTypeParam(data_type): DataTypeParam,
) -> Result<Json<DataSyncResponse>, ApiError> {
    let mut conn = db.connect().await.map_err(ApiError::Connection)?;

    let result = fetch_requested(&mut conn, data_type).await;

    if let Err(e) = conn.close().await {
        warn!(error = ?e, "failed to close db connection");
    }

    Ok(Json(result?))
}

async fn fetch_requested(
    conn: &mut PgConnection,
    data_type: DataType,
) -> Result<DataSyncResponse, QueryError> {
    let mut response = DataSyncResponse::default();

    if data_type.includes_buildings() {
        response.buildings = Some(queries::get_buildings(conn).await?);
    }
    if data_type.includes_water_sources() {
        response.water_sources = Some(queries::get_water_sources(conn).await?);
    }
    if data_type.includes_active_calls() {
        response.active_calls = Some(queries::get_active_calls(conn).await?);
    }

    debug!(
        ?data_type,
        buildings = response.buildings.as_ref().map(Vec::len),
        water_sources = response.water_sources.as_ref().map(Vec::len),
        active_calls = response.active_calls.as_ref().map(Vec::len),
        "fetched data sync records"
    );

    Ok(response)
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
