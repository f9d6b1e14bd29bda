use crate::v1::api_models::{ActiveCall, Building, WaterSource};
use sqlx::PgConnection;
use tracing::instrument;

/// Status value of calls that are still being worked.
pub const ACTIVE_CALL_STATUS: &str = "Активный";

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

// Fixed-point columns are cast to text so they keep their stored precision on the wire.
// Timestamps go through to_json so the output keeps the column's offset, if it has one.

#[instrument(skip_all)]
pub async fn get_buildings(conn: &mut PgConnection) -> Result<Vec<Building>, QueryError> {
    sqlx::query_as::<_, Building>(
        r"
        SELECT id, name, address,
               latitude::text AS latitude,
               longitude::text AS longitude,
               floors,
               area::float8 AS area,
               people_capacity, building_type, risk_level, hydrants_count, notes
        FROM buildings
        ORDER BY name
        ",
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(QueryError::Sql)
}

#[instrument(skip_all)]
pub async fn get_water_sources(conn: &mut PgConnection) -> Result<Vec<WaterSource>, QueryError> {
    sqlx::query_as::<_, WaterSource>(
        r"
        SELECT id, source_type, number,
               latitude::text AS latitude,
               longitude::text AS longitude,
               pressure::text AS pressure,
               diameter::text AS diameter,
               volume::text AS volume,
               depth::text AS depth,
               status, notes
        FROM water_sources
        ORDER BY number
        ",
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(QueryError::Sql)
}

/// Active calls, most recent first. Building columns are NULL when the call
/// has no building or the reference doesn't resolve.
#[instrument(skip_all)]
pub async fn get_active_calls(conn: &mut PgConnection) -> Result<Vec<ActiveCall>, QueryError> {
    sqlx::query_as::<_, ActiveCall>(
        r"
        SELECT ac.id, ac.building_id, ac.call_type,
               to_json(ac.call_time) #>> '{}' AS call_time,
               ac.status, ac.priority, ac.notes,
               b.name AS building_name,
               b.address AS building_address,
               b.latitude::text AS latitude,
               b.longitude::text AS longitude
        FROM active_calls ac
        LEFT JOIN buildings b ON ac.building_id = b.id
        WHERE ac.status = $1
        ORDER BY ac.call_time DESC
        ",
    )
    .bind(ACTIVE_CALL_STATUS)
    .fetch_all(&mut *conn)
    .await
    .map_err(QueryError::Sql)
}
