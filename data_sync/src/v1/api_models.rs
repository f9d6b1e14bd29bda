use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow, specta::Type)]
pub struct Building {
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub floors: Option<i32>,
    pub area: Option<f64>,
    pub people_capacity: Option<i32>,
    pub building_type: Option<String>,
    pub risk_level: Option<String>,
    pub hydrants_count: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow, specta::Type)]
pub struct WaterSource {
    pub id: i32,
    pub source_type: Option<String>,
    pub number: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub pressure: Option<String>,
    pub diameter: Option<String>,
    pub volume: Option<String>,
    pub depth: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// An in-progress call with the location of its building, if it has one.
#[derive(Debug, Serialize, sqlx::FromRow, specta::Type)]
pub struct ActiveCall {
    pub id: i32,
    pub building_id: Option<i32>,
    pub call_type: Option<String>,
    /// ISO-8601 as rendered by Postgres; carries an offset when the column is `timestamptz`.
    pub call_time: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub notes: Option<String>,
    pub building_name: Option<String>,
    pub building_address: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Only the categories selected by `type` are present as keys.
#[derive(Debug, Default, Serialize, specta::Type)]
pub struct DataSyncResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[specta(optional)]
    pub buildings: Option<Vec<Building>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[specta(optional)]
    pub water_sources: Option<Vec<WaterSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[specta(optional)]
    pub active_calls: Option<Vec<ActiveCall>>,
}
