use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;
use tracing::debug;

const TYPE_PARAM: &str = "type";

/// Which record categories a request asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataType {
    #[default]
    All,
    Buildings,
    WaterSources,
    Calls,
    /// Anything else selects no category at all.
    Unrecognized,
}

impl DataType {
    pub fn from_param(value: &str) -> Self {
        match value {
            "all" => DataType::All,
            "buildings" => DataType::Buildings,
            "water_sources" => DataType::WaterSources,
            "calls" => DataType::Calls,
            _ => DataType::Unrecognized,
        }
    }

    pub fn includes_buildings(self) -> bool {
        matches!(self, DataType::All | DataType::Buildings)
    }

    pub fn includes_water_sources(self) -> bool {
        matches!(self, DataType::All | DataType::WaterSources)
    }

    pub fn includes_active_calls(self) -> bool {
        matches!(self, DataType::All | DataType::Calls)
    }
}

/// Extracts the optional `type` query parameter, defaulting to [`DataType::All`].
/// When the key repeats, the last value wins.
#[derive(Debug, Clone, Copy)]
pub struct DataTypeParam(pub DataType);

impl<S> FromRequestParts<S> for DataTypeParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let data_type = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await
        {
            Ok(Query(pairs)) => pairs
                .iter()
                .rev()
                .find(|(key, _)| key == TYPE_PARAM)
                .map_or(DataType::All, |(_, value)| DataType::from_param(value)),
            Err(e) => {
                debug!(error = %e, "unreadable query string");
                DataType::Unrecognized
            }
        };

        Ok(Self(data_type))
    }
}
