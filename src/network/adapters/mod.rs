pub mod json;

use serde::Deserialize;

use crate::{error::NetworkError, network::StationId};

pub use json::JsonAdapter;

#[derive(Clone, Debug, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub line: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    pub from: StationId,
    pub to: StationId,
    /// Signed so that negative values reach validation instead of failing to parse.
    pub travel_time: i64,
}

pub trait NetworkAdapter {
    type Error: From<NetworkError>;

    /// Stations in the order they should be registered; repeated ids are ignored.
    fn stations(&self) -> Result<Vec<StationRecord>, Self::Error>;

    /// Undirected connections; both endpoints must appear in `stations`.
    fn connections(&self) -> Result<Vec<ConnectionRecord>, Self::Error>;
}
