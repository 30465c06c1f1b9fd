use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::network::adapters::{ConnectionRecord, NetworkAdapter, StationRecord};

const ANKARA_METRO: &str = include_str!("../../../data/ankara_metro.json");

#[derive(Deserialize)]
struct NetworkDescription {
    stations: Vec<StationRecord>,
    #[serde(default)]
    connections: Vec<ConnectionRecord>,
}

/// Reads a network from a JSON description:
///
/// ```json
/// { "stations": [{ "id": "K1", "name": "Kızılay(K)", "line": "Kırmızı Hat" }],
///   "connections": [{ "from": "K1", "to": "K2", "travelTime": 4 }] }
/// ```
pub struct JsonAdapter {
    description: NetworkDescription,
}

impl JsonAdapter {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let description =
            serde_json::from_str(s).context("failed to parse network description")?;
        Ok(Self { description })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
        Self::from_json_str(&s).with_context(|| format!("loading network from {path:?}"))
    }

    /// Three lines and twelve stations of the Ankara sample network.
    pub fn ankara() -> Result<Self> {
        Self::from_json_str(ANKARA_METRO)
    }
}

impl NetworkAdapter for JsonAdapter {
    type Error = anyhow::Error;

    fn stations(&self) -> Result<Vec<StationRecord>> {
        Ok(self.description.stations.clone())
    }

    fn connections(&self) -> Result<Vec<ConnectionRecord>> {
        Ok(self.description.connections.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{error::NetworkError, network::MetroNetwork};

    #[test]
    fn ankara_sample_loads() {
        let adapter = JsonAdapter::ankara().unwrap();
        let network = MetroNetwork::from_adapter(&adapter).unwrap();

        assert_eq!(network.len(), 12);
        assert_eq!(network.stations_by_line().len(), 3);
        assert_eq!(network.station("M1").unwrap().name, "AŞTİ");

        let interchange: Vec<_> = network
            .neighbors("M2")
            .map(|(s, t)| (s.id.as_str(), t))
            .collect();
        assert_eq!(interchange, vec![("M1", 5), ("M3", 3), ("K1", 2)]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "stations": [
                    {{ "id": "a", "name": "A", "line": "L" }},
                    {{ "id": "b", "name": "B", "line": "L" }}
                ],
                "connections": [{{ "from": "a", "to": "b", "travelTime": 3 }}]
            }}"#
        )
        .unwrap();

        let adapter = JsonAdapter::from_path(file.path()).unwrap();
        let network = MetroNetwork::from_adapter(&adapter).unwrap();

        assert_eq!(network.len(), 2);
        assert_eq!(network.neighbors("b").next().unwrap().1, 3);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonAdapter::from_path(dir.path().join("missing.json"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn malformed_topology_aborts_construction() {
        let adapter = JsonAdapter::from_json_str(
            r#"{
                "stations": [{ "id": "a", "name": "A", "line": "L" }],
                "connections": [{ "from": "a", "to": "z", "travelTime": 3 }]
            }"#,
        )
        .unwrap();

        let err = MetroNetwork::from_adapter(&adapter).err().unwrap();
        assert_eq!(
            err.downcast_ref::<NetworkError>(),
            Some(&NetworkError::UnknownStation { id: "z".into() })
        );
    }

    #[test]
    fn negative_travel_time_aborts_construction() {
        let adapter = JsonAdapter::from_json_str(
            r#"{
                "stations": [
                    { "id": "a", "name": "A", "line": "L" },
                    { "id": "b", "name": "B", "line": "L" }
                ],
                "connections": [{ "from": "a", "to": "b", "travelTime": -1 }]
            }"#,
        )
        .unwrap();

        let err = MetroNetwork::from_adapter(&adapter).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<NetworkError>(),
            Some(NetworkError::InvalidWeight { travel_time: -1, .. })
        ));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(JsonAdapter::from_json_str("{ not json").is_err());
    }
}
