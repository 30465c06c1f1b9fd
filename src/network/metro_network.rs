use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    error::NetworkError,
    network::{Neighbor, Station, StationId, adapters::NetworkAdapter},
};

/// Stations plus their weighted, undirected adjacency.
///
/// Stations keep their insertion order, which is also the order name lookups
/// and neighbor iteration follow.
#[derive(Debug, Default)]
pub struct MetroNetwork {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl MetroNetwork {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_adapter<A: NetworkAdapter>(adapter: &A) -> Result<Self, A::Error> {
        let mut network = Self::new();

        for s in adapter.stations()? {
            network.add_station(s.id.as_str(), &s.name, &s.line);
        }

        for c in adapter.connections()? {
            network.add_connection(c.from.as_str(), c.to.as_str(), c.travel_time)?;
        }

        tracing::debug!(
            stations = network.len(),
            lines = network.stations_by_line().len(),
            "network built"
        );

        Ok(network)
    }

    /// Returns `false` without touching the existing station when `id` is taken.
    pub fn add_station(&mut self, id: &str, name: &str, line: &str) -> bool {
        if self.contains(id) {
            tracing::debug!(id, "station already registered, ignoring");
            return false;
        }

        let id = StationId::from(id);
        self.index.insert(id.clone(), self.stations.len());
        self.stations.push(Station::new(id, name.to_string(), line.to_string()));
        self.adjacency.push(Vec::new());
        true
    }

    /// Registers the connection in both directions.
    ///
    /// Registering the same pair twice keeps both as parallel edges.
    pub fn add_connection(
        &mut self,
        from: &str,
        to: &str,
        travel_time: i64,
    ) -> Result<(), NetworkError> {
        let a = self.require(from)?;
        let b = self.require(to)?;

        let travel_time = u32::try_from(travel_time)
            .ok()
            .filter(|&t| t > 0)
            .ok_or_else(|| NetworkError::InvalidWeight {
                from: StationId::from(from),
                to: StationId::from(to),
                travel_time,
            })?;

        if self.adjacency[a].iter().any(|n| n.station == b) {
            tracing::warn!(from, to, travel_time, "adding parallel connection");
        }

        self.adjacency[a].push(Neighbor {
            station: b,
            travel_time,
        });
        self.adjacency[b].push(Neighbor {
            station: a,
            travel_time,
        });
        Ok(())
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.position(id).map(|i| &self.stations[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// First station, in insertion order, whose name matches ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name_matches(name))
    }

    /// Looks `query` up as an id first, then as a display name.
    pub fn resolve(&self, query: &str) -> Option<&Station> {
        self.station(query).or_else(|| self.find_by_name(query))
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&Station, u32)> {
        let adjacent = match self.position(id) {
            Some(i) => self.adjacency[i].as_slice(),
            None => &[],
        };

        adjacent
            .iter()
            .map(|n| (&self.stations[n.station], n.travel_time))
    }

    /// Stations grouped by line, lines ordered by name.
    pub fn stations_by_line(&self) -> Vec<(&str, Vec<&Station>)> {
        self.stations
            .iter()
            .into_group_map_by(|&s| s.line.as_str())
            .into_iter()
            .sorted_by_key(|(line, _)| *line)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn station_at(&self, position: usize) -> &Station {
        &self.stations[position]
    }

    pub(crate) fn adjacent(&self, position: usize) -> &[Neighbor] {
        &self.adjacency[position]
    }

    fn require(&self, id: &str) -> Result<usize, NetworkError> {
        self.position(id).ok_or_else(|| NetworkError::UnknownStation {
            id: StationId::from(id),
        })
    }
}
