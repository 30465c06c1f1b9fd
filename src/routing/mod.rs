use itertools::Itertools;

use crate::{
    error::NetworkError,
    network::{MetroNetwork, Station},
};

mod bfs;
mod dijkstra;
mod search_state;

pub use bfs::fewest_edges_route;
pub use dijkstra::fastest_route;

/// A walk through the network, source first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<'a> {
    stations: Vec<&'a Station>,
}

impl<'a> Route<'a> {
    pub(crate) fn from_positions(network: &'a MetroNetwork, positions: Vec<usize>) -> Self {
        debug_assert!(!positions.is_empty());

        let stations = positions
            .into_iter()
            .map(|p| network.station_at(p))
            .collect();
        Self { stations }
    }

    pub fn stations(&self) -> &[&'a Station] {
        &self.stations
    }

    pub fn source(&self) -> &'a Station {
        self.stations[0]
    }

    pub fn target(&self) -> &'a Station {
        self.stations[self.stations.len() - 1]
    }

    pub fn edge_count(&self) -> usize {
        self.stations.len() - 1
    }

    /// Consecutive stops that sit on different lines, i.e. interchanges taken.
    pub fn line_changes(&self) -> usize {
        self.stations
            .iter()
            .tuple_windows()
            .filter(|(a, b)| a.line != b.line)
            .count()
    }
}

/// Sums the travel time of each consecutive pair in `stations`.
///
/// Where parallel connections exist the cheapest one counts. A pair with no
/// connection between them is an error rather than a free hop.
pub fn route_duration(
    network: &MetroNetwork,
    stations: &[&Station],
) -> Result<u64, NetworkError> {
    stations
        .iter()
        .tuple_windows()
        .map(|(a, b)| leg_time(network, a, b))
        .sum()
}

fn leg_time(network: &MetroNetwork, a: &Station, b: &Station) -> Result<u64, NetworkError> {
    let position = |s: &Station| {
        network
            .position(s.id.as_str())
            .ok_or_else(|| NetworkError::UnknownStation { id: s.id.clone() })
    };
    let from = position(a)?;
    let to = position(b)?;

    network
        .adjacent(from)
        .iter()
        .filter(|n| n.station == to)
        .map(|n| u64::from(n.travel_time))
        .min()
        .ok_or_else(|| NetworkError::NotAdjacent {
            from: a.id.clone(),
            to: b.id.clone(),
        })
}
