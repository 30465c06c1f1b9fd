use serde::Serialize;

use crate::network::StationId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub line: String,
}

impl Station {
    pub fn new(id: StationId, name: String, line: String) -> Self {
        Self { id, name, line }
    }

    /// Case-insensitive comparison against the display name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// One direction of an undirected connection, stored on the station it leaves from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Neighbor {
    /// Position of the neighboring station in the network's insertion order.
    pub station: usize,
    /// Minutes.
    pub travel_time: u32,
}
