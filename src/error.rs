use thiserror::Error;

use crate::network::StationId;

/// Errors raised while building a network or validating a route against it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("unknown station: {id}")]
    UnknownStation { id: StationId },

    #[error("invalid travel time {travel_time} between {from} and {to} (must be a positive integer)")]
    InvalidWeight {
        from: StationId,
        to: StationId,
        travel_time: i64,
    },

    #[error("stations {from} and {to} are not connected")]
    NotAdjacent { from: StationId, to: StationId },
}
