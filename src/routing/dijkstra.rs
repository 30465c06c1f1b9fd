use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    network::MetroNetwork,
    routing::{Route, search_state::SearchState},
};

/// Frontier entry, ordered by accumulated time and then by push order so that
/// equal times pop first-in first-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    time: u64,
    sequence: u64,
    station: usize,
}

/// Route with the lowest total travel time, together with that time in minutes.
///
/// Returns `None` when either id is unknown or the target cannot be reached.
#[tracing::instrument(skip(network))]
pub fn fastest_route<'a>(
    network: &'a MetroNetwork,
    from: &str,
    to: &str,
) -> Option<(Route<'a>, u64)> {
    let (Some(source), Some(target)) = (network.position(from), network.position(to)) else {
        tracing::debug!("endpoint not in network");
        return None;
    };

    let mut state = SearchState::new(network.len(), source);
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;

    frontier.push(Reverse(FrontierEntry {
        time: 0,
        sequence,
        station: source,
    }));

    while let Some(Reverse(FrontierEntry { time, station, .. })) = frontier.pop() {
        if station == target {
            let route = Route::from_positions(network, state.path_to(target));
            tracing::debug!(edges = route.edge_count(), time, "route found");
            return Some((route, time));
        }

        // stale entry for an already settled station
        if !state.finalize(station) {
            continue;
        }

        for n in network.adjacent(station) {
            let arrival = time + u64::from(n.travel_time);
            if state.should_update(n.station, arrival) {
                state.update(n.station, arrival, station);
                sequence += 1;
                frontier.push(Reverse(FrontierEntry {
                    time: arrival,
                    sequence,
                    station: n.station,
                }));
            }
        }
    }

    tracing::debug!("target unreachable");
    None
}
