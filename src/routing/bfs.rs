use std::collections::VecDeque;

use crate::{
    network::MetroNetwork,
    routing::{Route, search_state::SearchState},
};

/// Route with the fewest connections between two stations.
///
/// Travel times are ignored. Returns `None` when either id is unknown or the
/// target cannot be reached. Among equally short routes, the one found first in
/// connection registration order wins.
#[tracing::instrument(skip(network))]
pub fn fewest_edges_route<'a>(
    network: &'a MetroNetwork,
    from: &str,
    to: &str,
) -> Option<Route<'a>> {
    let (Some(source), Some(target)) = (network.position(from), network.position(to)) else {
        tracing::debug!("endpoint not in network");
        return None;
    };

    let mut state = SearchState::new(network.len(), source);
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        if current == target {
            let route = Route::from_positions(network, state.path_to(target));
            tracing::debug!(edges = route.edge_count(), "route found");
            return Some(route);
        }

        let hops = state.cost(current).unwrap_or_default() + 1;
        for n in network.adjacent(current) {
            if !state.is_reached(n.station) {
                state.update(n.station, hops, current);
                queue.push_back(n.station);
            }
        }
    }

    tracing::debug!("target unreachable");
    None
}
