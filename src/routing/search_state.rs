/// Per-query bookkeeping shared by both finders, indexed by station position.
#[derive(Debug)]
pub struct SearchState {
    costs: Vec<Option<u64>>,
    predecessors: Vec<Option<usize>>,
    finalized: Vec<bool>,
}

impl SearchState {
    pub fn new(len: usize, source: usize) -> Self {
        let mut costs = vec![None; len];
        costs[source] = Some(0);

        Self {
            costs,
            predecessors: vec![None; len],
            finalized: vec![false; len],
        }
    }

    pub fn cost(&self, station: usize) -> Option<u64> {
        self.costs[station]
    }

    pub fn is_reached(&self, station: usize) -> bool {
        self.costs[station].is_some()
    }

    pub fn should_update(&self, station: usize, cost: u64) -> bool {
        self.costs[station].is_none_or(|best| cost < best)
    }

    pub fn update(&mut self, station: usize, cost: u64, via: usize) {
        self.costs[station] = Some(cost);
        self.predecessors[station] = Some(via);
    }

    /// Marks `station` settled; `false` if it already was.
    pub fn finalize(&mut self, station: usize) -> bool {
        !std::mem::replace(&mut self.finalized[station], true)
    }

    /// Walks predecessors back from `target`, returning positions source first.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut current = target;

        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_starts_reached_at_zero() {
        let state = SearchState::new(3, 1);

        assert_eq!(state.cost(1), Some(0));
        assert!(!state.is_reached(0));
        assert_eq!(state.path_to(1), vec![1]);
    }

    #[test]
    fn only_strict_improvements_update() {
        let mut state = SearchState::new(3, 0);

        assert!(state.should_update(2, 10));
        state.update(2, 10, 0);
        assert!(!state.should_update(2, 10));
        assert!(state.should_update(2, 9));
    }

    #[test]
    fn path_follows_latest_predecessors() {
        let mut state = SearchState::new(4, 0);
        state.update(1, 1, 0);
        state.update(3, 5, 1);
        state.update(2, 1, 0);
        state.update(3, 2, 2);

        assert_eq!(state.path_to(3), vec![0, 2, 3]);
    }

    #[test]
    fn finalize_reports_first_time_only() {
        let mut state = SearchState::new(2, 0);

        assert!(state.finalize(0));
        assert!(!state.finalize(0));
    }
}
