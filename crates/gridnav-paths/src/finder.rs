//! [`PathFinder`]: A* shortest paths between two cells of a [`Grid`].

use gridnav_core::{Grid, Point};
use log::{debug, warn};

use crate::astar::{SearchReport, astar};
use crate::options::SearchOptions;
use crate::path::Path;
use crate::pather::GridPather;

/// Shortest-path queries over a [`Grid`].
///
/// A `PathFinder` only carries its [`SearchOptions`]; every call runs a fresh
/// search with its own scratch state, so repeated calls with the same inputs
/// return identical paths and a finder may be shared freely between threads.
/// Callers replan after changing the grid or the goal simply by searching
/// again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathFinder {
    options: SearchOptions,
}

impl PathFinder {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Shortest path from `start` to `goal`, or `None` if there is none.
    ///
    /// * `start == goal` inside the grid yields `[start]`, whatever the
    ///   terrain there.
    /// * An endpoint outside the grid, or a blocked endpoint, yields `None`.
    pub fn search(&self, grid: &Grid, start: Point, goal: Point) -> Option<Path> {
        self.search_with_stats(grid, start, goal).path
    }

    /// Like [`search`](PathFinder::search), also reporting search effort.
    pub fn search_with_stats(&self, grid: &Grid, start: Point, goal: Point) -> SearchReport {
        if !grid.contains(start) || !grid.contains(goal) {
            debug!("search {start} -> {goal}: endpoint out of bounds");
            return SearchReport::default();
        }
        if start != goal && (!grid.is_passable(start) || !grid.is_passable(goal)) {
            debug!("search {start} -> {goal}: endpoint not passable");
            return SearchReport::default();
        }
        if !self.options.is_admissible() {
            warn!(
                "{} heuristic with {:?} movement may overestimate; paths may not be shortest",
                self.options.heuristic, self.options.connectivity
            );
        }

        let pather = GridPather::new(grid, self.options);
        let report = astar(
            &pather,
            grid.bounds(),
            start,
            goal,
            self.options.max_expansions,
        );

        match &report.path {
            Some(path) => debug!(
                "search {start} -> {goal}: {} cells, cost {:.3}, {} expanded, {} stale",
                path.len(),
                path.cost(),
                report.expanded,
                report.stale
            ),
            None if report.budget_exhausted => debug!(
                "search {start} -> {goal}: budget of {} expansions exhausted",
                report.expanded
            ),
            None => debug!(
                "search {start} -> {goal}: no path after {} expansions",
                report.expanded
            ),
        }
        report
    }
}

/// One-shot shortest path search; see [`PathFinder::search`].
pub fn search(grid: &Grid, start: Point, goal: Point, options: SearchOptions) -> Option<Path> {
    PathFinder::new(options).search(grid, start, goal)
}
