//! Generic A* over any [`AstarPather`].
//!
//! The frontier is a binary heap ordered by `f`, ties broken by push order.
//! Improving a node's `g` pushes a second entry rather than updating the
//! first; the outdated entry is dropped when it is popped and its node is
//! already closed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridnav_core::{Point, Range};
use log::trace;

use crate::path::Path;
use crate::traits::AstarPather;

const NO_PARENT: usize = usize::MAX;

/// Per-cell search record. Lives only for the duration of one search.
#[derive(Clone, Debug)]
struct SearchNode {
    g: f64,
    h: f64,
    f: f64,
    parent: usize,
    seen: bool,
    closed: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            h: 0.0,
            f: f64::INFINITY,
            parent: NO_PARENT,
            seen: false,
            closed: false,
        }
    }
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first and, among equal `f`, the earliest pushed.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    idx: usize,
    f: f64,
    seq: u64,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Flat row-major indexing of the points of a [`Range`].
#[derive(Clone, Copy)]
struct CellIndex {
    rng: Range,
    width: usize,
}

impl CellIndex {
    fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

/// Outcome of a search together with effort counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchReport {
    /// The path found, or `None`.
    pub path: Option<Path>,
    /// Nodes closed (expanded).
    pub expanded: usize,
    /// Entries pushed onto the frontier, duplicates included.
    pub pushed: usize,
    /// Outdated frontier entries discarded on pop.
    pub stale: usize,
    /// The search stopped because the expansion budget ran out.
    pub budget_exhausted: bool,
}

/// Run A* from `from` to `to` over the cells of `bounds`.
///
/// Neighbours outside `bounds` are ignored. Returns a report whose `path` is
/// `Some([from])` when `from == to`, and `None` when either endpoint is
/// outside `bounds`, the frontier empties, or `max_expansions` nodes have
/// been expanded without reaching the goal.
///
/// Endpoint passability is not checked here; that is the pather's or the
/// caller's concern.
pub fn astar<P: AstarPather>(
    pather: &P,
    bounds: Range,
    from: Point,
    to: Point,
    max_expansions: Option<usize>,
) -> SearchReport {
    let mut report = SearchReport::default();
    let index = CellIndex::new(bounds);
    let (Some(start_idx), Some(goal_idx)) = (index.idx(from), index.idx(to)) else {
        return report;
    };

    if start_idx == goal_idx {
        report.path = Some(Path::new(vec![from], 0.0));
        return report;
    }

    let mut nodes = vec![SearchNode::default(); bounds.len()];
    let mut open: BinaryHeap<Frontier> = BinaryHeap::new();
    let mut seq: u64 = 0;

    {
        let h = pather.estimate(from, to);
        let start = &mut nodes[start_idx];
        start.g = 0.0;
        start.h = h;
        start.f = h;
        start.seen = true;
        open.push(Frontier {
            idx: start_idx,
            f: h,
            seq,
        });
        seq += 1;
        report.pushed += 1;
    }

    let mut nbuf: Vec<Point> = Vec::with_capacity(8);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;

        // Skip stale entries.
        if nodes[ci].closed {
            report.stale += 1;
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        if max_expansions.is_some_and(|max| report.expanded >= max) {
            report.budget_exhausted = true;
            break 'search false;
        }

        nodes[ci].closed = true;
        report.expanded += 1;
        let current_g = nodes[ci].g;
        let current_point = index.point(ci);
        trace!(
            "expand {current_point} g={current_g:.3} f={:.3}",
            nodes[ci].f
        );

        nbuf.clear();
        pather.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = index.idx(np) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.closed {
                continue;
            }
            let tentative_g = current_g + pather.cost(current_point, np);
            if n.seen && tentative_g >= n.g {
                continue;
            }
            if !n.seen {
                n.h = pather.estimate(np, to);
                n.seen = true;
            }

            n.g = tentative_g;
            n.f = tentative_g + n.h;
            n.parent = ci;

            open.push(Frontier {
                idx: ni,
                f: n.f,
                seq,
            });
            seq += 1;
            report.pushed += 1;
        }
    };

    if !found {
        return report;
    }

    // Reconstruct path.
    let mut cells = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        cells.push(index.point(ci));
        ci = nodes[ci].parent;
    }
    cells.reverse();
    report.path = Some(Path::new(cells, nodes[goal_idx].g));
    report
}
