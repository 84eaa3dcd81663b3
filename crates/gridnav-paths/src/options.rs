//! Search configuration: movement rule, heuristic and step budget.

use std::fmt;

use gridnav_core::Point;

use crate::distance;

/// Which neighbouring cells a single step may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Up, right, down, left.
    #[default]
    Four,
    /// The four cardinal moves plus the four diagonals.
    Eight,
}

/// Distance estimate used to order the A* frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `|dx| + |dy|`. Exact for 4-way movement; overestimates with diagonals.
    #[default]
    Manhattan,
    /// Straight-line distance. Admissible for both movement rules.
    Euclidean,
    /// `max - min + √2 * min`. Exact for unobstructed 8-way movement.
    Octile,
}

impl Heuristic {
    /// Estimated cost from `a` to `b`.
    #[inline]
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        match self {
            Heuristic::Manhattan => f64::from(distance::manhattan(a, b)),
            Heuristic::Euclidean => distance::euclidean(a, b),
            Heuristic::Octile => distance::octile(a, b),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Octile => "octile",
        })
    }
}

/// Options for a single [`PathFinder`](crate::PathFinder) search.
///
/// The default is 4-way movement with the Manhattan heuristic, diagonal
/// corner cutting allowed, and no expansion budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    pub connectivity: Connectivity,
    pub heuristic: Heuristic,
    /// With 8-way movement, whether a diagonal step may squeeze between two
    /// blocked orthogonal cells. Ignored for 4-way movement.
    pub allow_corner_cutting: bool,
    /// Stop and report no path after this many node expansions.
    pub max_expansions: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Four,
            heuristic: Heuristic::Manhattan,
            allow_corner_cutting: true,
            max_expansions: None,
        }
    }
}

impl SearchOptions {
    /// 4-way movement, Manhattan heuristic.
    pub fn four() -> Self {
        Self::default()
    }

    /// 8-way movement, Euclidean heuristic.
    pub fn eight() -> Self {
        Self {
            connectivity: Connectivity::Eight,
            heuristic: Heuristic::Euclidean,
            ..Self::default()
        }
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_corner_cutting(mut self, allow: bool) -> Self {
        self.allow_corner_cutting = allow;
        self
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Whether the heuristic never overestimates under this movement rule.
    ///
    /// Only Manhattan with 8-way movement is inadmissible. Searches still
    /// run with such options but may return a longer-than-optimal path.
    pub fn is_admissible(&self) -> bool {
        !(self.connectivity == Connectivity::Eight && self.heuristic == Heuristic::Manhattan)
    }
}
