//! A* pathfinding and path following on occupancy grids.
//!
//! - [`PathFinder`] / [`search`]: shortest paths over a
//!   [`Grid`](gridnav_core::Grid) with 4- or 8-way movement and a choice of
//!   [`Heuristic`]
//! - [`astar`]: the same search over any [`AstarPather`], for callers with
//!   their own movement rules
//! - [`Path`]: the materialised result, with validation against a changed
//!   grid
//! - [`PathFollower`]: steps an agent along a path and reports when the way
//!   ahead is blocked
//!
//! Searches keep no state between calls: replanning after the grid or goal
//! changes is just another search.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | step cost |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic estimate |

mod astar;
mod distance;
mod finder;
mod follower;
mod neighbors;
mod options;
mod path;
mod pather;
mod traits;

pub use astar::{SearchReport, astar};
pub use distance::{euclidean, manhattan, octile};
pub use finder::{PathFinder, search};
pub use follower::{PathFollower, Step};
pub use options::{Connectivity, Heuristic, SearchOptions};
pub use path::Path;
pub use pather::{DIAGONAL_COST, GridPather, ORTHOGONAL_COST, step_cost};
pub use traits::{AstarPather, Pather, WeightedPather};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridnav_core::Point;

    #[test]
    fn options_round_trip() {
        let opts = SearchOptions::eight()
            .with_corner_cutting(false)
            .with_max_expansions(500);
        let json = serde_json::to_string(&opts).unwrap();
        let back: SearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let back: SearchOptions = serde_json::from_str(r#"{"connectivity":"Eight"}"#).unwrap();
        assert_eq!(back.connectivity, Connectivity::Eight);
        assert_eq!(back.heuristic, Heuristic::Manhattan);
        assert!(back.allow_corner_cutting);
    }

    #[test]
    fn path_round_trip() {
        let path = Path::from_cells(vec![Point::new(0, 0), Point::new(1, 1)]);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn loaded_path_cost_comes_from_cells() {
        let json = r#"{"cells":[{"x":0,"y":0},{"x":1,"y":0},{"x":2,"y":1}],"cost":99.0}"#;
        let path: Path = serde_json::from_str(json).unwrap();
        assert_eq!(path.cost(), 1.0 + DIAGONAL_COST);
        assert_eq!(path.step_cost_sum(), path.cost());

        let bare: Path = serde_json::from_str(r#"{"cells":[]}"#).unwrap();
        assert!(bare.is_empty());
        assert_eq!(bare.cost(), 0.0);
    }
}
