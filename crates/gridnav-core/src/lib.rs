//! **gridnav-core**: the occupancy model for grid navigation.
//!
//! This crate provides the types the path finder searches over: geometry
//! primitives, terrain kinds with a configurable passability predicate, the
//! owned occupancy [`Grid`], rasterisation of continuous-space obstacles, and
//! simple terrain generators.

pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod obstacle;
pub mod terrain;

pub use error::{GridError, Result};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use mapgen::{TerrainGen, layered_pattern};
pub use obstacle::{CellMapping, Obstacle};
pub use terrain::{Passability, TerrainKind};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut grid = Grid::from_ascii("..#\n,~.").unwrap();
        grid.set_passability(Passability::default().allow(TerrainKind::Water));
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(back.is_passable(Point::new(1, 1)));
    }

    #[test]
    fn grid_rejects_inconsistent_shape() {
        let short = r#"{"cells":[],"width":5,"height":5,"passability":{"mask":1}}"#;
        let err = serde_json::from_str::<Grid>(short).unwrap_err();
        assert!(err.to_string().contains("holds 0 cells, expected 25"), "{err}");

        let flat = r#"{"cells":["Open"],"width":0,"height":1,"passability":{"mask":1}}"#;
        let err = serde_json::from_str::<Grid>(flat).unwrap_err();
        assert!(err.to_string().contains("must be positive"), "{err}");

        let ok = r#"{"cells":["Open","Wall"],"width":2,"height":1,"passability":{"mask":1}}"#;
        let grid: Grid = serde_json::from_str(ok).unwrap();
        assert!(grid.is_passable(Point::new(0, 0)));
        assert!(!grid.is_passable(Point::new(1, 0)));
    }

    #[test]
    fn obstacle_round_trip() {
        let obs = vec![Obstacle::rect(1.0, 2.0, 3.0, 4.0), Obstacle::circle(5.0, 6.0, 7.0)];
        let json = serde_json::to_string(&obs).unwrap();
        let back: Vec<Obstacle> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
    }
}
