//! Terrain generation for test levels and demos.
//!
//! Provides a deterministic layered pattern and random obstacle scattering.

use rand::{Rng, RngExt};

use crate::geom::Point;
use crate::grid::Grid;
use crate::terrain::TerrainKind;

/// One layer of the patterned level: cells where
/// `(ax * x + ay * y) % modulus == 0`, away from the left/top edge by more
/// than `margin` and from the right edge by at least `margin`, get `kind`.
struct PatternLayer {
    kind: TerrainKind,
    ax: i32,
    ay: i32,
    modulus: i32,
    margin: i32,
}

const LAYERS: [PatternLayer; 4] = [
    PatternLayer {
        kind: TerrainKind::Water,
        ax: 1,
        ay: 1,
        modulus: 8,
        margin: 3,
    },
    PatternLayer {
        kind: TerrainKind::Rock,
        ax: 3,
        ay: 1,
        modulus: 11,
        margin: 4,
    },
    PatternLayer {
        kind: TerrainKind::Forest,
        ax: 2,
        ay: 3,
        modulus: 13,
        margin: 2,
    },
    PatternLayer {
        kind: TerrainKind::Grass,
        ax: 1,
        ay: 2,
        modulus: 9,
        margin: 3,
    },
];

/// Overwrite `grid` with the layered pattern level: open ground sprinkled
/// with water, rock, forest and grass. Later layers win.
pub fn layered_pattern(grid: &mut Grid) {
    let w = grid.width();
    grid.map_cells(|p, _| {
        let mut kind = TerrainKind::Open;
        for l in &LAYERS {
            if (l.ax * p.x + l.ay * p.y) % l.modulus == 0
                && p.x > l.margin
                && p.y > l.margin
                && p.x < w - l.margin
            {
                kind = l.kind;
            }
        }
        kind
    });
}

/// Random terrain generator operating on a [`Grid`].
pub struct TerrainGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> TerrainGen<R> {
    /// Create a generator over `grid`.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Turn each passable cell into `kind` with probability `density`,
    /// skipping any point listed in `keep`.
    ///
    /// `density` is clamped to `[0, 1]`; NaN or an infinite density changes
    /// nothing. Returns the number of cells changed.
    pub fn scatter(&mut self, kind: TerrainKind, density: f64, keep: &[Point]) -> usize {
        if !density.is_finite() {
            return 0;
        }
        let density = density.clamp(0.0, 1.0);
        let mut changed = 0;
        for p in self.grid.bounds() {
            if !self.grid.is_passable(p) || keep.contains(&p) {
                continue;
            }
            if self.rng.random_bool(density) && self.grid.set_terrain(p, kind) {
                changed += 1;
            }
        }
        changed
    }

    /// A uniformly chosen passable cell, or `None` if there is none.
    pub fn random_passable(&mut self) -> Option<Point> {
        let n = self.grid.count_passable();
        if n == 0 {
            return None;
        }
        let pick = self.rng.random_range(0..n);
        self.grid
            .bounds()
            .iter()
            .filter(|&p| self.grid.is_passable(p))
            .nth(pick)
    }

    /// Consume the generator, returning the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn layered_pattern_is_deterministic() {
        let mut a = Grid::from_dimensions(40, 30, TerrainKind::Wall).unwrap();
        let mut b = a.clone();
        layered_pattern(&mut a);
        layered_pattern(&mut b);
        assert_eq!(a, b);
        assert_eq!(a.count(TerrainKind::Wall), 0);
        // Margins keep the top-left corner open.
        assert_eq!(a.terrain(Point::new(0, 0)), Some(TerrainKind::Open));
        assert_eq!(a.terrain(Point::new(2, 2)), Some(TerrainKind::Open));
        // (4, 4): water layer matches (8 % 8 == 0) and nothing overrides it.
        assert_eq!(a.terrain(Point::new(4, 4)), Some(TerrainKind::Water));
        assert!(a.count(TerrainKind::Grass) > 0);
        assert!(a.count(TerrainKind::Forest) > 0);
    }

    #[test]
    fn scatter_respects_keep_list() {
        let grid = Grid::from_dimensions(20, 20, TerrainKind::Open).unwrap();
        let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(7));
        let keep = [Point::new(0, 0), Point::new(19, 19)];
        let changed = tg.scatter(TerrainKind::Rock, 1.0, &keep);
        assert_eq!(changed, 398);
        assert!(tg.grid.is_passable(Point::new(0, 0)));
        assert!(tg.grid.is_passable(Point::new(19, 19)));
    }

    #[test]
    fn scatter_zero_density_is_noop() {
        let grid = Grid::from_dimensions(10, 10, TerrainKind::Open).unwrap();
        let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(1));
        assert_eq!(tg.scatter(TerrainKind::Rock, 0.0, &[]), 0);
        assert_eq!(tg.grid.count_passable(), 100);
    }

    #[test]
    fn scatter_ignores_non_finite_density() {
        let grid = Grid::from_dimensions(8, 8, TerrainKind::Open).unwrap();
        let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(2));
        for density in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(tg.scatter(TerrainKind::Rock, density, &[]), 0);
        }
        assert_eq!(tg.grid.count_passable(), 64);
        // Out-of-range finite values still clamp.
        assert_eq!(tg.scatter(TerrainKind::Rock, -0.5, &[]), 0);
        assert_eq!(tg.scatter(TerrainKind::Rock, 7.0, &[]), 64);
    }

    #[test]
    fn random_passable_picks_open_cell() {
        let mut grid = Grid::from_dimensions(6, 6, TerrainKind::Wall).unwrap();
        grid.set_terrain(Point::new(3, 4), TerrainKind::Open);
        let mut tg = TerrainGen::with_grid(grid, StdRng::seed_from_u64(3));
        assert_eq!(tg.random_passable(), Some(Point::new(3, 4)));

        let walls = Grid::from_dimensions(2, 2, TerrainKind::Wall).unwrap();
        let mut tg = TerrainGen::with_grid(walls, StdRng::seed_from_u64(3));
        assert_eq!(tg.random_passable(), None);
    }
}
