//! Continuous-space obstacles and their rasterisation onto a [`Grid`].
//!
//! A cell is blocked by an obstacle when the cell's center point, in world
//! units, lies inside the obstacle shape.

use crate::error::{GridError, Result};
use crate::geom::Point;
use crate::grid::Grid;
use crate::terrain::TerrainKind;

/// A shape in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Obstacle {
    /// Axis-aligned rectangle centered on `(cx, cy)`.
    Rect {
        cx: f32,
        cy: f32,
        width: f32,
        height: f32,
    },
    /// Disc centered on `(cx, cy)`.
    Circle { cx: f32, cy: f32, radius: f32 },
}

impl Obstacle {
    /// Rectangle constructor.
    pub const fn rect(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Obstacle::Rect {
            cx,
            cy,
            width,
            height,
        }
    }

    /// Circle constructor.
    pub const fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        Obstacle::Circle { cx, cy, radius }
    }

    /// Whether the world point `(x, y)` is inside the shape.
    ///
    /// Rectangles include their left/top edge and exclude the right/bottom
    /// edge. Circles exclude their boundary.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        match *self {
            Obstacle::Rect {
                cx,
                cy,
                width,
                height,
            } => {
                let left = cx - width / 2.0;
                let top = cy - height / 2.0;
                x >= left && x < left + width && y >= top && y < top + height
            }
            Obstacle::Circle { cx, cy, radius } => {
                let dx = x - cx;
                let dy = y - cy;
                (dx * dx + dy * dy).sqrt() < radius
            }
        }
    }
}

/// Conversion between world units and grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellMapping {
    cell_size: f32,
}

impl CellMapping {
    /// A mapping where each cell spans `cell_size` world units.
    pub fn new(cell_size: f32) -> Result<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        Ok(Self { cell_size })
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// The cell containing world point `(x, y)`.
    #[inline]
    pub fn world_to_cell(&self, x: f32, y: f32) -> Point {
        Point::new(
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// World coordinates of the center of cell `p`.
    #[inline]
    pub fn cell_center(&self, p: Point) -> (f32, f32) {
        let half = self.cell_size / 2.0;
        (
            p.x as f32 * self.cell_size + half,
            p.y as f32 * self.cell_size + half,
        )
    }
}

impl Grid {
    /// Build an all-open `width` x `height` grid and stamp `obstacles` onto
    /// it as walls.
    pub fn from_obstacles(
        width: i32,
        height: i32,
        mapping: CellMapping,
        obstacles: &[Obstacle],
    ) -> Result<Self> {
        let mut grid = Grid::from_dimensions(width, height, TerrainKind::Open)?;
        grid.stamp_obstacles(obstacles, mapping, TerrainKind::Wall);
        Ok(grid)
    }

    /// Set every cell whose center lies inside any of `obstacles` to `kind`.
    ///
    /// Returns the number of cells stamped.
    pub fn stamp_obstacles(
        &mut self,
        obstacles: &[Obstacle],
        mapping: CellMapping,
        kind: TerrainKind,
    ) -> usize {
        if obstacles.is_empty() {
            return 0;
        }
        let mut stamped = 0;
        for p in self.bounds() {
            let (x, y) = mapping.cell_center(p);
            if obstacles.iter().any(|o| o.contains(x, y)) {
                self.set_terrain(p, kind);
                stamped += 1;
            }
        }
        stamped
    }
}
