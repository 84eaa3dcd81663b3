//! The [`Path`] returned by a successful search.

use std::ops::Index;

use gridnav_core::{CellMapping, Grid, Point};

use crate::options::SearchOptions;
use crate::pather::{GridPather, step_cost};

/// A fully materialised cell sequence from start to goal, both inclusive.
///
/// A path is a snapshot: mutating the grid afterwards does not change it.
/// Use [`Path::is_valid`] to check whether it still fits the current grid.
///
/// Deserializing reads only the cells and prices them like
/// [`Path::from_cells`]; a stored `cost` is ignored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PathRepr"))]
pub struct Path {
    cells: Vec<Point>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(cells: Vec<Point>, cost: f64) -> Self {
        Self { cells, cost }
    }

    /// Build a path from an explicit cell list, pricing each step like the
    /// stock grid pather: 1 for orthogonal, √2 for diagonal.
    pub fn from_cells(cells: Vec<Point>) -> Self {
        let cost = step_costs(&cells);
        Self { cells, cost }
    }

    /// The cells, start first.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells (one more than the number of moves).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total movement cost: the `g` value reached at the goal.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of moves.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Point> {
        self.cells.get(i).copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
        self.cells.iter().copied()
    }

    /// Re-sum the step costs along the path.
    ///
    /// Accumulates in the same order as the search, so for a path returned
    /// by the finder this equals [`cost`](Path::cost) exactly.
    pub fn step_cost_sum(&self) -> f64 {
        step_costs(&self.cells)
    }

    /// Whether every move is legal on `grid` under `options`: each cell after
    /// the start is passable, and each consecutive pair is a single step
    /// allowed by the connectivity and corner rule.
    ///
    /// The start cell itself is not checked; an agent may stand on a cell
    /// that has since become blocked.
    pub fn is_valid(&self, grid: &Grid, options: SearchOptions) -> bool {
        let pather = GridPather::new(grid, options);
        if self.cells.first().is_some_and(|&s| !grid.contains(s)) {
            return false;
        }
        self.cells.windows(2).all(|w| pather.allows(w[0], w[1]))
    }

    /// Centers of the path cells in world coordinates.
    pub fn to_world(&self, mapping: CellMapping) -> Vec<(f32, f32)> {
        self.cells.iter().map(|&p| mapping.cell_center(p)).collect()
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Point> {
        self.cells
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathRepr {
    cells: Vec<Point>,
}

#[cfg(feature = "serde")]
impl From<PathRepr> for Path {
    fn from(r: PathRepr) -> Self {
        Path::from_cells(r.cells)
    }
}

fn step_costs(cells: &[Point]) -> f64 {
    cells.windows(2).fold(0.0, |g, w| g + step_cost(w[0], w[1]))
}

impl Index<usize> for Path {
    type Output = Point;

    #[inline]
    fn index(&self, i: usize) -> &Point {
        &self.cells[i]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
