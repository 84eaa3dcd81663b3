//! The stock [`AstarPather`] over a [`Grid`].

use std::f64::consts::SQRT_2;

use gridnav_core::{Grid, Point};

use crate::neighbors::{corners_open, is_step, push_moves};
use crate::options::{Connectivity, SearchOptions};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = SQRT_2;

/// Cost of the single step `from -> to`.
#[inline]
pub fn step_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Moves over the passable cells of a [`Grid`] according to a set of
/// [`SearchOptions`].
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    options: SearchOptions,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, options: SearchOptions) -> Self {
        Self { grid, options }
    }

    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    #[inline]
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Whether a single step `from -> to` is legal: `to` is passable, the
    /// displacement fits the connectivity, and the corner rule holds.
    pub fn allows(&self, from: Point, to: Point) -> bool {
        if !is_step(from, to, self.options.connectivity) || !self.grid.is_passable(to) {
            return false;
        }
        if self.options.connectivity == Connectivity::Eight
            && !self.options.allow_corner_cutting
            && from.is_diagonal_to(to)
        {
            return corners_open(from, to, &|q| self.grid.is_passable(q));
        }
        true
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_moves(
            p,
            self.options.connectivity,
            self.options.allow_corner_cutting,
            &|q| self.grid.is_passable(q),
            buf,
        );
    }
}

impl WeightedPather for GridPather<'_> {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> f64 {
        step_cost(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.options.heuristic.estimate(from, to)
    }
}
