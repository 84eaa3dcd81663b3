use gridnav_core::Point;

/// Movement rule: which cells one step from `p` can reach.
pub trait Pather {
    /// Push every cell reachable in one step from `p` onto `buf`, which the
    /// search clears beforehand.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] whose steps carry a cost.
pub trait WeightedPather: Pather {
    /// Cost of the single step `from -> to`. Must be positive.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// A [`WeightedPather`] that can also estimate the remaining distance, as
/// A* needs.
pub trait AstarPather: WeightedPather {
    /// Estimated cost from `from` to `to`.
    ///
    /// Shortest paths are only guaranteed when this never overestimates
    /// (admissible). Pairing a heuristic with a movement rule it does not
    /// fit is the caller's responsibility.
    fn estimate(&self, from: Point, to: Point) -> f64;
}
