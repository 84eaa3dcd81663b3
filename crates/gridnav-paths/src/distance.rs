use std::f64::consts::SQRT_2;

use gridnav_core::Point;

/// Manhattan (L1) distance between two points, saturating at `u32::MAX`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x.abs_diff(b.x));
    let dy = f64::from(a.y.abs_diff(b.y));
    dx.hypot(dy)
}

/// Octile distance: the exact cost of an unobstructed 8-way walk where
/// diagonal steps cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    f64::from(hi - lo) + SQRT_2 * f64::from(lo)
}
