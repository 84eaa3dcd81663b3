//! Cell coordinates ([`Point`]) and rectangular cell sets ([`Range`]).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// Offsets of the four cardinal moves: up, right, down, left.
const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Offsets of all eight moves, clockwise from north.
const COMPASS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Integer cell coordinate. `x` grows to the right, `y` grows downwards.
///
/// Points compare by value and order row-major (by `y`, then `x`), so they
/// work as keys in both hashed and ordered collections.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether `other` is one diagonal step away.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x.abs_diff(other.x) == 1 && self.y.abs_diff(other.y) == 1
    }

    /// Cardinal neighbours in the order up, right, down, left.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        CARDINAL.map(|d| self.offset(d))
    }

    /// All eight neighbours, clockwise starting north.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        COMPASS.map(|d| self.offset(d))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.offset((rhs.x, rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.offset((-rhs.x, -rhs.y))
    }
}

/// The cells `min.x..max.x` by `min.y..max.y`: `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The range spanned by two corners, given in any order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Cells covered by both ranges. Disjoint ranges give the empty default.
    pub fn intersect(self, other: Range) -> Self {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        let r = Self { min, max };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major walk over every cell.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Row-major iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let w = self.range.width() as usize;
        let p = Point::new(
            self.range.min.x + (self.next % w) as i32,
            self.range.min.y + (self.next / w) as i32,
        );
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn points_are_value_keys() {
        let hashed: HashSet<Point> = [(2, 3), (2, 3), (3, 2)].map(Point::from).into();
        assert_eq!(hashed.len(), 2);
        let ordered: BTreeSet<Point> = [(5, 1), (0, 2), (9, 0)].map(Point::from).into();
        let rows: Vec<_> = ordered.into_iter().collect();
        assert_eq!(rows, vec![Point::new(9, 0), Point::new(5, 1), Point::new(0, 2)]);
    }

    #[test]
    fn arithmetic_and_display() {
        let a = Point::new(1, 2);
        let b = Point::new(3, -4);
        assert_eq!(a + b, Point::new(4, -2));
        assert_eq!(b - a, Point::new(2, -6));
        assert_eq!(b.to_string(), "(3, -4)");
    }

    #[test]
    fn diagonal_check() {
        let p = Point::new(5, 5);
        assert!(p.is_diagonal_to(Point::new(6, 4)));
        assert!(!p.is_diagonal_to(Point::new(6, 5)));
        assert!(!p.is_diagonal_to(Point::new(7, 7)));
        let far = Point::new(i32::MIN, i32::MAX);
        assert!(!Point::ZERO.is_diagonal_to(far));
        assert!(far.is_diagonal_to(Point::new(i32::MIN + 1, i32::MAX - 1)));
    }

    #[test]
    fn neighbour_order() {
        let p = Point::new(1, 1);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
        let n8 = p.neighbors_8();
        assert_eq!(n8[1], Point::new(2, 0));
        assert_eq!(n8[3], Point::new(2, 2));
        assert_eq!(n8[7], Point::new(0, 0));
        assert!(n8.iter().all(|&q| q != p));
    }

    #[test]
    fn range_bounds_are_half_open() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!((r.width(), r.height(), r.len()), (3, 2, 6));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, -1)));
        assert!(Range::new(1, 1, 1, 4).is_empty());
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::new(10, 20, 13, 22);
        let it = r.iter();
        assert_eq!(it.len(), 6);
        let pts: Vec<_> = it.collect();
        assert_eq!(pts[0], Point::new(10, 20));
        assert_eq!(pts[3], Point::new(10, 21));
        assert_eq!(pts[5], Point::new(12, 21));
        assert_eq!(Range::default().iter().count(), 0);
    }

    #[test]
    fn intersection() {
        let a = Range::new(0, 0, 4, 4);
        assert_eq!(a.intersect(Range::new(2, 3, 9, 9)), Range::new(2, 3, 4, 4));
        assert!(a.intersect(Range::new(5, 5, 7, 7)).is_empty());
    }
}
