//! Move enumeration and the diagonal corner rule.

use gridnav_core::Point;

use crate::options::Connectivity;

/// Append the legal single-step moves from `p` into `buf`, clockwise from
/// north. `keep` decides which target cells may be entered.
///
/// With `corner_cutting` off, a diagonal is also dropped when either of the
/// two orthogonal cells it passes between fails `keep`.
pub(crate) fn push_moves(
    p: Point,
    connectivity: Connectivity,
    corner_cutting: bool,
    keep: &impl Fn(Point) -> bool,
    buf: &mut Vec<Point>,
) {
    match connectivity {
        Connectivity::Four => {
            for n in p.neighbors_4() {
                if keep(n) {
                    buf.push(n);
                }
            }
        }
        Connectivity::Eight => {
            for n in p.neighbors_8() {
                if keep(n) && (corner_cutting || !p.is_diagonal_to(n) || corners_open(p, n, keep)) {
                    buf.push(n);
                }
            }
        }
    }
}

/// Whether both orthogonal cells flanking the diagonal step `from -> to` pass
/// `keep`.
#[inline]
pub(crate) fn corners_open(from: Point, to: Point, keep: &impl Fn(Point) -> bool) -> bool {
    keep(Point::new(to.x, from.y)) && keep(Point::new(from.x, to.y))
}

/// Whether `to` is one step from `from` under `connectivity` (ignoring
/// passability).
#[inline]
pub(crate) fn is_step(from: Point, to: Point, connectivity: Connectivity) -> bool {
    let dx = to.x.abs_diff(from.x);
    let dy = to.y.abs_diff(from.y);
    match connectivity {
        Connectivity::Four => (dx == 1 && dy == 0) || (dx == 0 && dy == 1),
        Connectivity::Eight => dx.max(dy) == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(p: Point, c: Connectivity, cut: bool, keep: impl Fn(Point) -> bool) -> Vec<Point> {
        let mut buf = Vec::new();
        push_moves(p, c, cut, &keep, &mut buf);
        buf
    }

    #[test]
    fn cardinal_filters() {
        let got = moves(Point::new(0, 0), Connectivity::Four, true, |q| {
            q.x >= 0 && q.y >= 0
        });
        assert_eq!(got, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn eight_way_orders_clockwise_from_north() {
        let got = moves(Point::new(1, 1), Connectivity::Eight, true, |_| true);
        assert_eq!(got, Point::new(1, 1).neighbors_8().to_vec());
    }

    #[test]
    fn corner_cutting_rule() {
        // Blocked cells at (1, 0) and (0, 1): the diagonal (0,0)->(1,1)
        // squeezes between them.
        let blocked = [Point::new(1, 0), Point::new(0, 1)];
        let keep =
            |q: Point| (0..3).contains(&q.x) && (0..3).contains(&q.y) && !blocked.contains(&q);
        let o = Point::new(0, 0);
        assert_eq!(moves(o, Connectivity::Eight, true, keep), vec![Point::new(1, 1)]);
        assert!(moves(o, Connectivity::Eight, false, keep).is_empty());
    }

    #[test]
    fn single_blocked_corner_also_forbids_strict_diagonal() {
        let keep = |q: Point| q != Point::new(1, 0) && q.x >= 0 && q.y >= 0;
        let got = moves(Point::new(0, 0), Connectivity::Eight, false, keep);
        assert_eq!(got, vec![Point::new(0, 1)]);
    }

    #[test]
    fn step_shapes() {
        let o = Point::new(3, 3);
        assert!(is_step(o, Point::new(3, 4), Connectivity::Four));
        assert!(!is_step(o, Point::new(4, 4), Connectivity::Four));
        assert!(is_step(o, Point::new(4, 4), Connectivity::Eight));
        assert!(!is_step(o, o, Connectivity::Eight));
        assert!(!is_step(o, Point::new(5, 3), Connectivity::Eight));
    }

    #[test]
    fn step_check_handles_extreme_coordinates() {
        let lo = Point::new(i32::MIN, 0);
        let hi = Point::new(i32::MAX, 0);
        for c in [Connectivity::Four, Connectivity::Eight] {
            assert!(!is_step(Point::ZERO, lo, c));
            assert!(!is_step(lo, hi, c));
            assert!(is_step(Point::new(i32::MIN + 1, 0), lo, c));
        }
    }
}
