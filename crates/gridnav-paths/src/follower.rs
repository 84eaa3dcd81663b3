//! [`PathFollower`]: step-by-step playback of a [`Path`] by an agent.

use gridnav_core::{Grid, Point};

use crate::path::Path;

/// Result of [`PathFollower::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The agent moved onto this cell.
    Moved(Point),
    /// Nothing left to follow; the agent stayed put.
    Arrived,
}

/// An agent walking a [`Path`] one cell per call.
///
/// The cursor starts at 1: index 0 is the start cell, which the agent
/// already occupies. Replanning is pull-based: hand the follower a fresh
/// path with [`set_path`](PathFollower::set_path) after searching again.
#[derive(Debug, Clone)]
pub struct PathFollower {
    path: Path,
    cursor: usize,
    position: Point,
}

impl PathFollower {
    /// An idle follower standing at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            path: Path::from_cells(Vec::new()),
            cursor: 1,
            position,
        }
    }

    /// A follower placed at the start of `path`.
    pub fn with_path(position: Point, path: Path) -> Self {
        let mut f = Self::new(position);
        f.set_path(path);
        f
    }

    /// Replace the current path and rewind the cursor to 1.
    ///
    /// The agent is placed on the path's first cell. An empty path leaves
    /// it where it is, idle.
    pub fn set_path(&mut self, path: Path) {
        if let Some(start) = path.first() {
            self.position = start;
        }
        self.path = path;
        self.cursor = 1;
    }

    /// Drop the current path, leaving the agent idle in place.
    pub fn clear(&mut self) {
        self.path = Path::from_cells(Vec::new());
        self.cursor = 1;
    }

    /// Move to the next cell of the path, if any.
    pub fn advance(&mut self) -> Step {
        match self.path.get(self.cursor) {
            Some(next) => {
                self.position = next;
                self.cursor += 1;
                Step::Moved(next)
            }
            None => Step::Arrived,
        }
    }

    /// Whether there is nothing left to follow.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.cursor >= self.path.len()
    }

    /// The agent's current cell.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Index of the next cell to move onto.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The path being followed.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cells still to be visited.
    pub fn remaining(&self) -> &[Point] {
        self.path.cells().get(self.cursor..).unwrap_or(&[])
    }

    /// The destination, if a path is set.
    pub fn goal(&self) -> Option<Point> {
        self.path.last()
    }

    /// Whether any cell still to be visited has become impassable on `grid`.
    ///
    /// This is the dead-end signal: the caller should search again from
    /// [`position`](PathFollower::position).
    pub fn next_blocked(&self, grid: &Grid) -> bool {
        self.remaining().iter().any(|&p| !grid.is_passable(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SearchOptions, search};
    use gridnav_core::TerrainKind;

    fn line(n: i32) -> Path {
        Path::from_cells((0..n).map(|x| Point::new(x, 0)).collect())
    }

    #[test]
    fn walks_to_the_end() {
        let mut f = PathFollower::with_path(Point::new(9, 9), line(3));
        assert_eq!(f.position(), Point::new(0, 0));
        assert!(!f.is_idle());
        assert_eq!(f.advance(), Step::Moved(Point::new(1, 0)));
        assert_eq!(f.advance(), Step::Moved(Point::new(2, 0)));
        assert!(f.is_idle());
        assert_eq!(f.advance(), Step::Arrived);
        assert_eq!(f.position(), Point::new(2, 0));
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn single_cell_path_is_already_arrived() {
        let mut f = PathFollower::with_path(Point::ZERO, line(1));
        assert!(f.is_idle());
        assert_eq!(f.advance(), Step::Arrived);
        assert_eq!(f.position(), Point::new(0, 0));
    }

    #[test]
    fn empty_path_leaves_agent_in_place() {
        let mut f = PathFollower::new(Point::new(4, 2));
        assert!(f.is_idle());
        assert_eq!(f.goal(), None);
        f.set_path(Path::from_cells(Vec::new()));
        assert_eq!(f.advance(), Step::Arrived);
        assert_eq!(f.position(), Point::new(4, 2));
    }

    #[test]
    fn set_path_resets_cursor() {
        let mut f = PathFollower::with_path(Point::ZERO, line(5));
        f.advance();
        f.advance();
        assert_eq!(f.remaining().len(), 2);
        f.set_path(line(4));
        assert_eq!(f.cursor(), 1);
        assert_eq!(f.position(), Point::new(0, 0));
        assert_eq!(f.remaining().len(), 3);
        f.clear();
        assert!(f.is_idle());
        assert!(f.remaining().is_empty());
    }

    #[test]
    fn replan_when_path_becomes_blocked() {
        let mut grid = Grid::from_dimensions(6, 3, TerrainKind::Open).unwrap();
        let opts = SearchOptions::four();
        let (s, t) = (Point::new(0, 1), Point::new(5, 1));
        let mut f = PathFollower::with_path(s, search(&grid, s, t, opts).unwrap());
        f.advance();
        assert!(!f.next_blocked(&grid));

        let ahead = f.remaining()[1];
        grid.set_terrain(ahead, TerrainKind::Rock);
        assert!(f.next_blocked(&grid));

        let fresh = search(&grid, f.position(), t, opts).unwrap();
        f.set_path(fresh);
        assert!(!f.next_blocked(&grid));
        while let Step::Moved(p) = f.advance() {
            assert!(grid.is_passable(p));
        }
        assert_eq!(f.position(), t);
    }
}
