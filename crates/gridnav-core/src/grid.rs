//! The occupancy [`Grid`]: a fixed-size 2D array of [`TerrainKind`]s.
//!
//! Unlike a shared-buffer view, a `Grid` owns its cells outright. Cloning it
//! produces an independent snapshot, and a `&Grid` can be handed to several
//! searches at once. Mutation happens between searches through `&mut self`.

use std::fmt::Write as _;

use crate::error::{GridError, Result};
use crate::geom::{Point, Range};
use crate::terrain::{Passability, TerrainKind};

/// A 2D terrain grid with a passability predicate.
///
/// Out-of-bounds points are always blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<TerrainKind>,
    width: i32,
    height: i32,
    passability: Passability,
}

/// Unchecked wire form of a [`Grid`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<TerrainKind>,
    width: i32,
    height: i32,
    passability: Passability,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self> {
        let expected = cell_count(r.width, r.height)?;
        if r.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: r.cells.len(),
            });
        }
        Ok(Self {
            cells: r.cells,
            width: r.width,
            height: r.height,
            passability: r.passability,
        })
    }
}

/// Number of cells in a `width` x `height` grid, rejecting empty shapes.
fn cell_count(width: i32, height: i32) -> Result<usize> {
    if width <= 0 || height <= 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(GridError::InvalidDimensions { width, height })
}

impl Grid {
    /// Create a `width` x `height` grid filled with `terrain`.
    pub fn from_dimensions(width: i32, height: i32, terrain: TerrainKind) -> Result<Self> {
        let n = cell_count(width, height)?;
        Ok(Self {
            cells: vec![terrain; n],
            width,
            height,
            passability: Passability::default(),
        })
    }

    /// Parse a grid from rows of terrain glyphs (see [`TerrainKind::glyph`]).
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyMap);
        };
        let width = first.chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, glyph) in line.chars().enumerate() {
                let kind = TerrainKind::from_glyph(glyph).ok_or(GridError::UnknownGlyph {
                    glyph,
                    row,
                    column,
                })?;
                cells.push(kind);
            }
        }
        Ok(Self {
            cells,
            width: width as i32,
            height: rows.len() as i32,
            passability: Passability::default(),
        })
    }

    /// Replace the passability predicate (builder).
    pub fn with_passability(mut self, passability: Passability) -> Self {
        self.passability = passability;
        self
    }

    /// Replace the passability predicate in place.
    pub fn set_passability(&mut self, passability: Passability) {
        self.passability = passability;
    }

    /// The current passability predicate.
    #[inline]
    pub fn passability(&self) -> Passability {
        self.passability
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding range `[0, 0) - (width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Inverse of [`index_of`](Grid::index_of).
    #[inline]
    pub fn point_at(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Terrain at `p`, or `None` outside the grid.
    #[inline]
    pub fn terrain(&self, p: Point) -> Option<TerrainKind> {
        self.index_of(p).map(|i| self.cells[i])
    }

    /// Whether an agent may stand on `p`. Fails closed outside the grid.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.terrain(p)
            .is_some_and(|k| self.passability.is_passable(k))
    }

    /// Set the terrain at `p`. No-op outside the grid.
    ///
    /// Returns `true` if the stored kind changed.
    pub fn set_terrain(&mut self, p: Point, kind: TerrainKind) -> bool {
        let Some(i) = self.index_of(p) else {
            return false;
        };
        let changed = self.cells[i] != kind;
        self.cells[i] = kind;
        changed
    }

    /// Fill every in-bounds cell of `r` with `kind`.
    ///
    /// Returns the number of cells written.
    pub fn fill_range(&mut self, r: Range, kind: TerrainKind) -> usize {
        let r = r.intersect(self.bounds());
        for p in r.iter() {
            self.set_terrain(p, kind);
        }
        r.len()
    }

    /// Set each cell to `f(point, current)`.
    pub fn map_cells(&mut self, mut f: impl FnMut(Point, TerrainKind) -> TerrainKind) {
        let w = self.width as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let p = Point::new((i % w) as i32, (i / w) as i32);
            *cell = f(p, *cell);
        }
    }

    /// Number of passable cells.
    pub fn count_passable(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&k| self.passability.is_passable(k))
            .count()
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: TerrainKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Row-major iterator over `(Point, TerrainKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, TerrainKind)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Render the grid as rows of glyphs, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width as usize) {
            for k in row {
                out.push(k.glyph());
            }
            let _ = writeln!(out);
        }
        out
    }
}
