//! Terrain kinds and the passability predicate that maps them to
//! walkable / blocked.

use std::fmt;

/// Static terrain class of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    /// Bare ground.
    #[default]
    Open,
    Grass,
    Water,
    Rock,
    Forest,
    /// A cell covered by a wall or a stamped obstacle.
    Wall,
}

impl TerrainKind {
    /// Every terrain kind, in declaration order.
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Open,
        TerrainKind::Grass,
        TerrainKind::Water,
        TerrainKind::Rock,
        TerrainKind::Forest,
        TerrainKind::Wall,
    ];

    /// Character used by [`Grid::from_ascii`](crate::Grid::from_ascii) and
    /// [`Grid::to_ascii`](crate::Grid::to_ascii).
    pub const fn glyph(self) -> char {
        match self {
            TerrainKind::Open => '.',
            TerrainKind::Grass => ',',
            TerrainKind::Water => '~',
            TerrainKind::Rock => '^',
            TerrainKind::Forest => 'T',
            TerrainKind::Wall => '#',
        }
    }

    /// Inverse of [`glyph`](TerrainKind::glyph).
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.glyph() == ch)
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerrainKind::Open => "open",
            TerrainKind::Grass => "grass",
            TerrainKind::Water => "water",
            TerrainKind::Rock => "rock",
            TerrainKind::Forest => "forest",
            TerrainKind::Wall => "wall",
        };
        f.write_str(name)
    }
}

/// The set of terrain kinds an agent may walk on.
///
/// This is the configurable predicate that collapses a [`TerrainKind`] into
/// passable / blocked. The default allows [`Open`](TerrainKind::Open) and
/// [`Grass`](TerrainKind::Grass).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passability {
    mask: u8,
}

impl Passability {
    /// Nothing is passable.
    pub const NONE: Self = Self { mask: 0 };

    /// Build a set from a list of passable kinds.
    pub fn of(kinds: &[TerrainKind]) -> Self {
        kinds.iter().fold(Self::NONE, |acc, &k| acc.allow(k))
    }

    /// Add `kind` to the passable set (builder).
    #[inline]
    pub const fn allow(self, kind: TerrainKind) -> Self {
        Self {
            mask: self.mask | kind.bit(),
        }
    }

    /// Remove `kind` from the passable set (builder).
    #[inline]
    pub const fn forbid(self, kind: TerrainKind) -> Self {
        Self {
            mask: self.mask & !kind.bit(),
        }
    }

    /// Whether `kind` is walkable.
    #[inline]
    pub const fn is_passable(self, kind: TerrainKind) -> bool {
        self.mask & kind.bit() != 0
    }
}

impl Default for Passability {
    fn default() -> Self {
        Self::NONE.allow(TerrainKind::Open).allow(TerrainKind::Grass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_passability() {
        let p = Passability::default();
        assert!(p.is_passable(TerrainKind::Open));
        assert!(p.is_passable(TerrainKind::Grass));
        assert!(!p.is_passable(TerrainKind::Water));
        assert!(!p.is_passable(TerrainKind::Rock));
        assert!(!p.is_passable(TerrainKind::Forest));
        assert!(!p.is_passable(TerrainKind::Wall));
    }

    #[test]
    fn allow_and_forbid() {
        let p = Passability::default()
            .allow(TerrainKind::Forest)
            .forbid(TerrainKind::Grass);
        assert!(p.is_passable(TerrainKind::Forest));
        assert!(!p.is_passable(TerrainKind::Grass));
        assert_eq!(
            Passability::of(&[TerrainKind::Open, TerrainKind::Grass]),
            Passability::default()
        );
    }

    #[test]
    fn glyphs_are_unique() {
        for k in TerrainKind::ALL {
            assert_eq!(TerrainKind::from_glyph(k.glyph()), Some(k));
        }
        assert_eq!(TerrainKind::from_glyph('?'), None);
    }
}
