//! Errors raised while building grids and world mappings.

use thiserror::Error;

/// Construction and parsing failures.
///
/// Queries never fail: out-of-bounds lookups read as blocked, and an
/// unreachable goal is a normal `None` from the path finder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("grid holds {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },

    #[error("map text contains no rows")]
    EmptyMap,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown terrain glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph { glyph: char, row: usize, column: usize },

    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),
}

/// Result alias for grid construction.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GridError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x4");

        let err = GridError::UnknownGlyph {
            glyph: '?',
            row: 1,
            column: 2,
        };
        assert!(err.to_string().contains("'?'"));
    }
}
