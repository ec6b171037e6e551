use thiserror::Error;

use crate::maze::cell::Position;

/// Erreurs de construction ou de chargement d'un labyrinthe.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing header line `<rows> <cols>`")]
    MissingHeader,
    #[error("invalid header `{0}`, expected `<rows> <cols>`")]
    InvalidHeader(String),
    #[error("maze dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("maze of {rows}x{cols} cells exceeds the limit of {max} cells")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("line {line}: expected {expected} rows, found {found}")]
    RowCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: row has {found} cells, maximum is {expected}")]
    RowTooLong {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {col}: unexpected character {ch:?}")]
    UnexpectedChar { line: usize, col: usize, ch: char },
    #[error("missing {0} cell")]
    MissingMarker(&'static str),
    #[error("duplicate {0} cell")]
    DuplicateMarker(&'static str),
    #[error("{what} cell {pos} is outside a {rows}x{cols} grid")]
    OutOfBounds {
        what: &'static str,
        pos: Position,
        rows: usize,
        cols: usize,
    },
    #[error("{what} cell {pos} is a wall")]
    WalledMarker { what: &'static str, pos: Position },
    #[error("wall layout has {found} cells, expected {expected}")]
    LayoutSize { expected: usize, found: usize },
    #[error("wall ratio must be within [0, 1], got {0}")]
    InvalidWallRatio(f64),
}
