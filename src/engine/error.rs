use std::path::PathBuf;

/// Problems with a shape mask. Raised while building a board definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 1x1")]
    EmptyShape,

    #[error("board {width}x{height} exceeds the maximum size")]
    TooLarge { width: usize, height: usize },

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell code {code} at ({x}, {y})")]
    UnknownCell { x: usize, y: usize, code: u8 },

    #[error("invalid character {ch:?} at ({x}, {y})")]
    BadRowText { x: usize, y: usize, ch: char },
}

/// Errors that can occur when loading board definitions.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown board: {0}")]
    UnknownBoard(String),

    #[error("board {name}: {source}")]
    InvalidBoard { name: String, source: BoardError },
}

/// Errors from the session readiness gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("peg asset failed to load: {0}")]
    AssetLoad(String),

    #[error("peg data is not loaded yet")]
    PegDataMissing,

    #[error("board data is already loaded")]
    AlreadyLoaded,
}
