//! Board definitions and game data.
//! Loaded from TOML at runtime; built-in presets cover the standard boards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::engine::error::{BoardError, ConfigError};
use crate::games::peg_solitaire::shape::parse_row;
use crate::games::peg_solitaire::{Board, ShapeMask};

/// One row of a shape mask: integer codes or a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeRow {
    Codes(Vec<u8>),
    Text(String),
}

impl ShapeRow {
    fn codes(&self, y: usize) -> Result<Vec<u8>, BoardError> {
        match self {
            ShapeRow::Codes(codes) => Ok(codes.clone()),
            ShapeRow::Text(text) => parse_row(y, text),
        }
    }
}

/// The persisted board format: dimensions plus a mask of 0/1/2 cell codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDefinition {
    #[serde(default)]
    pub description: Option<String>,
    pub width: usize,
    pub height: usize,
    pub shape: Vec<ShapeRow>,
}

impl BoardDefinition {
    pub fn from_text(width: usize, height: usize, rows: &[&str]) -> Self {
        Self {
            description: None,
            width,
            height,
            shape: rows.iter().map(|r| ShapeRow::Text((*r).to_string())).collect(),
        }
    }

    pub fn shape_mask(&self) -> Result<ShapeMask, BoardError> {
        let rows = self
            .shape
            .iter()
            .enumerate()
            .map(|(y, row)| row.codes(y))
            .collect::<Result<Vec<_>, _>>()?;
        ShapeMask::from_codes(self.width, self.height, &rows)
    }

    pub fn build(&self) -> Result<Board, BoardError> {
        Ok(Board::new(self.shape_mask()?))
    }
}

/// Peg asset metadata, handed to whoever loads the peg geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegAsset {
    pub path: PathBuf,
}

impl Default for PegAsset {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PEG_PATH),
        }
    }
}

pub const DEFAULT_PEG_PATH: &str = "models/peg.glb";

/// Everything a session needs: the board to build and the peg to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub board: BoardDefinition,
    #[serde(default)]
    pub peg: PegAsset,
}

/// Top-level TOML file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardsFile {
    #[serde(default)]
    pub peg: Option<PegAsset>,
    #[serde(default)]
    pub boards: BTreeMap<String, BoardDefinition>,
}

pub static PRESETS: Lazy<BTreeMap<&'static str, BoardDefinition>> = Lazy::new(|| {
    let mut presets = BTreeMap::new();
    presets.insert(
        "english",
        BoardDefinition {
            description: Some("33-hole cross, center empty".into()),
            ..BoardDefinition::from_text(
                7,
                7,
                &[
                    "0011100", "0011100", "1111111", "1112111", "1111111", "0011100", "0011100",
                ],
            )
        },
    );
    presets.insert(
        "european",
        BoardDefinition {
            description: Some("37-hole octagon, center empty".into()),
            ..BoardDefinition::from_text(
                7,
                7,
                &[
                    "0011100", "0111110", "1111111", "1112111", "1111111", "0111110", "0011100",
                ],
            )
        },
    );
    presets.insert(
        "square",
        BoardDefinition {
            description: Some("4x4 practice board".into()),
            ..BoardDefinition::from_text(4, 4, &["1111", "1111", "1121", "1111"])
        },
    );
    presets.insert(
        "line",
        BoardDefinition {
            description: Some("Three holes, one jump".into()),
            ..BoardDefinition::from_text(3, 1, &["112"])
        },
    );
    presets
});

/// Load definitions from a TOML file at the given path.
pub fn load_definitions(path: &Path) -> Result<BoardsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: BoardsFile = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;

    for (name, def) in &file.boards {
        def.shape_mask().map_err(|source| ConfigError::InvalidBoard {
            name: name.clone(),
            source,
        })?;
    }
    Ok(file)
}

/// Try to load definitions from well-known paths, returning an empty file if none found.
pub fn load_default_definitions() -> BoardsFile {
    let candidates = ["boards.toml", "../boards.toml", "/etc/pegjump/boards.toml"];
    for path in &candidates {
        let p = Path::new(path);
        if p.exists() {
            match load_definitions(p) {
                Ok(file) => {
                    tracing::info!(path = %p.display(), count = file.boards.len(), "loaded board definitions");
                    return file;
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load board definitions");
                }
            }
        }
    }
    tracing::info!("no boards.toml found, using built-in presets");
    BoardsFile::default()
}
