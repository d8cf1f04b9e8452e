pub mod peg_solitaire;

use std::collections::BTreeMap;

use crate::engine::config::{BoardDefinition, BoardsFile, GameData, PegAsset, PRESETS};
use crate::engine::error::ConfigError;
use peg_solitaire::Board;

/// Registry of available board definitions.
pub struct BoardRegistry {
    boards: BTreeMap<String, BoardDefinition>,
    peg: PegAsset,
}

impl BoardRegistry {
    pub fn new() -> Self {
        Self {
            boards: BTreeMap::new(),
            peg: PegAsset::default(),
        }
    }

    /// Registry seeded with the built-in presets.
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        for (name, def) in PRESETS.iter() {
            registry.register(name, def.clone());
        }
        registry
    }

    pub fn register(&mut self, name: &str, definition: BoardDefinition) {
        self.boards.insert(name.to_string(), definition);
    }

    /// Add everything from a loaded file; file boards replace same-named ones.
    pub fn extend_from(&mut self, file: BoardsFile) {
        if let Some(peg) = file.peg {
            self.peg = peg;
        }
        for (name, def) in file.boards {
            self.boards.insert(name, def);
        }
    }

    pub fn get(&self, name: &str) -> Option<&BoardDefinition> {
        self.boards.get(name)
    }

    pub fn list_board_names(&self) -> Vec<String> {
        self.boards.keys().cloned().collect()
    }

    pub fn build(&self, name: &str) -> Result<Board, ConfigError> {
        let def = self
            .get(name)
            .ok_or_else(|| ConfigError::UnknownBoard(name.to_string()))?;
        def.build().map_err(|source| ConfigError::InvalidBoard {
            name: name.to_string(),
            source,
        })
    }

    /// Board plus peg asset, ready to start a session with.
    pub fn game_data(&self, name: &str) -> Result<GameData, ConfigError> {
        let board = self
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownBoard(name.to_string()))?;
        Ok(GameData {
            board,
            peg: self.peg.clone(),
        })
    }
}

impl Default for BoardRegistry {
    fn default() -> Self {
        Self::with_presets()
    }
}
