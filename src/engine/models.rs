//! Session-level data types shared by the single-player and versus games.

use serde::{Deserialize, Serialize};

use crate::games::peg_solitaire::{HoleId, PegId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Loading,
    Ready,
    Playing,
    Win,
    Lose,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Lose)
    }

    /// Board data is built and the game has not ended.
    pub fn is_live(self) -> bool {
        matches!(self, GameStatus::Ready | GameStatus::Playing)
    }
}

/// Whose board a versus request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One executed jump, as kept in a session's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpRecord {
    pub from: HoleId,
    pub to: HoleId,
    pub removed: PegId,
}

/// Rule-breaking debug commands. Not part of normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Cheat {
    /// Clear the peg in a hole without any jump.
    Remove { hole: HoleId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flags() {
        assert!(GameStatus::Win.is_over());
        assert!(GameStatus::Lose.is_over());
        assert!(!GameStatus::Playing.is_over());
        assert!(GameStatus::Ready.is_live());
        assert!(!GameStatus::Loading.is_live());
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Player.other(), Side::Computer);
        assert_eq!(Side::Computer.other().index(), 0);
    }

    #[test]
    fn test_cheat_json() {
        let cheat: Cheat = serde_json::from_value(serde_json::json!({"command": "remove", "hole": 4})).unwrap();
        assert_eq!(cheat, Cheat::Remove { hole: HoleId(4) });
        assert_eq!(serde_json::to_value(GameStatus::Playing).unwrap(), "PLAYING");
    }
}
