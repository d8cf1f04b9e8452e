//! Single-player game session.
//!
//! Owns the board, the readiness gate and the removed-peg counter. All rules
//! live in `Board`; the session only sequences calls and keeps score.

use crate::engine::config::GameData;
use crate::engine::error::{BoardError, SessionError};
use crate::engine::models::{Cheat, GameStatus, JumpRecord};
use crate::games::peg_solitaire::{Board, BoardLayout, CellKind, Hole, HoleId, JumpMove, PegId};

/// Board data is only built after the peg asset reports in.
#[derive(Debug, Default)]
pub(crate) struct LoadGate {
    peg_loaded: bool,
    layout: Option<BoardLayout>,
}

impl LoadGate {
    pub(crate) fn peg_signal(&mut self, result: Result<(), String>) -> Result<(), SessionError> {
        match result {
            Ok(()) => {
                self.peg_loaded = true;
                Ok(())
            }
            Err(reason) => {
                tracing::warn!(%reason, "peg asset failed to load");
                Err(SessionError::AssetLoad(reason))
            }
        }
    }

    pub(crate) fn check(&self) -> Result<(), SessionError> {
        if self.layout.is_some() {
            return Err(SessionError::AlreadyLoaded);
        }
        if !self.peg_loaded {
            return Err(SessionError::PegDataMissing);
        }
        Ok(())
    }

    pub(crate) fn build(&mut self, board: &Board) -> Result<&BoardLayout, SessionError> {
        self.check()?;
        let layout = self.layout.insert(BoardLayout::from_board(board));
        tracing::info!(
            holes = layout.spots.len(),
            points = layout.points.len(),
            "board data loaded"
        );
        Ok(layout)
    }

    pub(crate) fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }
}

pub struct SinglePlayerGame {
    data: GameData,
    status: GameStatus,
    board: Board,
    gate: LoadGate,
    pegs_total: Option<usize>,
    pegs_removed: usize,
    history: Vec<JumpRecord>,
}

impl SinglePlayerGame {
    pub fn new(data: GameData) -> Result<Self, BoardError> {
        let board = data.board.build()?;
        Ok(Self {
            data,
            status: GameStatus::Loading,
            board,
            gate: LoadGate::default(),
            pegs_total: None,
            pegs_removed: 0,
            history: Vec::new(),
        })
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[JumpRecord] {
        &self.history
    }

    /// Report the outcome of loading the peg asset named in `data().peg`.
    pub fn on_peg_loaded(&mut self, result: Result<(), String>) -> Result<(), SessionError> {
        self.gate.peg_signal(result)
    }

    /// Build the render snapshot. Needs the peg asset; runs once. A board
    /// with no legal jump at all ends the game right here.
    pub fn load_board_data(&mut self) -> Result<&BoardLayout, SessionError> {
        self.gate.check()?;
        self.pegs_total = Some(self.board.shape().count(CellKind::Occupied));
        self.status = GameStatus::Ready;
        self.settle(false);
        self.gate.build(&self.board)
    }

    pub fn board_layout(&self) -> Option<&BoardLayout> {
        self.gate.layout()
    }

    pub fn pegs_total(&self) -> Option<usize> {
        self.pegs_total
    }

    pub fn pegs_removed(&self) -> usize {
        self.pegs_removed
    }

    /// `None` until board data has loaded.
    pub fn pegs_remaining(&self) -> Option<usize> {
        self.pegs_total
            .map(|total| total.saturating_sub(self.pegs_removed))
    }

    pub fn holes_ready(&self) -> Vec<&Hole> {
        self.board.ready_holes()
    }

    pub fn legal_jumps(&self) -> Vec<JumpMove> {
        self.board.legal_jumps()
    }

    pub fn find_hole_by_id(&self, id: HoleId) -> Option<&Hole> {
        self.board.find_hole_by_id(id)
    }

    pub fn find_hole_of_peg(&self, peg: PegId) -> Option<&Hole> {
        self.board.find_hole_of_peg(peg)
    }

    /// Attempt a jump. Missing holes, an illegal move, or a game that is
    /// not live give `None`.
    pub fn try_jump(&mut self, from: Option<HoleId>, to: Option<HoleId>) -> Option<PegId> {
        let (from, to) = (from?, to?);
        if !self.status.is_live() {
            tracing::debug!(status = ?self.status, "jump refused");
            return None;
        }
        let removed = self.board.jump_from_to(from, to)?;
        self.pegs_removed += 1;
        self.history.push(JumpRecord { from, to, removed });
        self.settle(true);
        Some(removed)
    }

    /// Debug escape hatch: bypasses the jump rules entirely.
    pub fn cheat(&mut self, cheat: Cheat) -> Option<PegId> {
        if !self.status.is_live() {
            return None;
        }
        match cheat {
            Cheat::Remove { hole } => {
                let removed = self.board.jump(Some(hole), None);
                tracing::warn!(%hole, removed = ?removed, "cheat: remove");
                if removed.is_some() {
                    self.pegs_removed += 1;
                    self.settle(false);
                }
                removed
            }
        }
    }

    fn settle(&mut self, moved: bool) {
        if !self.status.is_live() {
            return;
        }
        if moved {
            self.status = GameStatus::Playing;
        }
        if self.board.ready_holes().is_empty() {
            self.status = if self.board.peg_count() == 1 {
                GameStatus::Win
            } else {
                GameStatus::Lose
            };
            tracing::info!(status = ?self.status, pegs = self.board.peg_count(), "game over");
        }
    }
}
