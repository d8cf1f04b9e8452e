//! Versus game: the player and the computer each work their own copy of the
//! same board, taking turns. The computer's move choice lives elsewhere; this
//! type only exposes what jumps exist and applies the ones it is given.

use crate::engine::config::GameData;
use crate::engine::error::{BoardError, SessionError};
use crate::engine::models::{GameStatus, JumpRecord, Side};
use crate::engine::session::LoadGate;
use crate::games::peg_solitaire::{Board, BoardLayout, CellKind, Hole, HoleId, JumpMove, PegId};

pub struct VersusGame {
    data: GameData,
    status: GameStatus,
    boards: [Board; 2],
    gate: LoadGate,
    pegs_total: Option<usize>,
    pegs_removed: [usize; 2],
    turn: Side,
    history: Vec<(Side, JumpRecord)>,
}

impl VersusGame {
    pub fn new(data: GameData) -> Result<Self, BoardError> {
        let boards = [data.board.build()?, data.board.build()?];
        Ok(Self {
            data,
            status: GameStatus::Loading,
            boards,
            gate: LoadGate::default(),
            pegs_total: None,
            pegs_removed: [0, 0],
            turn: Side::Player,
            history: Vec::new(),
        })
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn history(&self) -> &[(Side, JumpRecord)] {
        &self.history
    }

    pub fn on_peg_loaded(&mut self, result: Result<(), String>) -> Result<(), SessionError> {
        self.gate.peg_signal(result)
    }

    /// Both boards share one shape, so the player's board provides the layout.
    pub fn load_board_data(&mut self) -> Result<&BoardLayout, SessionError> {
        self.gate.check()?;
        self.pegs_total = Some(self.boards[0].shape().count(CellKind::Occupied));
        self.status = GameStatus::Ready;
        self.hand_turn_to(Side::Player);
        self.gate.build(&self.boards[Side::Player.index()])
    }

    pub fn board_layout(&self) -> Option<&BoardLayout> {
        self.gate.layout()
    }

    pub fn pegs_total(&self) -> Option<usize> {
        self.pegs_total
    }

    pub fn pegs_removed(&self, side: Side) -> usize {
        self.pegs_removed[side.index()]
    }

    pub fn pegs_remaining(&self, side: Side) -> Option<usize> {
        self.pegs_total
            .map(|total| total.saturating_sub(self.pegs_removed[side.index()]))
    }

    pub fn holes_ready(&self, side: Side) -> Vec<&Hole> {
        self.board(side).ready_holes()
    }

    pub fn legal_jumps(&self, side: Side) -> Vec<JumpMove> {
        self.board(side).legal_jumps()
    }

    pub fn find_hole_by_id(&self, id: HoleId, side: Side) -> Option<&Hole> {
        self.board(side).find_hole_by_id(id)
    }

    pub fn find_hole_of_peg(&self, peg: PegId, side: Side) -> Option<&Hole> {
        self.board(side).find_hole_of_peg(peg)
    }

    /// Attempt a jump on `side`'s board. Off-turn requests and requests while
    /// the game is not live are refused like illegal moves.
    pub fn try_jump(&mut self, from: Option<HoleId>, to: Option<HoleId>, side: Side) -> Option<PegId> {
        let (from, to) = (from?, to?);
        if !self.status.is_live() {
            tracing::debug!(status = ?self.status, "jump refused");
            return None;
        }
        if side != self.turn {
            tracing::debug!(?side, turn = ?self.turn, "jump requested out of turn");
            return None;
        }
        let removed = self.boards[side.index()].jump_from_to(from, to)?;
        self.pegs_removed[side.index()] += 1;
        self.history.push((side, JumpRecord { from, to, removed }));
        self.advance_turn();
        Some(removed)
    }

    fn advance_turn(&mut self) {
        if self.status == GameStatus::Ready {
            self.status = GameStatus::Playing;
        }
        self.hand_turn_to(self.turn.other());
    }

    /// Give the turn to `preferred`, or to the other side if `preferred` cannot
    /// move. Ends the game when neither can.
    fn hand_turn_to(&mut self, preferred: Side) {
        let can_move = |side: Side| !self.boards[side.index()].ready_holes().is_empty();
        if can_move(preferred) {
            self.turn = preferred;
        } else if can_move(preferred.other()) {
            self.turn = preferred.other();
        } else if self.status.is_live() {
            let player = self.pegs_on_board(Side::Player);
            let computer = self.pegs_on_board(Side::Computer);
            self.status = if player < computer {
                GameStatus::Win
            } else {
                GameStatus::Lose
            };
            tracing::info!(status = ?self.status, player, computer, "game over");
        }
    }

    fn pegs_on_board(&self, side: Side) -> usize {
        self.boards[side.index()].peg_count()
    }
}
