//! A single hole: position, 4 directional neighbor slots, optional peg.
//!
//! Neighbor slots hold `HoleId`s into the owning `Board`, never the holes
//! themselves. Anything that needs to look through a neighbor takes the board.

use serde::Serialize;

use super::board::Board;
use super::types::{HoleId, Peg, PegId, Position, NUM_SIDES};

/// Neighbor slots in `Direction` order.
pub type Arcs = [Option<HoleId>; NUM_SIDES];

/// A neighbor and the hole directly beyond it in the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JumpArc {
    pub jumped: HoleId,
    pub landing: HoleId,
}

#[derive(Debug)]
pub struct Hole {
    id: HoleId,
    position: Position,
    arcs: Arcs,
    occupant: Option<Peg>,
}

impl Hole {
    pub fn new(x: i32, y: i32, id: HoleId) -> Self {
        Self {
            id,
            position: Position::new(x, y),
            arcs: [None; NUM_SIDES],
            occupant: None,
        }
    }

    pub fn id(&self) -> HoleId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn arcs(&self) -> &Arcs {
        &self.arcs
    }

    pub fn has_occupant(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant_id(&self) -> Option<PegId> {
        self.occupant.as_ref().map(Peg::id)
    }

    /// Replace the occupant wholesale, returning whatever was there.
    pub(crate) fn set_occupant(&mut self, peg: Option<Peg>) -> Option<Peg> {
        std::mem::replace(&mut self.occupant, peg)
    }

    pub(crate) fn take_occupant(&mut self) -> Option<Peg> {
        self.occupant.take()
    }

    pub(crate) fn set_arcs(&mut self, arcs: Arcs) {
        self.arcs = arcs;
    }

    /// Which slot points at `target`.
    pub fn side_index_of(&self, target: HoleId) -> Option<usize> {
        self.arcs.iter().position(|arc| *arc == Some(target))
    }

    /// The hole on the far side of this one, seen from neighbor `origin`.
    pub fn across_from(&self, origin: HoleId) -> Option<HoleId> {
        let side = self.side_index_of(origin)?;
        self.arcs[(side + 2) % NUM_SIDES]
    }

    /// Every (neighbor, beyond-neighbor) pair reachable from here, ignoring pegs.
    pub fn jumpable_moves(&self, board: &Board) -> Vec<JumpArc> {
        self.arcs
            .iter()
            .flatten()
            .filter_map(|&jumped| {
                let landing = board.hole(jumped)?.across_from(self.id)?;
                Some(JumpArc { jumped, landing })
            })
            .collect()
    }

    /// Jumps that are legal right now: occupied neighbor, empty landing.
    pub fn possible_jumps(&self, board: &Board) -> Vec<JumpArc> {
        self.jumpable_moves(board)
            .into_iter()
            .filter(|arc| {
                let jumped_full = board.hole(arc.jumped).is_some_and(Hole::has_occupant);
                let landing_free = board.hole(arc.landing).is_some_and(|h| !h.has_occupant());
                jumped_full && landing_free
            })
            .collect()
    }

    fn populated(&self) -> usize {
        self.arcs.iter().filter(|arc| arc.is_some()).count()
    }

    pub fn is_surrounded(&self) -> bool {
        self.populated() == NUM_SIDES
    }

    pub fn is_edge(&self) -> bool {
        self.populated() == 3
    }

    /// Exactly one pair of cyclically adjacent slots is populated.
    pub fn is_corner(&self) -> bool {
        let pairs = (0..NUM_SIDES)
            .filter(|&i| self.arcs[i].is_some() && self.arcs[(i + 1) % NUM_SIDES].is_some())
            .count();
        pairs == 1
    }

    /// A corner whose diagonal cell (seen through both sides) is missing.
    pub fn is_inner_corner(&self, board: &Board) -> bool {
        let mut hits = 0;
        for i in 0..NUM_SIDES {
            let next = (i + 1) % NUM_SIDES;
            let (Some(a), Some(b)) = (self.arcs[i], self.arcs[next]) else {
                continue;
            };
            let (Some(side1), Some(side2)) = (board.hole(a), board.hole(b)) else {
                continue;
            };
            if side1.arcs[next].is_none() && side2.arcs[i].is_none() {
                hits += 1;
            }
        }
        hits == 1
    }

    /// Exactly one axis has both of its slots empty.
    pub fn is_bridge(&self) -> bool {
        let open_axes = (0..NUM_SIDES / 2)
            .filter(|&i| self.arcs[i].is_none() && self.arcs[i + 2].is_none())
            .count();
        open_axes == 1
    }

    pub fn is_nub(&self) -> bool {
        self.populated() == 1
    }
}
