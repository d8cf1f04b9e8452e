//! Board logic: hole arena, adjacency, ready holes, jump execution.
//!
//! The board owns every hole and every peg. Holes refer to their neighbors by
//! `HoleId`, which is also the hole's index into the arena. Adjacency is fixed
//! at construction; only occupancy changes afterwards.

use std::fmt;

use serde::Serialize;

use super::hole::{Arcs, Hole};
use super::shape::ShapeMask;
use super::types::{CellKind, Direction, HoleId, Peg, PegId, Point, Position, NUM_SIDES};

/// A fully resolved legal jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JumpMove {
    pub from: HoleId,
    pub jumped: HoleId,
    pub to: HoleId,
}

#[derive(Debug)]
pub struct Board {
    shape: ShapeMask,
    /// Row-major over the whole grid; `None` for absent cells.
    holes: Vec<Option<Hole>>,
}

impl Board {
    pub fn new(shape: ShapeMask) -> Self {
        let (width, height) = (shape.width(), shape.height());

        let mut holes = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let hole = shape
                    .cell(x, y)
                    .is_present()
                    .then(|| Hole::new(x as i32, y as i32, HoleId(x + y * width)));
                holes.push(hole);
            }
        }

        let mut board = Self { shape, holes };

        for y in 0..height {
            for x in 0..width {
                let kind = board.shape.cell(x, y);
                if !kind.is_present() {
                    continue;
                }
                let arcs = board.find_neighbors(x as i32, y as i32);
                let idx = x + y * width;
                if let Some(hole) = board.holes[idx].as_mut() {
                    hole.set_arcs(arcs);
                    if kind == CellKind::Occupied {
                        hole.set_occupant(Some(Peg::new(PegId(idx))));
                    }
                }
            }
        }

        tracing::debug!(
            width,
            height,
            holes = board.valid_holes().len(),
            pegs = board.peg_count(),
            "built board"
        );
        board
    }

    pub fn width(&self) -> usize {
        self.shape.width()
    }

    pub fn height(&self) -> usize {
        self.shape.height()
    }

    pub fn shape(&self) -> &ShapeMask {
        &self.shape
    }

    pub fn hole(&self, id: HoleId) -> Option<&Hole> {
        self.holes.get(id.0).and_then(Option::as_ref)
    }

    fn hole_mut(&mut self, id: HoleId) -> Option<&mut Hole> {
        self.holes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn hole_at(&self, pos: Position) -> Option<&Hole> {
        if !self.shape.is_present(pos) {
            return None;
        }
        self.hole(HoleId(pos.x as usize + pos.y as usize * self.width()))
    }

    /// All present holes, row-major. Consumers rely on this order.
    pub fn valid_holes(&self) -> Vec<&Hole> {
        self.holes.iter().flatten().collect()
    }

    /// Holes holding a peg that has at least one legal jump.
    pub fn ready_holes(&self) -> Vec<&Hole> {
        self.holes
            .iter()
            .flatten()
            .filter(|h| h.has_occupant() && !h.possible_jumps(self).is_empty())
            .collect()
    }

    /// Every legal jump on the board, grouped by origin in row-major order.
    pub fn legal_jumps(&self) -> Vec<JumpMove> {
        self.holes
            .iter()
            .flatten()
            .filter(|h| h.has_occupant())
            .flat_map(|h| {
                h.possible_jumps(self).into_iter().map(move |arc| JumpMove {
                    from: h.id(),
                    jumped: arc.jumped,
                    to: arc.landing,
                })
            })
            .collect()
    }

    /// Deduplicated unit-cell corners of every valid hole, in accumulation order.
    pub fn point_cloud(&self) -> Vec<Point> {
        let mut out = Vec::new();
        for hole in self.holes.iter().flatten() {
            let fresh = hole.position().centered_points(&out);
            out.extend(fresh);
        }
        out
    }

    /// Neighbor slots (left, up, right, down) of the cell at `(x, y)`.
    pub fn find_neighbors(&self, x: i32, y: i32) -> Arcs {
        let origin = Position::new(x, y);
        let mut arcs = [None; NUM_SIDES];
        for direction in Direction::ALL {
            let side = origin.step(direction);
            if side.is_valid(self) {
                arcs[direction.index()] = Some(HoleId(side.x as usize + side.y as usize * self.width()));
            }
        }
        arcs
    }

    pub fn find_hole_by_id(&self, id: HoleId) -> Option<&Hole> {
        self.holes.iter().flatten().find(|h| h.id() == id)
    }

    pub fn find_hole_of_peg(&self, peg: PegId) -> Option<&Hole> {
        self.holes
            .iter()
            .flatten()
            .find(|h| h.occupant_id() == Some(peg))
    }

    pub fn peg_count(&self) -> usize {
        self.holes.iter().flatten().filter(|h| h.has_occupant()).count()
    }

    /// Occupant of every valid hole, in `valid_holes` order.
    pub fn occupancy(&self) -> Vec<Option<PegId>> {
        self.holes.iter().flatten().map(Hole::occupant_id).collect()
    }

    /// Unchecked move primitive.
    ///
    /// With `movement = Some((from, to))` the peg in `from` (or nothing) replaces
    /// the contents of `to`. The peg in `jumped`, if any, is removed and its id
    /// returned. No legality checks: callers own the rules.
    pub fn jump(&mut self, jumped: Option<HoleId>, movement: Option<(HoleId, HoleId)>) -> Option<PegId> {
        if let Some((from, to)) = movement {
            if self.hole(to).is_some() {
                let peg = self.hole_mut(from).and_then(Hole::take_occupant);
                if let Some(displaced) = self.hole_mut(to).and_then(|dest| dest.set_occupant(peg)) {
                    tracing::warn!(peg = %displaced.id(), hole = %to, "move overwrote an occupied hole");
                }
            }
        }

        jumped
            .and_then(|id| self.hole_mut(id))
            .and_then(Hole::take_occupant)
            .map(|peg| peg.id())
    }

    /// Rules-checked jump from `from` to `to`. Returns the removed peg's id, or
    /// `None` when no legal jump connects the two holes.
    pub fn jump_from_to(&mut self, from: HoleId, to: HoleId) -> Option<PegId> {
        let origin = self.hole(from)?;
        let dest = self.hole(to)?;
        if !origin.has_occupant() || dest.has_occupant() {
            return None;
        }

        let arc = origin
            .possible_jumps(self)
            .into_iter()
            .find(|arc| arc.landing == to)?;
        let doomed = self.hole(arc.jumped)?.occupant_id()?;

        self.jump(Some(arc.jumped), Some((from, to)));
        tracing::debug!(%from, jumped = %arc.jumped, %to, peg = %doomed, "jump");
        Some(doomed)
    }
}

/// ASCII rendering with +y at the top: `o` peg, `.` empty hole, blank absent.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            let row: String = (0..self.width())
                .map(|x| match &self.holes[x + y * self.width()] {
                    None => ' ',
                    Some(h) if h.has_occupant() => 'o',
                    Some(_) => '.',
                })
                .collect();
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}
