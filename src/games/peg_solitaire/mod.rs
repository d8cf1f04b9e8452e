//! Peg solitaire rules core: holes on an irregular grid, jump legality and
//! execution, and the geometry snapshot handed to renderers.

pub mod board;
pub mod hole;
pub mod layout;
pub mod shape;
pub mod types;

pub use board::{Board, JumpMove};
pub use hole::{Hole, JumpArc};
pub use layout::{BoardLayout, HoleSpot};
pub use shape::ShapeMask;
pub use types::{CellKind, Direction, HoleId, Peg, PegId, Point, Position};
