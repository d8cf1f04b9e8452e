//! Domain types for peg solitaire: coordinates, cell codes, identifiers.

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Number of directional neighbor slots every hole carries.
pub const NUM_SIDES: usize = 4;

/// Neighbor slot order: left, up, right, down. Opposite slots are two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; NUM_SIDES] =
        [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    /// Grid offset of the neighbor in this direction. Up is +y.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Identifier of a hole: its row-major index in the full grid (`x + y * width`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoleId(pub usize);

/// Identifier of a peg: the id of the hole it was created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PegId(pub usize);

impl std::fmt::Display for HoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A peg. Not `Clone`: moving a peg between holes moves the value, so a peg
/// can only ever sit in one hole.
#[derive(Debug, PartialEq, Eq)]
pub struct Peg {
    id: PegId,
}

impl Peg {
    pub(crate) fn new(id: PegId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> PegId {
        self.id
    }
}

/// Cell code of a shape mask. The numeric values are the persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Absent = 0,
    Occupied = 1,
    Empty = 2,
}

impl CellKind {
    pub fn is_present(self) -> bool {
        self != CellKind::Absent
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CellKind {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellKind::Absent),
            1 => Ok(CellKind::Occupied),
            2 => Ok(CellKind::Empty),
            other => Err(other),
        }
    }
}

/// Integer board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn copy_from(&mut self, other: &Position) {
        self.set(other.x, other.y);
    }

    /// Index of the first equal position in `base`.
    pub fn find_in(&self, base: &[Position]) -> Option<usize> {
        base.iter().position(|p| p == self)
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Inside the board bounds and not an absent cell of its shape.
    pub fn is_valid(&self, board: &Board) -> bool {
        board.shape().is_present(*self)
    }

    /// The 4 corners of the unit cell centered here, minus those already in `base`.
    pub fn centered_points(&self, base: &[Point]) -> Vec<Point> {
        let (x, y) = (f64::from(self.x), f64::from(self.y));
        [
            Point::new(x - 0.5, y - 0.5),
            Point::new(x - 0.5, y + 0.5),
            Point::new(x + 0.5, y + 0.5),
            Point::new(x + 0.5, y - 0.5),
        ]
        .into_iter()
        .filter(|corner| corner.find_in(base).is_none())
        .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fractional point handed to geometry consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn find_in(&self, base: &[Point]) -> Option<usize> {
        base.iter().position(|p| p == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_set_and_copy() {
        let mut a = Position::new(1, 2);
        a.set(3, 4);
        assert_eq!(a, Position::new(3, 4));

        let mut b = Position::default();
        b.copy_from(&a);
        assert_eq!(b, a);
    }

    #[test]
    fn test_position_find_in() {
        let list = [Position::new(0, 0), Position::new(2, 1), Position::new(2, 1)];
        assert_eq!(Position::new(2, 1).find_in(&list), Some(1));
        assert_eq!(Position::new(5, 5).find_in(&list), None);
        assert_eq!(Position::new(0, 0).find_in(&[]), None);
    }

    #[test]
    fn test_centered_points_fresh() {
        let points = Position::new(2, 3).centered_points(&[]);
        assert_eq!(
            points,
            vec![
                Point::new(1.5, 2.5),
                Point::new(1.5, 3.5),
                Point::new(2.5, 3.5),
                Point::new(2.5, 2.5),
            ]
        );
    }

    #[test]
    fn test_centered_points_skips_existing() {
        let base = Position::new(0, 0).centered_points(&[]);
        let extra = Position::new(1, 0).centered_points(&base);
        assert_eq!(extra, vec![Point::new(1.5, 0.5), Point::new(1.5, -0.5)]);
    }

    #[test]
    fn test_cell_kind_codes() {
        assert_eq!(CellKind::try_from(0), Ok(CellKind::Absent));
        assert_eq!(CellKind::try_from(1), Ok(CellKind::Occupied));
        assert_eq!(CellKind::try_from(2), Ok(CellKind::Empty));
        assert_eq!(CellKind::try_from(7), Err(7));
        assert_eq!(CellKind::Empty.code(), 2);
        assert!(!CellKind::Absent.is_present());
    }

    #[test]
    fn test_direction_opposites() {
        for dir in Direction::ALL {
            let opposite = Direction::ALL[(dir.index() + 2) % NUM_SIDES];
            let (dx, dy) = dir.offset();
            assert_eq!(opposite.offset(), (-dx, -dy));
        }
    }
}
