//! Render-facing snapshot of a board: point cloud for the hull plus one
//! placement record per hole. Built once, when the session finishes loading.

use serde::Serialize;

use super::board::Board;
use super::types::{HoleId, PegId, Point, Position};

/// Placement of one hole, centered on the board's middle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoleSpot {
    pub position: Point,
    pub grid: Position,
    pub peg: Option<PegId>,
    pub hole: HoleId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLayout {
    pub width: usize,
    pub height: usize,
    pub points: Vec<Point>,
    pub spots: Vec<HoleSpot>,
}

impl BoardLayout {
    pub fn from_board(board: &Board) -> Self {
        let half_w = board.width() as f64 / 2.0;
        let half_h = board.height() as f64 / 2.0;

        let spots = board
            .valid_holes()
            .into_iter()
            .map(|hole| {
                let grid = hole.position();
                HoleSpot {
                    position: Point::new(
                        f64::from(grid.x) - half_w + 0.5,
                        f64::from(grid.y) - half_h + 0.5,
                    ),
                    grid,
                    peg: hole.occupant_id(),
                    hole: hole.id(),
                }
            })
            .collect();

        Self {
            width: board.width(),
            height: board.height(),
            points: board.point_cloud(),
            spots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::peg_solitaire::shape::ShapeMask;

    #[test]
    fn test_spots_follow_valid_holes() {
        let board = Board::new(ShapeMask::from_text(3, 1, &["102"]).unwrap());
        let layout = BoardLayout::from_board(&board);

        assert_eq!(layout.spots.len(), 2);
        assert_eq!(layout.spots[0].hole, HoleId(0));
        assert_eq!(layout.spots[0].peg, Some(PegId(0)));
        assert_eq!(layout.spots[0].position, Point::new(-1.0, 0.0));
        assert_eq!(layout.spots[1].hole, HoleId(2));
        assert_eq!(layout.spots[1].peg, None);
        assert_eq!(layout.spots[1].position, Point::new(1.0, 0.0));
        assert_eq!(layout.points.len(), 8);
    }

    #[test]
    fn test_layout_serializes() {
        let board = Board::new(ShapeMask::from_text(1, 1, &["1"]).unwrap());
        let json = serde_json::to_value(BoardLayout::from_board(&board)).unwrap();
        assert_eq!(json["spots"][0]["hole"], 0);
        assert_eq!(json["spots"][0]["peg"], 0);
        assert_eq!(json["points"].as_array().map(Vec::len), Some(4));
    }
}
