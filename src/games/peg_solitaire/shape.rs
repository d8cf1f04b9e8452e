//! Shape masks: the static grid of cell codes a board is built from.

use crate::engine::error::BoardError;

use super::types::{CellKind, Position};

/// Largest width or height accepted; keeps every coordinate inside `i32`.
pub const MAX_DIMENSION: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMask {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl ShapeMask {
    /// Build from `height` rows of `width` integer codes (0 absent, 1 peg, 2 empty).
    pub fn from_codes(width: usize, height: usize, rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyShape);
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BoardError::TooLarge { width, height });
        }
        if rows.len() != height {
            return Err(BoardError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::RowWidth {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let kind = CellKind::try_from(code)
                    .map_err(|code| BoardError::UnknownCell { x, y, code })?;
                cells.push(kind);
            }
        }

        Ok(Self { width, height, cells })
    }

    /// Build from digit strings such as `"0011100"`.
    pub fn from_text<S: AsRef<str>>(width: usize, height: usize, rows: &[S]) -> Result<Self, BoardError> {
        let codes = rows
            .iter()
            .enumerate()
            .map(|(y, row)| parse_row(y, row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_codes(width, height, &codes)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Unchecked; `x` and `y` must be inside the grid.
    pub(crate) fn cell(&self, x: usize, y: usize) -> CellKind {
        self.cells[x + y * self.width]
    }

    /// Cell at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| self.cell(x, y))
    }

    pub fn is_present(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(CellKind::is_present)
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Rows of integer codes, the persisted form.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

/// Parse one digit-string row into cell codes.
pub(crate) fn parse_row(y: usize, text: &str) -> Result<Vec<u8>, BoardError> {
    text.chars()
        .enumerate()
        .map(|(x, ch)| {
            ch.to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(BoardError::BadRowText { x, y, ch })
        })
        .collect()
}
