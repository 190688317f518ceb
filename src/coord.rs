//! Conversion between cell indices and display coordinates such as `B4`.
//!
//! Rows are lettered from `A`, columns are numbered from `1`. A cell index is
//! `row * grid_size + col`.

use core::fmt;

use crate::common::CoordError;
use crate::config::{MAX_GRID_SIZE, ROW_LETTERS};

/// Row-major address of a grid square.
pub type CellIndex = usize;

/// Display metadata for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLabel {
    pub row_letter: char,
    /// 1-based column.
    pub column: usize,
    /// Cell sits in the first column, so a renderer shows the row letter.
    pub is_first_column: bool,
    /// Cell sits in the first row, so a renderer shows the column number.
    pub is_first_row: bool,
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter, self.column)
    }
}

/// Parse guess text like `A1` or `j10` into a cell index.
///
/// Surrounding whitespace is ignored and the row letter is case-insensitive.
/// Anything other than one letter followed by decimal digits is `Malformed`;
/// a well-formed coordinate that misses the grid (including column `0`) is
/// `OutOfRange`.
pub fn parse_coordinate(text: &str, grid_size: usize) -> Result<CellIndex, CoordError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoordError::Empty);
    }
    let mut chars = text.chars();
    let letter = chars.next().ok_or(CoordError::Empty)?;
    if !letter.is_ascii_alphabetic() {
        return Err(CoordError::Malformed);
    }
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::Malformed);
    }

    let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
    // All-digit text only fails to parse on overflow, which is off any grid.
    let column: usize = digits.parse().map_err(|_| CoordError::OutOfRange)?;
    if row >= grid_size || column == 0 || column > grid_size {
        return Err(CoordError::OutOfRange);
    }
    Ok(row * grid_size + column - 1)
}

/// Derive the row letter, column number and header flags for `index`.
pub fn format_label(index: CellIndex, grid_size: usize) -> Result<CellLabel, CoordError> {
    if grid_size == 0 || grid_size > MAX_GRID_SIZE || index >= grid_size * grid_size {
        return Err(CoordError::OutOfRange);
    }
    let row = index / grid_size;
    let col = index % grid_size;
    Ok(CellLabel {
        row_letter: ROW_LETTERS[row] as char,
        column: col + 1,
        is_first_column: col == 0,
        is_first_row: row == 0,
    })
}

/// Row and column of `index`.
pub fn row_col(index: CellIndex, grid_size: usize) -> (usize, usize) {
    (index / grid_size, index % grid_size)
}
