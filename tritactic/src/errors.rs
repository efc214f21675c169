use crate::Mark;

/// The error type for [`Board::place()`](crate::Board::place), i.e. for a single placement.
///
/// A rejected placement leaves the board untouched. These are caller
/// contract violations: the driver validates input before calling `place`,
/// and the selector only proposes empty cells.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { cell: u8 },
    Occupied { cell: u8, by: Mark },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { cell } => {
                write!(f, "Cell index {} is outside the 3x3 grid", cell)
            }
            IllegalPlacement::Occupied { cell, by } => {
                write!(f, "Cell {} is already occupied by {}", cell, by)
            }
        }
    }
}
