use crate::{IllegalPlacement, Mark};

/// Number of cells on the grid.
pub const BOARD_CELLS: usize = 9;

/// Maximum number of pieces one side may keep on the board at once.
pub const PIECE_LIMIT: usize = 3;

/// The eight cell triples that win the game, in the order [`Board::winner()`]
/// scans them: rows, then columns, then the two diagonals.
pub static WIN_LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3×3 board under three-piece rules.
///
/// Cells are indexed 0..=8 in row-major order. Besides the cell contents,
/// the board keeps each side's surviving placements oldest-first; that
/// order is what the eviction rule consumes. The two lists and the cell
/// array describe the same state: a cell is occupied by a side exactly when
/// it appears in that side's list.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; BOARD_CELLS],
    /// Surviving placements per side, oldest first, indexed by `Mark as usize`.
    placed: [Vec<u8>; 2],
}

/// The record of one successful placement.
///
/// Returned by [`Board::place()`] so the caller can see the eviction the
/// placement forced, and handed back to [`Board::undo()`] to reverse the
/// whole step. The evicted piece always belonged to the placing side, so
/// its cell index alone is enough to restore it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub cell: u8,
    pub mark: Mark,
    /// The cell freed by evicting the side's oldest piece, if the side was
    /// already at [`PIECE_LIMIT`].
    pub evicted: Option<u8>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            placed: [Vec::new(), Vec::new()],
        }
    }

    /// Clears all cells and both placement histories, ready for a new game.
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_CELLS];
        for history in &mut self.placed {
            history.clear();
        }
    }

    /// Whether `cell` is on the grid and currently free. Pure query.
    pub fn is_legal(&self, cell: u8) -> bool {
        (cell as usize) < BOARD_CELLS && self.cells[cell as usize].is_none()
    }

    /// The cell contents in row-major order — the per-turn snapshot handed
    /// to a presentation layer.
    pub fn cells(&self) -> &[Option<Mark>; BOARD_CELLS] {
        &self.cells
    }

    /// The side's surviving placements, oldest first.
    pub fn placements(&self, mark: Mark) -> &[u8] {
        &self.placed[mark as usize]
    }

    /// Iterates over the currently free cells in ascending order.
    ///
    /// Eviction keeps this nonempty: even with both sides at
    /// [`PIECE_LIMIT`], three cells remain free.
    pub fn empty_cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| idx as u8)
    }

    /// Places `mark` on `cell`.
    ///
    /// This is the core mutation of this type and the only multi-cell one:
    /// if the side already holds [`PIECE_LIMIT`] pieces, its oldest piece
    /// is evicted first, freeing that cell. Exactly one cell goes from
    /// empty to marked per successful call, and at most one from marked to
    /// empty.
    ///
    /// An illegal `cell` is rejected without touching the board, so a
    /// caller bug cannot desynchronize displayed and internal state.
    pub fn place(&mut self, cell: u8, mark: Mark) -> Result<Placement, IllegalPlacement> {
        if cell as usize >= BOARD_CELLS {
            return Err(IllegalPlacement::OutOfBounds { cell });
        }
        if let Some(by) = self.cells[cell as usize] {
            return Err(IllegalPlacement::Occupied { cell, by });
        }

        let history = &mut self.placed[mark as usize];
        let evicted = if history.len() == PIECE_LIMIT {
            let oldest = history.remove(0);
            self.cells[oldest as usize] = None;
            Some(oldest)
        } else {
            None
        };
        history.push(cell);
        self.cells[cell as usize] = Some(mark);

        Ok(Placement { cell, mark, evicted })
    }

    /// Reverses the placement recorded in `placement` — the side's most
    /// recent addition — restoring the evicted piece if there was one.
    ///
    /// Taking the receipt by value is what keeps probing honest: a probe is
    /// place, check, undo, strictly in that order, and a consumed receipt
    /// cannot be replayed.
    pub fn undo(&mut self, placement: Placement) {
        let Placement {
            cell,
            mark,
            evicted,
        } = placement;
        let newest = self.placed[mark as usize].pop();
        debug_assert_eq!(newest, Some(cell));
        self.cells[cell as usize] = None;
        if let Some(evicted) = evicted {
            self.placed[mark as usize].insert(0, evicted);
            self.cells[evicted as usize] = Some(mark);
        }
    }

    /// The side holding a completed line, if any.
    ///
    /// Scans [`WIN_LINES`] in their fixed order and returns the owner of
    /// the first uniformly-occupied line. Completed lines for both sides at
    /// once cannot arise under one-placement-at-a-time play, but if they
    /// did, the scan order decides.
    pub fn winner(&self) -> Option<Mark> {
        for &[a, b, c] in &WIN_LINES {
            if let Some(mark) = self.cells[a as usize] {
                if self.cells[b as usize] == Some(mark) && self.cells[c as usize] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
