use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{Board, Mark, BOARD_CELLS};

/// Picks the cell for `mark` to play on `board`.
///
/// One ply of lookahead, in strict priority order:
///
/// 1. a cell that wins for `mark` right now,
/// 2. a cell the opponent would win on if left free, to block it,
/// 3. a uniformly random free cell.
///
/// Every probe is a real placement: if playing a cell would evict the
/// probing side's oldest piece, the win check runs on the post-eviction
/// board, so the selector never chases a line that its own eviction breaks.
/// The board is returned to the caller exactly as it was found.
///
/// Eviction keeps the board from ever filling up, so there is always a
/// free cell to fall back on.
pub fn choose_move(board: &mut Board, mark: Mark, rng: &mut StdRng) -> u8 {
    if let Some(cell) = completing_cell(board, mark) {
        return cell;
    }
    if let Some(cell) = completing_cell(board, mark.opponent()) {
        return cell;
    }
    let open: Vec<u8> = board.empty_cells().collect();
    *open.choose(rng).unwrap() // Can't fail, eviction always leaves a free cell
}

/// The lowest free cell that would complete a line for `mark`, eviction
/// included, if there is one.
fn completing_cell(board: &mut Board, mark: Mark) -> Option<u8> {
    for cell in 0..BOARD_CELLS as u8 {
        if !board.is_legal(cell) {
            continue;
        }
        let placement = board.place(cell, mark).unwrap(); // Can't fail, the cell was just checked to be free
        let wins = board.winner() == Some(mark);
        board.undo(placement);
        if wins {
            return Some(cell);
        }
    }
    None
}
