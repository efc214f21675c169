use crate::{Mark, BOARD_CELLS};

/// Renders the grid with `X`/`O` for occupied cells and the 1-based cell
/// label for free ones, so the label a player types is visible on the
/// board itself.
pub fn visualize_board(cells: &[Option<Mark>; BOARD_CELLS]) -> String {
    let mut result = String::new();
    for row in 0..3 {
        if row > 0 {
            result += "\n---+---+---\n";
        }
        for col in 0..3 {
            if col > 0 {
                result += "|";
            }
            let idx = row * 3 + col;
            let symbol = match cells[idx] {
                Some(mark) => mark.as_char(),
                None => char::from(b'1' + idx as u8),
            };
            result += &format!(" {} ", symbol);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn free_cells_show_their_labels() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        let expected = [
            " X | 2 | 3 ",
            "---+---+---",
            " 4 | O | 6 ",
            "---+---+---",
            " 7 | 8 | 9 ",
        ]
        .join("\n");
        assert_eq!(visualize_board(board.cells()), expected);
    }
}
