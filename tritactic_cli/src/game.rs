use std::io::stdout;
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use tracing::debug;
use tritactic::{choose_move, visualize_board, Board, Mark};

use crate::input::{read_cell, read_enter, read_mark};

/// Prints the greeting and the rules, once at startup.
pub fn show_welcome() {
    println!("Welcome to Tri-Tactic!");
    println!("An infinite and tactical version of Tic-Tac-Toe with only 3 pieces at a time.\n");
    println!("\t3 Pieces, 3 Rules:");
    println!("1) X always goes first.");
    println!("2) Each player can have only 3 pieces on the board at once.");
    println!("   - If you place a 4th piece, your oldest piece will be removed.");
    println!("3) The board never fills up, so the game continues until someone lines up 3 in a row!\n");
}

/// Plays one game on `board`, prompting on stdin/stdout until one side
/// completes a line. `delay` paces the computer's moves so they don't
/// appear instantly. Returns the winning side.
///
/// Returns an error only when the terminal or stdin fails, not for bad
/// input, which is re-prompted instead.
pub fn play_game(board: &mut Board, rng: &mut StdRng, delay: Duration) -> anyhow::Result<Mark> {
    board.reset();

    println!("Do you want to play as X or O? (Enter X or O):");
    let human = read_mark()?;
    let computer = human.opponent();
    println!("You are {}. The computer is {}.", human, computer);
    println!("Press Enter to start the game.");
    read_enter()?;

    print_board(board)?;

    // X always starts.
    let mut current = Mark::X;
    loop {
        let cell = if current == human {
            println!("Your turn! Choose a position (1-9):");
            read_cell(board)?
        } else {
            println!("Computer's turn...");
            thread::sleep(delay);
            choose_move(board, current, rng)
        };

        // Both input paths only ever produce free cells.
        let placement = board.place(cell, current)?;
        debug!(mark = %current, cell, evicted = ?placement.evicted);

        print_board(board)?;

        if let Some(winner) = board.winner() {
            println!("{} wins!", winner);
            return Ok(winner);
        }
        current = current.opponent();
    }
}

/// Clears the terminal and redraws the board in the top left corner.
fn print_board(board: &Board) -> anyhow::Result<()> {
    stdout()
        .execute(Clear(ClearType::All))?
        .execute(MoveTo(0, 0))?;
    println!("{}", visualize_board(board.cells()));
    Ok(())
}
