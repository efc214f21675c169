use std::io::BufRead;

use anyhow::bail;
use tritactic::{Board, Mark};

/// Reads one line from stdin and trims it. 0 bytes read means EOF, which
/// is surfaced as an error instead of looping on an empty prompt forever.
pub fn read_line() -> anyhow::Result<String> {
    let mut buf = String::new();
    let num_bytes_read = std::io::stdin().lock().read_line(&mut buf)?;
    if num_bytes_read == 0 {
        bail!("Standard input was closed");
    }
    Ok(buf.trim().to_string())
}

/// Reads the side the player wants, re-prompting until the answer parses.
pub fn read_mark() -> anyhow::Result<Mark> {
    loop {
        if let Ok(mark) = read_line()?.parse::<Mark>() {
            return Ok(mark);
        }
        println!("Invalid choice. Please enter X or O:");
    }
}

/// Reads a 1-based position from 1 to 9 and converts it to a cell index,
/// re-prompting until the cell is free.
pub fn read_cell(board: &Board) -> anyhow::Result<u8> {
    loop {
        if let Ok(position) = read_line()?.parse::<u8>() {
            if (1..=9).contains(&position) {
                let cell = position - 1;
                if board.is_legal(cell) {
                    return Ok(cell);
                }
            }
        }
        println!("Invalid input. Spot is taken or out of range, try again:");
    }
}

/// Waits for the player to press Enter. The line's content is ignored.
pub fn read_enter() -> anyhow::Result<()> {
    read_line()?;
    Ok(())
}

/// Reads a y/n answer, re-prompting until one of the two is given.
pub fn read_yes_no() -> anyhow::Result<bool> {
    loop {
        match read_line()?.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Invalid input. Please enter 'y' or 'n':"),
        }
    }
}
