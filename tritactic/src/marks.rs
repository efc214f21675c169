use std::str::FromStr;

/// The symbol of one of the two sides.
///
/// X always moves first; a cell on the [board](crate::Board) holds an
/// `Option<Mark>`, with `None` meaning the cell is free.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other side's mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Render this mark as its board glyph.
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The error type for the [`FromStr`] instance of [`Mark`].
#[derive(Clone, Copy, Debug)]
pub enum MarkFromStrErr {
    Empty,
    UnknownSymbol,
}

impl FromStr for Mark {
    type Err = MarkFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(MarkFromStrErr::Empty),
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            _ => Err(MarkFromStrErr::UnknownSymbol),
        }
    }
}
