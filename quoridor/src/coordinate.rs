use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::ASCII_LETTER_A;

/// A tile position. Row 0 is the edge player 0 starts on.
///
/// The text form is the column letter followed by the one based row, so `(0, 4)` is `e1`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }

    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The coordinate shifted by the offsets, or `None` if it would go below zero. Upper bounds are
    /// the board's concern.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let col_letter = (ASCII_LETTER_A + self.col as u8) as char;
        write!(f, "{}{}", col_letter, self.row + 1)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-z])([1-9][0-9]*)$").unwrap());

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = COORDINATE_RE
            .captures(s)
            .ok_or_else(|| anyhow!("Invalid coordinate '{}', expected a column letter followed by a row number", s))?;

        let col = (captures[1].as_bytes()[0] - ASCII_LETTER_A) as usize;
        let row = captures[2].parse::<usize>()? - 1;

        Ok(Coordinate::new(row, col))
    }
}
