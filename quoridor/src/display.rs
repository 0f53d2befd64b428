use std::fmt::{self, Display, Formatter};

use crate::{Coordinate, GameState, Orientation, PathMap, ASCII_LETTER_A};

fn write_border(f: &mut Formatter<'_>, size: usize) -> fmt::Result {
    write!(f, "   +")?;
    for _ in 0..size {
        write!(f, "---+")?;
    }

    writeln!(f)
}

fn write_column_letters(f: &mut Formatter<'_>, size: usize) -> fmt::Result {
    write!(f, "   ")?;
    for col in 0..size {
        write!(f, "  {} ", (ASCII_LETTER_A + col as u8) as char)?;
    }

    writeln!(f)
}

/// The board is drawn with the last row at the top, so player 0 advances up the screen.
impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.board();
        let size = board.size();

        writeln!(f)?;
        write_border(f, size)?;

        for row in (0..size).rev() {
            write!(f, "{:>2} |", row + 1)?;
            for col in 0..size {
                let coord = Coordinate::new(row, col);
                let pawn = match board.tile(coord).pawn() {
                    Some(player) => player.to_string(),
                    None => " ".to_string(),
                };
                let right = Coordinate::new(row, col + 1);
                let separator = if col < board.border() && !board.are_linked(coord, right) {
                    "█"
                } else {
                    "|"
                };
                write!(f, " {} {}", pawn, separator)?;
            }

            writeln!(f)?;

            if row == 0 {
                break;
            }

            // The gap between this row and the one below it, where walls anchored on the row below sit.
            write!(f, "   +")?;
            for col in 0..size {
                let below = Coordinate::new(row - 1, col);
                let segment = if board.are_linked(below, Coordinate::new(row, col)) {
                    "---"
                } else {
                    "■■■"
                };
                let junction = match (col < board.border()).then(|| board.wall_at(below)).flatten() {
                    Some(Orientation::Horizontal) => "■",
                    Some(Orientation::Vertical) => "█",
                    None => "+",
                };
                write!(f, "{}{}", segment, junction)?;
            }

            writeln!(f)?;
        }

        write_border(f, size)?;
        write_column_letters(f, size)?;
        writeln!(f)?;
        writeln!(
            f,
            "  P0 walls: {}  P1 walls: {}  Move: {}  To move: P{}",
            self.walls_remaining(0),
            self.walls_remaining(1),
            self.move_number(),
            self.player_to_move()
        )?;

        Ok(())
    }
}

/// Each tile shows its distance to the goal row and an arrow toward the next tile on the path.
/// Unreachable tiles show `x`.
impl Display for PathMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        writeln!(f, "Paths for P{} to row {}", self.player(), self.goal_row() + 1)?;

        for row in (0..size).rev() {
            write!(f, "{:>2} |", row + 1)?;
            for col in 0..size {
                let coord = Coordinate::new(row, col);
                match self.distance(coord) {
                    Some(distance) => {
                        let arrow = match self.predecessor(coord) {
                            Some(next) if next.row() > row => '^',
                            Some(next) if next.row() < row => 'v',
                            Some(next) if next.col() < col => '<',
                            Some(_) => '>',
                            None => ' ',
                        };
                        write!(f, "{:>3}{}", distance, arrow)?;
                    }
                    None => write!(f, "  x ")?,
                }
            }

            writeln!(f)?;
        }

        write_column_letters(f, size)
    }
}
