use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use once_cell::sync::Lazy;
use regex::Regex;

use super::coordinate::Coordinate;
use super::wall::Orientation;

static ACTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-z][1-9][0-9]*)([hv]?)$").unwrap());

#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    MovePawn(Coordinate),
    PlaceHorizontalWall(Coordinate),
    PlaceVerticalWall(Coordinate),
}

impl Action {
    pub fn place_wall(anchor: Coordinate, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Action::PlaceHorizontalWall(anchor),
            Orientation::Vertical => Action::PlaceVerticalWall(anchor),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            Action::MovePawn(coordinate)
            | Action::PlaceHorizontalWall(coordinate)
            | Action::PlaceVerticalWall(coordinate) => *coordinate,
        }
    }

    /// The wall orientation, or `None` for a pawn move.
    pub fn wall_orientation(&self) -> Option<Orientation> {
        match self {
            Action::MovePawn(_) => None,
            Action::PlaceHorizontalWall(_) => Some(Orientation::Horizontal),
            Action::PlaceVerticalWall(_) => Some(Orientation::Vertical),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (coordinate, action_type) = match self {
            Action::MovePawn(coordinate) => (coordinate, ""),
            Action::PlaceHorizontalWall(coordinate) => (coordinate, "h"),
            Action::PlaceVerticalWall(coordinate) => (coordinate, "v"),
        };

        write!(f, "{}{}", coordinate, action_type)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = ACTION_RE
            .captures(s.trim())
            .ok_or_else(|| anyhow!("Invalid action '{}'", s))?;

        let coordinate = captures[1].parse::<Coordinate>()?;

        match &captures[2] {
            "h" => Ok(Action::PlaceHorizontalWall(coordinate)),
            "v" => Ok(Action::PlaceVerticalWall(coordinate)),
            _ => Ok(Action::MovePawn(coordinate)),
        }
    }
}

/// Parses a whitespace or comma separated line of actions such as `e2 e8 d4h`.
pub fn parse_actions(line: &str) -> anyhow::Result<Vec<Action>> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<Action>())
        .collect()
}
