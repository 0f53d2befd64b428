use std::fmt;

use super::board::Board;
use super::coordinate::Coordinate;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A wall occupies the 2×2 junction whose top left tile is the anchor.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Wall {
    anchor: Coordinate,
    orientation: Orientation,
}

impl Wall {
    pub fn new(anchor: Coordinate, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The two parallel edges the wall cuts. A horizontal wall separates the anchor row from the row
    /// after it, a vertical wall separates the anchor column from the column after it.
    pub fn severed_edges(&self) -> [(Coordinate, Coordinate); 2] {
        let (row, col) = (self.anchor.row(), self.anchor.col());

        match self.orientation {
            Orientation::Horizontal => [
                (Coordinate::new(row, col), Coordinate::new(row + 1, col)),
                (Coordinate::new(row, col + 1), Coordinate::new(row + 1, col + 1)),
            ],
            Orientation::Vertical => [
                (Coordinate::new(row, col), Coordinate::new(row, col + 1)),
                (Coordinate::new(row + 1, col), Coordinate::new(row + 1, col + 1)),
            ],
        }
    }
}

impl fmt::Debug for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let suffix = match self.orientation {
            Orientation::Horizontal => "h",
            Orientation::Vertical => "v",
        };

        write!(f, "{}{}", self.anchor, suffix)
    }
}

impl Board {
    /// Whether a wall may be anchored at the tile. This only checks the wall against the board and
    /// other walls. Budgets and paths to the goal are the game's concern.
    pub fn can_set_wall(&self, row: usize, col: usize, orientation: Orientation) -> bool {
        let anchor = Coordinate::new(row, col);

        if !self.contains(anchor) || self.is_walled(anchor) {
            return false;
        }

        if row == self.border() || col == self.border() {
            return false;
        }

        let (along_before, along_after) = match orientation {
            Orientation::Horizontal => (anchor.offset(0, -1), anchor.offset(0, 1)),
            Orientation::Vertical => (anchor.offset(-1, 0), anchor.offset(1, 0)),
        };

        let overlaps = [along_before, along_after]
            .into_iter()
            .flatten()
            .any(|coord| self.wall_at(coord) == Some(orientation));

        !overlaps
    }

    /// Places the wall if `can_set_wall` allows it. Returns whether the board changed.
    pub fn set_wall(&mut self, row: usize, col: usize, orientation: Orientation) -> bool {
        if !self.can_set_wall(row, col, orientation) {
            return false;
        }

        let wall = Wall::new(Coordinate::new(row, col), orientation);
        for (a, b) in wall.severed_edges() {
            self.remove_link(a, b);
        }

        self.set_wall_marker(wall.anchor(), Some(orientation));

        true
    }

    /// Removes the wall anchored at the tile, restoring the two edges it cut. Returns whether a wall
    /// was removed.
    pub fn remove_wall(&mut self, row: usize, col: usize) -> bool {
        let anchor = Coordinate::new(row, col);
        let orientation = match self.get_tile(row, col).and_then(|tile| tile.wall()) {
            Some(orientation) => orientation,
            None => return false,
        };

        for (a, b) in Wall::new(anchor, orientation).severed_edges() {
            self.add_link(a, b);
        }

        self.set_wall_marker(anchor, None);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_wall_severs_two_edges() {
        let mut board = Board::new(9);
        let edges = board.edge_count();

        assert!(board.set_wall(0, 1, Orientation::Horizontal));

        assert_eq!(board.edge_count(), edges - 2);
        assert!(!board.are_linked(Coordinate::new(0, 1), Coordinate::new(1, 1)));
        assert!(!board.are_linked(Coordinate::new(0, 2), Coordinate::new(1, 2)));
        assert!(board.are_linked(Coordinate::new(0, 1), Coordinate::new(0, 2)));
        assert!(board.are_linked(Coordinate::new(0, 0), Coordinate::new(1, 0)));
        assert!(!board.can_set_wall(0, 1, Orientation::Horizontal));
    }

    #[test]
    fn test_vertical_wall_severs_two_edges() {
        let mut board = Board::new(9);
        let edges = board.edge_count();

        assert!(board.set_wall(3, 4, Orientation::Vertical));

        assert_eq!(board.edge_count(), edges - 2);
        assert!(!board.are_linked(Coordinate::new(3, 4), Coordinate::new(3, 5)));
        assert!(!board.are_linked(Coordinate::new(4, 4), Coordinate::new(4, 5)));
        assert!(board.are_linked(Coordinate::new(3, 4), Coordinate::new(4, 4)));
        assert_eq!(board.wall_at(Coordinate::new(3, 4)), Some(Orientation::Vertical));
    }

    #[test]
    fn test_border_anchors_rejected() {
        let board = Board::new(9);

        assert!(!board.can_set_wall(8, 0, Orientation::Horizontal));
        assert!(!board.can_set_wall(0, 8, Orientation::Vertical));
        assert!(!board.can_set_wall(8, 8, Orientation::Horizontal));
        assert!(board.can_set_wall(7, 7, Orientation::Vertical));
    }

    #[test]
    fn test_off_board_anchor_rejected() {
        let mut board = Board::new(5);

        assert!(!board.can_set_wall(5, 0, Orientation::Horizontal));
        assert!(!board.set_wall(0, 12, Orientation::Vertical));
    }

    #[test]
    fn test_crossing_wall_rejected() {
        let mut board = Board::new(9);

        assert!(board.set_wall(4, 4, Orientation::Horizontal));

        assert!(!board.can_set_wall(4, 4, Orientation::Vertical));
    }

    #[test]
    fn test_horizontal_overlap_rejected() {
        let mut board = Board::new(9);

        assert!(board.set_wall(4, 4, Orientation::Horizontal));

        assert!(!board.can_set_wall(4, 3, Orientation::Horizontal));
        assert!(!board.can_set_wall(4, 5, Orientation::Horizontal));
        assert!(board.can_set_wall(4, 6, Orientation::Horizontal));
        assert!(board.can_set_wall(3, 4, Orientation::Horizontal));
        assert!(board.can_set_wall(4, 5, Orientation::Vertical));
    }

    #[test]
    fn test_vertical_overlap_rejected() {
        let mut board = Board::new(9);

        assert!(board.set_wall(4, 4, Orientation::Vertical));

        assert!(!board.can_set_wall(3, 4, Orientation::Vertical));
        assert!(!board.can_set_wall(5, 4, Orientation::Vertical));
        assert!(board.can_set_wall(6, 4, Orientation::Vertical));
        assert!(board.can_set_wall(3, 4, Orientation::Horizontal));
    }

    #[test]
    fn test_rejected_wall_leaves_board_unchanged() {
        let mut board = Board::new(9);
        assert!(board.set_wall(2, 2, Orientation::Horizontal));
        let before = board.clone();

        assert!(!board.set_wall(2, 3, Orientation::Horizontal));

        assert_eq!(board, before);
    }

    #[test]
    fn test_remove_wall_restores_graph() {
        let mut board = Board::new(9);
        assert!(board.set_wall(1, 1, Orientation::Vertical));
        let before = board.clone();

        assert!(board.set_wall(5, 2, Orientation::Horizontal));
        assert!(board.remove_wall(5, 2));

        assert_eq!(board, before);
        assert!(!board.remove_wall(5, 2));
    }

    #[test]
    fn test_walls_iterator() {
        let mut board = Board::new(9);
        board.set_wall(6, 1, Orientation::Vertical);
        board.set_wall(2, 3, Orientation::Horizontal);

        let walls = board.walls().collect::<Vec<_>>();

        assert_eq!(
            walls,
            vec![
                Wall::new(Coordinate::new(2, 3), Orientation::Horizontal),
                Wall::new(Coordinate::new(6, 1), Orientation::Vertical),
            ]
        );
    }
}
