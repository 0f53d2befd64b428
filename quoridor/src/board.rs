use super::coordinate::Coordinate;
use super::wall::{Orientation, Wall};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    coordinate: Coordinate,
    neighbors: Vec<Coordinate>,
    pawn: Option<usize>,
    wall: Option<Orientation>,
}

impl Tile {
    fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            neighbors: Vec::with_capacity(4),
            pawn: None,
            wall: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Linked tiles, ordered up, left, right, down.
    pub fn neighbors(&self) -> &[Coordinate] {
        &self.neighbors
    }

    /// The player whose pawn stands on this tile.
    pub fn pawn(&self) -> Option<usize> {
        self.pawn
    }

    pub fn is_occupied(&self) -> bool {
        self.pawn.is_some()
    }

    /// The orientation of the wall anchored at this tile.
    pub fn wall(&self) -> Option<Orientation> {
        self.wall
    }

    pub fn is_walled(&self) -> bool {
        self.wall.is_some()
    }

    fn is_linked(&self, other: &Coordinate) -> bool {
        self.neighbors.binary_search(other).is_ok()
    }

    fn link(&mut self, other: Coordinate) {
        // Row major order of the four orthogonal neighbors is up, left, right, down.
        if let Err(position) = self.neighbors.binary_search(&other) {
            self.neighbors.insert(position, other);
        }
    }

    fn unlink(&mut self, other: &Coordinate) {
        if let Ok(position) = self.neighbors.binary_search(other) {
            self.neighbors.remove(position);
        }
    }
}

/// The adjacency graph of an N×N grid of tiles. Walls remove edges from the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates a board with every orthogonal pair linked. An even size is bumped to the next odd
    /// size so that the center column is well defined.
    pub fn new(size: usize) -> Self {
        let size = if size % 2 == 0 { size + 1 } else { size };
        let mut board = Self {
            size,
            tiles: (0..size * size)
                .map(|index| Tile::new(Coordinate::from_index(index, size)))
                .collect(),
        };

        for coord in board.coordinates().collect::<Vec<_>>() {
            if coord.col() < board.border() {
                board.add_link(coord, Coordinate::new(coord.row(), coord.col() + 1));
            }

            if coord.row() < board.border() {
                board.add_link(coord, Coordinate::new(coord.row() + 1, coord.col()));
            }
        }

        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The largest valid row or column index.
    pub fn border(&self) -> usize {
        self.size - 1
    }

    /// Accepts signed values so that callers can check positions off the edge of the board.
    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        let size = self.size as isize;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row() < self.size && coord.col() < self.size
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size * size).map(move |index| Coordinate::from_index(index, size))
    }

    pub fn get_tile(&self, row: usize, col: usize) -> Option<&Tile> {
        let coord = Coordinate::new(row, col);
        self.contains(coord).then(|| self.tile(coord))
    }

    /// # Panics
    ///
    /// Panics if the coordinate is not on the board.
    pub fn tile(&self, coord: Coordinate) -> &Tile {
        &self.tiles[coord.index(self.size)]
    }

    fn tile_mut(&mut self, coord: Coordinate) -> &mut Tile {
        let index = coord.index(self.size);
        &mut self.tiles[index]
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn neighbors(&self, coord: Coordinate) -> &[Coordinate] {
        self.tile(coord).neighbors()
    }

    pub fn are_linked(&self, a: Coordinate, b: Coordinate) -> bool {
        self.contains(a) && self.contains(b) && self.tile(a).is_linked(&b)
    }

    /// The number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.tiles.iter().map(|tile| tile.neighbors.len()).sum::<usize>() / 2
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.tile(coord).is_occupied()
    }

    pub fn is_walled(&self, coord: Coordinate) -> bool {
        self.tile(coord).is_walled()
    }

    pub fn wall_at(&self, coord: Coordinate) -> Option<Orientation> {
        self.tile(coord).wall()
    }

    /// Placed walls in row major order of their anchors.
    pub fn walls(&self) -> impl Iterator<Item = Wall> + '_ {
        self.tiles
            .iter()
            .filter_map(|tile| tile.wall.map(|orientation| Wall::new(tile.coordinate, orientation)))
    }

    pub(crate) fn add_link(&mut self, a: Coordinate, b: Coordinate) {
        self.tile_mut(a).link(b);
        self.tile_mut(b).link(a);
    }

    pub(crate) fn remove_link(&mut self, a: Coordinate, b: Coordinate) {
        self.tile_mut(a).unlink(&b);
        self.tile_mut(b).unlink(&a);
    }

    pub(crate) fn set_pawn(&mut self, coord: Coordinate, pawn: Option<usize>) {
        self.tile_mut(coord).pawn = pawn;
    }

    pub(crate) fn set_wall_marker(&mut self, coord: Coordinate, wall: Option<Orientation>) {
        self.tile_mut(coord).wall = wall;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symmetric(board: &Board) {
        for tile in board.tiles() {
            for neighbor in tile.neighbors() {
                assert!(
                    board.neighbors(*neighbor).contains(&tile.coordinate()),
                    "{:?} links to {:?} but not the reverse",
                    tile.coordinate(),
                    neighbor
                );
            }
        }
    }

    #[test]
    fn test_even_size_is_bumped() {
        assert_eq!(Board::new(8).size(), 9);
        assert_eq!(Board::new(9).size(), 9);
        assert_eq!(Board::new(4).border(), 4);
    }

    #[test]
    fn test_neighbor_counts() {
        let board = Board::new(9);

        assert_eq!(board.neighbors(Coordinate::new(0, 0)).len(), 2);
        assert_eq!(board.neighbors(Coordinate::new(8, 8)).len(), 2);
        assert_eq!(board.neighbors(Coordinate::new(0, 4)).len(), 3);
        assert_eq!(board.neighbors(Coordinate::new(4, 0)).len(), 3);
        assert_eq!(board.neighbors(Coordinate::new(4, 4)).len(), 4);
    }

    #[test]
    fn test_edge_count_of_empty_board() {
        let board = Board::new(9);

        assert_eq!(board.edge_count(), 2 * 9 * 8);
        assert_symmetric(&board);
    }

    #[test]
    fn test_neighbor_order_up_left_right_down() {
        let board = Board::new(5);

        assert_eq!(
            board.neighbors(Coordinate::new(2, 2)),
            &[
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
                Coordinate::new(2, 3),
                Coordinate::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_is_valid_position() {
        let board = Board::new(9);

        assert!(board.is_valid_position(0, 0));
        assert!(board.is_valid_position(8, 8));
        assert!(!board.is_valid_position(-1, 0));
        assert!(!board.is_valid_position(0, -1));
        assert!(!board.is_valid_position(9, 0));
        assert!(!board.is_valid_position(0, 9));
    }

    #[test]
    fn test_get_tile_off_board() {
        let board = Board::new(5);

        assert!(board.get_tile(4, 4).is_some());
        assert!(board.get_tile(5, 0).is_none());
    }

    #[test]
    fn test_remove_and_restore_link() {
        let mut board = Board::new(5);
        let a = Coordinate::new(2, 2);
        let b = Coordinate::new(2, 3);
        let original = board.clone();

        board.remove_link(a, b);
        assert!(!board.are_linked(a, b));
        assert!(!board.are_linked(b, a));
        assert_eq!(board.edge_count(), original.edge_count() - 1);
        assert_symmetric(&board);

        board.add_link(b, a);
        assert_eq!(board, original);
    }

    #[test]
    fn test_add_link_is_idempotent() {
        let mut board = Board::new(3);
        let edges = board.edge_count();

        board.add_link(Coordinate::new(0, 0), Coordinate::new(0, 1));

        assert_eq!(board.edge_count(), edges);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new(5);
        let mut copy = board.clone();

        copy.remove_link(Coordinate::new(0, 0), Coordinate::new(1, 0));
        copy.set_pawn(Coordinate::new(0, 0), Some(1));

        assert!(board.are_linked(Coordinate::new(0, 0), Coordinate::new(1, 0)));
        assert!(!board.is_occupied(Coordinate::new(0, 0)));
    }
}
