use std::collections::VecDeque;

use super::board::Board;
use super::coordinate::Coordinate;

/// The row a player must reach. Player 0 heads for the last row, player 1 for the first.
pub fn goal_row(size: usize, player: usize) -> usize {
    (size + player - 1) % size
}

/// Distances to a player's goal row for every tile of a board, along with the links of one
/// shortest path tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathMap {
    size: usize,
    player: usize,
    distances: Vec<Option<usize>>,
    predecessors: Vec<Option<Coordinate>>,
    successors: Vec<Option<Coordinate>>,
}

impl PathMap {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn player(&self) -> usize {
        self.player
    }

    pub fn goal_row(&self) -> usize {
        goal_row(self.size, self.player)
    }

    /// Moves needed to reach the goal row, `None` when walls cut the tile off from it.
    pub fn distance(&self, coord: Coordinate) -> Option<usize> {
        self.distances[coord.index(self.size)]
    }

    pub fn is_reachable(&self, coord: Coordinate) -> bool {
        self.distance(coord).is_some()
    }

    /// The next tile on a shortest path from `coord` toward the goal row.
    pub fn predecessor(&self, coord: Coordinate) -> Option<Coordinate> {
        self.predecessors[coord.index(self.size)]
    }

    /// The last tile the search expanded out of `coord`, pointing away from the goal row.
    pub fn successor(&self, coord: Coordinate) -> Option<Coordinate> {
        self.successors[coord.index(self.size)]
    }

    /// A shortest path from the tile to the goal row, including both ends.
    pub fn path_from(&self, coord: Coordinate) -> Option<Vec<Coordinate>> {
        let distance = self.distance(coord)?;
        let mut path = Vec::with_capacity(distance + 1);
        let mut current = coord;
        path.push(current);

        while let Some(next) = self.predecessor(current) {
            path.push(next);
            current = next;
        }

        Some(path)
    }
}

pub struct PathFinder<'a> {
    board: &'a Board,
}

impl<'a> PathFinder<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Breadth first search outward from every tile of the player's goal row over the current links
    /// of the board.
    pub fn shortest_paths(&self, player: usize) -> PathMap {
        let size = self.board.size();
        let goal_row = goal_row(size, player);
        let mut map = PathMap {
            size,
            player,
            distances: vec![None; size * size],
            predecessors: vec![None; size * size],
            successors: vec![None; size * size],
        };

        let mut queue = VecDeque::with_capacity(size * size);
        for col in 0..size {
            let coord = Coordinate::new(goal_row, col);
            map.distances[coord.index(size)] = Some(0);
            queue.push_back(coord);
        }

        while let Some(tile) = queue.pop_front() {
            let tile_index = tile.index(size);
            let next_distance = map.distances[tile_index].map_or(0, |distance| distance + 1);

            for neighbor in self.board.neighbors(tile) {
                let neighbor_index = neighbor.index(size);
                let is_shorter = map.distances[neighbor_index].map_or(true, |distance| next_distance < distance);

                if is_shorter {
                    map.distances[neighbor_index] = Some(next_distance);
                    map.predecessors[neighbor_index] = Some(tile);
                    map.successors[tile_index] = Some(*neighbor);
                    queue.push_back(*neighbor);
                }
            }
        }

        map
    }

    /// Whether a pawn standing on `from` can still reach the player's goal row.
    pub fn has_path(&self, from: Coordinate, player: usize) -> bool {
        self.shortest_paths(player).is_reachable(from)
    }
}
