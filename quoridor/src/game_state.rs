use log::debug;

use super::board::Board;
use super::constants::{MIN_BOARD_SIZE, NUM_PLAYERS};
use super::path_finder::{goal_row, PathFinder, PathMap};
use super::rules::Rules;
use super::wall::Orientation;
use super::{Action, Coordinate, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    pawns: [Coordinate; NUM_PLAYERS],
    player_to_move: usize,
    walls_remaining: [usize; NUM_PLAYERS],
    move_number: usize,
    rules: Rules,
}

impl GameState {
    /// Sets up a new game with player 0 on the first row and player 1 on the last, both in the
    /// center column.
    ///
    /// # Panics
    ///
    /// Panics if the board would be smaller than 3×3.
    pub fn new(rules: Rules) -> Self {
        let mut board = Board::new(rules.board_size);
        assert!(
            board.size() >= MIN_BOARD_SIZE,
            "A board must be at least {0}x{0}",
            MIN_BOARD_SIZE
        );

        let center = board.size() / 2;
        let pawns = [
            Coordinate::new(0, center),
            Coordinate::new(board.border(), center),
        ];

        for (player, pawn) in pawns.iter().enumerate() {
            board.set_pawn(*pawn, Some(player));
        }

        Self {
            board,
            pawns,
            player_to_move: 0,
            walls_remaining: [rules.walls_per_player; NUM_PLAYERS],
            move_number: 1,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn pawn(&self, player: usize) -> Coordinate {
        self.pawns[player]
    }

    pub fn player_to_move(&self) -> usize {
        self.player_to_move
    }

    pub fn opponent(&self, player: usize) -> usize {
        (player + 1) % NUM_PLAYERS
    }

    pub fn walls_remaining(&self, player: usize) -> usize {
        self.walls_remaining[player]
    }

    /// Starts at 1 and increases each time play returns to player 0.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Whether the active pawn may step to the tile: it must be on the board, linked to the pawn's
    /// tile and unoccupied.
    pub fn can_move(&self, row: usize, col: usize) -> bool {
        let destination = Coordinate::new(row, col);
        let pawn = self.pawns[self.player_to_move];

        self.board.contains(destination)
            && self.board.are_linked(pawn, destination)
            && !self.board.is_occupied(destination)
    }

    /// Moves the active pawn if `can_move` allows it. Does not pass the turn.
    pub fn move_pawn_to(&mut self, row: usize, col: usize) -> bool {
        if !self.can_move(row, col) {
            return false;
        }

        let player = self.player_to_move;
        let destination = Coordinate::new(row, col);

        self.board.set_pawn(self.pawns[player], None);
        self.board.set_pawn(destination, Some(player));
        self.pawns[player] = destination;

        true
    }

    /// Whether the active player may place the wall. On top of the board's placement rules the
    /// player must have a wall left and, when the rules require it, both pawns must keep a path to
    /// their goal rows.
    pub fn can_set_wall(&self, row: usize, col: usize, orientation: Orientation) -> bool {
        if self.walls_remaining[self.player_to_move] == 0 {
            return false;
        }

        if !self.board.can_set_wall(row, col, orientation) {
            return false;
        }

        !self.rules.require_path_to_goal || self.keeps_paths_open(&mut self.board.clone(), row, col, orientation)
    }

    /// Places a wall for the active player if `can_set_wall` allows it. Does not pass the turn.
    pub fn set_wall(&mut self, row: usize, col: usize, orientation: Orientation) -> bool {
        if !self.can_set_wall(row, col, orientation) {
            return false;
        }

        self.board.set_wall(row, col, orientation);
        self.walls_remaining[self.player_to_move] -= 1;

        true
    }

    pub fn next_turn(&mut self) {
        self.player_to_move = self.opponent(self.player_to_move);

        if self.player_to_move == 0 {
            self.move_number += 1;
        }
    }

    /// Applies the action for the active player and passes the turn. An illegal action leaves the
    /// state untouched and returns false.
    pub fn take_action(&mut self, action: &Action) -> bool {
        let coord = action.coordinate();
        let applied = match action.wall_orientation() {
            None => self.move_pawn_to(coord.row(), coord.col()),
            Some(orientation) => self.set_wall(coord.row(), coord.col(), orientation),
        };

        if applied {
            self.next_turn();
        }

        applied
    }

    /// Applies the actions in order, stopping at the first one that is illegal. Returns the number
    /// of actions that were not applied.
    pub fn play(&mut self, actions: &[Action]) -> usize {
        for (applied, action) in actions.iter().enumerate() {
            if !self.take_action(action) {
                debug!("{} is not valid for P{}, {} action(s) left unapplied", action, self.player_to_move, actions.len() - applied);
                return actions.len() - applied;
            }
        }

        0
    }

    /// The player whose pawn stands on their goal row.
    pub fn winner(&self) -> Option<usize> {
        (0..NUM_PLAYERS).find(|player| self.pawns[*player].row() == goal_row(self.board.size(), *player))
    }

    pub fn is_terminal(&self) -> Option<Value> {
        if let Some(winner) = self.winner() {
            Some(Value::win(winner))
        } else if self.move_number > self.rules.max_moves {
            Some(Value::draw())
        } else {
            None
        }
    }

    pub fn path_map(&self, player: usize) -> PathMap {
        PathFinder::new(&self.board).shortest_paths(player)
    }

    /// Moves the player's pawn needs to reach their goal row, `None` if walls cut it off.
    pub fn distance_to_goal(&self, player: usize) -> Option<usize> {
        self.path_map(player).distance(self.pawns[player])
    }

    /// Tentatively places the wall on the scratch board and checks that both pawns can still reach
    /// their goal rows. The scratch board is left as it was.
    pub(crate) fn keeps_paths_open(&self, scratch: &mut Board, row: usize, col: usize, orientation: Orientation) -> bool {
        if !scratch.set_wall(row, col, orientation) {
            return false;
        }

        let finder = PathFinder::new(scratch);
        let open = (0..NUM_PLAYERS).all(|player| finder.has_path(self.pawns[player], player));

        scratch.remove_wall(row, col);

        open
    }
}

impl engine::game_state::GameState for GameState {
    fn initial() -> Self {
        Self::new(Rules::default())
    }
}
