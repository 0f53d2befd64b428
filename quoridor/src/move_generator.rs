use itertools::iproduct;

use super::wall::Orientation;
use super::{Action, Coordinate, GameState};

/// Pawn steps in generation order: up, left, right, down.
const PAWN_STEPS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

impl GameState {
    /// Every legal action for the active player: pawn moves first, then horizontal walls, then
    /// vertical walls, each wall group in row major order of the anchors. A finished game has none.
    pub fn get_valid_actions(&self) -> Vec<Action> {
        if self.is_terminal().is_some() {
            return Vec::new();
        }

        let mut actions = self.get_valid_pawn_move_actions().collect::<Vec<_>>();
        actions.extend(self.get_valid_wall_actions(Orientation::Horizontal));
        actions.extend(self.get_valid_wall_actions(Orientation::Vertical));
        actions
    }

    pub fn get_valid_pawn_move_actions(&self) -> impl Iterator<Item = Action> + '_ {
        let pawn = self.pawn(self.player_to_move());

        PAWN_STEPS
            .into_iter()
            .filter_map(move |(d_row, d_col)| pawn.offset(d_row, d_col))
            .filter(move |coord| self.can_move(coord.row(), coord.col()))
            .map(Action::MovePawn)
    }

    pub fn get_valid_horizontal_wall_actions(&self) -> Vec<Action> {
        self.get_valid_wall_actions(Orientation::Horizontal)
    }

    pub fn get_valid_vertical_wall_actions(&self) -> Vec<Action> {
        self.get_valid_wall_actions(Orientation::Vertical)
    }

    fn get_valid_wall_actions(&self, orientation: Orientation) -> Vec<Action> {
        if self.walls_remaining(self.player_to_move()) == 0 {
            return Vec::new();
        }

        let board = self.board();
        let border = board.border();
        let mut scratch = board.clone();

        iproduct!(0..border, 0..border)
            .filter(|(row, col)| board.can_set_wall(*row, *col, orientation))
            .filter(|(row, col)| {
                !self.rules().require_path_to_goal || self.keeps_paths_open(&mut scratch, *row, *col, orientation)
            })
            .map(|(row, col)| Action::place_wall(Coordinate::new(row, col), orientation))
            .collect()
    }
}
