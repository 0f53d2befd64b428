use minimax::Evaluator;

use super::GameState;

/// Scores a position by how much closer the player is to their goal row than the opponent is to
/// theirs.
#[derive(Default)]
pub struct ShortestPathHeuristic {}

impl ShortestPathHeuristic {
    pub fn new() -> Self {
        Self {}
    }

    /// Distance used for a pawn that has no path to its goal row.
    pub fn unreachable_penalty(game_state: &GameState) -> i32 {
        let size = game_state.board().size() as i32;
        size * size
    }

    /// Score of a won game. It exceeds any distance difference and shrinks as moves go by, so a
    /// sooner win scores higher.
    pub fn win_score(game_state: &GameState) -> i32 {
        let moves_left = (game_state.rules().max_moves + 1).saturating_sub(game_state.move_number());

        Self::unreachable_penalty(game_state) + 1 + moves_left as i32
    }

    fn distance(game_state: &GameState, player: usize) -> i32 {
        game_state
            .distance_to_goal(player)
            .map_or_else(|| Self::unreachable_penalty(game_state), |distance| distance as i32)
    }
}

impl Evaluator for ShortestPathHeuristic {
    type State = GameState;

    fn evaluate(&self, game_state: &GameState, player: usize) -> i32 {
        if game_state.is_terminal().is_some() {
            return match game_state.winner() {
                Some(winner) if winner == player => Self::win_score(game_state),
                Some(_) => -Self::win_score(game_state),
                None => 0,
            };
        }

        let opponent = game_state.opponent(player);

        Self::distance(game_state, opponent) - Self::distance(game_state, player)
    }
}
