use minimax::{Minimax, SearchOptions, SearchResult};

use super::{Action, Engine, GameState, ShortestPathHeuristic};

/// Searches the position for the player to move using the shortest path heuristic.
pub fn search(game_state: &GameState, options: SearchOptions) -> SearchResult<Action> {
    let engine = Engine::new();
    let heuristic = ShortestPathHeuristic::new();

    Minimax::new(&engine, &heuristic, options).search(game_state)
}

/// The best action for the player to move looking `depth` plies ahead, or `None` if there is
/// nothing to play.
pub fn choose_action(game_state: &GameState, depth: usize) -> Option<Action> {
    search(game_state, SearchOptions::new(depth)).action
}
