use engine::engine::{GameEngine, Replay, Replayed, ValidActions};

use super::{Action, GameState, Value};

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Value = Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let mut game_state = game_state.clone();
        let applied = game_state.take_action(action);
        debug_assert!(applied, "{:?} is not valid in this position", action);
        game_state
    }

    fn is_terminal_state(&self, game_state: &Self::State) -> Option<Self::Value> {
        game_state.is_terminal()
    }

    fn get_player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }

    fn get_move_number(&self, game_state: &Self::State) -> usize {
        game_state.move_number()
    }
}

impl ValidActions for Engine {
    type State = GameState;
    type Action = Action;

    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action> {
        game_state.get_valid_actions().into_iter()
    }
}

impl Replay for Engine {
    type State = GameState;
    type Action = Action;

    fn replay(&self, game_state: &Self::State, actions: &[Self::Action]) -> Replayed<Self::State> {
        let mut game_state = game_state.clone();
        let unapplied = game_state.play(actions);
        Replayed::new(game_state, unapplied)
    }
}
