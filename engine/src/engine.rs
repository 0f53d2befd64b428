use super::value::Value;

pub trait GameEngine {
    type Action;
    type State;
    type Value: Value;

    /// Returns a new state with the action applied and the turn passed to the next player.
    /// The action is expected to be one of the state's valid actions.
    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State;
    fn get_player_to_move(&self, game_state: &Self::State) -> usize;
    fn get_move_number(&self, game_state: &Self::State) -> usize;
    fn is_terminal_state(&self, game_state: &Self::State) -> Option<Self::Value>;
}

pub trait ValidActions {
    type State;
    type Action;

    /// Valid actions for the player to move, in a fixed order.
    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action>;
}

pub trait Replay {
    type State;
    type Action;

    /// Applies the actions in order to a copy of the state. Stops at the first action that is not
    /// legal in the state it is applied to.
    fn replay(&self, game_state: &Self::State, actions: &[Self::Action]) -> Replayed<Self::State>;
}

#[derive(Debug)]
pub struct Replayed<S> {
    pub game_state: S,
    /// Number of trailing actions that could not be applied.
    pub unapplied: usize,
}

impl<S> Replayed<S> {
    pub fn new(game_state: S, unapplied: usize) -> Self {
        Self {
            game_state,
            unapplied,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unapplied == 0
    }

    pub fn into_complete(self) -> Option<S> {
        if self.is_complete() {
            Some(self.game_state)
        } else {
            None
        }
    }
}
