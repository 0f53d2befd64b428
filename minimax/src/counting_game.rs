use std::cell::Cell;
use std::thread;
use std::time::Duration;

use engine::{GameEngine, GameState, Replay, Replayed, ValidActions};

use crate::Evaluator;

/// Player 0 wants the count to reach 100, player 1 wants it to reach 0. `trail` hashes the actions
/// taken so far so that leaves can be given varied, reproducible scores.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct CountingGameState {
    pub player: usize,
    pub count: usize,
    pub trail: u64,
}

impl CountingGameState {
    pub fn is_terminal_state(&self) -> Option<Value> {
        if self.count == 100 {
            Some(Value([1.0, 0.0]))
        } else if self.count == 0 {
            Some(Value([0.0, 1.0]))
        } else {
            None
        }
    }
}

impl GameState for CountingGameState {
    fn initial() -> Self {
        Self {
            player: 0,
            count: 50,
            trail: 0,
        }
    }
}

#[derive(Default)]
pub struct CountingGameEngine {
    forbid_stay: bool,
}

impl CountingGameEngine {
    pub fn new() -> Self {
        Self { forbid_stay: false }
    }

    /// Stay is still generated but can never be applied.
    pub fn forbidding_stay() -> Self {
        Self { forbid_stay: true }
    }
}

#[derive(Clone)]
pub struct Value(pub [f32; 2]);

impl engine::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player]
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum CountingAction {
    Increment,
    Decrement,
    Stay,
}

impl CountingAction {
    fn ordinal(&self) -> u64 {
        match self {
            CountingAction::Increment => 1,
            CountingAction::Decrement => 2,
            CountingAction::Stay => 3,
        }
    }
}

impl GameEngine for CountingGameEngine {
    type Action = CountingAction;
    type State = CountingGameState;
    type Value = Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let count = game_state.count;

        let new_count = match action {
            CountingAction::Increment => count + 1,
            CountingAction::Decrement => count - 1,
            CountingAction::Stay => count,
        };

        Self::State {
            player: 1 - game_state.player,
            count: new_count,
            trail: game_state.trail.wrapping_mul(31).wrapping_add(action.ordinal()),
        }
    }

    fn is_terminal_state(&self, game_state: &Self::State) -> Option<Self::Value> {
        game_state.is_terminal_state()
    }

    fn get_player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player
    }

    fn get_move_number(&self, _game_state: &Self::State) -> usize {
        0
    }
}

impl ValidActions for CountingGameEngine {
    type State = CountingGameState;
    type Action = CountingAction;

    fn valid_actions(&self, _game_state: &Self::State) -> impl Iterator<Item = Self::Action> {
        [
            CountingAction::Increment,
            CountingAction::Decrement,
            CountingAction::Stay,
        ]
        .into_iter()
    }
}

impl Replay for CountingGameEngine {
    type State = CountingGameState;
    type Action = CountingAction;

    fn replay(&self, game_state: &Self::State, actions: &[Self::Action]) -> Replayed<Self::State> {
        let mut game_state = game_state.clone();

        for (i, action) in actions.iter().enumerate() {
            if self.forbid_stay && *action == CountingAction::Stay {
                return Replayed::new(game_state, actions.len() - i);
            }

            game_state = self.take_action(&game_state, action);
        }

        Replayed::new(game_state, 0)
    }
}

/// Scores by how far the count has moved toward the player's goal.
pub struct CountingEvaluator;

impl Evaluator for CountingEvaluator {
    type State = CountingGameState;

    fn evaluate(&self, game_state: &Self::State, player: usize) -> i32 {
        let score = game_state.count as i32 - 50;

        if player == 0 {
            score
        } else {
            -score
        }
    }
}

/// Scores leaves by their trail so that sibling values differ.
pub struct TrailEvaluator;

impl Evaluator for TrailEvaluator {
    type State = CountingGameState;

    fn evaluate(&self, game_state: &Self::State, player: usize) -> i32 {
        let score = (game_state.trail % 97) as i32 - 48;

        if player == 0 {
            score
        } else {
            -score
        }
    }
}

/// Scores like `CountingEvaluator` but stalls on one chosen call, counting calls from zero.
pub struct SlowEvaluator {
    calls: Cell<usize>,
    slow_call: usize,
    delay: Duration,
}

impl SlowEvaluator {
    pub fn new(slow_call: usize, delay: Duration) -> Self {
        Self {
            calls: Cell::new(0),
            slow_call,
            delay,
        }
    }
}

impl Evaluator for SlowEvaluator {
    type State = CountingGameState;

    fn evaluate(&self, game_state: &Self::State, player: usize) -> i32 {
        let call = self.calls.get();
        self.calls.set(call + 1);

        if call == self.slow_call {
            thread::sleep(self.delay);
        }

        CountingEvaluator.evaluate(game_state, player)
    }
}
