pub trait Evaluator {
    type State;

    /// Static score of the state from `player`'s point of view. Larger is better for `player`.
    fn evaluate(&self, game_state: &Self::State, player: usize) -> i32;
}
