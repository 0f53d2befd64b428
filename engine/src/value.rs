pub trait Value: Clone {
    /// Players are zero indexed.
    fn get_value_for_player(&self, player: usize) -> f32;
}
