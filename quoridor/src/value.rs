use serde::{Deserialize, Serialize};

/// The outcome of a finished game from each player's perspective, indexed by player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Value(pub [f32; 2]);

impl Value {
    pub fn win(player: usize) -> Self {
        let mut values = [0.0; 2];
        values[player] = 1.0;
        Self(values)
    }

    pub fn draw() -> Self {
        Self([0.0; 2])
    }
}

impl engine::value::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player]
    }
}
