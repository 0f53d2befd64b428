mod action;
mod board;
mod constants;
mod coordinate;
mod display;
mod engine;
mod game_state;
mod heuristic;
mod move_generator;
mod path_finder;
mod rules;
mod search;
mod serde;
mod value;
mod wall;

pub use crate::engine::Engine;
pub use action::*;
pub use board::*;
pub use constants::*;
pub use coordinate::*;
pub use game_state::*;
pub use heuristic::*;
pub use path_finder::*;
pub use rules::*;
pub use search::*;
pub use value::*;
pub use wall::*;
