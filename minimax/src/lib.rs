#[cfg(test)]
mod counting_game;
mod evaluator;
mod minimax;
mod node;
pub mod options;
mod stats;

pub use evaluator::*;
pub use minimax::*;
pub use node::*;
pub use options::*;
pub use stats::*;
