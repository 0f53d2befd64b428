use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_visited: usize,
    pub leaves_evaluated: usize,
    pub cutoffs: usize,
    /// Branches dropped because their actions could not be replayed onto the parent state.
    pub excluded: usize,
    pub timed_out: bool,
}
