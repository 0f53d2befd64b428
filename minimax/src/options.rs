use std::time::Duration;

use anyhow::{anyhow, Result};
use common::{Config, ConfigLoader};

pub const DEFAULT_DEPTH: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub(crate) depth: usize,
    pub(crate) pruning: bool,
    pub(crate) deadline: Option<Duration>,
}

impl SearchOptions {
    pub fn new(depth: usize) -> Self {
        SearchOptions {
            depth,
            pruning: true,
            deadline: None,
        }
    }

    /// Disabling pruning runs plain minimax over the full tree.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Config for SearchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let depth = config.get_usize("depth")?.unwrap_or(DEFAULT_DEPTH);
        if depth == 0 {
            return Err(anyhow!("depth must be at least 1"));
        }

        let mut options = SearchOptions::new(depth).with_pruning(config.get_bool("pruning")?.unwrap_or(true));

        if let Some(deadline_ms) = config.get_usize("deadline_ms")? {
            options = options.with_deadline(Duration::from_millis(deadline_ms as u64));
        }

        Ok(options)
    }
}
