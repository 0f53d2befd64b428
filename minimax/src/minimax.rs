use std::fmt::Debug;
use std::time::Instant;

use engine::{GameEngine, Replay, ValidActions};
use log::{debug, warn};

use super::{Evaluator, SearchNode, SearchOptions, SearchStats};

/// Depth limited minimax search with alpha-beta pruning. Every explored state is an independent copy
/// produced by the engine, so the state passed to `search` is never mutated.
pub struct Minimax<'a, E, V> {
    engine: &'a E,
    evaluator: &'a V,
    options: SearchOptions,
}

#[derive(Debug)]
pub struct SearchResult<A> {
    pub action: Option<A>,
    pub value: i32,
    pub root: SearchNode<A>,
    pub stats: SearchStats,
}

struct SearchContext {
    player: usize,
    deadline: Option<Instant>,
    stats: SearchStats,
}

impl SearchContext {
    fn deadline_expired(&mut self) -> bool {
        if self.stats.timed_out {
            return true;
        }

        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stats.timed_out = true;
            }
        }

        self.stats.timed_out
    }
}

impl<'a, S, A, E, V> Minimax<'a, E, V>
where
    A: Clone + Debug,
    E: GameEngine<State = S, Action = A>
        + ValidActions<State = S, Action = A>
        + Replay<State = S, Action = A>,
    V: Evaluator<State = S>,
{
    pub fn new(engine: &'a E, evaluator: &'a V, options: SearchOptions) -> Self {
        Self {
            engine,
            evaluator,
            options,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Searches from the state with the player to move as the maximizer.
    pub fn search(&self, game_state: &S) -> SearchResult<A> {
        let start = Instant::now();
        let mut ctx = SearchContext {
            player: self.engine.get_player_to_move(game_state),
            deadline: self.options.deadline.map(|deadline| start + deadline),
            stats: SearchStats::default(),
        };

        let root = self.alpha_beta(game_state, SearchNode::root(), self.options.depth, &mut ctx);
        let action = root.best_child().and_then(|child| child.action().cloned());

        if ctx.stats.timed_out {
            warn!(
                "Search deadline expired after {:?}, returning the best action found so far",
                start.elapsed()
            );
        }

        debug!(
            "Search depth {} chose {:?} with value {} in {:?}: {:?}",
            self.options.depth,
            action,
            root.value(),
            start.elapsed(),
            ctx.stats
        );

        SearchResult {
            action,
            value: root.value(),
            root,
            stats: ctx.stats,
        }
    }

    fn alpha_beta(
        &self,
        game_state: &S,
        mut node: SearchNode<A>,
        depth: usize,
        ctx: &mut SearchContext,
    ) -> SearchNode<A> {
        ctx.stats.nodes_visited += 1;

        if depth == 0 || self.engine.is_terminal_state(game_state).is_some() {
            node.set_value(self.evaluate(game_state, ctx));
            return node;
        }

        let is_root = depth == self.options.depth;
        let mut num_children = 0;

        for action in self.engine.valid_actions(game_state) {
            if ctx.deadline_expired() {
                break;
            }

            let replayed = self.engine.replay(game_state, std::slice::from_ref(&action));
            if !replayed.is_complete() {
                warn!(
                    "Excluding {:?}, {} action(s) could not be applied",
                    action, replayed.unapplied
                );
                ctx.stats.excluded += 1;
                continue;
            }

            let child = SearchNode::new(Some(action), !node.is_maximizer(), node.alpha(), node.beta());
            let child = self.alpha_beta(&replayed.game_state, child, depth - 1, ctx);

            // A child cut short by the deadline carries a partial value.
            if ctx.stats.timed_out {
                debug!("Discarding {:?}, the deadline expired before it was fully searched", child.action());
                break;
            }

            let cutoff = node.backup(child.value());
            num_children += 1;

            if is_root {
                debug!("{:?} = {}", child.action(), child.value());
                node.push_child(child);
            }

            if cutoff && self.options.pruning {
                ctx.stats.cutoffs += 1;
                break;
            }
        }

        // No legal moves, or the deadline hit before any child was searched.
        if num_children == 0 {
            node.set_value(self.evaluate(game_state, ctx));
        }

        node
    }

    fn evaluate(&self, game_state: &S, ctx: &mut SearchContext) -> i32 {
        ctx.stats.leaves_evaluated += 1;
        self.evaluator.evaluate(game_state, ctx.player)
    }
}
