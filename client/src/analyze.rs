use anyhow::Result;
use minimax::{Minimax, SearchOptions, SearchStats};
use quoridor::{Action, Engine, Rules, ShortestPathHeuristic};
use serde::Serialize;

use super::play::setup_position;

#[derive(Debug, Serialize)]
pub struct Analysis {
    pub player_to_move: usize,
    pub move_number: usize,
    pub distances: [Option<usize>; 2],
    pub walls_remaining: [usize; 2],
    pub action: Option<Action>,
    pub value: i32,
    pub children: Vec<ChildAnalysis>,
    pub stats: SearchStats,
}

#[derive(Debug, Serialize)]
pub struct ChildAnalysis {
    pub action: Option<Action>,
    pub value: i32,
}

pub fn analyze(rules: Rules, options: SearchOptions, moves: Option<&str>) -> Result<Analysis> {
    let game_state = setup_position(rules, moves)?;
    let engine = Engine::new();
    let heuristic = ShortestPathHeuristic::new();

    let result = Minimax::new(&engine, &heuristic, options).search(&game_state);

    let children = result
        .root
        .children()
        .iter()
        .map(|child| ChildAnalysis {
            action: child.action().copied(),
            value: child.value(),
        })
        .collect();

    Ok(Analysis {
        player_to_move: game_state.player_to_move(),
        move_number: game_state.move_number(),
        distances: [game_state.distance_to_goal(0), game_state.distance_to_goal(1)],
        walls_remaining: [game_state.walls_remaining(0), game_state.walls_remaining(1)],
        action: result.action,
        value: result.value,
        children,
        stats: result.stats,
    })
}
