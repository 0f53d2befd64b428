use anyhow::{anyhow, Context, Result};
use log::info;
use minimax::{Minimax, SearchOptions};
use quoridor::{parse_actions, Action, Engine, GameState, Rules, ShortestPathHeuristic};

/// Sets up a new game and plays the opening line on it.
pub fn setup_position(rules: Rules, moves: Option<&str>) -> Result<GameState> {
    rules.validate()?;

    let mut game_state = GameState::new(rules);
    let actions = match moves {
        Some(moves) => parse_actions(moves).context("Failed to parse the opening moves")?,
        None => Vec::new(),
    };

    let unapplied = game_state.play(&actions);
    if unapplied > 0 {
        let failed = &actions[actions.len() - unapplied];
        return Err(anyhow!(
            "Opening move {} ({}) is not valid in this position{}",
            actions.len() - unapplied + 1,
            failed,
            game_state
        ));
    }

    Ok(game_state)
}

pub fn play_match(rules: Rules, options: SearchOptions, moves: Option<&str>) -> Result<Vec<Action>> {
    let mut game_state = setup_position(rules, moves)?;
    let engine = Engine::new();
    let heuristic = ShortestPathHeuristic::new();
    let search = Minimax::new(&engine, &heuristic, options);
    let mut played = Vec::new();

    info!("Starting position: {}", game_state);

    while game_state.is_terminal().is_none() {
        let result = search.search(&game_state);
        let action = match result.action {
            Some(action) => action,
            None => {
                info!("P{} has no valid actions", game_state.player_to_move());
                break;
            }
        };

        info!(
            "Move {}: P{} plays {} (value {}, {} nodes{})",
            game_state.move_number(),
            game_state.player_to_move(),
            action,
            result.value,
            result.stats.nodes_visited,
            if result.stats.timed_out { ", timed out" } else { "" }
        );

        if !game_state.take_action(&action) {
            return Err(anyhow!("Search chose {} which is not valid in this position", action));
        }

        played.push(action);
    }

    info!("Final position: {}", game_state);

    match game_state.winner() {
        Some(winner) => info!("P{} wins after {} actions", winner, played.len()),
        None => info!("Draw after {} actions", played.len()),
    }

    info!(
        "Moves: {}",
        played.iter().map(|action| action.to_string()).collect::<Vec<_>>().join(" ")
    );

    Ok(played)
}
