use std::fmt;

use crate::games::SessionRng;
use super::board::{Board, available_moves};
use super::cell_scorer::score_cell;
use super::types::{Position, Symbol};
use super::win_detector::would_make_five;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    BoardFull,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::BoardFull => write!(f, "Board is full"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Picks the bot's next stone.
///
/// An immediate win comes first, then blocking the opponent's immediate win,
/// both taken as the first match in row-major order. Otherwise every empty
/// cell is scored by the run it would extend and one of the best cells is
/// drawn uniformly from `rng`.
pub fn select_move(
    board: &Board,
    bot_symbol: Symbol,
    rng: &mut SessionRng,
) -> Result<Position, MoveError> {
    let available_moves = available_moves(board);
    if available_moves.is_empty() {
        return Err(MoveError::BoardFull);
    }

    if let Some(pos) = find_winning_move(board, bot_symbol, &available_moves) {
        return Ok(pos);
    }

    if let Some(pos) = find_winning_move(board, bot_symbol.opponent(), &available_moves) {
        return Ok(pos);
    }

    let best_moves = find_best_scored_moves(board, bot_symbol, &available_moves);
    let idx = rng.random_range(0..best_moves.len());
    Ok(best_moves[idx])
}

fn find_winning_move(board: &Board, symbol: Symbol, available_moves: &[Position]) -> Option<Position> {
    available_moves
        .iter()
        .copied()
        .find(|&pos| would_make_five(board, pos, symbol))
}

fn find_best_scored_moves(board: &Board, symbol: Symbol, available_moves: &[Position]) -> Vec<Position> {
    let scored: Vec<(usize, Position)> = available_moves
        .iter()
        .map(|&pos| (score_cell(board, pos, symbol), pos))
        .collect();

    let max_score = scored.iter().map(|&(score, _)| score).max().unwrap_or(1);

    scored
        .into_iter()
        .filter(|&(score, _)| score == max_score)
        .map(|(_, pos)| pos)
        .collect()
}
