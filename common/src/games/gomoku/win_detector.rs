use super::board::{Board, DIRECTIONS};
use super::line_scanner::scan_line;
use super::types::{Position, Symbol};

pub const WIN_LENGTH: usize = 5;

/// True if placing `symbol` at `pos` would complete five or more in a row.
pub fn would_make_five(board: &Board, pos: Position, symbol: Symbol) -> bool {
    DIRECTIONS
        .iter()
        .any(|&direction| scan_line(board, pos, symbol, direction) >= WIN_LENGTH)
}
