use super::board::{Board, in_bounds};
use super::types::{Mark, Position, Symbol};

/// Length of the run of `symbol` through `pos` along `direction`, counting a
/// hypothetical stone at `pos` whatever the cell currently holds.
pub fn scan_line(board: &Board, pos: Position, symbol: Symbol, direction: (isize, isize)) -> usize {
    let (d_row, d_col) = direction;
    let forward = count_steps(board, pos, symbol, d_row, d_col);
    let backward = count_steps(board, pos, symbol, -d_row, -d_col);
    1 + forward + backward
}

fn count_steps(board: &Board, pos: Position, symbol: Symbol, d_row: isize, d_col: isize) -> usize {
    let mark = Mark::from(symbol);
    let mut count = 0;

    let mut i = 1isize;
    loop {
        let row = pos.row as isize + d_row * i;
        let col = pos.col as isize + d_col * i;
        if !in_bounds(row, col) {
            break;
        }
        if board.get(Position::new(row as usize, col as usize)) != mark {
            break;
        }
        count += 1;
        i += 1;
    }

    count
}
