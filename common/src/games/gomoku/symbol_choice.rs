use std::cmp::Ordering;

use crate::games::SessionRng;
use super::board::Board;
use super::types::{Mark, Symbol};

/// The symbol with fewer stones on `board`; a fair coin decides a tie.
pub fn choose_symbol(board: &Board, rng: &mut SessionRng) -> Symbol {
    let x_count = board.count(Mark::X);
    let o_count = board.count(Mark::O);

    match x_count.cmp(&o_count) {
        Ordering::Less => Symbol::X,
        Ordering::Greater => Symbol::O,
        Ordering::Equal => {
            if rng.random_bool() {
                Symbol::X
            } else {
                Symbol::O
            }
        }
    }
}
