use crate::games::SessionRng;
use super::board::{BOARD_SIZE, in_bounds};
use super::types::{Position, Stone, Symbol};

/// Three opening stones: two adjacent X stones and one O stone elsewhere.
pub fn generate_opening(rng: &mut SessionRng) -> [Stone; 3] {
    let first = random_position(rng);

    let neighbours = orthogonal_neighbours(first);
    let second = neighbours[rng.random_range(0..neighbours.len())];

    let third = loop {
        let candidate = random_position(rng);
        if candidate != first && candidate != second {
            break candidate;
        }
    };

    [
        Stone::new(first, Symbol::X),
        Stone::new(second, Symbol::X),
        Stone::new(third, Symbol::O),
    ]
}

fn random_position(rng: &mut SessionRng) -> Position {
    Position::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    )
}

fn orthogonal_neighbours(pos: Position) -> Vec<Position> {
    let (row, col) = (pos.row as isize, pos.col as isize);
    [(-1, 0), (1, 0), (0, -1), (0, 1)]
        .iter()
        .map(|&(d_row, d_col)| (row + d_row, col + d_col))
        .filter(|&(r, c)| in_bounds(r, c))
        .map(|(r, c)| Position::new(r as usize, c as usize))
        .collect()
}
