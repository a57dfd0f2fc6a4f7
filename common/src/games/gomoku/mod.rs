mod board;
mod bot_controller;
mod cell_scorer;
mod line_scanner;
mod opening;
mod symbol_choice;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, BoardError, DIRECTIONS, available_moves, in_bounds};
pub use bot_controller::{MoveError, select_move};
pub use cell_scorer::score_cell;
pub use line_scanner::scan_line;
pub use opening::generate_opening;
pub use symbol_choice::choose_symbol;
pub use types::{Mark, Position, Stone, Symbol, SymbolError};
pub use win_detector::{WIN_LENGTH, would_make_five};
