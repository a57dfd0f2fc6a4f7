mod session_rng;

pub mod gomoku;

pub use session_rng::SessionRng;
