use common::games::SessionRng;
use common::games::gomoku::Symbol;

/// What the service remembers between requests: the symbol the bot is
/// playing and the random source for openings and tie-breaks.
pub struct BotSession {
    pub symbol: Symbol,
    pub rng: SessionRng,
}

impl BotSession {
    pub fn new(symbol: Symbol, rng: SessionRng) -> Self {
        Self { symbol, rng }
    }

    /// The client announced its own symbol; the bot takes the other one.
    pub fn assign_from_client(&mut self, client_symbol: Symbol) -> Symbol {
        self.symbol = client_symbol.opponent();
        self.symbol
    }
}
