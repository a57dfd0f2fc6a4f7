use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Mark::X => Some(Symbol::X),
            Mark::O => Some(Symbol::O),
            Mark::Empty => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl From<Symbol> for Mark {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Mark::X,
            Symbol::O => Mark::O,
        }
    }
}

/// One of the two player symbols. There is no third player, so every symbol
/// has exactly one opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opponent(&self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SymbolError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Symbol::X),
            "O" => Ok(Symbol::O),
            _ => Err(SymbolError(value.to_string())),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolError(pub String);

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symbol must be 'X' or 'O', got '{}'", self.0)
    }
}

impl std::error::Error for SymbolError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A stone placed by the opening generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stone {
    pub position: Position,
    pub symbol: Symbol,
}

impl Stone {
    pub fn new(position: Position, symbol: Symbol) -> Self {
        Self { position, symbol }
    }
}
