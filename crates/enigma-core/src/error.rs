// crates/enigma-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnigmaError>;

/// Structural problems found while building a machine.
/// Build stops at the first violation, so only one is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("alphabet must hold between 2 and 256 symbols, got {0}")]
    AlphabetSize(usize),

    #[error("alphabet repeats symbol {0:?}")]
    AlphabetDuplicate(char),

    #[error("unknown rotor {0:?}")]
    UnknownRotor(String),

    #[error("unknown reflector {0:?}")]
    UnknownReflector(String),

    #[error("machine needs at least one rotor")]
    EmptyBank,

    #[error("machine needs at least one stepping rotor")]
    NoSteppingRotor,

    #[error("rotor slot {slot}: stationary wheels must sit left of every stepping wheel")]
    StationaryPlacement { slot: usize },

    #[error("{component}: wiring has {found} symbols, alphabet has {expected}")]
    AlphabetMismatch {
        component: String,
        expected: usize,
        found: usize,
    },

    #[error("{component}: symbol {symbol:?} is not in the alphabet")]
    ForeignSymbol { component: String, symbol: char },

    #[error("{component}: wiring is not a bijection ({symbol:?} is hit twice)")]
    NonBijective { component: String, symbol: char },

    #[error("{component}: {from:?} reflects to {to:?} but {to:?} does not reflect back")]
    NotInvolution {
        component: String,
        from: char,
        to: char,
    },

    #[error("{component}: {symbol:?} reflects to itself")]
    ReflectorFixedPoint { component: String, symbol: char },

    #[error("plugboard: pair {0:?} must be exactly two symbols")]
    MalformedPlug(String),

    #[error("plugboard: {symbol:?} is used in more than one pair")]
    AmbiguousPlug { symbol: char },

    #[error("rotor slot {slot}: setting {value} is outside 1..={size}")]
    SettingOutOfRange {
        slot: usize,
        value: u16,
        size: usize,
    },

    #[error("expected {expected} rotor positions, got {found}")]
    PositionCount { expected: usize, found: usize },
}

/// Raised per symbol; the machine state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("symbol {symbol:?} is not in the machine alphabet")]
pub struct UnsupportedSymbolError {
    pub symbol: char,
}

#[derive(Debug, Error)]
pub enum EnigmaError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    UnsupportedSymbol(#[from] UnsupportedSymbolError),

    #[error("notation error: {0}")]
    Notation(String),

    #[error("key sheet format error: {0}")]
    KeySheetFormat(String),
}
