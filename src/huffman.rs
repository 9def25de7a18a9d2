pub mod code;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod parallel;
pub mod tree;

pub use code::CodeTable;
pub use codec::HuffmanCodec;
pub use frequency::FrequencyMap;
pub use parallel::ParallelEncoder;
pub use tree::HuffmanTree;

pub type Symbol = u8;

/// Number of distinct values a [`Symbol`] can take.
pub const SYMBOL_COUNT: usize = Symbol::MAX as usize + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Renders a symbol for human readable output, escaping control characters.
pub(crate) fn display_symbol(symbol: Symbol) -> String {
    match symbol {
        b' ' => "' '".to_string(),
        0x21..=0x7E => (symbol as char).to_string(),
        _ => format!("{:#04X}", symbol),
    }
}
