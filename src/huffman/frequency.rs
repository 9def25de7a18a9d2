use super::{Symbol, SymbolFrequency, SYMBOL_COUNT};

/// Occurrence count of every symbol seen in an input sequence.
///
/// Backed by a dense counter over the whole symbol space; a symbol is a key
/// of the map exactly when its count is non-zero.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyMap {
    symbol_frequencies: [usize; SYMBOL_COUNT],
}

impl FrequencyMap {
    fn new() -> Self {
        Self {
            symbol_frequencies: [usize::default(); SYMBOL_COUNT],
        }
    }

    pub fn count(symbols: &[Symbol]) -> Self {
        symbols.iter().copied().collect()
    }

    fn increment_symbol(&mut self, symbol: Symbol) {
        self.symbol_frequencies[symbol as usize] += 1;
    }

    pub fn frequency(&self, symbol: Symbol) -> Option<usize> {
        match self.symbol_frequencies[symbol as usize] {
            0 => None,
            frequency => Some(frequency),
        }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbol_frequencies.iter().filter(|&&f| f > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_frequencies.iter().all(|&f| f == 0)
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.symbol_frequencies.iter().sum()
    }

    /// Iterates `(symbol, frequency)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        (0..=Symbol::MAX)
            .zip(self.symbol_frequencies.iter().copied())
            .filter(|&(_, f)| f > 0)
    }

    pub fn to_symbol_frequencies(&self) -> Vec<SymbolFrequency> {
        self.iter().map(SymbolFrequency::from).collect()
    }
}

impl FromIterator<Symbol> for FrequencyMap {
    fn from_iter<T: IntoIterator<Item = Symbol>>(symbols: T) -> Self {
        let mut map = Self::new();
        for symbol in symbols {
            map.increment_symbol(symbol);
        }
        map
    }
}

impl FromIterator<SymbolFrequency> for FrequencyMap {
    /// Repeated symbols accumulate their frequencies.
    fn from_iter<T: IntoIterator<Item = SymbolFrequency>>(frequencies: T) -> Self {
        let mut map = Self::new();
        for sf in frequencies {
            map.symbol_frequencies[sf.symbol as usize] += sf.frequency;
        }
        map
    }
}

impl std::fmt::Debug for FrequencyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
