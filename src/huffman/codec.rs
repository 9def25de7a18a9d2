use super::decoder::HuffmanDecoder;
use super::encoder::HuffmanEncoder;
use super::{CodeTable, FrequencyMap, HuffmanTree, Symbol};
use crate::error::Error;
use crate::Result;

/// Immutable pairing of a huffman tree and the code table derived from it.
///
/// The tree and table are built once from the construction input. Encoding
/// only consults the table, decoding only walks the tree, so a codec can be
/// shared between threads without synchronization.
#[derive(Debug)]
pub struct HuffmanCodec {
    frequencies: FrequencyMap,
    tree: HuffmanTree,
    code_table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(symbols: &[Symbol]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::EmptyInput);
        }
        Self::from_frequencies(FrequencyMap::count(symbols))
    }

    /// Rebuilds a codec from previously counted frequencies.
    ///
    /// Identical frequencies always produce an identical tree, so a caller
    /// that keeps the map can decode bit-strings produced by an earlier codec.
    pub fn from_frequencies(frequencies: FrequencyMap) -> Result<Self> {
        let tree = HuffmanTree::new(&frequencies)?;
        let code_table = CodeTable::new(&tree);
        Ok(Self {
            frequencies,
            tree,
            code_table,
        })
    }

    pub fn encode(&self, symbols: &[Symbol]) -> Result<String> {
        HuffmanEncoder::new(&self.code_table).encode(symbols)
    }

    pub(crate) fn encode_at(&self, symbols: &[Symbol], offset: usize) -> Result<String> {
        HuffmanEncoder::new(&self.code_table).encode_at(symbols, offset)
    }

    pub fn decode(&self, bits: &str) -> Result<Vec<Symbol>> {
        HuffmanDecoder::new(&self.tree).decode(bits)
    }

    pub fn frequencies(&self) -> &FrequencyMap {
        &self.frequencies
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Length of the bit-string produced for the construction input.
    pub fn encoded_bit_count(&self) -> usize {
        self.frequencies
            .iter()
            .filter_map(|(symbol, frequency)| {
                self.code_table
                    .code(symbol)
                    .map(|code| frequency * code.len())
            })
            .sum()
    }

    /// Mean number of bits spent per symbol of the construction input.
    pub fn average_code_length(&self) -> f64 {
        self.encoded_bit_count() as f64 / self.frequencies.total() as f64
    }
}

impl TryFrom<&str> for HuffmanCodec {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text.as_bytes())
    }
}
