use super::{CodeTable, Symbol};
use crate::error::Error;
use crate::Result;

/// Translates symbols into the concatenation of their codes.
pub struct HuffmanEncoder<'a> {
    code_table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(code_table: &'a CodeTable) -> Self {
        Self { code_table }
    }

    pub fn encode(&self, symbols: &[Symbol]) -> Result<String> {
        self.encode_at(symbols, 0)
    }

    /// Encodes a slice that starts at `offset` within a larger message.
    ///
    /// The offset only shifts the position reported by
    /// [`Error::UnknownSymbol`].
    pub(crate) fn encode_at(&self, symbols: &[Symbol], offset: usize) -> Result<String> {
        let mut encoded = String::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            let code = self
                .code_table
                .code(symbol)
                .ok_or(Error::UnknownSymbol(symbol, offset + index))?;
            encoded.push_str(code);
        }
        Ok(encoded)
    }
}
