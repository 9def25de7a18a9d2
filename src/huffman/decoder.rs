use super::tree::{HuffmanTree, Node};
use super::Symbol;
use crate::error::Error;
use crate::Result;

/// Walks the tree bit by bit to recover symbols.
pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
}

fn parse_bit(character: char, position: usize) -> Result<bool> {
    match character {
        '0' => Ok(false),
        '1' => Ok(true),
        _ => Err(Error::InvalidBit(character, position)),
    }
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    pub fn decode(&self, bits: &str) -> Result<Vec<Symbol>> {
        let root = self.tree.root();
        let mut out = Vec::new();
        let mut current = root;
        let mut pending_bits = 0;
        for (position, character) in bits.chars().enumerate() {
            let take_right = parse_bit(character, position)?;
            match current {
                Node::Inner { left, right, .. } => {
                    current = if take_right { &**right } else { &**left };
                    pending_bits += 1;
                }
                Node::Leaf { symbol, .. } => {
                    // only reachable when the root itself is a leaf, coded as "0"
                    if take_right {
                        return Err(Error::InvalidBit(character, position));
                    }
                    out.push(*symbol);
                    continue;
                }
            }
            if let Node::Leaf { symbol, .. } = current {
                out.push(*symbol);
                current = root;
                pending_bits = 0;
            }
        }
        if pending_bits > 0 {
            return Err(Error::TruncatedCode(pending_bits));
        }
        Ok(out)
    }
}
