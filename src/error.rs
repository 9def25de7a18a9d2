use std::fmt::Display;

use crate::huffman::Symbol;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    UnknownSymbol(Symbol, usize),
    InvalidBit(char, usize),
    TruncatedCode(usize),
    InvalidChunkSize,
    ParallelEncodingFailed,
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    RoundTripMismatch,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Unable to build a huffman code from empty input")
            }
            Self::UnknownSymbol(symbol, position) => {
                write!(
                    f,
                    "Symbol {:#04X} at position {} is not present in the code table",
                    symbol, position
                )
            }
            Self::InvalidBit(character, position) => {
                write!(
                    f,
                    "Invalid bit {:?} at position {} in encoded input",
                    character, position
                )
            }
            Self::TruncatedCode(pending_bits) => {
                write!(
                    f,
                    "Encoded input ends inside a code word after {} bits",
                    pending_bits
                )
            }
            Self::InvalidChunkSize => write!(f, "Chunk size must be at least one symbol"),
            Self::ParallelEncodingFailed => {
                write!(f, "A worker thread stopped before encoding its chunk")
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::RoundTripMismatch => {
                write!(f, "Decoded output does not match the original input")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToReadInputFile(_, error) => Some(error),
            _ => None,
        }
    }
}
