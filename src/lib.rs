use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{HuffmanCodec, ParallelEncoder, Symbol};

mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub enum InputSource {
    Text(String),
    File(PathBuf),
}

pub struct Arguments {
    input: InputSource,
    number_of_threads: usize,
    chunk_size: usize,
    print_tree: bool,
    print_table: bool,
}

/// Everything the front end prints after a successful round-trip.
pub struct RoundTripReport {
    pub encoded: String,
    pub decoded: Vec<Symbol>,
    pub tree: Option<String>,
    pub code_table: Option<String>,
    pub input_length: usize,
    pub distinct_symbols: usize,
    pub average_code_length: f64,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn read_input(source: &InputSource) -> Result<Vec<Symbol>> {
    match source {
        InputSource::Text(text) => Ok(text.as_bytes().to_vec()),
        InputSource::File(path) => {
            let input_file = open_input_file(path)?;
            let mut content = Vec::new();
            BufReader::new(input_file)
                .read_to_end(&mut content)
                .map_err(|e| Error::UnableToReadInputFile(path.display().to_string(), e))?;
            Ok(content)
        }
    }
}

pub fn round_trip(arguments: &Arguments) -> Result<RoundTripReport> {
    let input = read_input(&arguments.input)?;
    let codec = Arc::new(HuffmanCodec::new(&input)?);
    logger::log_code_table(codec.code_table());

    let encoder = ParallelEncoder::new(arguments.number_of_threads, arguments.chunk_size)?;
    let encoded = encoder.encode(&codec, &input)?;
    let decoded = codec.decode(&encoded)?;
    if decoded != input {
        return Err(Error::RoundTripMismatch);
    }
    log::info!(
        "Round-trip of {} symbols produced {} bits",
        input.len(),
        encoded.len()
    );

    Ok(RoundTripReport {
        tree: arguments.print_tree.then(|| codec.tree().to_string()),
        code_table: arguments.print_table.then(|| codec.code_table().to_string()),
        input_length: input.len(),
        distinct_symbols: codec.frequencies().len(),
        average_code_length: codec.average_code_length(),
        encoded,
        decoded,
    })
}
