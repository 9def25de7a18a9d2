use crate::huffman::parallel::DEFAULT_CHUNK_SIZE;
use crate::{Arguments, InputSource};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

const DEFAULT_INPUT: &str = "abbccda";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_argument(command);
        let command = Self::register_input_file_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_chunk_size_argument(command);
        let command = Self::register_print_tree_argument(command);
        Self::register_print_table_argument(command)
    }

    fn register_input_argument(command: Command) -> Command {
        command.arg(Self::create_input_argument())
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_chunk_size_argument(command: Command) -> Command {
        command.arg(Self::create_chunk_size_argument())
    }

    fn register_print_tree_argument(command: Command) -> Command {
        command.arg(Self::create_print_tree_argument())
    }

    fn register_print_table_argument(command: Command) -> Command {
        command.arg(Self::create_print_table_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_argument() -> Arg {
        Arg::new("input")
            .help("Text to encode and decode again")
            .default_value(DEFAULT_INPUT)
            .required(false)
    }

    fn create_input_file_argument() -> Arg {
        arg!(input_file: -f --input_file <FILE> "Read the input from a file instead")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_chunk_size_argument() -> Arg {
        arg!(chunk_size: -c --chunk_size <BYTES> "Number of input bytes encoded per task")
            .default_value(DEFAULT_CHUNK_SIZE.to_string())
            .required(false)
            .value_parser(value_parser!(u64).range(1..))
    }

    fn create_print_tree_argument() -> Arg {
        arg!(print_tree: --print_tree "Print the huffman tree")
    }

    fn create_print_table_argument() -> Arg {
        arg!(print_table: --print_table "Print the code table")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input: Self::extract_input_source(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            chunk_size: Self::extract_chunk_size_argument(matches),
            print_tree: Self::extract_print_tree_argument(matches),
            print_table: Self::extract_print_table_argument(matches),
        }
    }

    fn extract_input_source(matches: &ArgMatches) -> InputSource {
        match Self::extract_input_file_argument(matches) {
            Some(path) => InputSource::File(path),
            None => InputSource::Text(Self::extract_input_argument(matches)),
        }
    }

    fn extract_input_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("input")
            .expect("Input must be provided, but was unset.")
            .clone()
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_chunk_size_argument(matches: &ArgMatches) -> usize {
        let chunk_size = matches
            .get_one::<u64>("chunk_size")
            .expect("Chunk size must be provided, but was unset.")
            .to_owned();
        usize::try_from(chunk_size).unwrap_or(usize::MAX)
    }

    fn extract_print_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_tree")
    }

    fn extract_print_table_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_table")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
