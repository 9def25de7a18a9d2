use std::env::args_os;

use huffman_coder::{round_trip, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match round_trip(&arguments) {
        Ok(report) => {
            if let Some(tree) = report.tree {
                println!("Huffman tree\n{}", tree);
            }
            if let Some(code_table) = report.code_table {
                println!("Code table\n{}", code_table);
            }
            println!("Encoded: {}", report.encoded);
            println!("Decoded: {}", String::from_utf8_lossy(&report.decoded));
            println!(
                "{} symbols, {} distinct, {:.3} bits per symbol",
                report.input_length, report.distinct_symbols, report.average_code_length
            );
        }
        Err(e) => eprintln!("Round-trip failed because of: {}", e),
    }
}
