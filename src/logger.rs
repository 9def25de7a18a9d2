use crate::huffman::CodeTable;

const LOG_CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
        eprintln!("Logging disabled, unable to load {}: {}", LOG_CONFIG_FILE, e);
    }
}

pub fn log_code_table(code_table: &CodeTable) {
    let entries: Vec<String> = code_table
        .iter()
        .map(|(symbol, code)| format!("{:02X}={}", symbol, code))
        .collect();
    log::info!("{} codes\n{:?}", entries.len(), entries);
}
