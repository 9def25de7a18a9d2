use std::fmt;

use super::tree::{HuffmanTree, Node};
use super::{display_symbol, Symbol, SYMBOL_COUNT};

/// Bit-string of '0' and '1' characters assigned to a symbol.
pub type HuffmanCode = String;

/// Mapping from every symbol of a tree to its root-to-leaf path.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    code_lookup_table: [Option<HuffmanCode>; SYMBOL_COUNT],
}

fn fill_table(table: &mut CodeTable, node: &Node, current_pattern: &mut String) {
    match node {
        Node::Leaf { symbol, .. } => {
            table.set_code_for_symbol(*symbol, current_pattern.clone());
        }
        Node::Inner { left, right, .. } => {
            current_pattern.push('0');
            fill_table(table, left, current_pattern);
            current_pattern.pop();
            current_pattern.push('1');
            fill_table(table, right, current_pattern);
            current_pattern.pop();
        }
    }
}

impl CodeTable {
    pub fn new(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable {
            code_lookup_table: [const { None }; SYMBOL_COUNT],
        };
        // a lone leaf has no edges, it gets the left edge label
        let mut initial_pattern = match tree.root() {
            Node::Leaf { .. } => String::from("0"),
            Node::Inner { .. } => String::new(),
        };
        fill_table(&mut table, tree.root(), &mut initial_pattern);
        log::debug!("Generated {} huffman codes", table.len());
        table
    }

    fn set_code_for_symbol(&mut self, symbol: Symbol, code: HuffmanCode) {
        self.code_lookup_table[symbol as usize] = Some(code);
    }

    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.code_lookup_table[symbol as usize].as_deref()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.code_lookup_table[symbol as usize].is_some()
    }

    pub fn len(&self) -> usize {
        self.code_lookup_table.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        (0..=Symbol::MAX)
            .zip(self.code_lookup_table.iter())
            .filter_map(|(symbol, code)| code.as_deref().map(|code| (symbol, code)))
    }

    /// Checks that no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.iter().map(|(_, code)| code).collect();
        // a prefix sorts directly before some string it prefixes
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl From<&HuffmanTree> for CodeTable {
    fn from(tree: &HuffmanTree) -> Self {
        Self::new(tree)
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{}: {}", display_symbol(symbol), code)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::huffman::{FrequencyMap, HuffmanTree};

    fn create_code_table(input: &[u8]) -> CodeTable {
        let tree = HuffmanTree::new(&FrequencyMap::count(input)).unwrap();
        CodeTable::new(&tree)
    }

    #[test]
    fn test_codes_follow_tree_edges() {
        let table = create_code_table(b"abbccda");
        // d(1) and a(2) merge first, then b(2) and c(2)
        assert_eq!(table.code(b'd'), Some("00"));
        assert_eq!(table.code(b'a'), Some("01"));
        assert_eq!(table.code(b'b'), Some("10"));
        assert_eq!(table.code(b'c'), Some("11"));
    }

    #[test]
    fn test_single_symbol_gets_zero() {
        let table = create_code_table(b"aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.code(b'a'), Some("0"));
    }

    #[test]
    fn test_two_symbols_get_one_bit_each() {
        let table = create_code_table(b"ab");
        let mut codes: Vec<&str> = table.iter().map(|(_, code)| code).collect();
        codes.sort();
        assert_eq!(codes, ["0", "1"]);
    }

    #[test]
    fn test_keys_equal_frequency_map_keys() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let map = FrequencyMap::count(input);
        let table = create_code_table(input);
        let map_symbols: Vec<u8> = map.iter().map(|(symbol, _)| symbol).collect();
        let table_symbols: Vec<u8> = table.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(map_symbols, table_symbols);
        assert!(!table.contains(b'!'));
    }

    #[test]
    fn test_every_code_is_prefix_free_and_non_empty() {
        let input: Vec<u8> = (0..=u8::MAX)
            .flat_map(|symbol| std::iter::repeat(symbol).take(symbol as usize % 7 + 1))
            .collect();
        let table = create_code_table(&input);
        assert_eq!(table.len(), 256);
        assert!(table.is_prefix_free(), "Code table is not prefix free");
        assert!(table.iter().all(|(_, code)| !code.is_empty()));
        assert!(table
            .iter()
            .all(|(_, code)| code.chars().all(|c| c == '0' || c == '1')));
    }

    #[test]
    fn test_prefix_check_detects_prefix() {
        let mut table = create_code_table(b"abc");
        table.set_code_for_symbol(b'a', "1".to_string());
        table.set_code_for_symbol(b'b', "10".to_string());
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_display_lists_one_line_per_symbol() {
        let table = create_code_table(b"a a");
        let rendered = table.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("' ': "));
        assert!(rendered.contains("a: "));
    }
}
