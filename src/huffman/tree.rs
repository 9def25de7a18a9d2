use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::{display_symbol, FrequencyMap, Symbol};
use crate::error::Error;
use crate::Result;

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Leaf {
        symbol: Symbol,
        frequency: usize,
    },
    Inner {
        frequency: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub(crate) fn frequency(&self) -> usize {
        match self {
            Node::Leaf { frequency, .. } => *frequency,
            Node::Inner { frequency, .. } => *frequency,
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Inner {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Inner { left, right, .. } => left.height().max(right.height()) + 1,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Inner { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap slot ordered by weight, then by the order in which it was pushed.
struct HeapEntry {
    sequence: usize,
    node: Node,
}

impl HeapEntry {
    fn key(&self) -> (usize, usize) {
        (self.node.frequency(), self.sequence)
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves are seeded in ascending symbol order and every merged node is
    /// pushed with the next sequence number, so nodes of equal weight leave
    /// the heap in the order they entered it.
    pub fn new(frequencies: &FrequencyMap) -> Result<HuffmanTree> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut sequence = 0;
        for (symbol, frequency) in frequencies.iter() {
            let node = Node::Leaf { symbol, frequency };
            heap.push(Reverse(HeapEntry { sequence, node }));
            sequence += 1;
        }

        let root = loop {
            let Reverse(left) = heap.pop().ok_or(Error::EmptyInput)?;
            let Some(Reverse(right)) = heap.pop() else {
                break left.node;
            };
            log::trace!(
                "Merging nodes of weight {} and {}",
                left.node.frequency(),
                right.node.frequency()
            );
            let node = Node::merge(left.node, right.node);
            heap.push(Reverse(HeapEntry { sequence, node }));
            sequence += 1;
        };

        let tree = HuffmanTree { root };
        log::debug!(
            "Built huffman tree with {} leaves, depth {} and weight {}",
            tree.leaf_count(),
            tree.depth(),
            tree.frequency()
        );
        Ok(tree)
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest code the tree produces.
    pub fn depth(&self) -> usize {
        match self.root {
            // a lone leaf is still addressed with a single bit
            Node::Leaf { .. } => 1,
            Node::Inner { .. } => self.root.height(),
        }
    }

    /// Total weight, equal to the length of the counted input.
    pub fn frequency(&self) -> usize {
        self.root.frequency()
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl Node {
    fn get_string(&self) -> Vec<String> {
        match self {
            Node::Leaf { symbol, frequency } => {
                vec![format!("(s:{},f:{})", display_symbol(*symbol), frequency)]
            }
            Node::Inner { left, right, .. } => {
                let left_box: Vec<String> = left.get_string();
                let right_box: Vec<String> = right.get_string();
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = center_of_first_line(&left_box[0]);
                let right_pos = center_of_first_line(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                let left_depth = left_box.len();
                let right_depth = right_box.len();
                for i in 0..std::cmp::max(left_depth, right_depth) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

fn center_of_first_line(line: &str) -> usize {
    let offset = line.chars().position(|c| c != ' ').unwrap_or(0);
    (offset * 2 + line.trim().chars().count()) / 2
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.root.get_string().iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuffmanTree")
            .field("leaf_count", &self.leaf_count())
            .field("depth", &self.depth())
            .field("frequency", &self.frequency())
            .finish()
    }
}
