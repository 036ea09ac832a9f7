//! Huffman tree construction and code-table derivation.
//!
//! Nodes live in an arena (`Vec`) and reference each other by index, so the
//! tree is a strict single-owner hierarchy with no pointer juggling: a leaf
//! owns its symbol, an internal node owns exactly two child indices, and the
//! whole structure is dropped in one piece when the transform finishes.
//!
//! Codes are explicit `(bits, length)` pairs packed MSB-first. Length is
//! bounded only by tree depth; there is no fixed-width encoding and
//! therefore no cap on code length.

use crate::error::{HuffmanError, Result};
use crate::heap::MinHeap;

/// Number of distinct byte symbols.
pub const ALPHABET_SIZE: usize = 256;

/// A node in the tree arena.
///
/// A leaf carries exactly one symbol and no children; an internal node
/// carries exactly two child indices and no symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u8 },
    Internal { left: usize, right: usize },
}

/// A Huffman tree: arena of nodes plus the root index.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: usize,
}

impl Tree {
    /// Build a tree from a 256-entry frequency histogram.
    ///
    /// Seeds one leaf per nonzero count (in symbol order, which fixes the
    /// tie-break among equal frequencies), then repeatedly combines the two
    /// minimum-weight nodes under a fresh internal node until a single root
    /// remains. A histogram with one distinct symbol yields a tree that is
    /// just that leaf.
    ///
    /// # Errors
    /// Returns `HuffmanError::EmptyInput` if every count is zero.
    pub fn from_frequencies(freqs: &[u64; ALPHABET_SIZE]) -> Result<Self> {
        let distinct = freqs.iter().filter(|&&count| count > 0).count();
        if distinct == 0 {
            return Err(HuffmanError::EmptyInput.into());
        }

        // Final arena size is known up front: n leaves + (n - 1) internals.
        let mut nodes = Vec::with_capacity(2 * distinct - 1);
        let mut heap = MinHeap::with_capacity(distinct);

        for (symbol, &count) in freqs.iter().enumerate() {
            if count > 0 {
                let id = nodes.len();
                nodes.push(Node::Leaf {
                    symbol: symbol as u8,
                });
                heap.push(count, id);
            }
        }

        while heap.len() > 1 {
            let Some((left_weight, left)) = heap.pop_min() else {
                break;
            };
            let Some((right_weight, right)) = heap.pop_min() else {
                break;
            };

            let id = nodes.len();
            nodes.push(Node::Internal { left, right });
            heap.push(left_weight + right_weight, id);
        }

        let root = heap
            .pop_min()
            .map(|(_, id)| id)
            .ok_or(HuffmanError::EmptyInput)?;
        Ok(Self { nodes, root })
    }

    /// Assemble a tree from an already-built arena. Used by the container
    /// parser when reconstructing the tree from its serialized shape.
    pub(crate) fn from_parts(nodes: Vec<Node>, root: usize) -> Self {
        Self { nodes, root }
    }

    /// Index of the root node.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Look up a node by arena index.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    /// Whether the tree is the degenerate single-leaf shape.
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root], Node::Leaf { .. })
    }

    /// Derive the code table: one `(bits, length)` entry per symbol present
    /// in the tree, 0 for a left descent and 1 for a right descent.
    ///
    /// For the single-leaf tree the recorded code has length 0.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::empty();
        let mut path = Vec::new();
        self.assign_codes(self.root, &mut path, &mut table);
        table
    }

    fn assign_codes(&self, id: usize, path: &mut Vec<bool>, table: &mut CodeTable) {
        match self.nodes[id] {
            Node::Leaf { symbol } => {
                table.codes[symbol as usize] = Some(Code::from_path(path));
            }
            Node::Internal { left, right } => {
                path.push(false);
                self.assign_codes(left, path, table);
                path.pop();

                path.push(true);
                self.assign_codes(right, path, table);
                path.pop();
            }
        }
    }
}

/// A single symbol's code: `len` bits packed MSB-first into `bits`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    /// Packed bit sequence; bits past `len` in the final byte are zero.
    pub bits: Vec<u8>,
    /// Number of meaningful bits.
    pub len: usize,
}

impl Code {
    fn from_path(path: &[bool]) -> Self {
        let mut bits = vec![0u8; path.len().div_ceil(8)];
        for (i, &bit) in path.iter().enumerate() {
            if bit {
                bits[i / 8] |= 0x80 >> (i % 8);
            }
        }
        Self {
            bits,
            len: path.len(),
        }
    }
}

/// Mapping from symbol to code for every symbol present in the histogram.
///
/// Symbols absent from the input have no entry and must never be looked up
/// by the encoder.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    fn empty() -> Self {
        const NONE: Option<Code> = None;
        Self {
            codes: [NONE; ALPHABET_SIZE],
        }
    }

    /// The code for `symbol`, or `None` if the symbol was absent from the
    /// histogram the tree was built from.
    pub fn code(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Iterate over `(symbol, code)` pairs for all present symbols.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }
}
