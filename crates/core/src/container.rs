//! The self-describing container format.
//!
//! # Layout
//!
//! ```text
//! +---------------------+
//! | total symbol count  |  ASCII decimal digits
//! +---------------------+
//! | ','                 |  header delimiter
//! +---------------------+
//! | tree shape          |  preorder, left before right:
//! |                     |    '0'            internal node
//! |                     |    '1' <symbol>   leaf (raw 8-bit symbol)
//! +---------------------+
//! | ' '                 |  separator
//! +---------------------+
//! | payload             |  bit-packed codes, MSB-first, zero-padded
//! +---------------------+
//! ```
//!
//! The payload's padding length is not stored; the decoder stops once it has
//! emitted `total` symbols and ignores whatever bits remain.
//!
//! A zero-length input has no tree, so its container is just the two bytes
//! `0,` — header zero, nothing else.
//!
//! Symbol bytes inside the tree shape are raw values and may collide with
//! the marker or separator characters; parsing is strictly positional, so
//! the collision is harmless.

use crate::error::{FormatError, Result};
use crate::tree::{Node, Tree, ALPHABET_SIZE};

/// Marker byte for a leaf node in the serialized tree shape.
pub const LEAF_MARKER: u8 = b'1';
/// Marker byte for an internal node in the serialized tree shape.
pub const INTERNAL_MARKER: u8 = b'0';
/// Terminates the decimal symbol-count header.
pub const HEADER_DELIMITER: u8 = b',';
/// Separates the tree shape from the payload.
pub const SEPARATOR: u8 = b' ';

/// Deepest leaf any tree over a 256-symbol alphabet can have. Shapes that
/// nest past this are malformed regardless of what follows.
const MAX_TREE_DEPTH: usize = ALPHABET_SIZE;

/// A parsed container, borrowing the payload from the input buffer.
#[derive(Debug)]
pub enum Container<'a> {
    /// The empty-input container (`0,`): no tree, no payload.
    Empty,
    /// A container holding at least one symbol.
    Data {
        /// Declared total symbol count (the decode-termination counter).
        total: u64,
        /// The reconstructed Huffman tree.
        tree: Tree,
        /// Bit-packed payload, including trailing padding.
        payload: &'a [u8],
    },
}

/// Serialize the header, tree shape, and separator into `out`.
///
/// The payload follows separately; it is produced by the encoder's bit
/// writer and appended by the caller.
pub fn write_prelude(out: &mut Vec<u8>, total: u64, tree: &Tree) {
    out.extend_from_slice(total.to_string().as_bytes());
    out.push(HEADER_DELIMITER);
    write_shape(out, tree, tree.root());
    out.push(SEPARATOR);
}

/// Serialize the empty-input container: header `0` and nothing else.
pub fn write_empty(out: &mut Vec<u8>) {
    out.push(b'0');
    out.push(HEADER_DELIMITER);
}

fn write_shape(out: &mut Vec<u8>, tree: &Tree, id: usize) {
    match *tree.node(id) {
        Node::Leaf { symbol } => {
            out.push(LEAF_MARKER);
            out.push(symbol);
        }
        Node::Internal { left, right } => {
            out.push(INTERNAL_MARKER);
            write_shape(out, tree, left);
            write_shape(out, tree, right);
        }
    }
}

/// Parse a container from `bytes`.
///
/// # Errors
/// - `FormatError::BadHeader` if the header is not a nonempty run of ASCII
///   digits terminated by `,` (or the count overflows a `u64`)
/// - `FormatError::TruncatedTree` / `InvalidMarker` / `TreeTooDeep` for a
///   malformed tree shape
/// - `FormatError::MissingSeparator` if the byte after the shape is not `' '`
pub fn parse(bytes: &[u8]) -> Result<Container<'_>> {
    let (total, mut pos) = parse_header(bytes)?;
    if total == 0 {
        return Ok(Container::Empty);
    }

    let mut nodes = Vec::new();
    let root = parse_shape(bytes, &mut pos, &mut nodes, 0)?;
    let tree = Tree::from_parts(nodes, root);

    match bytes.get(pos) {
        Some(&SEPARATOR) => pos += 1,
        _ => return Err(FormatError::MissingSeparator.into()),
    }

    Ok(Container::Data {
        total,
        tree,
        payload: &bytes[pos..],
    })
}

/// Parse the decimal header; returns the count and the offset just past the
/// `,` delimiter.
fn parse_header(bytes: &[u8]) -> Result<(u64, usize)> {
    let delimiter = bytes
        .iter()
        .position(|&b| b == HEADER_DELIMITER)
        .ok_or(FormatError::BadHeader)?;
    if delimiter == 0 {
        return Err(FormatError::BadHeader.into());
    }

    let mut total: u64 = 0;
    for &byte in &bytes[..delimiter] {
        if !byte.is_ascii_digit() {
            return Err(FormatError::BadHeader.into());
        }
        total = total
            .checked_mul(10)
            .and_then(|t| t.checked_add((byte - b'0') as u64))
            .ok_or(FormatError::BadHeader)?;
    }

    Ok((total, delimiter + 1))
}

/// Recursively parse one node of the preorder tree shape, pushing it into
/// the arena and returning its index. Internal markers expand left subtree
/// first, then right, mirroring the serialization order.
fn parse_shape(
    bytes: &[u8],
    pos: &mut usize,
    nodes: &mut Vec<Node>,
    depth: usize,
) -> Result<usize> {
    if depth > MAX_TREE_DEPTH {
        return Err(FormatError::TreeTooDeep {
            max: MAX_TREE_DEPTH,
        }
        .into());
    }

    let marker = *bytes
        .get(*pos)
        .ok_or(FormatError::TruncatedTree { offset: *pos })?;
    *pos += 1;

    match marker {
        LEAF_MARKER => {
            let symbol = *bytes
                .get(*pos)
                .ok_or(FormatError::TruncatedTree { offset: *pos })?;
            *pos += 1;
            nodes.push(Node::Leaf { symbol });
            Ok(nodes.len() - 1)
        }
        INTERNAL_MARKER => {
            let left = parse_shape(bytes, pos, nodes, depth + 1)?;
            let right = parse_shape(bytes, pos, nodes, depth + 1)?;
            nodes.push(Node::Internal { left, right });
            Ok(nodes.len() - 1)
        }
        _ => Err(FormatError::InvalidMarker {
            marker,
            offset: *pos - 1,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tree::{Tree, ALPHABET_SIZE};

    fn tree_for(input: &[u8]) -> Tree {
        let mut freqs = [0u64; ALPHABET_SIZE];
        for &byte in input {
            freqs[byte as usize] += 1;
        }
        Tree::from_frequencies(&freqs).unwrap()
    }

    #[test]
    fn single_leaf_prelude_bytes_are_exact() {
        let tree = tree_for(b"aaaa");
        let mut out = Vec::new();
        write_prelude(&mut out, 4, &tree);

        assert_eq!(out, b"4,1a ");
    }

    #[test]
    fn two_leaf_prelude_bytes_are_exact() {
        let tree = tree_for(b"aabb");
        let mut out = Vec::new();
        write_prelude(&mut out, 4, &tree);

        // One internal marker, then the two leaves left-to-right.
        assert_eq!(out, b"4,01a1b ");
    }

    #[test]
    fn empty_container_is_two_bytes() {
        let mut out = Vec::new();
        write_empty(&mut out);
        assert_eq!(out, b"0,");

        assert!(matches!(parse(b"0,").unwrap(), Container::Empty));
    }

    #[test]
    fn shape_round_trips_through_parse() {
        let tree = tree_for(b"the quick brown fox jumps over the lazy dog");
        let mut out = Vec::new();
        write_prelude(&mut out, 43, &tree);
        out.push(0xAB); // stand-in payload byte

        let parsed = parse(&out).unwrap();
        let Container::Data { total, tree: reparsed, payload } = parsed else {
            panic!("expected a data container");
        };
        assert_eq!(total, 43);
        assert_eq!(payload, &[0xAB]);

        let mut reserialized = Vec::new();
        write_prelude(&mut reserialized, 43, &reparsed);
        reserialized.push(0xAB);
        assert_eq!(reserialized, out);
    }

    #[test]
    fn symbol_bytes_colliding_with_markers_parse_cleanly() {
        // Input made of the marker and separator characters themselves.
        let tree = tree_for(b"0011  ,,");
        let mut out = Vec::new();
        write_prelude(&mut out, 8, &tree);

        assert!(matches!(parse(&out).unwrap(), Container::Data { .. }));
    }

    #[test]
    fn header_without_delimiter_is_rejected() {
        let err = parse(b"1234").unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::BadHeader)));
    }

    #[test]
    fn header_with_non_digits_is_rejected() {
        let err = parse(b"12x4,1a ").unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::BadHeader)));

        let err = parse(b",1a ").unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::BadHeader)));
    }

    #[test]
    fn overflowing_header_is_rejected() {
        let err = parse(b"99999999999999999999999999,1a ").unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::BadHeader)));
    }

    #[test]
    fn truncated_shape_is_rejected() {
        // Internal marker promises two subtrees; only one leaf follows.
        let err = parse(b"4,01a").unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::TruncatedTree { .. })
        ));

        // Leaf marker with no symbol byte.
        let err = parse(b"4,1").unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::TruncatedTree { .. })
        ));
    }

    #[test]
    fn unknown_marker_is_rejected() {
        let err = parse(b"4,x").unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::InvalidMarker { marker: b'x', .. })
        ));
    }

    #[test]
    fn missing_separator_is_rejected() {
        let err = parse(b"4,1a").unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::MissingSeparator)));

        let err = parse(b"4,1aX").unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::MissingSeparator)));
    }

    #[test]
    fn runaway_nesting_is_rejected() {
        let mut bytes = b"4,".to_vec();
        bytes.extend(std::iter::repeat(INTERNAL_MARKER).take(4096));

        let err = parse(&bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::TreeTooDeep { .. })
        ));
    }
}
