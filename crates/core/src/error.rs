//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! Each domain (bit I/O, tree construction, container parsing, file I/O)
//! has its own enum, converted into the top-level [`Error`] via `#[from]`.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: reading/writing bits from/to byte buffers
/// - Huffman: tree construction over an invalid histogram
/// - Format: malformed or truncated container during decompression
/// - I/O: source/sink stream operations
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Huffman tree construction error
    #[error("huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Malformed container encountered during decompression
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Source/sink I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the payload
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// Invalid bit count (more than 64 bits at once)
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Huffman tree construction errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols with nonzero frequency (cannot build a tree)
    #[error("empty input: no symbols to build a tree from")]
    EmptyInput,

    /// A symbol with no code-table entry reached the encoder. Only possible
    /// if the source changed between the histogram and encoding passes.
    #[error("symbol {symbol:#04x} has no code; source changed between passes")]
    MissingCode { symbol: u8 },
}

/// Container parsing errors.
///
/// Always fatal to the current decompression call; never silently recovered.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Header is not a `,`-terminated run of ASCII decimal digits
    #[error("invalid container header: expected decimal digits terminated by ','")]
    BadHeader,

    /// Tree shape bytes ran out before a well-formed tree was reconstructed
    #[error("truncated tree shape at byte offset {offset}")]
    TruncatedTree { offset: usize },

    /// Unknown marker byte in the tree shape
    #[error("invalid tree marker {marker:#04x} at byte offset {offset}")]
    InvalidMarker { marker: u8, offset: usize },

    /// Tree shape nests deeper than any tree over a 256-symbol alphabet can
    #[error("tree shape exceeds maximum depth {max}")]
    TreeTooDeep { max: usize },

    /// The separator byte between tree shape and payload is missing
    #[error("missing separator between tree shape and payload")]
    MissingSeparator,

    /// Payload ended before the declared symbol count was decoded
    #[error("payload exhausted with {remaining} symbols still to decode")]
    PayloadExhausted { remaining: u64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
