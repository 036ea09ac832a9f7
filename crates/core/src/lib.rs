//! huffpack-core: static Huffman byte-stream compression
//!
//! This library implements a lossless compressor/decompressor built on a
//! static Huffman code derived from the input's symbol-frequency histogram:
//! - Counts symbol frequencies in a first pass over the source
//! - Builds the Huffman tree through a deterministic min-heap
//! - Derives explicit `(bits, length)` codes by walking the tree
//! - Serializes a self-describing container: decimal symbol count,
//!   preorder tree shape, and the bit-packed payload
//! - Decodes by reconstructing the tree and walking it bit-by-bit until the
//!   declared symbol count is reached
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `bitio`: Low-level MSB-first bit reading/writing
//! - `heap`: Min-ordered priority structure with a deterministic tie-break
//! - `tree`: Tree construction and code-table derivation
//! - `container`: Container serialization and parsing
//! - `codec`: Compress/decompress orchestration over byte sources and sinks
//! - `stats`: Size and timing results returned to the caller
//!
//! # Design Principles
//!
//! - **No panics**: All failure paths return structured errors
//! - **Deterministic**: The same input always produces the same container
//! - **Self-contained transforms**: Histogram, tree, and code table are
//!   local to one call; independent calls need no coordination
//! - **Silent core**: No logging; results travel back as values

pub mod bitio;
pub mod codec;
pub mod container;
pub mod error;
pub mod heap;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use codec::{compress, compress_bytes, decompress, decompress_bytes};
pub use error::{Error, Result};
pub use stats::CodecStats;
