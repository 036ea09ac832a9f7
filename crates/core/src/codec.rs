//! Compression and decompression entry points.
//!
//! Both transforms are single-threaded and synchronous. Compression makes
//! two sequential passes over the source (histogram, then encoding), which
//! is why the source must be seekable. All intermediate state (histogram,
//! tree, code table) is local to one call, so independent calls may run on
//! separate threads with no coordination.

use std::io::{Read, Seek, SeekFrom, Write};
use std::time::Instant;

use crate::bitio::{BitReader, BitWriter};
use crate::container::{self, Container};
use crate::error::{FormatError, HuffmanError, Result};
use crate::stats::CodecStats;
use crate::tree::{Node, Tree, ALPHABET_SIZE};

/// Read/write buffer size for streaming passes.
const IO_CHUNK: usize = 64 * 1024;

/// Compress `source` into `sink` as a single container.
///
/// Pass 1 scans the full source to build the frequency histogram; the source
/// is then rewound and pass 2 encodes it symbol-by-symbol through the code
/// table. A zero-length source produces the two-byte empty container and
/// never reaches tree construction.
///
/// The sink receives a complete fresh artifact; on error, bytes already
/// flushed are left as-is.
pub fn compress<R: Read + Seek, W: Write>(mut source: R, mut sink: W) -> Result<CodecStats> {
    let start = Instant::now();

    // Pass 1: histogram.
    let mut freqs = [0u64; ALPHABET_SIZE];
    let mut total: u64 = 0;
    let mut buf = vec![0u8; IO_CHUNK];
    loop {
        let n = source.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            freqs[byte as usize] += 1;
        }
        total += n as u64;
    }

    if total == 0 {
        let mut out = Vec::new();
        container::write_empty(&mut out);
        sink.write_all(&out)?;
        sink.flush()?;
        return Ok(CodecStats {
            input_bytes: 0,
            output_bytes: out.len() as u64,
            elapsed: start.elapsed(),
        });
    }

    let tree = Tree::from_frequencies(&freqs)?;
    let table = tree.code_table();

    let mut prelude = Vec::new();
    container::write_prelude(&mut prelude, total, &tree);
    sink.write_all(&prelude)?;

    // Pass 2: encode.
    source.seek(SeekFrom::Start(0))?;
    let mut writer = BitWriter::new();
    loop {
        let n = source.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            let code = table
                .code(byte)
                .ok_or(HuffmanError::MissingCode { symbol: byte })?;
            writer.write_packed(&code.bits, code.len)?;
        }
    }

    let payload = writer.finish();
    sink.write_all(&payload)?;
    sink.flush()?;

    Ok(CodecStats {
        input_bytes: total,
        output_bytes: (prelude.len() + payload.len()) as u64,
        elapsed: start.elapsed(),
    })
}

/// Decompress a container from `source` into `sink`.
///
/// The source must begin at the container's header byte. Decoding is an
/// explicit state machine over the tree: the cursor starts at the root,
/// descends left on a 0 bit and right on a 1 bit, and on reaching a leaf
/// emits the symbol, decrements the remaining-symbol counter, and resets to
/// the root. It stops exactly when the counter hits zero; pad bits and any
/// trailing bytes are never interpreted.
///
/// # Errors
/// `FormatError` for a malformed or truncated container, `Error::Io` for
/// source/sink failures.
pub fn decompress<R: Read, W: Write>(mut source: R, mut sink: W) -> Result<CodecStats> {
    let start = Instant::now();

    let mut input = Vec::new();
    source.read_to_end(&mut input)?;

    let out_len = match container::parse(&input)? {
        Container::Empty => 0,
        Container::Data {
            total,
            tree,
            payload,
        } => {
            decode_payload(&tree, payload, total, &mut sink)?;
            total
        }
    };
    sink.flush()?;

    Ok(CodecStats {
        input_bytes: input.len() as u64,
        output_bytes: out_len,
        elapsed: start.elapsed(),
    })
}

/// The decode state machine: states are tree nodes, transitions are bit
/// values, and the terminal condition is the remaining-symbol counter
/// reaching zero.
///
/// The leaf check precedes bit consumption, so a single-leaf tree (whose
/// cursor is already at a leaf) emits its symbol `total` times without
/// consuming any payload bits.
fn decode_payload<W: Write>(tree: &Tree, payload: &[u8], total: u64, sink: &mut W) -> Result<()> {
    let mut out = Vec::with_capacity(IO_CHUNK.min(total as usize));
    let mut remaining = total;

    let mut reader = BitReader::new(payload);
    let mut cursor = tree.root();
    while remaining > 0 {
        if let Node::Leaf { symbol } = *tree.node(cursor) {
            out.push(symbol);
            remaining -= 1;
            cursor = tree.root();
            if out.len() >= IO_CHUNK {
                sink.write_all(&out)?;
                out.clear();
            }
            continue;
        }

        let bit = reader
            .read_bit()
            .map_err(|_| FormatError::PayloadExhausted { remaining })?;
        if let Node::Internal { left, right } = *tree.node(cursor) {
            cursor = if bit { right } else { left };
        }
    }

    if !out.is_empty() {
        sink.write_all(&out)?;
    }
    Ok(())
}

/// Compress an in-memory byte slice, returning the container bytes.
pub fn compress_bytes(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress(std::io::Cursor::new(input), &mut out)?;
    Ok(out)
}

/// Decompress an in-memory container, returning the original bytes.
pub fn decompress_bytes(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decompress(std::io::Cursor::new(input), &mut out)?;
    Ok(out)
}
