//! Size and timing accounting for a single transform.
//!
//! The codec performs no logging; instead each compress/decompress call
//! returns a [`CodecStats`] so the caller (the CLI, a test, any embedder)
//! can display or assert on what happened.

use std::fmt;
use std::time::Duration;

/// Byte counts and elapsed time for one compress or decompress call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecStats {
    /// Bytes consumed from the source.
    pub input_bytes: u64,
    /// Bytes written to the sink.
    pub output_bytes: u64,
    /// Wall-clock duration of the transform.
    pub elapsed: Duration,
}

impl CodecStats {
    /// Output size as a fraction of input size.
    ///
    /// Below 1.0 means the transform shrank the data. Returns 0.0 for an
    /// empty input rather than dividing by zero.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

impl fmt::Display for CodecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes in, {} bytes out ({:.1}%) in {:.3}s",
            self.input_bytes,
            self.output_bytes,
            self.ratio() * 100.0,
            self.elapsed.as_secs_f64(),
        )
    }
}
