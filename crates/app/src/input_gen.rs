//! Sample input generation.
//!
//! `gen-sample` produces data with a mix of symbol distributions so the
//! compression ratio is interesting to look at: Huffman coding shines on
//! skewed histograms and does nothing for uniform ones. Generation is
//! seeded, so the same seed always yields the same file.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

/// Section size; each section draws from one distribution.
const SECTION_BYTES: usize = 4096;

/// Generate `size_bytes` of sample data from `seed`.
///
/// Sections rotate through four distributions: runs of a single byte,
/// text-like data over a small alphabet, a heavily skewed two-symbol mix,
/// and uniform random bytes.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(SECTION_BYTES);

        match rng.gen_range(0..8u8) {
            // Runs of one byte: single-leaf territory, near-free to encode.
            0..=1 => {
                let value: u8 = rng.gen();
                data.extend(std::iter::repeat(value).take(section));
            }

            // Text-like: small alphabet, uneven letter frequencies.
            2..=4 => {
                let alphabet = b"etaoin shrdlucmfwypvbgkjqxz.!,\n";
                for _ in 0..section {
                    // Quadratic bias toward the front of the alphabet.
                    let r: f64 = rng.gen();
                    let idx = ((r * r) * alphabet.len() as f64) as usize;
                    data.push(alphabet[idx.min(alphabet.len() - 1)]);
                }
            }

            // Two dominant symbols with occasional noise: deep-ish trees.
            5..=6 => {
                for _ in 0..section {
                    let roll: u8 = rng.gen_range(0..100);
                    data.push(match roll {
                        0..=59 => b'A',
                        60..=94 => b'B',
                        _ => rng.gen(),
                    });
                }
            }

            // Uniform random: incompressible.
            _ => {
                for _ in 0..section {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}

/// Generate sample data and write it to `path`.
pub fn write_sample_file(
    path: &std::path::Path,
    seed: u64,
    size_bytes: usize,
) -> std::io::Result<()> {
    let data = generate_sample_data(seed, size_bytes);
    let mut file = std::fs::File::create(path)?;
    file.write_all(&data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exact_size() {
        for size in [0usize, 1, 100, SECTION_BYTES, SECTION_BYTES + 1, 100_000] {
            assert_eq!(generate_sample_data(3, size).len(), size);
        }
    }

    #[test]
    fn same_seed_same_data() {
        assert_eq!(generate_sample_data(42, 20_000), generate_sample_data(42, 20_000));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate_sample_data(1, 10_000), generate_sample_data(2, 10_000));
    }
}
