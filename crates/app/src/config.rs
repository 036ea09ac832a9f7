//! Configuration for the huffpack command line.
//!
//! Hand-rolled argument parsing: a subcommand followed by flags. The only
//! randomized default is the sample-generator seed, which falls back to the
//! current time but is always printed so runs are reproducible.

use std::path::PathBuf;

/// Default generated-sample size: 256 KiB.
const DEFAULT_SAMPLE_BYTES: usize = 256 * 1024;

/// What the user asked the tool to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compress `input` into a container at `output`.
    Compress { input: PathBuf, output: PathBuf },
    /// Decompress the container at `input` into `output`.
    Decompress { input: PathBuf, output: PathBuf },
    /// Write a generated sample input to `output`.
    GenSample {
        output: PathBuf,
        seed: u64,
        size_bytes: usize,
    },
}

/// Complete configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,

    /// Whether to print the size/timing summary after the transform.
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name
    /// excluded).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let Some((subcommand, rest)) = args.split_first() else {
            print_help();
            return Err("missing subcommand".to_string());
        };

        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut size_bytes: Option<usize> = None;
        let mut print_stats = true;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= rest.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input = Some(PathBuf::from(&rest[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= rest.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output = Some(PathBuf::from(&rest[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= rest.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(rest[i].parse().map_err(|_| "invalid seed")?);
                }
                "--size" => {
                    i += 1;
                    if i >= rest.len() {
                        return Err("--size requires a number".to_string());
                    }
                    size_bytes = Some(rest[i].parse().map_err(|_| "invalid size")?);
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => {
                    return Err(format!("unknown argument: {other}"));
                }
            }
            i += 1;
        }

        let command = match subcommand.as_str() {
            "compress" => Command::Compress {
                input: input.ok_or("compress requires --in <PATH>")?,
                output: output.ok_or("compress requires --out <PATH>")?,
            },
            "decompress" => Command::Decompress {
                input: input.ok_or("decompress requires --in <PATH>")?,
                output: output.ok_or("decompress requires --out <PATH>")?,
            },
            "gen-sample" => Command::GenSample {
                output: output.ok_or("gen-sample requires --out <PATH>")?,
                seed: seed.unwrap_or_else(time_seed),
                size_bytes: size_bytes.unwrap_or(DEFAULT_SAMPLE_BYTES),
            },
            "help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                return Err(format!("unknown subcommand: {other}"));
            }
        };

        Ok(Config {
            command,
            print_stats,
        })
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn print_help() {
    println!("huffpack: static Huffman file compression");
    println!();
    println!("USAGE:");
    println!("    huffpack <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    compress      Compress a file (--in, --out required)");
    println!("    decompress    Decompress a container (--in, --out required)");
    println!("    gen-sample    Generate a sample input file (--out required)");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>     Input file");
    println!("    --out <PATH>    Output file");
    println!("    --seed <N>      Sample generator seed (default: current time)");
    println!("    --size <N>      Sample size in bytes (default: 262144)");
    println!("    --no-stats      Don't print the size/timing summary");
    println!("    --help, -h      Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack compress --in notes.txt --out notes.huf");
    println!("    huffpack decompress --in notes.huf --out notes.txt");
    println!("    huffpack gen-sample --out sample.bin --seed 42 --size 1048576");
    println!();
}
