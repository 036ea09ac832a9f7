//! huffpack command line: compress, decompress, and generate sample inputs.
//!
//! This binary is a thin presentation layer over `huffpack-core`: it opens
//! the files, runs the transform, and prints the size/timing summary the
//! codec hands back. All codec behavior lives in the library.

mod config;
mod input_gen;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use config::{Command, Config};
use huffpack_core::{compress, decompress, CodecStats};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try: huffpack --help");
            std::process::exit(2);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> huffpack_core::Result<()> {
    match &config.command {
        Command::Compress { input, output } => {
            let stats = transform(input, output, compress)?;
            if config.print_stats {
                println!("compressed {} -> {}", input.display(), output.display());
                println!("  {stats}");
            }
        }
        Command::Decompress { input, output } => {
            let stats = transform(input, output, decompress)?;
            if config.print_stats {
                println!("decompressed {} -> {}", input.display(), output.display());
                println!("  {stats}");
            }
        }
        Command::GenSample {
            output,
            seed,
            size_bytes,
        } => {
            input_gen::write_sample_file(output, *seed, *size_bytes)?;
            if config.print_stats {
                println!(
                    "wrote {} sample bytes to {} (seed {})",
                    size_bytes,
                    output.display(),
                    seed
                );
            }
        }
    }
    Ok(())
}

/// Open source and sink, run the given transform, and return its stats.
///
/// The sink is created in truncate mode: the output file is always a fresh
/// artifact.
fn transform(
    input: &Path,
    output: &Path,
    apply: fn(BufReader<File>, BufWriter<File>) -> huffpack_core::Result<CodecStats>,
) -> huffpack_core::Result<CodecStats> {
    let source = BufReader::new(File::open(input)?);
    let sink = BufWriter::new(File::create(output)?);
    apply(source, sink)
}
