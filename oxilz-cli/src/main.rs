//! OxiLZ CLI
//!
//! Thin command-line glue over the OxiLZ library crates: all compression
//! logic lives in `oxilz-lz77`, `oxilz-nitro`, and `oxilz-format`; this
//! binary only parses arguments, moves file bytes, and reports timing.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "oxilz")]
#[command(
    author,
    version,
    about = "Pure Rust LZ77/LZ10 compression utility"
)]
#[command(long_about = "
OxiLZ compresses and decompresses byte streams with a classic LZ77
sliding-window codec and the Nintendo LZ10/LZ11 variant.

Examples:
  oxilz compress input.bin output.lz
  oxilz compress --format lz10 sprite.bin sprite.cmp
  oxilz decompress output.lz restored.bin
  oxilz detect mystery.bin
  oxilz inspect output.lz
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Container format
        #[arg(short, long, value_enum, default_value = "standard")]
        format: ContainerFormat,

        /// Search buffer (window) size, classic format only
        #[arg(short, long, default_value_t = oxilz_lz77::DEFAULT_WINDOW_SIZE)]
        window: u16,

        /// Lookahead buffer size, classic format only
        #[arg(short, long, default_value_t = oxilz_lz77::DEFAULT_LOOKAHEAD_SIZE)]
        lookahead: u8,
    },

    /// Decompress a file (format auto-detected)
    #[command(alias = "d")]
    Decompress {
        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Detect the compression format of a file
    Detect {
        /// File to detect
        file: PathBuf,
    },

    /// Show a diagnostic report for a compressed file
    #[command(alias = "i")]
    Inspect {
        /// File to inspect
        file: PathBuf,
    },
}

/// Output container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ContainerFormat {
    /// Classic bit-packed LZ77 container
    Standard,
    /// Nintendo LZ10 container
    Lz10,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            format,
            window,
            lookahead,
        } => cmd_compress(&input, &output, format, window, lookahead),
        Commands::Decompress { input, output } => cmd_decompress(&input, &output),
        Commands::Detect { file } => cmd_detect(&file),
        Commands::Inspect { file } => cmd_inspect(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &PathBuf,
    output: &PathBuf,
    format: ContainerFormat,
    window: u16,
    lookahead: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;

    let start = Instant::now();
    let compressed = match format {
        ContainerFormat::Standard => oxilz_lz77::compress(&data, window, lookahead)?,
        ContainerFormat::Lz10 => oxilz_nitro::compress(&data)?,
    };
    let elapsed = start.elapsed();

    std::fs::write(output, &compressed)?;

    println!(
        "Compressed {} -> {} ({} -> {} bytes) in {:.3}s",
        input.display(),
        output.display(),
        data.len(),
        compressed.len(),
        elapsed.as_secs_f64()
    );
    if !data.is_empty() {
        println!(
            "Ratio: {:.1}%",
            compressed.len() as f64 / data.len() as f64 * 100.0
        );
    }

    Ok(())
}

fn cmd_decompress(input: &PathBuf, output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;

    let start = Instant::now();
    let decompressed = oxilz_format::decompress(&data)?;
    let elapsed = start.elapsed();

    // The Nintendo decoder tolerates a stream that runs out early; make
    // the shortfall visible here.
    if oxilz_format::LzFormat::detect(&data) == oxilz_format::LzFormat::Nintendo {
        let header = oxilz_nitro::NitroHeader::parse(&data)?;
        if decompressed.len() < header.decompressed_size as usize {
            eprintln!(
                "Warning: output is {} bytes short of the declared size",
                header.decompressed_size as usize - decompressed.len()
            );
        }
    }

    std::fs::write(output, &decompressed)?;

    println!(
        "Decompressed {} -> {} ({} -> {} bytes) in {:.3}s",
        input.display(),
        output.display(),
        data.len(),
        decompressed.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn cmd_detect(file: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    let format = oxilz_format::LzFormat::detect(&data);

    println!("File: {}", file.display());
    println!("Format: {}", format);
    if format != oxilz_format::LzFormat::Unknown {
        println!("Extension: .{}", format.extension());
    }

    Ok(())
}

fn cmd_inspect(file: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    print!("{}", oxilz_format::inspect(&data));
    Ok(())
}
