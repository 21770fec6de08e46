use clap::{ArgAction, Parser, Subcommand};
use halfdft::{AnalysisConfig, Overflow};
use halfdft_cli::pcm::{read_pcm16, write_pcm16, Pcm};
use halfdft_cli::{roundtrip, write_spectra, SpectrumOptions};
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Half-spectrum DFT of 16-bit mono WAV files, block by block.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Defaults to RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the spectrum of every block
    Spectrum {
        /// Path to input WAV file
        input: PathBuf,

        /// Samples per block [env: HALFDFT_BLOCK_SIZE, default 512]
        #[arg(long)]
        block_size: Option<usize>,

        /// Print only the stored half of each spectrum
        #[arg(long)]
        half_only: bool,

        /// Stop after this many blocks
        #[arg(long)]
        max_blocks: Option<usize>,
    },
    /// Transform every block, rebuild the signal and write it out
    Roundtrip {
        /// Path to input WAV file
        input: PathBuf,

        /// Path to output WAV file
        output: PathBuf,

        /// Samples per block [env: HALFDFT_BLOCK_SIZE, default 512]
        #[arg(long)]
        block_size: Option<usize>,

        /// Out-of-range sample policy: saturate, wrap or reject
        /// [env: HALFDFT_OVERFLOW, default saturate]
        #[arg(long)]
        overflow: Option<Overflow>,
    },
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn resolve_config(block_size: Option<usize>, overflow: Option<Overflow>) -> AnalysisConfig {
    let mut cfg = AnalysisConfig::from_env();
    if let Some(size) = block_size {
        cfg = cfg.with_block_size(size);
    }
    if let Some(policy) = overflow {
        cfg = cfg.with_overflow(policy);
    }
    cfg
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Spectrum {
            input,
            block_size,
            half_only,
            max_blocks,
        } => {
            let cfg = resolve_config(block_size, None);
            let pcm = read_pcm16(&input)?;
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let opts = SpectrumOptions {
                block_size: cfg.block_size,
                half_only,
                max_blocks,
            };
            write_spectra(&mut out, &pcm.samples, opts)?;
            out.flush()?;
        }
        Commands::Roundtrip {
            input,
            output,
            block_size,
            overflow,
        } => {
            let cfg = resolve_config(block_size, overflow);
            let pcm = read_pcm16(&input)?;
            let (samples, report) = roundtrip(&pcm.samples, cfg)?;
            write_pcm16(
                &output,
                &Pcm {
                    samples,
                    sample_rate: pcm.sample_rate,
                },
            )?;
            println!(
                "blocks: {} samples: {} block size: {} overflow: {} max error: {}",
                report.blocks,
                report.samples,
                cfg.block_size,
                cfg.overflow.name(),
                report.max_error
            );
        }
    }
    Ok(())
}
