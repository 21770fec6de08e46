use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for halfdft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    /// Run fmt, then clippy
    Analyze,
    Bench,
    /// Transform a WAV file block by block and write the reconstruction
    Roundtrip {
        /// Path to input WAV file
        input: String,
        /// Path to output WAV file
        output: String,
    },
}

#[cfg(not(test))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status()?,
        Commands::Test => test_command(&cfg).status()?,
        Commands::Clippy => clippy_command().status()?,
        Commands::Fmt => fmt_command().status()?,
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                fmt
            } else {
                clippy_command().status()?
            }
        }
        Commands::Bench => bench_command(&cfg).status()?,
        Commands::Roundtrip { input, output } => {
            roundtrip_command(&cfg, &input, &output).status()?
        }
    };

    if !status.success() {
        bail!("task failed with {}", status);
    }
    Ok(())
}
