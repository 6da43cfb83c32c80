use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use ptbl::{generate, parse_partitions, ParsePolicy, PtblError};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

const USAGE: &str = "ptbl partcount part1name part1size part1type ...";

#[derive(Parser)]
#[command(
    about = "ProDOS/HFS Partition Table Generator",
    long_about = "Writes an Apple partition table (driver descriptor plus one map entry per \
                  partition) for the given partitions. Concatenate it with the partition \
                  images, in the same order, to build the disk image."
)]
struct Cli {
    /// Number of partitions to create
    #[arg(value_name = "PARTCOUNT")]
    count: String,
    /// Volume label, size in 512-byte blocks and type ("Apple_PRODOS" or "Apple_HFS") of each partition.
    /// Options must come before PARTCOUNT; everything after it is taken literally.
    #[arg(
        value_name = "NAME SIZE TYPE",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    fields: Vec<OsString>,
    /// Write the table to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Accept numbers the way the original C tool did (hex/octal, junk ignored)
    #[arg(long)]
    legacy: bool,
    /// Log the computed layout to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    let policy = if cli.legacy { ParsePolicy::Legacy } else { ParsePolicy::Strict };
    let table = match parse_partitions(&cli.count, &cli.fields, policy).and_then(|parts| generate(&parts)) {
        Ok(table) => table,
        Err(PtblError::Io(e)) => return Err(e).context("Failed to encode partition table"),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: {}", USAGE);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            let mut file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(&table).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", table.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&table).context("Failed to write partition table to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
