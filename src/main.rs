use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::{ArgAction, Parser};
use outint::{IntegerTextWriter, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print unsigned 64-bit integers in decimal.
///
/// Values are written back to back unless a separator is given.
#[derive(Debug, Parser)]
#[command(name = "outint", version)]
struct Args {
    /// Values to print
    #[arg(required = true, value_name = "VALUE")]
    values: Vec<Value>,
    /// Text written between two values
    #[arg(short, long)]
    separator: Option<String>,
    /// End the output with a newline
    #[arg(short, long)]
    newline: bool,
    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_values<W: Write>(out: W, args: &Args) -> io::Result<W> {
    let mut writer = IntegerTextWriter::new(out);

    for (i, value) in args.values.iter().enumerate() {
        if let Some(sep) = args.separator.as_deref().filter(|_| i > 0) {
            writer.get_mut().write_all(sep.as_bytes())?;
        }
        writer.write_unsigned_decimal(value.0)?;
    }

    if args.newline {
        writer.get_mut().write_all(b"\n")?;
    }

    Ok(writer.into_inner())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level());

    debug!("Printing {} values", args.values.len());

    let stdout = io::stdout();
    let out = print_values(BufWriter::new(stdout.lock()), &args)
        .context("Failed to write to stdout")?;

    out.into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush stdout")?;

    Ok(())
}
