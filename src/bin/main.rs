//! Print the smallest divisor, or the full factorization, of every integer in a file.
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use factors::io::error::Import;
use factors::io::list::{factorize_file_with, Precision};
use factors::io::output::Format;
use factors::timing::try_measure;

/// Factorize a list of integers by trial division.
#[derive(Parser, Debug)]
#[clap(name = "factors", version, about)]
struct Args {
    /// File with one decimal integer of at least 2 per line
    file: PathBuf,
    /// Print the complete prime factorization instead of the smallest divisor
    #[clap(short, long)]
    full: bool,
    /// Report real, user and system time afterwards, like the `time` command
    #[clap(short, long)]
    time: bool,
    /// Read the values as 64 bit integers, which is faster but rejects values above
    /// 18446744073709551615
    #[clap(long = "u64")]
    fixed_width: bool,
}

fn factorize<W: Write>(args: &Args, out: &mut W) -> Result<(), Import> {
    let format = if args.full { Format::Factorization } else { Format::default() };
    let precision = if args.fixed_width { Precision::U64 } else { Precision::default() };

    factorize_file_with(&args.file, precision, format, out)?;

    Ok(())
}

fn run(args: &Args) -> Result<(), Import> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.time {
        let measurement = try_measure(|| factorize(args, &mut out))?;
        write!(out, "{}", measurement)?;
    } else {
        factorize(args, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
