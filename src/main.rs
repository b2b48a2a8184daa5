//! duv command-line entrypoint.
//!
//! With values on the command line, they're joined and processed as one chunk. Without any, values
//! are read from standard input a line at a time until it ends, which makes it easy to paste two
//! columns straight out of a spreadsheet.

use std::io::{self, BufWriter};

use clap::{ArgAction, Parser};
use tracing::Level;

use duv::output::{run_args, run_lines};
use duv::session::DuvSession;

/// Calculate Duv from CIE 1931 x and y chromaticity coordinates.
///
/// Values may use `.` or `,` as the decimal separator. Anything greater than 1 is divided by 10000,
/// so `4525 4037` means the same as `0.4525 0.4037`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Show more diagnostics on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// x and y values, alternating. Read from stdin if there are none
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    values: Vec<String>,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    let mut session = DuvSession::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.values.is_empty() {
        let stdin = io::stdin();
        run_lines(&mut session, stdin.lock(), &mut out)
    } else {
        run_args(&mut session, &args.values, &mut out)
    }
}
