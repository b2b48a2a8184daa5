//! Driving a [`DuvSession`] from text input and writing its results. The binary is a thin shell
//! around [`run_args`] and [`run_lines`]; they take any reader and writer so the whole flow can be
//! exercised without a terminal.

use std::io::{self, BufRead, Write};

use crate::session::{ChunkOutcome, DuvSession};

/// Formats a Duv value with exactly four decimals and `.` as the separator, whatever the locale.
/// Non-finite values use Rust's float formatting (`NaN`, `inf`, `-inf`), so an infinity prints as
/// `inf` and not `Infinity`.
///
/// Rounding is half-to-even on the exact binary value, not half-up on the shortest decimal string.
/// `0.00015` is stored slightly below the tie and prints `0.0001`; `0.00025` is stored slightly
/// above it and prints `0.0003`.
/// # Example
/// ```
/// # use duv::output::format_duv;
/// assert_eq!(format_duv(-0.0019329), "-0.0019");
/// assert_eq!(format_duv(f64::NAN), "NaN");
/// ```
pub fn format_duv(value: f64) -> String {
    format!("{:.4}", value)
}

/// Reports dropped tokens as warnings and writes one line per result. Flushes afterwards so results
/// show up while the user is still typing.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &ChunkOutcome) -> io::Result<()> {
    for err in &outcome.diagnostics {
        tracing::warn!(token = err.token(), "dropping token: {}", err);
    }
    for &duv in &outcome.results {
        writeln!(out, "{}", format_duv(duv))?;
    }
    out.flush()
}

/// Treats all of the arguments as one chunk, joined by single spaces.
pub fn run_args<S: AsRef<str>, W: Write>(
    session: &mut DuvSession,
    args: &[S],
    out: &mut W,
) -> io::Result<()> {
    let joined = args
        .iter()
        .map(|arg| arg.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    let outcome = session.on_input(Some(&joined));
    write_outcome(out, &outcome)
}

/// Processes the input a line at a time until it runs out. Each line is its own chunk, so a value
/// left over at the end of one line pairs up with the first value of the next.
///
/// Lines that aren't valid UTF-8 are decoded lossily: the broken bytes become `U+FFFD`, which fails
/// to parse and is dropped like any other bad token. Only real I/O errors stop the loop.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut DuvSession,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    for line in input.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let outcome = session.on_input(Some(&line));
        write_outcome(out, &outcome)?;
    }
    if session.pending() > 0 {
        tracing::debug!(pending = session.pending(), "input ended with an unpaired value");
    }
    Ok(())
}
