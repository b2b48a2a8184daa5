//! A [`DuvSession`] owns the queue of values that are waiting to be paired up. Values arrive in
//! chunks that don't have to line up with pairs: a chunk can hold one half of a pair, several whole
//! pairs, or a whole spreadsheet column pasted in at once. The session keeps the leftover value
//! around until its partner shows up.

use std::collections::VecDeque;

use crate::chromaticity::Chromaticity;
use crate::numeric::{parse_chunk, NumericParseError};

/// Everything that came out of processing a single chunk of input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChunkOutcome {
    /// Duv values for every pair completed by this chunk, in input order.
    pub results: Vec<f64>,
    /// Tokens that couldn't be parsed and were dropped.
    pub diagnostics: Vec<NumericParseError>,
}

/// A running calculation over a stream of chromaticity values. Independent sessions don't share
/// any state.
/// # Example
/// ```
/// # use duv::session::DuvSession;
/// let mut session = DuvSession::new();
/// // half a pair: nothing to compute yet
/// assert!(session.on_input(Some("4525")).results.is_empty());
/// let outcome = session.on_input(Some("4037"));
/// assert_eq!(outcome.results.len(), 1);
/// assert_eq!(format!("{:.4}", outcome.results[0]), "-0.0019");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DuvSession {
    buffer: VecDeque<f64>,
}

impl DuvSession {
    /// Creates a session with nothing buffered.
    pub fn new() -> DuvSession {
        DuvSession::default()
    }

    /// Parses a chunk and queues every value that parsed. Tokens that didn't parse are returned and
    /// otherwise ignored, so they never shift which values end up paired together.
    pub fn push_chunk(&mut self, chunk: Option<&str>) -> Vec<NumericParseError> {
        let mut diagnostics = Vec::new();
        for parsed in parse_chunk(chunk) {
            match parsed {
                Ok(value) => {
                    tracing::trace!(value, "buffered value");
                    self.buffer.push_back(value);
                }
                Err(err) => diagnostics.push(err),
            }
        }
        diagnostics
    }

    /// Takes the two oldest values off the queue as an (x, y) pair, or `None` if there aren't two
    /// values yet.
    pub fn pop_pair(&mut self) -> Option<Chromaticity> {
        if self.buffer.len() < 2 {
            return None;
        }
        let x = self.buffer.pop_front()?;
        let y = self.buffer.pop_front()?;
        Some(Chromaticity { x, y })
    }

    /// Computes Duv for every complete pair in the queue. At most one value is left buffered
    /// afterwards.
    pub fn drain(&mut self) -> Vec<f64> {
        let mut results = Vec::new();
        while let Some(xy) = self.pop_pair() {
            let duv = xy.duv();
            tracing::debug!(x = xy.x, y = xy.y, duv, "computed pair");
            results.push(duv);
        }
        results
    }

    /// Processes one chunk of input from start to finish: parse, queue, then drain every pair that
    /// is now complete.
    pub fn on_input(&mut self, chunk: Option<&str>) -> ChunkOutcome {
        let diagnostics = self.push_chunk(chunk);
        let results = self.drain();
        ChunkOutcome {
            results,
            diagnostics,
        }
    }

    /// How many values are waiting for a partner.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}
