//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: the [`DuvSession`] that drives everything, the coordinate types, the parse error, and
//! the output formatter.

pub use crate::chromaticity::{duv, Chromaticity, UCSCoord};
pub use crate::numeric::NumericParseError;
pub use crate::output::format_duv;
pub use crate::session::{ChunkOutcome, DuvSession};
