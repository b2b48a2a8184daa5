//! duv computes Duv, the distance between a light source's chromaticity and the blackbody
//! (Planckian) locus, from CIE 1931 xy coordinates. A Duv of zero means the light sits exactly on the
//! locus, like an ideal incandescent source; positive values drift towards green and negative values
//! towards pink.
//!
//! The library is organized as a small pipeline. [`numeric`] turns text (as typed, or pasted out of a
//! spreadsheet with either `.` or `,` as the decimal separator) into values, [`session`] pairs those
//! values up into chromaticities, [`chromaticity`] does the actual math, and [`output`] formats the
//! results.
//!
//! ```
//! # use duv::prelude::*;
//! let mut session = DuvSession::new();
//! let outcome = session.on_input(Some("4356\t4118\n4377\t4101"));
//! let lines: Vec<String> = outcome.results.into_iter().map(format_duv).collect();
//! assert_eq!(lines, vec!["0.0033", "0.0023"]);
//! ```

#![doc(html_root_url = "https://docs.rs/duv/1.0.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.00616793 with -0.006_167_93
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

pub mod chromaticity;
mod consts;
pub mod numeric;
pub mod output;
pub mod prelude;
pub mod session;
