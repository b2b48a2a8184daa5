//! This module deals with turning raw text into chromaticity values. Input usually comes from a
//! terminal or from a block pasted out of a spreadsheet, so it has to tolerate both `0.4525` and
//! `0,4525` as decimal notation, any amount of whitespace (including tabs) between values, and the
//! habit of writing coordinates scaled up by 10⁴, like `4525`.

use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Values with a magnitude above this are taken to be scaled by 10⁴ and are divided back down.
pub const SCALE_THRESHOLD: f64 = 1.0;

/// The factor that `4525`-style coordinates are scaled by.
pub const SCALE_FACTOR: f64 = 10000.0;

/// An error in parsing a single decimal token. The offending token is kept so that it can be
/// reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum NumericParseError {
    /// The token contains something other than digits, a sign, or a decimal separator.
    #[error("unexpected non-numeric characters in {0:?}")]
    InvalidNumericCharacters(String),
    /// The token only uses numeric characters, but not in a valid arrangement: several decimal
    /// points, a sign that isn't in front, or no digits at all.
    #[error("invalid numeric syntax in {0:?}")]
    InvalidNumericSyntax(String),
}

impl NumericParseError {
    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            NumericParseError::InvalidNumericCharacters(token)
            | NumericParseError::InvalidNumericSyntax(token) => token,
        }
    }
}

/// Splits a chunk of input into numeric tokens. Commas are rewritten to periods first, so `0,4525`
/// comes out as `0.4525`. An absent chunk is the same as an empty one.
/// # Example
/// ```
/// # use duv::numeric::tokenize;
/// assert_eq!(tokenize(Some("  4356\t4118 0,0033 ")), vec!["4356", "4118", "0.0033"]);
/// assert!(tokenize(None).is_empty());
/// ```
pub fn tokenize(chunk: Option<&str>) -> Vec<String> {
    let chunk = match chunk {
        Some(chunk) => chunk.trim().replace(',', "."),
        None => return Vec::new(),
    };
    WHITESPACE
        .split(&chunk)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a decimal number that uses `.` as its only separator, such as `0.4525`, `-12`, `+.5` or
/// `4525.`. Exponents, grouping separators and special values like `inf` are all rejected.
pub fn parse_decimal(token: &str) -> Result<f64, NumericParseError> {
    if !token.chars().all(|c| "0123456789-+.".contains(c)) {
        return Err(NumericParseError::InvalidNumericCharacters(token.to_string()));
    }
    let unsigned = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    // any sign left over is in the wrong place
    if unsigned.contains(['-', '+']) {
        return Err(NumericParseError::InvalidNumericSyntax(token.to_string()));
    }
    if unsigned.matches('.').count() > 1 || !unsigned.chars().any(|c| c.is_ascii_digit()) {
        return Err(NumericParseError::InvalidNumericSyntax(token.to_string()));
    }
    // only plain decimals are left by now
    token
        .parse()
        .map_err(|_| NumericParseError::InvalidNumericSyntax(token.to_string()))
}

/// Brings `4525`-style coordinates back to `0.4525`. Anything with a magnitude strictly greater
/// than 1 is divided by 10⁴; everything else, including exactly 1, is left alone.
pub fn normalize_scale(value: f64) -> f64 {
    if value.abs() > SCALE_THRESHOLD {
        value / SCALE_FACTOR
    } else {
        value
    }
}

/// Runs a whole chunk through [`tokenize`], [`parse_decimal`] and [`normalize_scale`], giving one
/// outcome per token in input order.
pub fn parse_chunk(chunk: Option<&str>) -> Vec<Result<f64, NumericParseError>> {
    tokenize(chunk)
        .iter()
        .map(|token| parse_decimal(token).map(normalize_scale))
        .collect()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_tokenize_whitespace() {
        assert_eq!(tokenize(Some("0.4525 0.4037")), vec!["0.4525", "0.4037"]);
        // tabs and newlines from spreadsheet pastes
        assert_eq!(
            tokenize(Some("4356\t4118\r\n4377  \t 4101")),
            vec!["4356", "4118", "4377", "4101"]
        );
        assert!(tokenize(Some("")).is_empty());
        assert!(tokenize(Some(" \t  ")).is_empty());
        assert!(tokenize(None).is_empty());
    }

    #[test]
    fn test_tokenize_commas() {
        assert_eq!(tokenize(Some("0,4525 0,4037")), vec!["0.4525", "0.4037"]);
        // a comma is never a token separator
        assert_eq!(tokenize(Some("0,4525,0,4037")), vec!["0.4525.0.4037"]);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0.4525"), Ok(0.4525));
        assert_eq!(parse_decimal("4525"), Ok(4525.0));
        assert_eq!(parse_decimal("-0.0019"), Ok(-0.0019));
        assert_eq!(parse_decimal("+.5"), Ok(0.5));
        assert_eq!(parse_decimal("12."), Ok(12.0));
        assert_eq!(parse_decimal("007"), Ok(7.0));
    }

    #[test]
    fn test_comma_dot_equivalence() {
        let comma = parse_chunk(Some("0,4525"));
        let dot = parse_chunk(Some("0.4525"));
        assert_eq!(comma, dot);
        assert_eq!(comma, vec![Ok(0.4525)]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_decimal("abc"),
            Err(NumericParseError::InvalidNumericCharacters("abc".to_string()))
        );
        assert_eq!(
            parse_decimal("1e5"),
            Err(NumericParseError::InvalidNumericCharacters("1e5".to_string()))
        );
        assert_eq!(
            parse_decimal("inf"),
            Err(NumericParseError::InvalidNumericCharacters("inf".to_string()))
        );
        // grouping separators
        assert_eq!(
            parse_decimal("1.000.5"),
            Err(NumericParseError::InvalidNumericSyntax("1.000.5".to_string()))
        );
        assert_eq!(
            parse_decimal("1-2"),
            Err(NumericParseError::InvalidNumericSyntax("1-2".to_string()))
        );
        assert_eq!(
            parse_decimal("--1"),
            Err(NumericParseError::InvalidNumericSyntax("--1".to_string()))
        );
        assert_eq!(
            parse_decimal("-."),
            Err(NumericParseError::InvalidNumericSyntax("-.".to_string()))
        );
        assert_eq!(
            parse_decimal("+"),
            Err(NumericParseError::InvalidNumericSyntax("+".to_string()))
        );
    }

    #[test]
    fn test_error_message() {
        let err = parse_decimal("abc").unwrap_err();
        assert_eq!(err.token(), "abc");
        assert_eq!(err.to_string(), "unexpected non-numeric characters in \"abc\"");
    }

    #[test]
    fn test_normalize_boundary() {
        assert_eq!(normalize_scale(1.0), 1.0);
        assert!((normalize_scale(1.0001) - 0.00010001).abs() <= 1e-15);
        assert!((normalize_scale(4525.0) - 0.4525).abs() <= 1e-15);
        assert!((normalize_scale(-4525.0) + 0.4525).abs() <= 1e-15);
        assert_eq!(normalize_scale(0.4525), 0.4525);
        assert_eq!(normalize_scale(-1.0), -1.0);
    }

    #[test]
    fn test_parse_chunk_keeps_order() {
        let parsed = parse_chunk(Some("4525 abc 0,4037"));
        assert_eq!(parsed.len(), 3);
        assert!((parsed[0].clone().unwrap() - 0.4525).abs() <= 1e-15);
        assert_eq!(
            parsed[1],
            Err(NumericParseError::InvalidNumericCharacters("abc".to_string()))
        );
        assert_eq!(parsed[2], Ok(0.4037));
        // mixed scales normalize each value on its own
        let mixed = parse_chunk(Some("4525 0.4037"));
        assert!((mixed[0].clone().unwrap() - 0.4525).abs() <= 1e-15);
        assert_eq!(mixed[1], Ok(0.4037));
    }
}
