// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Imperial dimension string parser using nom
//!
//! Architectural drawings write lengths as feet and inches (`17' - 9"`)
//! and footprints as width x depth pairs (`17' - 9" x 12' - 0"`). This
//! module extracts those quantities and resolves them to decimal feet.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while},
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Resolved width x depth footprint in decimal feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub depth: f64,
}

impl Dimension {
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    /// Footprint area in square feet
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }
}

/// Parse decimal number: 17, 7.5, 0.25
fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Skip spaces and tabs
fn ws(input: &str) -> IResult<&str, ()> {
    map(take_while(|c: char| c == ' ' || c == '\t'), |_| ())(input)
}

/// Parse the optional inches tail: - 9", - 7.5"
fn inches_tail(input: &str) -> IResult<&str, f64> {
    preceded(
        tuple((ws, char('-'), ws)),
        terminated(number, pair(ws, char('"'))),
    )(input)
}

/// Parse feet-inches notation: 17' - 9", 12' - 0", 17.9'
///
/// The inches part is optional; drawings occasionally carry decimal feet
/// with no inches component.
fn feet_inches(input: &str) -> IResult<&str, f64> {
    map(
        pair(terminated(number, pair(ws, char('\''))), opt(inches_tail)),
        |(feet, inches)| feet + inches.unwrap_or(0.0) / 12.0,
    )(input)
}

/// Parse spelled-out feet: 10 feet, 9.5 ft
fn spelled_feet(input: &str) -> IResult<&str, f64> {
    terminated(
        number,
        tuple((ws, alt((tag_no_case("feet"), tag_no_case("ft"))))),
    )(input)
}

/// Parse a single length quantity at the start of the input
fn length(input: &str) -> IResult<&str, f64> {
    alt((feet_inches, spelled_feet))(input)
}

/// Replace typographic primes and quotes with their ASCII forms.
///
/// Floor plan tables transcribed from drawings mix straight and curly
/// quote characters; both must resolve to the same quantity.
fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{2033}' => '"',
            other => other,
        })
        .collect()
}

/// Extract one length from `text`, scanning past any surrounding prose
fn scan_length(text: &str) -> Option<f64> {
    for (pos, c) in text.char_indices() {
        if !c.is_ascii_digit() {
            continue;
        }
        // Skip digits inside a larger number (e.g. the "7" of "17")
        if pos > 0 && text[..pos].ends_with(|p: char| p.is_ascii_digit() || p == '.') {
            continue;
        }
        if let Ok((_, value)) = length(&text[pos..]) {
            return Some(value);
        }
    }
    None
}

/// Parse one length quantity embedded in `text`, in decimal feet.
///
/// Accepts feet-inches notation (`17' - 9"` → 17.75), bare decimal feet
/// (`17.9'` → 17.9) and spelled-out feet (`10 feet` → 10.0). Surrounding
/// prose is tolerated, so a height note like `double height (14')`
/// resolves to 14.0.
///
/// Returns [`Error::Malformed`] when no quantity can be found. The
/// silent-zero fallback some generators use for unparseable dimensions
/// is intentionally not offered here; callers decide whether a failure
/// skips the room or aborts the pass.
pub fn parse_length(text: &str) -> Result<f64> {
    let normalized = normalize_quotes(text);
    scan_length(&normalized).ok_or_else(|| Error::malformed(text))
}

/// Parse a width x depth pair such as `10' - 3" x 12' - 7.5"`.
///
/// Width and depth are parsed as two independent quantities on either
/// side of the `x` separator (the multiplication sign `×` is accepted).
pub fn parse_dimensions(text: &str) -> Result<Dimension> {
    let normalized = normalize_quotes(text);
    let (width_text, depth_text) =
        normalized
            .split_once(['x', 'X', '\u{00D7}'])
            .ok_or_else(|| Error::MissingSeparator {
                text: text.to_string(),
            })?;

    let width = scan_length(width_text).ok_or_else(|| Error::malformed(text))?;
    let depth = scan_length(depth_text).ok_or_else(|| Error::malformed(text))?;
    Ok(Dimension::new(width, depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number("17"), Ok(("", 17.0)));
        assert_eq!(number("7.5"), Ok(("", 7.5)));
        assert_eq!(number("10.5\""), Ok(("\"", 10.5)));
    }

    #[test]
    fn test_feet_inches() {
        assert_eq!(feet_inches("17' - 9\""), Ok(("", 17.75)));
        assert_eq!(feet_inches("12' - 0\""), Ok(("", 12.0)));
        assert_eq!(feet_inches("12'-7.5\""), Ok(("", 12.625)));
        assert_eq!(feet_inches("17.9'"), Ok(("", 17.9)));
    }

    #[test]
    fn test_spelled_feet() {
        assert_eq!(spelled_feet("10 feet"), Ok(("", 10.0)));
        assert_eq!(spelled_feet("9.5 ft"), Ok(("", 9.5)));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("17' - 9\"").unwrap(), 17.75);
        assert_eq!(parse_length("12' - 0\"").unwrap(), 12.0);
        assert_eq!(parse_length("10 feet").unwrap(), 10.0);
    }

    #[test]
    fn test_parse_length_embedded() {
        // Prose around the quantity must not break extraction
        assert_eq!(parse_length("double height (14')").unwrap(), 14.0);
    }

    #[test]
    fn test_parse_length_curly_quotes() {
        assert_eq!(parse_length("17\u{2019} - 9\u{201D}").unwrap(), 17.75);
        assert_eq!(parse_length("12\u{2032} - 0\u{2033}").unwrap(), 12.0);
    }

    #[test]
    fn test_parse_length_malformed() {
        assert!(matches!(
            parse_length("garbage"),
            Err(Error::Malformed { .. })
        ));
        // A count is not a length
        assert!(parse_length("2 cars").is_err());
    }

    #[test]
    fn test_parse_dimensions() {
        let dim = parse_dimensions("17' - 9\" x 12' - 0\"").unwrap();
        assert_eq!(dim.width, 17.75);
        assert_eq!(dim.depth, 12.0);

        let dim = parse_dimensions("10' - 3\" x 12' - 7.5\"").unwrap();
        assert_eq!(dim.width, 10.25);
        assert_eq!(dim.depth, 12.625);
    }

    #[test]
    fn test_parse_dimensions_decimal_feet() {
        let dim = parse_dimensions("17.9' x 12'").unwrap();
        assert_eq!(dim.width, 17.9);
        assert_eq!(dim.depth, 12.0);
    }

    #[test]
    fn test_parse_dimensions_missing_separator() {
        assert!(matches!(
            parse_dimensions("17' - 9\""),
            Err(Error::MissingSeparator { .. })
        ));
    }

    #[test]
    fn test_fractional_inches() {
        let dim = parse_dimensions("14' - 9\" x 10' - 4.5\"").unwrap();
        assert_eq!(dim.width, 14.75);
        assert_eq!(dim.depth, 10.375);
    }
}
