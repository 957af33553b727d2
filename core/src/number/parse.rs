use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::ParseNumberError;

/// Parse an integer, ignoring surrounding whitespace.
pub fn parse_int<T>(input: &str) -> Result<T, ParseNumberError>
where
    T: FromStr<Err = ParseIntError>,
{
    input.trim().parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseNumberError::OutOfRange {
            input: input.to_string(),
        },
        _ => ParseNumberError::Invalid {
            input: input.to_string(),
        },
    })
}

/// Parse a finite float, ignoring surrounding whitespace.
pub fn parse_float(input: &str) -> Result<f64, ParseNumberError> {
    let v = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseNumberError::Invalid {
            input: input.to_string(),
        })?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ParseNumberError::OutOfRange {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_int::<i32>(" 42 "), Ok(42));
        assert_eq!(parse_int::<i8>("-128"), Ok(-128));
        assert_eq!(
            parse_int::<u8>("256"),
            Err(ParseNumberError::OutOfRange { input: "256".into() })
        );
        assert_eq!(
            parse_int::<u8>("abc"),
            Err(ParseNumberError::Invalid { input: "abc".into() })
        );
        assert!(matches!(parse_int::<u32>(""), Err(ParseNumberError::Invalid { .. })));
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float("1.5"), Ok(1.5));
        assert_eq!(parse_float(" -2e3"), Ok(-2000.0));
        assert!(matches!(parse_float("inf"), Err(ParseNumberError::OutOfRange { .. })));
        assert!(matches!(parse_float("1e400"), Err(ParseNumberError::OutOfRange { .. })));
        assert!(matches!(parse_float("x"), Err(ParseNumberError::Invalid { .. })));
    }
}
