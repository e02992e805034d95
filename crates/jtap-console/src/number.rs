//! Strict unsigned literal parsing for command arguments.

use jtap_types::error::{JtapError, Result};

/// Parse an unsigned 32-bit literal.
///
/// Two forms are accepted, tried in order: hexadecimal with a mandatory
/// `0x` prefix, then plain decimal. Either form must consume the entire
/// string -- trailing characters, sign characters, an empty string, or a
/// bare `0x` are all syntax errors, as is a value wider than 32 bits.
pub fn parse_uint(text: &str) -> Result<u32> {
    if let Some(digits) = text.strip_prefix("0x") {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            if let Ok(value) = u32::from_str_radix(digits, 16) {
                return Ok(value);
            }
        }
    } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = text.parse::<u32>() {
            return Ok(value);
        }
    }
    Err(JtapError::Syntax(format!("not a number: '{text}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal() {
        assert_eq!(parse_uint("0x1A").unwrap(), 26);
    }

    #[test]
    fn hex_lowercase_digits() {
        assert_eq!(parse_uint("0xdeadbeef").unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn hex_max_value() {
        assert_eq!(parse_uint("0xFFFFFFFF").unwrap(), u32::MAX);
    }

    #[test]
    fn decimal_literal() {
        assert_eq!(parse_uint("26").unwrap(), 26);
    }

    #[test]
    fn decimal_zero() {
        assert_eq!(parse_uint("0").unwrap(), 0);
    }

    #[test]
    fn trailing_garbage_rejected() {
        assert!(matches!(parse_uint("26x"), Err(JtapError::Syntax(_))));
    }

    #[test]
    fn hex_trailing_garbage_rejected() {
        assert!(matches!(parse_uint("0x1Ag"), Err(JtapError::Syntax(_))));
    }

    #[test]
    fn bare_hex_prefix_rejected() {
        assert!(matches!(parse_uint("0x"), Err(JtapError::Syntax(_))));
    }

    #[test]
    fn uppercase_hex_prefix_rejected() {
        // The prefix marker itself is literal: only `0x`, not `0X`.
        assert!(matches!(parse_uint("0X1A"), Err(JtapError::Syntax(_))));
    }

    #[test]
    fn empty_string_rejected() {
        assert!(matches!(parse_uint(""), Err(JtapError::Syntax(_))));
    }

    #[test]
    fn sign_characters_rejected() {
        assert!(matches!(parse_uint("+26"), Err(JtapError::Syntax(_))));
        assert!(matches!(parse_uint("-1"), Err(JtapError::Syntax(_))));
    }

    #[test]
    fn whitespace_rejected() {
        assert!(matches!(parse_uint(" 26"), Err(JtapError::Syntax(_))));
        assert!(matches!(parse_uint("26 "), Err(JtapError::Syntax(_))));
    }

    #[test]
    fn overflow_rejected() {
        assert!(matches!(parse_uint("4294967296"), Err(JtapError::Syntax(_))));
        assert!(matches!(
            parse_uint("0x100000000"),
            Err(JtapError::Syntax(_))
        ));
    }

    #[test]
    fn error_message_names_the_input() {
        let err = parse_uint("zz").unwrap_err();
        assert!(format!("{err}").contains("'zz'"));
    }
}
