//! Binary message symbols.
//!
//! This module contains the struct [`Bit`], which represents a single binary
//! symbol of a message to be line-coded, and the [`parse`] function, which
//! validates and converts a string of '0' and '1' characters into a message.
//!
//! Validation happens here, at the boundary: the encoders in
//! [`encoder`](crate::encoder) are total functions over `&[Bit]` and have no
//! error paths of their own.

use std::fmt;
use thiserror::Error;

/// Binary message symbol.
///
/// A message is an ordered sequence of these, typically obtained with
/// [`parse`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Bit {
    /// The symbol 0.
    Zero,
    /// The symbol 1.
    One,
}

impl Bit {
    /// Returns `true` if the bit is [`Bit::Zero`].
    pub fn is_zero(&self) -> bool {
        matches!(self, Bit::Zero)
    }

    /// Returns `true` if the bit is [`Bit::One`].
    pub fn is_one(&self) -> bool {
        matches!(self, Bit::One)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Bit {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Bit::Zero => '0',
            Bit::One => '1',
        };
        write!(f, "{}", c)
    }
}

/// Message parse error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The string contains a character outside the alphabet {'0', '1'}.
    #[error("invalid character {character:?} at position {position} (only '0' and '1' are allowed)")]
    InvalidCharacter {
        /// Zero-based position of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },
}

/// Parses a string of '0' and '1' characters into a message.
///
/// The empty string parses to an empty message. Any character outside the
/// binary alphabet produces an [`Error::InvalidCharacter`] naming the first
/// offending position.
///
/// # Examples
/// ```
/// # use linecode_toolbox::bits::{parse, Bit};
/// let message = parse("101").unwrap();
/// assert_eq!(message, vec![Bit::One, Bit::Zero, Bit::One]);
/// assert!(parse("10x1").is_err());
/// ```
pub fn parse(data: &str) -> Result<Vec<Bit>, Error> {
    data.chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            _ => Err(Error::InvalidCharacter {
                position,
                character,
            }),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(
            parse("0110").unwrap(),
            vec![Bit::Zero, Bit::One, Bit::One, Bit::Zero]
        );
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse("").unwrap(), Vec::new());
    }

    #[test]
    fn parse_rejects_first_bad_character() {
        assert_eq!(
            parse("01a0b"),
            Err(Error::InvalidCharacter {
                position: 2,
                character: 'a'
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Bit::Zero.to_string(), "0");
        assert_eq!(Bit::One.to_string(), "1");
    }

    #[test]
    fn from_bool() {
        assert_eq!(Bit::from(false), Bit::Zero);
        assert_eq!(Bit::from(true), Bit::One);
    }
}
