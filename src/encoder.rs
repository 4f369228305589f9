//! Line code encoders.
//!
//! This module implements the six classic digital baseband line codes handled
//! by this crate. Each encoder is a pure function from a binary message to a
//! sequence of signal levels:
//!
//! - **NRZ-L** and **Manchester** are stateless per-bit maps.
//! - **NRZ-I**, **Bipolar-AMI**, **Pseudoternary** and **Differential
//!   Manchester** carry one integer of state across the message, threaded
//!   through the iteration as an explicit accumulator.
//!
//! The single-rate codes produce one sample per bit; Manchester and
//! Differential Manchester produce two (the mid-bit transition is what makes
//! them self-clocking). An empty message encodes to an empty signal under
//! every scheme.
//!
//! The initial conditions (NRZ-I level 0, AMI/pseudoternary last mark -1 so
//! the first mark is +1, Differential Manchester level 1) are fixed
//! conventions; changing them would change every subsequent emitted value.
//!
//! # Examples
//! ```
//! use linecode_toolbox::{bits, encoder};
//!
//! let message = bits::parse("1101").unwrap();
//! assert_eq!(encoder::bipolar_ami(&message), vec![1, -1, 0, 1]);
//! ```

use crate::bits::Bit;
use clap::ValueEnum;
use enum_iterator::Sequence;
use std::fmt;

/// Signal level.
///
/// Every encoder emits levels in {-1, 0, 1}.
pub type Level = i8;

/// Line code scheme.
///
/// This enum selects one of the six encoders. It is used by the CLI to pick a
/// scheme by name and by [`enum_iterator::all`] to iterate over all of them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Sequence, ValueEnum)]
pub enum Scheme {
    /// Non-Return-to-Zero, Level.
    NrzL,
    /// Non-Return-to-Zero, Invert on ones.
    NrzI,
    /// Bipolar Alternate Mark Inversion.
    BipolarAmi,
    /// Pseudoternary (AMI with the bit roles swapped).
    Pseudoternary,
    /// Manchester (IEEE convention: mid-bit transition encodes the bit).
    Manchester,
    /// Differential Manchester.
    DifferentialManchester,
}

impl Scheme {
    /// Encodes a message with this scheme.
    pub fn encode(&self, message: &[Bit]) -> Vec<Level> {
        match self {
            Scheme::NrzL => nrz_l(message),
            Scheme::NrzI => nrz_i(message),
            Scheme::BipolarAmi => bipolar_ami(message),
            Scheme::Pseudoternary => pseudoternary(message),
            Scheme::Manchester => manchester(message),
            Scheme::DifferentialManchester => differential_manchester(message),
        }
    }

    /// Returns the number of signal samples emitted per message bit.
    ///
    /// This is 1 for the single-rate codes and 2 for Manchester and
    /// Differential Manchester.
    pub fn samples_per_bit(&self) -> usize {
        match self {
            Scheme::NrzL | Scheme::NrzI | Scheme::BipolarAmi | Scheme::Pseudoternary => 1,
            Scheme::Manchester | Scheme::DifferentialManchester => 2,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::BipolarAmi => "Bipolar-AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        };
        write!(f, "{}", name)
    }
}

/// NRZ-L encoder.
///
/// Maps the bit 0 to level 0 and the bit 1 to level 1, one sample per bit.
pub fn nrz_l(message: &[Bit]) -> Vec<Level> {
    message
        .iter()
        .map(|bit| if bit.is_zero() { 0 } else { 1 })
        .collect()
}

/// NRZ-I encoder.
///
/// Starts at level 0; toggles the level on each 1 bit and holds it on each 0
/// bit, emitting the level after the (possible) toggle.
pub fn nrz_i(message: &[Bit]) -> Vec<Level> {
    message
        .iter()
        .scan(0, |level, bit| {
            if bit.is_one() {
                *level = 1 - *level;
            }
            Some(*level)
        })
        .collect()
}

/// Bipolar-AMI encoder.
///
/// Zero bits map to level 0; one bits (marks) alternate between +1 and -1.
/// The first mark is +1.
pub fn bipolar_ami(message: &[Bit]) -> Vec<Level> {
    message
        .iter()
        .scan(-1, |last_mark, bit| {
            Some(if bit.is_zero() {
                0
            } else {
                *last_mark = -*last_mark;
                *last_mark
            })
        })
        .collect()
}

/// Pseudoternary encoder.
///
/// The mirror of [`bipolar_ami`]: one bits map to level 0 and zero bits
/// alternate polarity, starting at +1.
pub fn pseudoternary(message: &[Bit]) -> Vec<Level> {
    message
        .iter()
        .scan(-1, |last_mark, bit| {
            Some(if bit.is_one() {
                0
            } else {
                *last_mark = -*last_mark;
                *last_mark
            })
        })
        .collect()
}

/// Manchester encoder.
///
/// Each bit becomes two samples with a mid-bit transition: 0 encodes as
/// (1, 0) and 1 encodes as (0, 1).
pub fn manchester(message: &[Bit]) -> Vec<Level> {
    let mut signal = Vec::with_capacity(2 * message.len());
    for bit in message {
        if bit.is_zero() {
            signal.extend_from_slice(&[1, 0]);
        } else {
            signal.extend_from_slice(&[0, 1]);
        }
    }
    signal
}

/// Differential Manchester encoder.
///
/// Each bit becomes two samples and always has a mid-bit transition; the bit
/// value is encoded in the presence (0) or absence (1) of an additional
/// transition at the start of the bit interval. The line starts at level 1.
pub fn differential_manchester(message: &[Bit]) -> Vec<Level> {
    message
        .iter()
        .fold(
            (Vec::with_capacity(2 * message.len()), 1),
            |(mut signal, mut level), bit| {
                if bit.is_zero() {
                    level = 1 - level;
                }
                signal.push(level);
                level = 1 - level;
                signal.push(level);
                (signal, level)
            },
        )
        .0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bits::parse;

    fn msg(s: &str) -> Vec<Bit> {
        parse(s).unwrap()
    }

    #[test]
    fn nrz_l_single_bits() {
        assert_eq!(nrz_l(&msg("0")), vec![0]);
        assert_eq!(nrz_l(&msg("1")), vec![1]);
    }

    #[test]
    fn nrz_i_toggles_on_ones() {
        assert_eq!(nrz_i(&msg("1011")), vec![1, 1, 0, 1]);
        assert_eq!(nrz_i(&msg("0000")), vec![0, 0, 0, 0]);
    }

    #[test]
    fn bipolar_ami_alternates_marks() {
        assert_eq!(bipolar_ami(&msg("1101")), vec![1, -1, 0, 1]);
        assert_eq!(bipolar_ami(&msg("000")), vec![0, 0, 0]);
    }

    #[test]
    fn pseudoternary_mirrors_ami() {
        assert_eq!(pseudoternary(&msg("1000")), vec![0, 1, -1, 1]);
        assert_eq!(pseudoternary(&msg("111")), vec![0, 0, 0]);
    }

    #[test]
    fn manchester_mid_bit_transitions() {
        assert_eq!(manchester(&msg("01")), vec![1, 0, 0, 1]);
        assert_eq!(manchester(&msg("1")), vec![0, 1]);
    }

    #[test]
    fn differential_manchester_transitions() {
        assert_eq!(differential_manchester(&msg("00")), vec![0, 1, 0, 1]);
        assert_eq!(differential_manchester(&msg("11")), vec![1, 0, 0, 1]);
        // A 0 after a 1 has a transition at the bit boundary.
        assert_eq!(differential_manchester(&msg("10")), vec![1, 0, 1, 0]);
    }

    #[test]
    fn empty_message_gives_empty_signal() {
        for scheme in enum_iterator::all::<Scheme>() {
            assert_eq!(scheme.encode(&[]), Vec::new(), "{}", scheme);
        }
    }

    #[test]
    fn signal_length_law() {
        let message = msg("1011001");
        for scheme in enum_iterator::all::<Scheme>() {
            assert_eq!(
                scheme.encode(&message).len(),
                scheme.samples_per_bit() * message.len(),
                "{}",
                scheme
            );
        }
    }

    #[test]
    fn encoding_is_idempotent() {
        let message = msg("110100110");
        for scheme in enum_iterator::all::<Scheme>() {
            assert_eq!(scheme.encode(&message), scheme.encode(&message), "{}", scheme);
        }
    }

    #[test]
    fn levels_stay_in_range() {
        let message = msg("0101100111000101");
        for scheme in enum_iterator::all::<Scheme>() {
            for level in scheme.encode(&message) {
                assert!((-1..=1).contains(&level), "{}: level {}", scheme, level);
            }
        }
    }
}
