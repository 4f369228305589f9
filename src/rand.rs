//! # Reproducible random functions
//!
//! This module uses the [`ChaCha8Rng`] RNG from the [rand_chacha] crate
//! to achieve reproducible random number generation. It is used to generate
//! random demo messages for the CLI, so that the same seed always produces
//! the same waveforms.
//!
//! # Examples
//! ```
//! # use linecode_toolbox::rand::random_message;
//! let message = random_message(8, 42);
//! assert_eq!(message, random_message(8, 42));
//! ```

use crate::bits::Bit;
use rand::Rng as _;
use rand_chacha::ChaCha8Rng;
pub use rand_chacha::rand_core::SeedableRng;
pub use rand_core::RngCore;

/// The RNG used throughout this crate for algorithms using pseudorandom
/// generation.
pub type Rng = ChaCha8Rng;

/// Generates a reproducible random message of `len` bits.
///
/// The same `len` and `seed` always produce the same message.
pub fn random_message(len: usize, seed: u64) -> Vec<Bit> {
    let mut rng = Rng::seed_from_u64(seed);
    (0..len).map(|_| Bit::from(rng.gen::<bool>())).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_length() {
        assert_eq!(random_message(0, 0).len(), 0);
        assert_eq!(random_message(17, 0).len(), 17);
    }

    #[test]
    fn reproducible() {
        assert_eq!(random_message(32, 7), random_message(32, 7));
    }

    #[test]
    fn seed_changes_message() {
        assert_ne!(random_message(64, 1), random_message(64, 2));
    }
}
