//! Randomness used while generating usernames.
//!
//! Digit directives and the random-name fallback draw from injected sources
//! so callers that need reproducible output can seed them, and tests can
//! script them.

use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of random decimal digits for `\d`.
pub trait DigitSource {
    /// A digit in `0..=9`.
    fn digit(&mut self) -> u8;
}

/// Source of random person names.
pub trait NameSource {
    fn first_name(&mut self) -> String;

    fn last_name(&mut self) -> String;

    /// A `(first, last)` pair.
    fn full_name(&mut self) -> (String, String) {
        let first = self.first_name();
        (first, self.last_name())
    }
}

/// Default randomness: uniform digits and English names from `fake`.
#[derive(Debug, Clone)]
pub struct Entropy<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> Entropy<R> {
    pub fn new(rng: R) -> Self {
        Entropy { rng }
    }
}

impl Entropy<ChaCha8Rng> {
    /// Deterministic entropy: the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Entropy::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Entropy<ThreadRng> {
    /// Entropy backed by the thread-local generator.
    pub fn thread() -> Self {
        Entropy::new(rand::rng())
    }
}

impl<R: Rng> DigitSource for Entropy<R> {
    fn digit(&mut self) -> u8 {
        self.rng.random_range(0..=9)
    }
}

impl<R: Rng> NameSource for Entropy<R> {
    fn first_name(&mut self) -> String {
        FirstName(EN).fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName(EN).fake_with_rng(&mut self.rng)
    }
}
