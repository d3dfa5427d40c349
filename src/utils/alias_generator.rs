//! Random alias candidate generation.
//!
//! The generator is a pure function over a character set: it performs no I/O,
//! keeps no state, and never fails. Collisions with already-stored aliases
//! are possible by design and are handled by the caller's retry loop.

use rand::Rng;

/// Alphabet used for generated aliases: `a-z`, `A-Z`, `0-9` and underscore.
pub const ALIAS_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 10;

/// Generates a random alias of `length` characters drawn independently and
/// uniformly from `alphabet`.
///
/// Uses the thread-local RNG, which is seeded from OS entropy, so repeated
/// calls within the same instant still produce independent candidates.
///
/// `alphabet` must not be empty; [`crate::config::Config::validate`] enforces
/// this before the generator is ever called.
pub fn generate_alias(length: usize, alphabet: &str) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    let mut rng = rand::rng();

    (0..length)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect()
}
