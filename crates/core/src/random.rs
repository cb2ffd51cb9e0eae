//! Random alphanumeric strings.
//!
//! Uses a general-purpose PRNG. Do not use these strings as secrets.

use rand::Rng;

/// Length used when callers have no preference.
pub const DEFAULT_LENGTH: usize = 20;

/// The 62 characters strings are drawn from.
pub const ALPHABET: &[u8; 62] = b"56789abcdefghijklmABCDEFGHIJKLM01234nopqrstuvwxyzNOPQRSTUVWXYZ";

/// Generates a random string of `length` characters using the thread-local RNG.
#[must_use]
pub fn random_string(length: usize) -> String {
    random_string_with(&mut rand::thread_rng(), length)
}

/// Generates a random string of `length` characters from `rng`.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_is_62_unique_alphanumerics() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn test_default_length() {
        assert_eq!(random_string(DEFAULT_LENGTH).len(), 20);
    }

    #[test]
    fn test_requested_length() {
        assert_eq!(random_string(0), "");
        assert_eq!(random_string(1).len(), 1);
        assert_eq!(random_string(257).len(), 257);
    }

    #[test]
    fn test_only_alphabet_characters() {
        let s = random_string(500);
        assert!(s.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = random_string_with(&mut StdRng::seed_from_u64(7), 32);
        let b = random_string_with(&mut StdRng::seed_from_u64(7), 32);
        assert_eq!(a, b);
    }
}
