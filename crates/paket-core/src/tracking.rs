//! # Tracking-Number Generation
//!
//! The one piece of original logic in Paket: producing the user-facing
//! package identifier.
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Tracking Number Format                         │
//! │                                                                     │
//! │      A  B  -  1  2  3  4  5  6                                      │
//! │      ──┬──    ────────┬────────                                     │
//! │        │              │                                             │
//! │   two uppercase    six decimal digits                               │
//! │   ASCII letters    (each uniform 0-9)                               │
//! │   (each uniform A-Z)                                                │
//! │                                                                     │
//! │   Keyspace: 26² × 10⁶ = 676M combinations                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collision Policy
//! 676M combinations is a weak uniqueness scheme by logistics standards,
//! but ample for a single-site database. The generator performs **no retry loop**: uniqueness is enforced
//! by the UNIQUE index on `packages.tracking_number`, and an insert conflict
//! is reported to the caller as a failure with a retry suggestion.
//!
//! ## Determinism
//! The generator is generic over [`Rng`] so tests can pass a seeded
//! `StdRng`; production callers use the `thread_rng` convenience form.

use rand::Rng;

/// Number of leading uppercase letters in a tracking number.
const LETTER_COUNT: usize = 2;

/// Number of trailing decimal digits in a tracking number.
const DIGIT_COUNT: usize = 6;

// =============================================================================
// Generation
// =============================================================================

/// Generates a tracking number of the form `LL-DDDDDD` using the given RNG.
///
/// Every character is an independent uniform draw. The result always matches
/// `[A-Z]{2}-[0-9]{6}`.
///
/// ## Example
/// ```rust
/// use rand::SeedableRng;
/// use paket_core::tracking::{generate_tracking_number_with, is_tracking_number};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let number = generate_tracking_number_with(&mut rng);
/// assert!(is_tracking_number(&number));
/// ```
pub fn generate_tracking_number_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut out = String::with_capacity(LETTER_COUNT + 1 + DIGIT_COUNT);

    for _ in 0..LETTER_COUNT {
        out.push(rng.gen_range(b'A'..=b'Z') as char);
    }
    out.push('-');
    for _ in 0..DIGIT_COUNT {
        out.push(rng.gen_range(b'0'..=b'9') as char);
    }

    out
}

/// Generates a tracking number using the thread-local RNG.
///
/// ## Usage
/// ```rust
/// let number = paket_core::generate_tracking_number();
/// assert_eq!(number.len(), 9);
/// ```
pub fn generate_tracking_number() -> String {
    generate_tracking_number_with(&mut rand::thread_rng())
}

// =============================================================================
// Format Check
// =============================================================================

/// Checks whether a string matches the `[A-Z]{2}-[0-9]{6}` format.
///
/// Used for validating user-entered tracking numbers before hitting the
/// database, and in tests asserting the generator's output shape.
pub fn is_tracking_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != LETTER_COUNT + 1 + DIGIT_COUNT {
        return false;
    }

    bytes[..LETTER_COUNT]
        .iter()
        .all(|b| b.is_ascii_uppercase())
        && bytes[LETTER_COUNT] == b'-'
        && bytes[LETTER_COUNT + 1..].iter().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_numbers_match_format() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let number = generate_tracking_number_with(&mut rng);
            assert!(
                is_tracking_number(&number),
                "generated number {number} does not match LL-DDDDDD"
            );
        }
    }

    #[test]
    fn test_thread_rng_form_matches_format() {
        let number = generate_tracking_number();
        assert!(is_tracking_number(&number));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_tracking_number_with(&mut StdRng::seed_from_u64(7));
        let b = generate_tracking_number_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_check_rejects_malformed_input() {
        assert!(is_tracking_number("AB-123456"));

        assert!(!is_tracking_number(""));
        assert!(!is_tracking_number("ab-123456")); // lowercase letters
        assert!(!is_tracking_number("AB-12345")); // too short
        assert!(!is_tracking_number("AB-1234567")); // too long
        assert!(!is_tracking_number("AB_123456")); // wrong separator
        assert!(!is_tracking_number("A1-123456")); // digit in letter slot
        assert!(!is_tracking_number("AB-12345X")); // letter in digit slot
        assert!(!is_tracking_number("АБ-123456")); // Cyrillic letters
    }
}
