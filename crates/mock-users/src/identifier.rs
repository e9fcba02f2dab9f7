//! Random identifier generation.
//!
//! All functions take the randomness provider explicitly so callers can pass
//! a seeded generator and get reproducible output.

use rand::Rng;
use uuid::{Builder, Uuid};

use crate::extended_json::{OBJECT_ID_LEN, ObjectId};

/// Number of hexadecimal characters in an email suffix.
pub const EMAIL_SUFFIX_LEN: usize = 6;

/// Domain used for generated email addresses.
pub const EMAIL_DOMAIN: &str = "example.com";

/// Generates a random 24-character lowercase hexadecimal object identifier.
///
/// Each character is drawn independently and uniformly from `0-9a-f`. No
/// uniqueness check is made; collisions are merely improbable.
///
/// # Example
///
/// ```
/// use mock_users::generate_object_id;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let id = generate_object_id(&mut rng);
///
/// assert_eq!(id.as_str().len(), 24);
/// ```
pub fn generate_object_id<R: Rng + ?Sized>(rng: &mut R) -> ObjectId {
    ObjectId::from_generated(random_hex(rng, OBJECT_ID_LEN))
}

/// Generates a random version 4 UUID from the provider's bytes.
pub fn generate_user_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}

/// Generates the random part of an email address.
pub fn email_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_hex(rng, EMAIL_SUFFIX_LEN)
}

/// Formats the email address for the record at `sequence_index`.
///
/// Addresses are numbered from one, so index `0` yields `user1_...`.
///
/// # Example
///
/// ```
/// use mock_users::generate_email;
///
/// assert_eq!(generate_email(1, "a1b2c3"), "user2_a1b2c3@example.com");
/// ```
#[must_use]
pub fn generate_email(sequence_index: usize, suffix: &str) -> String {
    format!("user{}_{suffix}@{EMAIL_DOMAIN}", sequence_index + 1)
}

fn random_hex<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| hex_digit(rng.random_range(0..16))).collect()
}

fn hex_digit(nibble: u8) -> char {
    match nibble {
        0..=9 => char::from(b'0' + nibble),
        _ => char::from(b'a' + (nibble - 10)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;
    use uuid::{Variant, Version};

    use super::*;

    /// Provider that only ever yields zero bits.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn is_lower_hex(value: &str) -> bool {
        value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn object_id_is_24_lowercase_hex() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..100 {
            let id = generate_object_id(&mut rng);
            assert_eq!(id.as_str().len(), OBJECT_ID_LEN);
            assert!(is_lower_hex(id.as_str()), "not lowercase hex: {id}");
        }
    }

    #[test]
    fn object_ids_are_reproducible_for_a_seed() {
        let mut first = ChaCha8Rng::seed_from_u64(2026);
        let mut second = ChaCha8Rng::seed_from_u64(2026);

        assert_eq!(
            generate_object_id(&mut first),
            generate_object_id(&mut second)
        );
    }

    #[test]
    fn object_ids_do_not_repeat_in_practice() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let ids: HashSet<_> = (0..1_000).map(|_| generate_object_id(&mut rng)).collect();

        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn object_id_uses_every_hex_symbol() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let seen: HashSet<char> = (0..200)
            .flat_map(|_| generate_object_id(&mut rng).as_str().chars().collect::<Vec<_>>())
            .collect();

        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn user_id_is_version_4() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let id = generate_user_id(&mut rng);

        assert_eq!(id.get_version(), Some(Version::Random));
        assert_eq!(id.get_variant(), Variant::RFC4122);
    }

    #[test]
    fn user_id_is_version_4_even_for_degenerate_bytes() {
        let id = generate_user_id(&mut ZeroRng);

        assert_eq!(id.get_version_num(), 4);
        assert_eq!(id.to_string(), "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn email_suffix_is_six_lowercase_hex() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let suffix = email_suffix(&mut rng);

        assert_eq!(suffix.len(), EMAIL_SUFFIX_LEN);
        assert!(is_lower_hex(&suffix));
    }

    #[rstest]
    #[case(0, "user1_abcdef@example.com")]
    #[case(1, "user2_abcdef@example.com")]
    #[case(19, "user20_abcdef@example.com")]
    fn email_is_numbered_from_one(#[case] index: usize, #[case] expected: &str) {
        assert_eq!(generate_email(index, "abcdef"), expected);
    }

    #[test]
    fn object_id_from_zero_provider_is_all_zeroes() {
        let id = generate_object_id(&mut ZeroRng);
        assert_eq!(id.as_str(), "000000000000000000000000");
    }

    #[rstest]
    #[case(0, '0')]
    #[case(9, '9')]
    #[case(10, 'a')]
    #[case(15, 'f')]
    fn hex_digit_maps_nibbles(#[case] nibble: u8, #[case] expected: char) {
        assert_eq!(hex_digit(nibble), expected);
    }
}
