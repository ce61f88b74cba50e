//! Short code generation.
//!
//! Codes are drawn uniformly at random, with replacement, from the 62-symbol
//! alphanumeric alphabet. Generation is pure: uniqueness is the caller's
//! concern (see [`crate::application::services::LinkService`]).

use rand::Rng;

/// Default length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Symbols a short code is drawn from: `A-Z`, `a-z`, `0-9`.
pub const CODE_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Codes that would shadow a fixed route segment.
///
/// The allocator treats these as already taken.
pub const RESERVED_CODES: &[&str] = &["health", "shorten", "stats"];

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use link_registry::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    generate_code_with_length(CODE_LENGTH)
}

/// Generates a random short code of `length` characters.
pub fn generate_code_with_length(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` collides with a reserved route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_default_length() {
        assert_eq!(generate_code().len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(
                code.bytes().all(|b| CODE_ALPHABET.contains(&b)),
                "unexpected symbol in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_with_custom_length() {
        assert_eq!(generate_code_with_length(1).len(), 1);
        assert_eq!(generate_code_with_length(12).len(), 12);
        assert!(generate_code_with_length(0).is_empty());
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 1000 draws from 62^6 codes; a collision here is vanishingly unlikely.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_all_symbol_classes() {
        let sample: String = (0..200).map(|_| generate_code()).collect();

        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<&u8> = CODE_ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(is_reserved(reserved), "'{reserved}' should be reserved");
        }
        assert!(!is_reserved("abcDEF"));
    }
}
