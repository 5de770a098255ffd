//! Listing identifier generation.
//!
//! Codes are what buyers type into the checkout form, so they stay short:
//! `#` plus six characters from a 36-character alphabet (~2.2 billion
//! combinations). Raw draws are not guaranteed unique; the listing repository
//! re-draws against the codes currently visible before accepting one
//! ([`unused_code`]).

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Buyer-facing code alphabet.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Characters after the `#` prefix.
const CODE_LEN: usize = 6;
/// Re-draw cap before the repository gives up on a submission.
pub const MAX_CODE_ATTEMPTS: usize = 8;

/// Draw `len` alphabet characters from a fresh UUID's random bytes.
fn random_chars(len: usize) -> String {
    let uuid = Uuid::new_v4();
    // The leading bytes of a v4 UUID carry no version/variant bits.
    uuid.as_bytes()[..len]
        .iter()
        .map(|byte| CODE_ALPHABET[*byte as usize % CODE_ALPHABET.len()] as char)
        .collect()
}

/// One raw listing code, e.g. `#A1B2C3`.
pub fn listing_code() -> String {
    format!("#{}", random_chars(CODE_LEN))
}

/// Display identifier, e.g. `ID-25-A1B2C`.
pub fn listing_id(now: &DateTime<Utc>) -> String {
    format!("ID-{}-{}", now.format("%y"), random_chars(5))
}

/// Draw codes until one is not taken, bounded by [`MAX_CODE_ATTEMPTS`].
pub fn unused_code(is_taken: impl Fn(&str) -> bool) -> Option<String> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = listing_code();
        if !is_taken(&code) {
            return Some(code);
        }
    }
    None
}

/// `true` when a string has the `#XXXXXX` shape of a listing code.
pub fn is_code_shaped(code: &str) -> bool {
    let Some(body) = code.strip_prefix('#') else {
        return false;
    };
    body.len() == CODE_LEN && body.bytes().all(|b| CODE_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_format() {
        for _ in 0..100 {
            let code = listing_code();
            assert!(is_code_shaped(&code), "bad code: {code}");
        }
    }

    #[test]
    fn test_listing_id_format() {
        let now = Utc::now();
        let id = listing_id(&now);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ID");
        assert_eq!(parts[1], now.format("%y").to_string());
        assert_eq!(parts[2].len(), 5);
    }

    #[test]
    fn test_ten_thousand_admitted_codes_are_distinct() {
        let mut taken = HashSet::new();
        for _ in 0..10_000 {
            let code = unused_code(|c| taken.contains(c)).expect("code space far from full");
            assert!(taken.insert(code));
        }
        assert_eq!(taken.len(), 10_000);
    }

    #[test]
    fn test_unused_code_gives_up_when_everything_is_taken() {
        assert_eq!(unused_code(|_| true), None);
    }

    #[test]
    fn test_is_code_shaped_rejects_junk() {
        assert!(is_code_shaped("#A1B2C3"));
        assert!(!is_code_shaped("A1B2C3"));
        assert!(!is_code_shaped("#a1b2c3"));
        assert!(!is_code_shaped("#A1B2"));
        assert!(!is_code_shaped("#A1B2C3D"));
    }
}
