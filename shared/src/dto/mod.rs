//! Data Transfer Objects shared between the storefront and the remote
//! spreadsheet endpoint.

pub mod listing;
pub mod payment;
pub mod user;

pub use listing::{BuildType, LandListing, ListingDraft};
pub use payment::{PaymentRecord, Submission};
pub use user::User;

/// Percent-encode `(key, value)` pairs into a query string.
///
/// The remote endpoint routes entirely on query parameters, so every write
/// DTO funnels through this helper.
pub(crate) fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_escapes_reserved_characters() {
        let query = encode_query(&[("code", "#A1B2C3"), ("price", "250")]);
        assert_eq!(query, "code=%23A1B2C3&price=250");
    }

    #[test]
    fn test_encode_query_keeps_pair_order() {
        let query = encode_query(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert_eq!(query, "a=1&b=2&c=3");
    }
}
