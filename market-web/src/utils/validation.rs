//! Form validation.
//!
//! Checks run before any network dispatch; a failed check leaves the form
//! editable and never issues a request. Presence checks only, plus the
//! minimum-amount rule for market payments and the photo size cap. The
//! remote sheet does no validation of its own.

use crate::utils::constants::{MAX_IMAGE_BYTES, MIN_AMOUNT};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

fn all_present(fields: &[&str]) -> bool {
    fields.iter().all(|field| !field.trim().is_empty())
}

/// Login form: IGN, Gmail and password are all required.
pub fn validate_login(ign: &str, email: &str, password: &str) -> ValidationResult {
    if !all_present(&[ign, email, password]) {
        return ValidationResult::err("Please fill in every field.");
    }
    ValidationResult::ok()
}

/// Market payment form. `amount` is `None` when the input does not parse.
pub fn validate_market_payment(
    username: &str,
    product_no: &str,
    amount: Option<u32>,
    trx: &str,
) -> ValidationResult {
    if !all_present(&[username, product_no, trx]) || amount.is_none() {
        return ValidationResult::err("Please fill in every field.");
    }
    if amount.is_some_and(|amount| amount < MIN_AMOUNT) {
        return ValidationResult::err(format!("Minimum amount is {} BDT.", MIN_AMOUNT));
    }
    ValidationResult::ok()
}

/// Sell form. `price` is `None` when the input does not parse or is zero.
pub fn validate_listing(
    land_x: &str,
    land_y: &str,
    price: Option<u32>,
    seller_bkash: &str,
) -> ValidationResult {
    if !all_present(&[land_x, land_y, seller_bkash]) || !price.is_some_and(|price| price > 0) {
        return ValidationResult::err("Please fill in every field.");
    }
    ValidationResult::ok()
}

/// Minecraft account order form: every field is required.
pub fn validate_minecraft_order(
    ign: &str,
    email: &str,
    password: &str,
    sender_number: &str,
    trx: &str,
) -> ValidationResult {
    if !all_present(&[ign, email, password, sender_number, trx]) {
        return ValidationResult::err("Please fill in every field.");
    }
    ValidationResult::ok()
}

/// Property photo size cap.
pub fn validate_image_size(bytes: u64) -> ValidationResult {
    if bytes > MAX_IMAGE_BYTES {
        return ValidationResult::err("Image size must be less than 2MB.");
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_every_field() {
        assert!(validate_login("Steve", "steve@gmail.com", "hunter2").is_valid);
        assert!(!validate_login("", "steve@gmail.com", "hunter2").is_valid);
        assert!(!validate_login("Steve", "", "hunter2").is_valid);
        assert!(!validate_login("Steve", "steve@gmail.com", "   ").is_valid);
    }

    #[test]
    fn test_market_payment_minimum_amount() {
        assert!(validate_market_payment("Steve", "#A1B2C3", Some(10), "TRX1").is_valid);
        let below = validate_market_payment("Steve", "#A1B2C3", Some(9), "TRX1");
        assert!(!below.is_valid);
        assert!(below.error.unwrap().contains("Minimum amount"));
    }

    #[test]
    fn test_market_payment_missing_fields() {
        assert!(!validate_market_payment("", "#A1B2C3", Some(50), "TRX1").is_valid);
        assert!(!validate_market_payment("Steve", "#A1B2C3", None, "TRX1").is_valid);
        assert!(!validate_market_payment("Steve", "#A1B2C3", Some(50), "").is_valid);
    }

    #[test]
    fn test_listing_requires_fields_and_positive_price() {
        assert!(validate_listing("1250", "-450", Some(250), "017XXXXXXXX").is_valid);
        assert!(!validate_listing("", "-450", Some(250), "017XXXXXXXX").is_valid);
        assert!(!validate_listing("1250", "-450", Some(0), "017XXXXXXXX").is_valid);
        assert!(!validate_listing("1250", "-450", None, "017XXXXXXXX").is_valid);
    }

    #[test]
    fn test_minecraft_order_requires_every_field() {
        assert!(
            validate_minecraft_order("Steve", "steve@gmail.com", "hunter2", "017X", "TRX1")
                .is_valid
        );
        assert!(!validate_minecraft_order("Steve", "steve@gmail.com", "hunter2", "", "TRX1")
            .is_valid);
    }

    #[test]
    fn test_image_size_cap() {
        assert!(validate_image_size(1024).is_valid);
        assert!(validate_image_size(2 * 1024 * 1024).is_valid);
        assert!(!validate_image_size(2 * 1024 * 1024 + 1).is_valid);
    }
}
