//! Application constants

/// Spreadsheet-backed endpoint every remote call goes through.
pub const SHEET_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbx4QoZm1vXc9pTiBhLwSMPMarketSheet/exec";

/// Admin bKash number buyers send money to (Send Money only).
pub const ADMIN_NUMBER: &str = "01712345678";

/// Smallest accepted marketplace payment, in BDT.
pub const MIN_AMOUNT: u32 = 10;

/// Property photo upload cap.
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

// Local mirror keys
pub const USER_STORAGE_KEY: &str = "smp_market_user";
pub const LISTINGS_STORAGE_KEY: &str = "smp_market_listings";
