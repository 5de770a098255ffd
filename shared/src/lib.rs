//! # Shared Data Contracts Library
//!
//! This library defines the contract between the storefront frontend and the
//! spreadsheet-backed remote endpoint, plus the display helpers used across
//! the application.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the remote endpoint and the local
//!   mirror
//!   - **[`dto::user`]**: Logged-in user record
//!   - **[`dto::listing`]**: Land listings and the sell-flow draft
//!   - **[`dto::payment`]**: Payment submissions and their wire record
//! - **[`utils`]**: Shared formatting utilities
//!
//! ## Wire Format
//!
//! The remote endpoint is GET-only and query-string parameterized, so write
//! DTOs encode themselves as percent-encoded query strings (see
//! [`dto::listing::LandListing::add_listing_query`] and
//! [`dto::payment::PaymentRecord::to_query_string`]). Read responses and the
//! local mirror use JSON with **camelCase** field names (`landX`, `buildType`,
//! `isLoggedIn`, ...) to stay compatible with the sheet's column layout.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
