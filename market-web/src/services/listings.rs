//! Listing repository: remote spreadsheet store with local mirror fallback.

use std::collections::HashSet;

use chrono::Utc;
use gloo_net::http::Request;
use shared::dto::{LandListing, ListingDraft};
use thiserror::Error;

use crate::services::storage;
use crate::utils::codegen;
use crate::utils::constants::SHEET_ENDPOINT;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("network error: {0}")]
    Network(String),

    #[error("remote store rejected the request (HTTP {0})")]
    Rejected(u16),

    #[error("remote store returned a malformed listing array: {0}")]
    Decode(String),

    #[error("could not allocate an unused listing code")]
    CodeSpaceExhausted,
}

async fn fetch_remote() -> Result<Vec<LandListing>, ListingError> {
    // Cache buster: the sheet endpoint otherwise serves stale reads.
    let url = format!(
        "{}?action=getListings&_={}",
        SHEET_ENDPOINT,
        js_sys::Date::now() as u64
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| ListingError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(ListingError::Rejected(response.status()));
    }
    response
        .json::<Vec<LandListing>>()
        .await
        .map_err(|err| ListingError::Decode(err.to_string()))
}

/// Current listings, unsorted and unfiltered; ordering and filtering belong
/// to the caller. Falls back to the local mirror (possibly empty) on any
/// network, HTTP, or decode failure. Fetched results are not written back to
/// the mirror; only submissions are.
pub async fn fetch_listings() -> Vec<LandListing> {
    match fetch_remote().await {
        Ok(listings) => listings,
        Err(err) => {
            log::warn!("falling back to local mirror: {err}");
            storage::load_listings()
        }
    }
}

/// Submit a new listing: assign identifiers, post to the remote store, then
/// append to the local mirror.
///
/// The code is drawn until it collides with none of the listings visible at
/// submission time. That check reads through [`fetch_listings`], so a remote
/// outage narrows it to the mirror and collisions stay possible against rows
/// this client has never seen.
pub async fn submit_listing(draft: ListingDraft) -> Result<LandListing, ListingError> {
    let taken: HashSet<String> = fetch_listings()
        .await
        .into_iter()
        .map(|listing| listing.code)
        .collect();
    let code =
        codegen::unused_code(|code| taken.contains(code)).ok_or(ListingError::CodeSpaceExhausted)?;

    let now = Utc::now();
    let listing = LandListing::from_draft(draft, codegen::listing_id(&now), code, now.to_rfc3339());

    let url = format!("{}?{}", SHEET_ENDPOINT, listing.add_listing_query());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| ListingError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(ListingError::Rejected(response.status()));
    }

    storage::append_listing(&listing);
    log::info!("listing {} posted with code {}", listing.id, listing.code);
    Ok(listing)
}
