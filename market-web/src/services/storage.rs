//! Local mirror over browser local storage.
//!
//! Two keys: the logged-in user record and the cached listing array. Storage
//! failures degrade to empty reads and dropped writes; the mirror is an
//! optimistic cache, not a source of truth.

use shared::dto::{LandListing, User};

use crate::utils::constants::{LISTINGS_STORAGE_KEY, USER_STORAGE_KEY};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_key(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn write_key(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("local mirror write failed for key {key}");
        }
    }
}

/// Saved user record, if a readable one exists.
pub fn load_user() -> Option<User> {
    let raw = read_key(USER_STORAGE_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("corrupt user record in local mirror: {err}");
            None
        }
    }
}

pub fn save_user(user: &User) {
    match serde_json::to_string(user) {
        Ok(json) => write_key(USER_STORAGE_KEY, &json),
        Err(err) => log::warn!("could not serialize user record: {err}"),
    }
}

pub fn clear_user() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_STORAGE_KEY);
    }
}

/// The mirrored listing array; empty when nothing was ever written or the
/// entry is unreadable.
pub fn load_listings() -> Vec<LandListing> {
    let Some(raw) = read_key(LISTINGS_STORAGE_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(listings) => listings,
        Err(err) => {
            log::warn!("corrupt listing array in local mirror: {err}");
            Vec::new()
        }
    }
}

pub fn save_listings(listings: &[LandListing]) {
    match serde_json::to_string(listings) {
        Ok(json) => write_key(LISTINGS_STORAGE_KEY, &json),
        Err(err) => log::warn!("could not serialize listing array: {err}"),
    }
}

/// Read-modify-write append of a freshly submitted listing.
pub fn append_listing(listing: &LandListing) {
    let mut listings = load_listings();
    listings.push(listing.clone());
    save_listings(&listings);
}
