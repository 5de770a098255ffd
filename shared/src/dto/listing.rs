use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::encode_query;

/// What kind of build a listed plot holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BuildType {
    Home,
    Farm,
    Build,
}

impl BuildType {
    pub const ALL: [BuildType; 3] = [BuildType::Home, BuildType::Farm, BuildType::Build];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Home => "Home",
            BuildType::Farm => "Farm",
            BuildType::Build => "Build",
        }
    }
}

/// Sell-form payload before identifiers are assigned.
///
/// Coordinates are free-form strings (players paste them straight from the
/// F3 screen); no range validation happens anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub land_x: String,
    pub land_y: String,
    /// Asking price in BDT.
    pub price: u32,
    pub build_type: BuildType,
    /// Property photo as a data URL, when the seller uploaded one.
    #[serde(default)]
    pub image_url: Option<String>,
    /// bKash number buyers should send the money to.
    pub seller_bkash: String,
}

/// A land listing as stored remotely and mirrored locally.
///
/// `id`, `code` and `timestamp` are generated client-side at submission time;
/// a listing is never mutated or deleted once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LandListing {
    pub id: String,
    /// Short buyer-facing code, e.g. `#A1B2C3`.
    pub code: String,
    pub land_x: String,
    pub land_y: String,
    pub price: u32,
    pub build_type: BuildType,
    #[serde(default)]
    pub image_url: Option<String>,
    pub seller_bkash: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
}

impl LandListing {
    pub fn from_draft(draft: ListingDraft, id: String, code: String, timestamp: String) -> Self {
        Self {
            id,
            code,
            land_x: draft.land_x,
            land_y: draft.land_y,
            price: draft.price,
            build_type: draft.build_type,
            image_url: draft.image_url,
            seller_bkash: draft.seller_bkash,
            timestamp,
        }
    }

    /// Property photo, ignoring the empty-string placeholder older mirror
    /// entries carry.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Creation time in unix milliseconds, for newest-first ordering.
    /// Unparseable timestamps sort last.
    pub fn timestamp_millis(&self) -> i64 {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|ts| ts.timestamp_millis())
            .unwrap_or(0)
    }

    /// Query string for the `addListing` action of the remote endpoint.
    pub fn add_listing_query(&self) -> String {
        let price = self.price.to_string();
        encode_query(&[
            ("action", "addListing"),
            ("id", &self.id),
            ("landX", &self.land_x),
            ("landY", &self.land_y),
            ("price", &price),
            ("buildType", self.build_type.as_str()),
            ("sellerBkash", &self.seller_bkash),
            ("code", &self.code),
            ("imageUrl", self.image_url.as_deref().unwrap_or("")),
            ("timestamp", &self.timestamp),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LandListing {
        LandListing {
            id: "ID-25-A1B2C".to_string(),
            code: "#A1B2C3".to_string(),
            land_x: "1250".to_string(),
            land_y: "-450".to_string(),
            price: 250,
            build_type: BuildType::Farm,
            image_url: None,
            seller_bkash: "017XXXXXXXX".to_string(),
            timestamp: "2025-06-01T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_decodes_sheet_shaped_array() {
        let raw = r##"[{
            "id": "ID-25-A1B2C",
            "code": "#A1B2C3",
            "landX": "1250",
            "landY": "-450",
            "price": 250,
            "buildType": "Farm",
            "imageUrl": "",
            "sellerBkash": "017XXXXXXXX",
            "timestamp": "2025-06-01T12:00:00+00:00"
        }]"##;
        let listings: Vec<LandListing> = serde_json::from_str(raw).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].build_type, BuildType::Farm);
        assert_eq!(listings[0].image(), None);
    }

    #[test]
    fn test_decodes_entry_without_image_field() {
        let raw = r##"[{
            "id": "ID-25-X9Y8Z",
            "code": "#Q2W3E4",
            "landX": "10",
            "landY": "20",
            "price": 1000,
            "buildType": "Home",
            "sellerBkash": "018XXXXXXXX",
            "timestamp": "2025-06-02T08:30:00+00:00"
        }]"##;
        let listings: Vec<LandListing> = serde_json::from_str(raw).unwrap();
        assert_eq!(listings[0].image_url, None);
    }

    #[test]
    fn test_add_listing_query_shape() {
        let query = sample().add_listing_query();
        assert!(query.starts_with("action=addListing&id=ID-25-A1B2C&"));
        assert!(query.contains("landX=1250"));
        assert!(query.contains("landY=-450"));
        assert!(query.contains("price=250"));
        assert!(query.contains("buildType=Farm"));
        assert!(query.contains("code=%23A1B2C3"));
        assert!(query.contains("imageUrl=&"));
        assert!(query.ends_with("timestamp=2025-06-01T12%3A00%3A00%2B00%3A00"));
    }

    #[test]
    fn test_timestamp_millis_orders_newest_first() {
        let older = sample();
        let mut newer = sample();
        newer.timestamp = "2025-06-03T12:00:00+00:00".to_string();
        assert!(newer.timestamp_millis() > older.timestamp_millis());

        let mut broken = sample();
        broken.timestamp = "yesterday".to_string();
        assert_eq!(broken.timestamp_millis(), 0);
    }

    #[test]
    fn test_mirror_roundtrip_keeps_wire_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"landX\""));
        assert!(json.contains("\"sellerBkash\""));
        assert!(json.contains("\"buildType\":\"Farm\""));
        let back: LandListing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
