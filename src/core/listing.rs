//! # Listings
//!
//! The slice of a datastore property row that pricing needs. Rows arrive
//! as JSON; fields this crate never reads are ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::core::currency::Currency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    /// Free-form code as stored; not guaranteed to be a supported currency.
    pub currency: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Listing {
    /// The listing's currency, if it is one the storefront supports.
    pub fn currency(&self) -> Option<Currency> {
        self.currency.parse().ok()
    }
}

/// Parses a JSON array of datastore rows.
pub fn parse_listings(json: &str) -> Result<Vec<Listing>, serde_json::Error> {
    serde_json::from_str(json)
}
