//! Purchase records returned by the generator

use serde::{Deserialize, Serialize};

/// Product name carried by sentinel records
pub const SENTINEL_PRODUCT: &str = "error";

/// Land coordinate of the buying client
///
/// Serialized as `[latitude, longitude, place, country_code, timezone]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPosition(
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
);

impl ClientPosition {
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        place: impl Into<String>,
        country_code: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self(
            latitude.into(),
            longitude.into(),
            place.into(),
            country_code.into(),
            timezone.into(),
        )
    }

    pub fn latitude(&self) -> &str {
        &self.0
    }

    pub fn longitude(&self) -> &str {
        &self.1
    }

    pub fn place(&self) -> &str {
        &self.2
    }
}

/// A synthetic purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub client: String,
    pub creditcard: String,
    pub product: String,
    pub ean: i64,
    pub price: f64,
    pub client_position: ClientPosition,
    pub store: u32,
    pub date_time: String,
}

impl PurchaseRecord {
    /// Whether this record stands in for a failed generation
    pub fn is_sentinel(&self) -> bool {
        self.product == SENTINEL_PRODUCT && self.ean == 0
    }
}

/// Apply a markup factor and round to cents, halves away from zero
pub fn marked_up_price(price: f64, markup: f64) -> f64 {
    (price * markup * 100.0).round() / 100.0
}
