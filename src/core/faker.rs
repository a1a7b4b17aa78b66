//! Sources of fake personal, payment, location and timestamp data

use crate::core::purchase::ClientPosition;
use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::chrono::en::DateTimeBefore;
use fake::faker::name::en::Name;
use rand::seq::IndexedRandom;

/// Generator for the non-product fields of a purchase
///
/// Implementations must be cheap to call concurrently from many handlers.
pub trait FakeDataSource: Send + Sync {
    /// Full person name
    fn name(&self) -> String;

    /// Card network label, e.g. "VISA 16 digit"
    fn credit_card_provider(&self) -> String;

    /// A coordinate known to be on land
    fn location_on_land(&self) -> ClientPosition;

    /// Random timestamp formatted as ISO-8601 without offset
    fn iso8601(&self) -> String;
}

const CREDIT_CARD_PROVIDERS: &[&str] = &[
    "VISA 16 digit",
    "VISA 13 digit",
    "VISA 19 digit",
    "Mastercard",
    "American Express",
    "Discover",
    "Diners Club / Carte Blanche",
    "JCB 15 digit",
    "JCB 16 digit",
    "Maestro",
];

// latitude, longitude, place, country code, timezone
const LAND_COORDS: &[(&str, &str, &str, &str, &str)] = &[
    ("-23.5475", "-46.63611", "Sao Paulo", "BR", "America/Sao_Paulo"),
    ("-22.90642", "-43.18223", "Rio de Janeiro", "BR", "America/Sao_Paulo"),
    ("-19.92083", "-43.93778", "Belo Horizonte", "BR", "America/Sao_Paulo"),
    ("-30.03283", "-51.23019", "Porto Alegre", "BR", "America/Sao_Paulo"),
    ("-12.97111", "-38.51083", "Salvador", "BR", "America/Bahia"),
    ("-3.71722", "-38.54306", "Fortaleza", "BR", "America/Fortaleza"),
    ("-34.61315", "-58.37723", "Buenos Aires", "AR", "America/Argentina/Buenos_Aires"),
    ("40.71427", "-74.00597", "New York City", "US", "America/New_York"),
    ("41.85003", "-87.65005", "Chicago", "US", "America/Chicago"),
    ("19.42847", "-99.12766", "Mexico City", "MX", "America/Mexico_City"),
    ("51.50853", "-0.12574", "London", "GB", "Europe/London"),
    ("38.71667", "-9.13333", "Lisbon", "PT", "Europe/Lisbon"),
    ("48.85341", "2.3488", "Paris", "FR", "Europe/Paris"),
    ("52.52437", "13.41053", "Berlin", "DE", "Europe/Berlin"),
    ("35.6895", "139.69171", "Tokyo", "JP", "Asia/Tokyo"),
    ("-33.86785", "151.20732", "Sydney", "AU", "Australia/Sydney"),
];

/// Default [`FakeDataSource`] backed by the `fake` crate and the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerSource;

impl FakerSource {
    pub fn new() -> Self {
        Self
    }
}

impl FakeDataSource for FakerSource {
    fn name(&self) -> String {
        Name().fake()
    }

    fn credit_card_provider(&self) -> String {
        CREDIT_CARD_PROVIDERS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("VISA 16 digit")
            .to_string()
    }

    fn location_on_land(&self) -> ClientPosition {
        let (lat, long, place, cc, tz) = LAND_COORDS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(LAND_COORDS[0]);
        ClientPosition::new(lat, long, place, cc, tz)
    }

    fn iso8601(&self) -> String {
        DateTimeBefore(Utc::now())
            .fake::<DateTime<Utc>>()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    }
}
