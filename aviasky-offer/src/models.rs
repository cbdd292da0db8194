use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CURRENCY: &str = "₽";

/// A synthesized flight, not backed by any real inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightOffer {
    pub id: String,
    pub airline: String,
    pub airline_code: String,
    pub origin: String,
    pub destination: String,
    pub date: Option<String>,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: i64,
    pub market_price: i64,
    pub savings: i64,
    pub discount_percent: u32,
    pub currency: String,
    pub stops: u8,
    pub aircraft: String,
}

/// A synthesized hotel listing. Totals cover the whole stay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelOffer {
    pub id: Uuid,
    pub name: String,
    pub chain: String,
    pub stars: u8,
    pub rating: f64,
    pub reviews_count: u32,
    pub price_per_night: i64,
    pub market_price_per_night: i64,
    pub total_price: i64,
    pub market_total_price: i64,
    pub savings: i64,
    pub discount_percent: u32,
    pub currency: String,
    pub nights: u32,
    pub amenities: Vec<String>,
    pub address: String,
    pub distance_to_center: String,
    pub room_type: String,
    pub cancellation: String,
    pub breakfast_included: bool,
    pub image_url: String,
}
