pub mod models;
pub mod stay;
pub mod flights;
pub mod hotels;

pub use models::{FlightOffer, HotelOffer};
pub use stay::{StayFallbackReason, StayLength};
pub use flights::{FlightGenerator, FlightSearch};
pub use hotels::{HotelGenerator, HotelResults, HotelSearch};
