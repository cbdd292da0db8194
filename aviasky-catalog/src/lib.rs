pub mod filter;
pub mod locations;
pub mod destinations;
pub mod hotel_cities;
pub mod airlines;
pub mod hotels;
pub mod pricing;

pub use filter::{filter, Searchable};
pub use locations::Location;
pub use destinations::PopularDestination;
pub use hotel_cities::HotelCity;
pub use airlines::Airline;
pub use hotels::HotelChain;
pub use pricing::{calculate_base_price, DiscountPolicy, PriceTier};
