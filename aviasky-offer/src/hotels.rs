use aviasky_catalog::hotels::{
    night_price_for, AMENITIES, CANCELLATION_POLICIES, HOTEL_CHAINS, HOTEL_TYPES, ROOM_TYPES, STREETS,
};
use aviasky_catalog::DiscountPolicy;
use aviasky_core::app_config::PricingConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::models::{HotelOffer, CURRENCY};
use crate::stay::StayLength;

pub const HOTELS_PER_SEARCH: RangeInclusive<usize> = 12..=20;
pub const AMENITIES_PER_HOTEL: RangeInclusive<usize> = 4..=7;

/// Hotel search criteria as received from the caller
#[derive(Debug, Clone)]
pub struct HotelSearch<'a> {
    pub city: &'a str,
    pub checkin: Option<&'a str>,
    pub checkout: Option<&'a str>,
    /// Echoed back only, does not affect pricing
    pub guests: u32,
}

#[derive(Debug, Clone)]
pub struct HotelResults {
    pub stay: StayLength,
    /// Nightly base the offers were priced from
    pub base_night_price: i64,
    pub hotels: Vec<HotelOffer>,
}

/// Generates randomized hotel listings for a city
pub struct HotelGenerator {
    default_night_price: i64,
    discount: DiscountPolicy,
}

impl HotelGenerator {
    pub fn new(pricing: &PricingConfig) -> Self {
        Self {
            default_night_price: pricing.default_night_price,
            discount: DiscountPolicy::new(pricing.hotel_discount),
        }
    }

    /// Nightly base for `city`; cities outside the price table get the default rate.
    pub fn base_night_price(&self, city: &str) -> i64 {
        night_price_for(city).unwrap_or_else(|| {
            tracing::debug!(city, "No price data for city, using default nightly rate");
            self.default_night_price
        })
    }

    pub fn generate<R: Rng + ?Sized>(&self, search: &HotelSearch<'_>, rng: &mut R) -> HotelResults {
        let city = search.city.trim();
        let base = self.base_night_price(city);
        let stay = StayLength::parse(search.checkin, search.checkout);
        let nights = stay.nights();
        let count = rng.gen_range(HOTELS_PER_SEARCH);

        let mut hotels: Vec<HotelOffer> = (0..count)
            .map(|_| self.synthesize(city, base, nights, &mut *rng))
            .collect();

        hotels.sort_by_key(|hotel| hotel.total_price);

        tracing::debug!(city, base, nights, count = hotels.len(), "Generated hotel offers");

        HotelResults {
            stay,
            base_night_price: base,
            hotels,
        }
    }

    fn synthesize<R: Rng + ?Sized>(&self, city: &str, base: i64, nights: u32, rng: &mut R) -> HotelOffer {
        let chain = HOTEL_CHAINS.choose(&mut *rng).copied().unwrap_or(HOTEL_CHAINS[0]);
        let hotel_type = pick(HOTEL_TYPES, rng);
        let stars: u8 = rng.gen_range(3..=5);

        let jitter: f64 = rng.gen_range(0.9..1.1);
        let price_per_night = ((base as f64 * chain.multiplier * jitter).round() as i64).max(1);
        let market_price_per_night = self.discount.market_price(price_per_night);

        let total_price = price_per_night * i64::from(nights);
        let market_total_price = market_price_per_night * i64::from(nights);

        let amenity_count = rng.gen_range(AMENITIES_PER_HOTEL);
        let amenities = AMENITIES
            .choose_multiple(&mut *rng, amenity_count)
            .map(|a| a.to_string())
            .collect();

        let rating: f64 = rng.gen_range(7.5..=9.8);
        let distance: f64 = rng.gen_range(0.3..8.0);

        HotelOffer {
            id: uuid::Builder::from_random_bytes(rng.gen()).into_uuid(),
            name: format!("{} {} {}", chain.name, hotel_type, city),
            chain: chain.name.to_string(),
            stars,
            rating: (rating * 10.0).round() / 10.0,
            reviews_count: rng.gen_range(50..=3000),
            price_per_night,
            market_price_per_night,
            total_price,
            market_total_price,
            savings: market_total_price - total_price,
            discount_percent: self.discount.percent(),
            currency: CURRENCY.to_string(),
            nights,
            amenities,
            address: format!("{}, ул. {}, {}", city, pick(STREETS, rng), rng.gen_range(1..=150)),
            distance_to_center: format!("{:.1} км", distance),
            room_type: pick(ROOM_TYPES, rng).to_string(),
            cancellation: pick(CANCELLATION_POLICIES, rng).to_string(),
            breakfast_included: rng.gen_bool(0.5),
            image_url: format!(
                "https://picsum.photos/seed/hotel{}/800/600",
                rng.gen_range(1000..100_000)
            ),
        }
    }
}

fn pick<R: Rng + ?Sized>(items: &[&'static str], rng: &mut R) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stay::{StayFallbackReason, DEFAULT_NIGHTS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> HotelGenerator {
        HotelGenerator::new(&PricingConfig::default())
    }

    fn moscow<'a>(checkin: Option<&'a str>, checkout: Option<&'a str>) -> HotelSearch<'a> {
        HotelSearch {
            city: "Москва",
            checkin,
            checkout,
            guests: 2,
        }
    }

    #[test]
    fn test_three_night_stay() {
        let mut rng = StdRng::seed_from_u64(1);
        let results = generator().generate(&moscow(Some("2024-12-15"), Some("2024-12-18")), &mut rng);

        assert!(HOTELS_PER_SEARCH.contains(&results.hotels.len()));
        assert!(!results.stay.is_fallback());
        for hotel in &results.hotels {
            assert_eq!(hotel.nights, 3);
            assert_eq!(hotel.total_price, hotel.price_per_night * 3);
            assert_eq!(hotel.market_total_price, hotel.market_price_per_night * 3);
            assert_eq!(hotel.savings, hotel.market_total_price - hotel.total_price);
            assert_eq!(hotel.discount_percent, 25);
            assert!(hotel.name.ends_with("Москва"));
        }
    }

    #[test]
    fn test_offer_invariants_across_seeds() {
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let results = generator().generate(&moscow(Some("2025-03-01"), Some("2025-03-08")), &mut rng);
            let hotels = &results.hotels;

            assert!(HOTELS_PER_SEARCH.contains(&hotels.len()));
            assert!(hotels.windows(2).all(|w| w[0].total_price <= w[1].total_price));

            for hotel in hotels {
                assert!(hotel.price_per_night > 0);
                assert!(hotel.savings >= 0);
                assert_eq!(
                    hotel.market_price_per_night,
                    (hotel.price_per_night as f64 / 0.75).round() as i64
                );
                assert!((3..=5).contains(&hotel.stars));
                assert!((7.5..=9.8).contains(&hotel.rating));
                assert!(AMENITIES_PER_HOTEL.contains(&hotel.amenities.len()));

                let mut unique = hotel.amenities.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), hotel.amenities.len());
            }
        }
    }

    #[test]
    fn test_bad_dates_use_default_nights() {
        let mut rng = StdRng::seed_from_u64(5);
        let results = generator().generate(&moscow(Some("not-a-date"), Some("2024-12-18")), &mut rng);

        assert_eq!(results.stay.nights(), DEFAULT_NIGHTS);
        assert!(matches!(
            results.stay.fallback_reason(),
            Some(StayFallbackReason::InvalidCheckIn(..))
        ));
        assert!(results.hotels.iter().all(|h| h.nights == DEFAULT_NIGHTS));
    }

    #[test]
    fn test_unknown_city_uses_default_rate() {
        let generator = generator();
        assert_eq!(generator.base_night_price("Атлантида"), 5000);
        assert_eq!(generator.base_night_price("париж"), 12000);

        let search = HotelSearch {
            city: "Атлантида",
            checkin: None,
            checkout: None,
            guests: 1,
        };
        let results = generator.generate(&search, &mut StdRng::seed_from_u64(9));
        assert_eq!(results.base_night_price, 5000);
        assert!(!results.hotels.is_empty());
    }

    #[test]
    fn test_same_seed_same_hotels() {
        let search = moscow(Some("2024-12-15"), Some("2024-12-18"));
        let a = generator().generate(&search, &mut StdRng::seed_from_u64(99));
        let b = generator().generate(&search, &mut StdRng::seed_from_u64(99));
        assert_eq!(a.hotels, b.hotels);
    }
}
