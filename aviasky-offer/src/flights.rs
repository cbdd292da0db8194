use aviasky_catalog::airlines::{AIRCRAFT, AIRLINES};
use aviasky_catalog::{calculate_base_price, DiscountPolicy};
use aviasky_core::app_config::{PricingConfig, TierPrices};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{FlightOffer, CURRENCY};

/// Number of airlines quoted per search
pub const OFFERS_PER_SEARCH: usize = 6;

const FIRST_DEPARTURE_HOUR: u32 = 6;
const DEPARTURE_SPACING_HOURS: u32 = 3;
const ONE_STOP_PROBABILITY: f64 = 0.4;
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Flight search criteria. The date is echoed back, never validated.
#[derive(Debug, Clone)]
pub struct FlightSearch<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub date: Option<&'a str>,
}

/// Generates randomized flight offers for a route
pub struct FlightGenerator {
    tiers: TierPrices,
    discount: DiscountPolicy,
}

impl FlightGenerator {
    pub fn new(pricing: &PricingConfig) -> Self {
        Self {
            tiers: pricing.tiers.clone(),
            discount: DiscountPolicy::new(pricing.flight_discount),
        }
    }

    pub fn base_price(&self, search: &FlightSearch<'_>) -> i64 {
        calculate_base_price(search.origin, search.destination, &self.tiers)
    }

    /// Quote a random subset of the airline roster, cheapest first.
    pub fn generate<R: Rng + ?Sized>(&self, search: &FlightSearch<'_>, rng: &mut R) -> Vec<FlightOffer> {
        let base_price = self.base_price(search);
        let count = OFFERS_PER_SEARCH.min(AIRLINES.len());
        let airlines: Vec<_> = AIRLINES.choose_multiple(&mut *rng, count).copied().collect();

        let mut offers: Vec<FlightOffer> = airlines
            .iter()
            .enumerate()
            .map(|(index, airline)| {
                let jitter: f64 = rng.gen_range(0.9..1.1);
                let price = ((base_price as f64 * airline.multiplier * jitter).round() as i64).max(1);

                let stops = u8::from(rng.gen_bool(ONE_STOP_PROBABILITY));
                let mut duration_hours: u32 = rng.gen_range(2..=5);
                if stops > 0 {
                    duration_hours += rng.gen_range(2..=4);
                }
                let duration_minutes: u32 = rng.gen_range(0..60);

                let departure_hour = FIRST_DEPARTURE_HOUR + index as u32 * DEPARTURE_SPACING_HOURS;
                let departure = departure_hour * 60 + rng.gen_range(0..12) * 5;
                let arrival = departure + duration_hours * 60 + duration_minutes;

                FlightOffer {
                    id: format!("{}{}", airline.code, rng.gen_range(100..=9999)),
                    airline: airline.name.to_string(),
                    airline_code: airline.code.to_string(),
                    origin: search.origin.to_string(),
                    destination: search.destination.to_string(),
                    date: search.date.map(str::to_string),
                    departure_time: clock(departure),
                    arrival_time: clock(arrival),
                    duration: format!("{}ч {}м", duration_hours, duration_minutes),
                    price,
                    market_price: self.discount.market_price(price),
                    savings: self.discount.savings(price),
                    discount_percent: self.discount.percent(),
                    currency: CURRENCY.to_string(),
                    stops,
                    aircraft: AIRCRAFT
                        .choose(&mut *rng)
                        .map(|a| a.to_string())
                        .unwrap_or_default(),
                }
            })
            .collect();

        offers.sort_by_key(|offer| offer.price);

        tracing::debug!(
            origin = search.origin,
            destination = search.destination,
            base_price,
            count = offers.len(),
            "Generated flight offers"
        );

        offers
    }
}

/// `HH:MM` for a minute offset, wrapped past midnight.
fn clock(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
