use aviasky_core::app_config::TierPrices;
use serde::{Deserialize, Serialize};

/// Coarse geographic class used to pick a base flight price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Domestic,
    Europe,
    Asia,
    America,
    Africa,
    Oceania,
}

const DOMESTIC: &[&str] = &[
    "MOW", "SVO", "DME", "VKO", "LED", "KZN", "AER", "SVX", "OVB", "KGD", "MRV", "ROV", "KRR",
    "UFA", "VVO",
];
const EUROPE: &[&str] = &[
    "PAR", "NCE", "LON", "BCN", "MAD", "ROM", "MIL", "VCE", "BER", "MUC", "AMS", "PRG", "VIE",
    "ZRH", "HEL", "CPH", "STO", "OSL", "WAW", "BUD", "ATH", "LIS", "BEG",
];
const ASIA: &[&str] = &[
    "IST", "AYT", "DXB", "AUH", "DOH", "TYO", "SEL", "BKK", "HKT", "KUL", "SIN", "HKG", "BJS",
    "SHA", "DEL", "BOM", "GOI", "MLE", "TAS", "ALA", "NQZ", "EVN", "TBS", "BUS", "GYD",
];
const AMERICA: &[&str] = &[
    "NYC", "LAX", "MIA", "CHI", "SFO", "YTO", "YVR", "MEX", "CUN", "HAV", "SAO", "BUE",
];
const AFRICA: &[&str] = &["CAI", "HRG", "SSH", "CMN", "TUN", "JNB", "CPT", "ZNZ"];
const OCEANIA: &[&str] = &["SYD", "MEL", "AKL"];

fn contains(set: &[&str], code: &str) -> bool {
    set.iter().any(|c| c.eq_ignore_ascii_case(code))
}

impl PriceTier {
    /// Classify a route.
    ///
    /// Domestic needs both endpoints in the domestic set. Otherwise the
    /// destination decides. Unmatched destinations, including a domestic
    /// airport reached from abroad, fall back to `Oceania`, the most
    /// expensive tier.
    pub fn resolve(origin: &str, destination: &str) -> Self {
        if contains(DOMESTIC, origin) && contains(DOMESTIC, destination) {
            return PriceTier::Domestic;
        }

        match Self::region_of(destination) {
            Some(tier) => tier,
            None => {
                tracing::debug!(origin, destination, "Unknown route, using oceania tier");
                PriceTier::Oceania
            }
        }
    }

    fn region_of(code: &str) -> Option<Self> {
        [
            (EUROPE, PriceTier::Europe),
            (ASIA, PriceTier::Asia),
            (AMERICA, PriceTier::America),
            (AFRICA, PriceTier::Africa),
            (OCEANIA, PriceTier::Oceania),
        ]
        .into_iter()
        .find(|(set, _)| contains(set, code))
        .map(|(_, tier)| tier)
    }

    pub fn base_price(&self, prices: &TierPrices) -> i64 {
        match self {
            PriceTier::Domestic => prices.domestic,
            PriceTier::Europe => prices.europe,
            PriceTier::Asia => prices.asia,
            PriceTier::America => prices.america,
            PriceTier::Africa => prices.africa,
            PriceTier::Oceania => prices.oceania,
        }
    }
}

/// Base ("our") price for a route, before per-airline multipliers.
pub fn calculate_base_price(origin: &str, destination: &str, prices: &TierPrices) -> i64 {
    PriceTier::resolve(origin, destination).base_price(prices)
}

/// Simulated saving against a market price.
///
/// Prices we quote are already discounted; the market equivalent is
/// `price / (1 - fraction)`, rounded to whole roubles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiscountPolicy {
    pub fraction: f64,
}

impl DiscountPolicy {
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    pub fn market_price(&self, price: i64) -> i64 {
        (price as f64 / (1.0 - self.fraction)).round() as i64
    }

    pub fn savings(&self, price: i64) -> i64 {
        self.market_price(price) - price
    }

    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domestic_needs_both_endpoints() {
        assert_eq!(PriceTier::resolve("MOW", "LED"), PriceTier::Domestic);
        assert_eq!(PriceTier::resolve("MOW", "PAR"), PriceTier::Europe);
        assert_eq!(PriceTier::resolve("led", "dxb"), PriceTier::Asia);
    }

    #[test]
    fn test_inbound_domestic_destination_is_oceania() {
        assert_eq!(PriceTier::resolve("PAR", "MOW"), PriceTier::Oceania);
        assert_eq!(PriceTier::resolve("NYC", "LED"), PriceTier::Oceania);
        assert_eq!(calculate_base_price("PAR", "MOW", &TierPrices::default()), 65000);
    }

    #[test]
    fn test_unknown_destination_is_oceania() {
        assert_eq!(PriceTier::resolve("MOW", "XYZ"), PriceTier::Oceania);
        assert_eq!(PriceTier::resolve("ABC", "XYZ"), PriceTier::Oceania);
    }

    #[test]
    fn test_base_price_uses_tier_table() {
        let prices = TierPrices::default();
        assert_eq!(calculate_base_price("MOW", "KZN", &prices), 5500);
        assert_eq!(calculate_base_price("MOW", "PAR", &prices), 15000);
        assert_eq!(calculate_base_price("MOW", "SYD", &prices), 65000);
        assert_eq!(calculate_base_price("MOW", "CAI", &prices), 30000);
    }

    #[test]
    fn test_discount_policy() {
        let flights = DiscountPolicy::new(0.20);
        assert_eq!(flights.market_price(16000), 20000);
        assert_eq!(flights.savings(16000), 4000);
        assert_eq!(flights.percent(), 20);

        let hotels = DiscountPolicy::new(0.25);
        assert_eq!(hotels.market_price(4500), 6000);
        assert_eq!(hotels.percent(), 25);
    }
}
