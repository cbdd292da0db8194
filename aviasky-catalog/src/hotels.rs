//! Reference data for hotel offer synthesis.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HotelChain {
    pub name: &'static str,
    pub multiplier: f64,
}

pub static HOTEL_CHAINS: &[HotelChain] = &[
    HotelChain { name: "Marriott", multiplier: 1.4 },
    HotelChain { name: "Hilton", multiplier: 1.35 },
    HotelChain { name: "Radisson", multiplier: 1.15 },
    HotelChain { name: "Novotel", multiplier: 1.0 },
    HotelChain { name: "Ibis", multiplier: 0.7 },
    HotelChain { name: "Holiday Inn", multiplier: 0.9 },
    HotelChain { name: "Azimut", multiplier: 0.85 },
    HotelChain { name: "Cosmos", multiplier: 0.8 },
    HotelChain { name: "Four Seasons", multiplier: 2.2 },
    HotelChain { name: "Ritz-Carlton", multiplier: 2.0 },
];

pub static HOTEL_TYPES: &[&str] = &["Hotel", "Resort", "Suites", "Plaza", "Inn", "Palace", "Boutique"];

pub static AMENITIES: &[&str] = &[
    "Wi-Fi",
    "Бассейн",
    "Спа",
    "Фитнес-центр",
    "Парковка",
    "Ресторан",
    "Бар",
    "Трансфер",
    "Кондиционер",
    "Room service",
    "Прачечная",
    "Конференц-зал",
];

pub static ROOM_TYPES: &[&str] = &["Стандарт", "Улучшенный", "Делюкс", "Полулюкс", "Люкс", "Семейный"];

pub static CANCELLATION_POLICIES: &[&str] = &[
    "Бесплатная отмена",
    "Бесплатная отмена до 24 часов",
    "Бесплатная отмена до 72 часов",
    "Без возврата",
];

pub static STREETS: &[&str] = &[
    "Центральная",
    "Набережная",
    "Садовая",
    "Парковая",
    "Морская",
    "Вокзальная",
    "Театральная",
    "Мира",
];

/// Typical nightly rate (roubles) for a standard room, keyed by lowercase city name.
static NIGHT_PRICES: &[(&str, i64)] = &[
    ("москва", 6500),
    ("санкт-петербург", 5500),
    ("казань", 4200),
    ("сочи", 7000),
    ("екатеринбург", 4000),
    ("новосибирск", 3800),
    ("калининград", 4000),
    ("париж", 12000),
    ("лондон", 14000),
    ("барселона", 9000),
    ("рим", 9500),
    ("милан", 10000),
    ("берлин", 8000),
    ("амстердам", 11000),
    ("прага", 6000),
    ("вена", 8500),
    ("стамбул", 6000),
    ("анталья", 5500),
    ("дубай", 11000),
    ("токио", 13000),
    ("бангкок", 4500),
    ("сингапур", 12500),
    ("мале", 25000),
    ("ереван", 4500),
    ("тбилиси", 4000),
    ("нью-йорк", 18000),
    ("майами", 15000),
    ("хургада", 4000),
    ("сидней", 13500),
];

/// Nightly base rate for `city`, matched case-insensitively.
pub fn night_price_for(city: &str) -> Option<i64> {
    let key = city.trim().to_lowercase();
    NIGHT_PRICES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, price)| *price)
}
