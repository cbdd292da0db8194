use serde::Serialize;

use crate::filter::{self, Searchable};

/// A showcase destination for the landing page. Prices are display strings only.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PopularDestination {
    pub city: &'static str,
    pub country: &'static str,
    pub price: &'static str,
    pub code: &'static str,
    pub trend: &'static str,
}

impl Searchable for PopularDestination {
    fn search_fields(&self) -> [&str; 2] {
        [self.city, self.country]
    }
}

pub static POPULAR_DESTINATIONS: &[PopularDestination] = &[
    PopularDestination { city: "Париж", country: "Франция", price: "от 25 650 ₽", code: "PAR", trend: "+5%" },
    PopularDestination { city: "Нью-Йорк", country: "США", price: "от 48 900 ₽", code: "NYC", trend: "-2%" },
    PopularDestination { city: "Токио", country: "Япония", price: "от 54 200 ₽", code: "TYO", trend: "+8%" },
    PopularDestination { city: "Лондон", country: "Великобритания", price: "от 28 300 ₽", code: "LON", trend: "0%" },
    PopularDestination { city: "Дубай", country: "ОАЭ", price: "от 32 450 ₽", code: "DXB", trend: "-3%" },
    PopularDestination { city: "Барселона", country: "Испания", price: "от 22 800 ₽", code: "BCN", trend: "+1%" },
    PopularDestination { city: "Стамбул", country: "Турция", price: "от 18 900 ₽", code: "IST", trend: "-4%" },
    PopularDestination { city: "Сочи", country: "Россия", price: "от 6 200 ₽", code: "AER", trend: "+12%" },
    PopularDestination { city: "Бангкок", country: "Таиланд", price: "от 41 700 ₽", code: "BKK", trend: "+3%" },
    PopularDestination { city: "Ереван", country: "Армения", price: "от 14 500 ₽", code: "EVN", trend: "-1%" },
];

pub fn search(query: &str) -> Vec<&'static PopularDestination> {
    filter::filter(POPULAR_DESTINATIONS, query)
}
