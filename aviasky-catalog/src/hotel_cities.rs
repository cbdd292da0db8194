//! Cities offered by the hotel search widget.

use serde::Serialize;

use crate::filter::{self, Searchable};

/// Upper bound on the number of cities returned by a listing.
pub const MAX_RESULTS: usize = 50;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HotelCity {
    pub name: &'static str,
    pub country: &'static str,
}

impl Searchable for HotelCity {
    fn search_fields(&self) -> [&str; 2] {
        [self.name, self.country]
    }
}

const fn city(name: &'static str, country: &'static str) -> HotelCity {
    HotelCity { name, country }
}

pub static HOTEL_CITIES: &[HotelCity] = &[
    city("Москва", "Россия"),
    city("Санкт-Петербург", "Россия"),
    city("Казань", "Россия"),
    city("Сочи", "Россия"),
    city("Екатеринбург", "Россия"),
    city("Новосибирск", "Россия"),
    city("Калининград", "Россия"),
    city("Нижний Новгород", "Россия"),
    city("Краснодар", "Россия"),
    city("Владивосток", "Россия"),
    city("Ярославль", "Россия"),
    city("Суздаль", "Россия"),
    city("Париж", "Франция"),
    city("Ницца", "Франция"),
    city("Лондон", "Великобритания"),
    city("Барселона", "Испания"),
    city("Мадрид", "Испания"),
    city("Рим", "Италия"),
    city("Милан", "Италия"),
    city("Венеция", "Италия"),
    city("Берлин", "Германия"),
    city("Мюнхен", "Германия"),
    city("Амстердам", "Нидерланды"),
    city("Прага", "Чехия"),
    city("Вена", "Австрия"),
    city("Будапешт", "Венгрия"),
    city("Афины", "Греция"),
    city("Лиссабон", "Португалия"),
    city("Белград", "Сербия"),
    city("Стамбул", "Турция"),
    city("Анталья", "Турция"),
    city("Дубай", "ОАЭ"),
    city("Абу-Даби", "ОАЭ"),
    city("Доха", "Катар"),
    city("Токио", "Япония"),
    city("Сеул", "Южная Корея"),
    city("Бангкок", "Таиланд"),
    city("Пхукет", "Таиланд"),
    city("Сингапур", "Сингапур"),
    city("Гонконг", "Гонконг"),
    city("Пекин", "Китай"),
    city("Шанхай", "Китай"),
    city("Гоа", "Индия"),
    city("Мале", "Мальдивы"),
    city("Ташкент", "Узбекистан"),
    city("Алматы", "Казахстан"),
    city("Ереван", "Армения"),
    city("Тбилиси", "Грузия"),
    city("Батуми", "Грузия"),
    city("Баку", "Азербайджан"),
    city("Нью-Йорк", "США"),
    city("Майами", "США"),
    city("Лос-Анджелес", "США"),
    city("Канкун", "Мексика"),
    city("Гавана", "Куба"),
    city("Каир", "Египет"),
    city("Хургада", "Египет"),
    city("Шарм-эш-Шейх", "Египет"),
    city("Занзибар", "Танзания"),
    city("Сидней", "Австралия"),
];

/// Matching cities in table order, capped at [`MAX_RESULTS`].
pub fn search(query: &str) -> Vec<&'static HotelCity> {
    let mut found = filter::filter(HOTEL_CITIES, query);
    found.truncate(MAX_RESULTS);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_is_capped() {
        assert!(HOTEL_CITIES.len() > MAX_RESULTS);
        let all = search("");
        assert_eq!(all.len(), MAX_RESULTS);
        assert_eq!(all[0].name, "Москва");
    }

    #[test]
    fn test_filter_by_country() {
        let found = search("египет");
        let names: Vec<_> = found.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Каир", "Хургада", "Шарм-эш-Шейх"]);
    }
}
