//! City reference list with IATA codes used by the flight search widget.

use serde::Serialize;

use crate::filter::{self, Searchable};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Location {
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

impl Searchable for Location {
    fn search_fields(&self) -> [&str; 2] {
        [self.name, self.country]
    }
}

const fn loc(code: &'static str, name: &'static str, country: &'static str) -> Location {
    Location { code, name, country }
}

pub static LOCATIONS: &[Location] = &[
    // Россия
    loc("MOW", "Москва", "Россия"),
    loc("SVO", "Москва (Шереметьево)", "Россия"),
    loc("DME", "Москва (Домодедово)", "Россия"),
    loc("VKO", "Москва (Внуково)", "Россия"),
    loc("LED", "Санкт-Петербург", "Россия"),
    loc("KZN", "Казань", "Россия"),
    loc("AER", "Сочи", "Россия"),
    loc("SVX", "Екатеринбург", "Россия"),
    loc("OVB", "Новосибирск", "Россия"),
    loc("KGD", "Калининград", "Россия"),
    loc("MRV", "Минеральные Воды", "Россия"),
    loc("ROV", "Ростов-на-Дону", "Россия"),
    loc("KRR", "Краснодар", "Россия"),
    loc("UFA", "Уфа", "Россия"),
    loc("VVO", "Владивосток", "Россия"),
    // Европа
    loc("PAR", "Париж", "Франция"),
    loc("NCE", "Ницца", "Франция"),
    loc("LON", "Лондон", "Великобритания"),
    loc("BCN", "Барселона", "Испания"),
    loc("MAD", "Мадрид", "Испания"),
    loc("ROM", "Рим", "Италия"),
    loc("MIL", "Милан", "Италия"),
    loc("VCE", "Венеция", "Италия"),
    loc("BER", "Берлин", "Германия"),
    loc("MUC", "Мюнхен", "Германия"),
    loc("AMS", "Амстердам", "Нидерланды"),
    loc("PRG", "Прага", "Чехия"),
    loc("VIE", "Вена", "Австрия"),
    loc("ZRH", "Цюрих", "Швейцария"),
    loc("HEL", "Хельсинки", "Финляндия"),
    loc("CPH", "Копенгаген", "Дания"),
    loc("STO", "Стокгольм", "Швеция"),
    loc("OSL", "Осло", "Норвегия"),
    loc("WAW", "Варшава", "Польша"),
    loc("BUD", "Будапешт", "Венгрия"),
    loc("ATH", "Афины", "Греция"),
    loc("LIS", "Лиссабон", "Португалия"),
    loc("BEG", "Белград", "Сербия"),
    // Азия
    loc("IST", "Стамбул", "Турция"),
    loc("AYT", "Анталья", "Турция"),
    loc("DXB", "Дубай", "ОАЭ"),
    loc("AUH", "Абу-Даби", "ОАЭ"),
    loc("DOH", "Доха", "Катар"),
    loc("TYO", "Токио", "Япония"),
    loc("SEL", "Сеул", "Южная Корея"),
    loc("BKK", "Бангкок", "Таиланд"),
    loc("HKT", "Пхукет", "Таиланд"),
    loc("KUL", "Куала-Лумпур", "Малайзия"),
    loc("SIN", "Сингапур", "Сингапур"),
    loc("HKG", "Гонконг", "Гонконг"),
    loc("BJS", "Пекин", "Китай"),
    loc("SHA", "Шанхай", "Китай"),
    loc("DEL", "Дели", "Индия"),
    loc("BOM", "Мумбаи", "Индия"),
    loc("GOI", "Гоа", "Индия"),
    loc("MLE", "Мале", "Мальдивы"),
    loc("TAS", "Ташкент", "Узбекистан"),
    loc("ALA", "Алматы", "Казахстан"),
    loc("NQZ", "Астана", "Казахстан"),
    loc("EVN", "Ереван", "Армения"),
    loc("TBS", "Тбилиси", "Грузия"),
    loc("BUS", "Батуми", "Грузия"),
    loc("GYD", "Баку", "Азербайджан"),
    // Америка
    loc("NYC", "Нью-Йорк", "США"),
    loc("LAX", "Лос-Анджелес", "США"),
    loc("MIA", "Майами", "США"),
    loc("CHI", "Чикаго", "США"),
    loc("SFO", "Сан-Франциско", "США"),
    loc("YTO", "Торонто", "Канада"),
    loc("YVR", "Ванкувер", "Канада"),
    loc("MEX", "Мехико", "Мексика"),
    loc("CUN", "Канкун", "Мексика"),
    loc("HAV", "Гавана", "Куба"),
    loc("SAO", "Сан-Паулу", "Бразилия"),
    loc("BUE", "Буэнос-Айрес", "Аргентина"),
    // Африка
    loc("CAI", "Каир", "Египет"),
    loc("HRG", "Хургада", "Египет"),
    loc("SSH", "Шарм-эш-Шейх", "Египет"),
    loc("CMN", "Касабланка", "Марокко"),
    loc("TUN", "Тунис", "Тунис"),
    loc("JNB", "Йоханнесбург", "ЮАР"),
    loc("CPT", "Кейптаун", "ЮАР"),
    loc("ZNZ", "Занзибар", "Танзания"),
    // Океания
    loc("SYD", "Сидней", "Австралия"),
    loc("MEL", "Мельбурн", "Австралия"),
    loc("AKL", "Окленд", "Новая Зеландия"),
];

pub fn all() -> &'static [Location] {
    LOCATIONS
}

/// Cities whose name or country contains `query`, in table order.
pub fn search(query: &str) -> Vec<&'static Location> {
    filter::filter(LOCATIONS, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_country() {
        let found = search("италия");
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|l| l.country == "Италия"));
    }

    #[test]
    fn test_search_every_result_matches() {
        for query in ["мос", "ИЯ", "а", "Dubai", "сша"] {
            let needle = query.to_lowercase();
            for location in search(query) {
                assert!(
                    location.name.to_lowercase().contains(&needle)
                        || location.country.to_lowercase().contains(&needle),
                    "{:?} does not match {}",
                    location,
                    query
                );
            }
        }
    }

    #[test]
    fn test_empty_query_returns_full_table() {
        assert_eq!(search("").len(), all().len());
    }
}
