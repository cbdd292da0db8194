use serde::Serialize;

/// A carrier in the mock roster. `multiplier` scales the tier base price.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Airline {
    pub name: &'static str,
    pub code: &'static str,
    pub multiplier: f64,
}

pub static AIRLINES: &[Airline] = &[
    Airline { name: "Аэрофлот", code: "SU", multiplier: 1.15 },
    Airline { name: "S7 Airlines", code: "S7", multiplier: 1.0 },
    Airline { name: "Победа", code: "DP", multiplier: 0.75 },
    Airline { name: "Уральские авиалинии", code: "U6", multiplier: 0.9 },
    Airline { name: "Россия", code: "FV", multiplier: 1.05 },
    Airline { name: "Turkish Airlines", code: "TK", multiplier: 1.1 },
    Airline { name: "Emirates", code: "EK", multiplier: 1.35 },
    Airline { name: "Qatar Airways", code: "QR", multiplier: 1.3 },
    Airline { name: "Air France", code: "AF", multiplier: 1.25 },
    Airline { name: "Azur Air", code: "ZF", multiplier: 0.85 },
];

pub static AIRCRAFT: &[&str] = &[
    "Airbus A320",
    "Airbus A321",
    "Airbus A330",
    "Airbus A350",
    "Boeing 737",
    "Boeing 777",
    "Boeing 787",
    "Sukhoi Superjet 100",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_positive() {
        assert!(AIRLINES.iter().all(|a| a.multiplier > 0.0));
    }
}
