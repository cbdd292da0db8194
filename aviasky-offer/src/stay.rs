use chrono::NaiveDate;

/// Nights assumed when the stay dates are missing or unreadable
pub const DEFAULT_NIGHTS: u32 = 3;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a stay length could not be derived from the request dates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StayFallbackReason {
    #[error("check-in date is missing")]
    MissingCheckIn,

    #[error("check-out date is missing")]
    MissingCheckOut,

    #[error("invalid check-in date {0:?}: {1}")]
    InvalidCheckIn(String, chrono::ParseError),

    #[error("invalid check-out date {0:?}: {1}")]
    InvalidCheckOut(String, chrono::ParseError),
}

/// Length of a hotel stay, tagged with where the figure came from.
#[derive(Debug, Clone, PartialEq)]
pub enum StayLength {
    /// Derived from two valid dates. Never below one night.
    Dates { nights: u32 },
    /// Dates were unusable; `nights` is [`DEFAULT_NIGHTS`].
    Fallback { nights: u32, reason: StayFallbackReason },
}

impl StayLength {
    pub fn parse(checkin: Option<&str>, checkout: Option<&str>) -> Self {
        match Self::try_parse(checkin, checkout) {
            Ok(nights) => StayLength::Dates { nights },
            Err(reason) => {
                tracing::warn!(%reason, "Using default stay length of {} nights", DEFAULT_NIGHTS);
                StayLength::Fallback {
                    nights: DEFAULT_NIGHTS,
                    reason,
                }
            }
        }
    }

    fn try_parse(checkin: Option<&str>, checkout: Option<&str>) -> Result<u32, StayFallbackReason> {
        let checkin = checkin
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(StayFallbackReason::MissingCheckIn)?;
        let checkout = checkout
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(StayFallbackReason::MissingCheckOut)?;

        let start = NaiveDate::parse_from_str(checkin, DATE_FORMAT)
            .map_err(|e| StayFallbackReason::InvalidCheckIn(checkin.to_string(), e))?;
        let end = NaiveDate::parse_from_str(checkout, DATE_FORMAT)
            .map_err(|e| StayFallbackReason::InvalidCheckOut(checkout.to_string(), e))?;

        let days = (end - start).num_days().max(1);
        Ok(u32::try_from(days).unwrap_or(u32::MAX))
    }

    pub fn nights(&self) -> u32 {
        match self {
            StayLength::Dates { nights } | StayLength::Fallback { nights, .. } => *nights,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, StayLength::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&StayFallbackReason> {
        match self {
            StayLength::Fallback { reason, .. } => Some(reason),
            StayLength::Dates { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nights_from_dates() {
        let stay = StayLength::parse(Some("2024-12-15"), Some("2024-12-18"));
        assert_eq!(stay, StayLength::Dates { nights: 3 });

        let stay = StayLength::parse(Some("2024-12-28"), Some("2025-01-09"));
        assert_eq!(stay.nights(), 12);
        assert!(!stay.is_fallback());
    }

    #[test]
    fn test_non_positive_span_clamps_to_one() {
        assert_eq!(StayLength::parse(Some("2024-12-15"), Some("2024-12-15")).nights(), 1);
        assert_eq!(StayLength::parse(Some("2024-12-18"), Some("2024-12-15")).nights(), 1);
    }

    #[test]
    fn test_missing_dates_fall_back() {
        let stay = StayLength::parse(None, Some("2024-12-18"));
        assert_eq!(stay.nights(), DEFAULT_NIGHTS);
        assert_eq!(stay.fallback_reason(), Some(&StayFallbackReason::MissingCheckIn));

        let stay = StayLength::parse(Some("2024-12-15"), Some("  "));
        assert_eq!(stay.fallback_reason(), Some(&StayFallbackReason::MissingCheckOut));
    }

    #[test]
    fn test_garbage_dates_fall_back() {
        let stay = StayLength::parse(Some("15.12.2024"), Some("2024-12-18"));
        assert!(stay.is_fallback());
        assert_eq!(stay.nights(), 3);
        assert!(matches!(
            stay.fallback_reason(),
            Some(StayFallbackReason::InvalidCheckIn(raw, _)) if raw == "15.12.2024"
        ));

        let stay = StayLength::parse(Some("2024-12-15"), Some("2024-02-30"));
        assert!(matches!(
            stay.fallback_reason(),
            Some(StayFallbackReason::InvalidCheckOut(..))
        ));
    }
}
