use chrono::{DateTime, Duration, Utc};

/// The moment a banner was dismissed, held as epoch milliseconds and encoded
/// as a plain decimal string in the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DismissedAt(i64);

impl DismissedAt {
    pub fn at(moment: DateTime<Utc>) -> Self {
        Self(moment.timestamp_millis())
    }

    pub fn encode(&self) -> String {
        self.0.to_string()
    }

    /// `None` for anything that is not a decimal epoch-millisecond value;
    /// such a record reads as absent.
    pub fn decode(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        Duration::milliseconds(now.timestamp_millis() - self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use super::*;

    #[test]
    fn round_trips_through_the_store_encoding() {
        let moment = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let stamp = DismissedAt::at(moment);
        assert_eq!(stamp.encode(), "1704067200000");
        assert_eq!(DismissedAt::decode(&stamp.encode()), Some(stamp));
    }

    #[test]
    fn garbage_decodes_to_none() {
        for raw in ["", "soon", "12.5", "2024-01-01"] {
            assert_eq!(DismissedAt::decode(raw), None, "raw: {raw}");
        }
    }

    #[test]
    fn elapsed_is_measured_from_the_dismissal() {
        let moment = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let stamp = DismissedAt::at(moment);
        assert_eq!(stamp.elapsed(moment + Duration::days(2)), Duration::days(2));
    }
}
