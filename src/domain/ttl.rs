use chrono::Duration;
use derive_more::{Display, From, FromStr};

/// How long a dismissal keeps a banner hidden. Zero means "for the rest of
/// this login session": the banner only comes back after the login key changes.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Default, From, FromStr)]
pub struct TtlDays(u32);

impl TtlDays {
    pub const fn literal(days: u32) -> Self {
        Self(days)
    }

    pub fn is_session_scoped(&self) -> bool {
        self.0 == 0
    }

    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.0))
    }
}
