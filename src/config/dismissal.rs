use derive_more::Constructor;
use crate::domain::TtlDays;

/// Fixed at startup; never user-facing.
#[derive(Clone, Debug, Default, Constructor)]
pub struct DismissalConfig {
    pub ttl: TtlDays,
}
