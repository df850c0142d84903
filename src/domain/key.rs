use derive_more::{Constructor, Display};
use crate::domain::{AnnouncementId, LoginKey, RevisionMarker};

/// Fixed prefix distinguishing dismissal records from anything else that may
/// share the store.
pub const DISMISSAL_NAMESPACE: &str = "regulate_announce_dismissed";

/// The triple a dismissal record is valid for. Changing any component makes
/// previously written records unreachable; they are orphaned, not cleaned up.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Constructor)]
#[display("{login}/{id}@{revision}")]
pub struct DismissalKey {
    login: LoginKey,
    id: AnnouncementId,
    revision: RevisionMarker,
}

impl DismissalKey {
    /// The key the record is stored under.
    pub fn storage_key(&self) -> String {
        format!("{}_{}_{}_{}", DISMISSAL_NAMESPACE, self.login, self.id, self.revision)
    }
}
