use serde::Deserialize;
use crate::domain::{AnnouncementId, RevisionMarker};

/// A server-authored banner as it arrives in the dashboard snapshot.
/// Only `id` and `updated_at` feed the dismissal key; the rest is display
/// content this mechanism treats as opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub updated_at: RevisionMarker,
    pub title: String,
    #[serde(default)]
    pub body: String,
}
