use serde::Deserialize;
use strum_macros::Display;
use crate::domain::{Announcement, LoginKey};

/// The dashboard page context as the server serializes it: the login scope
/// plus everything rendered into banners.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSnapshot {
    pub login_key: LoginKey,
    #[serde(default)]
    pub plan: Option<PlanStatus>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

impl DashboardSnapshot {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// The small plan banner under the navbar.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanStatus {
    pub label: String,
    pub badge: PlanBadge,
}

impl PlanStatus {
    /// What the server shows when no subscription exists.
    pub fn free() -> Self {
        Self {
            label: "Free plan".to_owned(),
            badge: PlanBadge::Free,
        }
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.badge, self.label)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlanBadge {
    #[default]
    Free,
    Trial,
    Plus,
    Ending,
}
