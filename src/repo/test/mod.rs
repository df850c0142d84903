
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, TimeZone, Utc};
use crate::config::DismissalConfig;
use crate::domain::{Announcement, AnnouncementId, LoginKey, TtlDays};
use crate::repo::Dismissals;
use crate::storage::{MemoryStore, SharedStore};
use crate::view::{AnnouncementView, BannerDescriptor, DismissObserver};

pub(crate) const LOGIN_KEY: &str = "L1";
pub(crate) const ANNOUNCEMENT_ID: &str = "A1";
pub(crate) const REVISION: &str = "2024-01-01";

pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

pub(crate) fn memory_store() -> SharedStore {
    Arc::new(MemoryStore::default())
}

pub(crate) fn dismissals(store: &SharedStore, ttl: TtlDays) -> Dismissals {
    Dismissals::new(store.clone(), DismissalConfig::new(ttl))
}

pub(crate) fn announcement(id: &str, revision: &str) -> Announcement {
    Announcement {
        id: id.into(),
        updated_at: revision.into(),
        title: format!("announcement {id}"),
        body: String::new(),
    }
}

pub(crate) fn login() -> LoginKey {
    LOGIN_KEY.into()
}

/// Test double for the rendering surface; records what the mechanism did.
pub(crate) struct FakeView {
    announcements: Vec<Announcement>,
    removed: Vec<AnnouncementId>,
    observers: HashMap<AnnouncementId, Vec<DismissObserver>>,
}

impl FakeView {
    /// A fresh page load showing the given banners.
    pub(crate) fn load(announcements: Vec<Announcement>) -> Self {
        Self {
            announcements,
            removed: Vec::new(),
            observers: HashMap::new(),
        }
    }

    pub(crate) fn is_visible(&self, id: &AnnouncementId) -> bool {
        !self.removed.contains(id)
    }

    pub(crate) fn observer_count(&self, id: &AnnouncementId) -> usize {
        self.observers.get(id).map_or(0, Vec::len)
    }

    /// Fires a registered observer the way a user click would.
    pub(crate) fn fire_dismiss(&mut self, id: &AnnouncementId, at: DateTime<Utc>) {
        let observer = self.observers.get_mut(id)
            .and_then(|observers| observers.pop())
            .expect("no dismiss observer registered");
        observer(at);
    }
}

impl AnnouncementView for FakeView {
    fn descriptors(&self) -> Vec<BannerDescriptor> {
        self.announcements.iter()
            .filter(|announcement| !self.removed.contains(&announcement.id))
            .map(BannerDescriptor::from)
            .collect()
    }

    fn remove(&mut self, id: &AnnouncementId) {
        self.removed.push(id.clone());
    }

    fn on_dismiss(&mut self, id: &AnnouncementId, observer: DismissObserver) {
        self.observers.entry(id.clone()).or_default().push(observer);
    }
}
