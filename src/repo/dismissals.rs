use chrono::{DateTime, Utc};
use derive_more::Constructor;
use crate::config::DismissalConfig;
use crate::domain::{DismissalKey, DismissedAt, LoginKey};
use crate::storage::{KeyValueStore, SharedStore};
use crate::view::{AnnouncementView, DismissObserver};

#[derive(Clone, Constructor)]
pub struct Dismissals {
    store: SharedStore,
    config: DismissalConfig,
}

enum Suppression {
    /// No record under this key: never dismissed in this login session, or
    /// the store lost it, which reads the same.
    Absent,
    /// A record exists and still holds.
    Active,
    /// A record exists but its TTL ran out.
    Expired,
}

impl Dismissals {
    /// The page-load pass. For every banner the view shows: hide it when a
    /// still-valid dismissal record exists, otherwise register the observer
    /// that writes the record once the user closes it. Expired records are
    /// evicted here, on read.
    #[tracing::instrument(skip_all, fields(login = %login))]
    pub fn initialize(&self, view: &mut dyn AnnouncementView, login: &LoginKey, now: DateTime<Utc>) {
        for descriptor in view.descriptors() {
            let key = descriptor.dismissal_key(login);
            match self.suppression(&key, now) {
                Suppression::Active => {
                    log::debug!("suppressing {key}");
                    view.remove(&descriptor.id);
                }
                Suppression::Expired => {
                    log::debug!("dismissal of {key} expired, showing it again");
                    self.store.remove(&key.storage_key());
                    view.on_dismiss(&descriptor.id, self.recorder(key));
                }
                Suppression::Absent => view.on_dismiss(&descriptor.id, self.recorder(key)),
            }
        }
    }

    /// The observer that writes the dismissal record; the view fires it at
    /// most once, with the moment the user closed the banner.
    fn recorder(&self, key: DismissalKey) -> DismissObserver {
        let store = self.store.clone();
        Box::new(move |dismissed_at| {
            store.set(&key.storage_key(), DismissedAt::at(dismissed_at).encode());
        })
    }

    fn suppression(&self, key: &DismissalKey, now: DateTime<Utc>) -> Suppression {
        let record = self.store.get(&key.storage_key())
            .and_then(|raw| DismissedAt::decode(&raw));
        match record {
            None => Suppression::Absent,
            Some(_) if self.config.ttl.is_session_scoped() => Suppression::Active,
            Some(dismissed_at) if dismissed_at.elapsed(now) < self.config.ttl.duration() => Suppression::Active,
            Some(_) => Suppression::Expired,
        }
    }
}
