mod terminal;

pub use terminal::*;

use chrono::{DateTime, Utc};
use derive_more::Constructor;
use crate::domain::{Announcement, AnnouncementId, DismissalKey, LoginKey, RevisionMarker};

/// One-shot callback fired when the user closes a banner; receives the
/// moment of the dismissal.
pub type DismissObserver = Box<dyn FnOnce(DateTime<Utc>) + Send>;

/// Everything the dismissal logic is allowed to know about a rendering
/// surface. Keeps the decision code off any concrete presentation.
pub trait AnnouncementView {
    /// Descriptors of the banners currently visible on the surface.
    fn descriptors(&self) -> Vec<BannerDescriptor>;

    /// Takes a banner out of view.
    fn remove(&mut self, id: &AnnouncementId);

    /// Registers the observer to fire once when the banner is closed.
    fn on_dismiss(&mut self, id: &AnnouncementId, observer: DismissObserver);
}

/// The identifying slice of a rendered banner: just enough to compose its
/// dismissal key.
#[derive(Debug, Clone, Constructor)]
pub struct BannerDescriptor {
    pub id: AnnouncementId,
    pub revision: RevisionMarker,
}

impl BannerDescriptor {
    pub fn dismissal_key(&self, login: &LoginKey) -> DismissalKey {
        DismissalKey::new(login.clone(), self.id.clone(), self.revision.clone())
    }
}

impl From<&Announcement> for BannerDescriptor {
    fn from(announcement: &Announcement) -> Self {
        Self::new(announcement.id.clone(), announcement.updated_at.clone())
    }
}
