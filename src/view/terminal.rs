use chrono::{DateTime, Utc};
use crate::domain::{Announcement, AnnouncementId, PlanStatus};
use super::{AnnouncementView, BannerDescriptor, DismissObserver};

/// Renders the dashboard to stdout and owns the dismiss observers of the
/// banners it shows.
pub struct TerminalView {
    banners: Vec<Banner>,
}

struct Banner {
    announcement: Announcement,
    visible: bool,
    observer: Option<DismissObserver>,
}

impl TerminalView {
    pub fn new(announcements: Vec<Announcement>) -> Self {
        let banners = announcements.into_iter()
            .map(|announcement| Banner { announcement, visible: true, observer: None })
            .collect();
        Self { banners }
    }

    pub fn render(&self, plan: &PlanStatus) {
        println!("== Regulate dashboard ==");
        println!("{plan}");
        let visible: Vec<&Banner> = self.banners.iter().filter(|b| b.visible).collect();
        if visible.is_empty() {
            println!("(no announcements)");
            return;
        }
        for banner in visible {
            let announcement = &banner.announcement;
            println!("[{}] {}", announcement.id, announcement.title);
            if !announcement.body.is_empty() {
                println!("    {}", announcement.body);
            }
        }
    }

    /// Fires the dismiss observer of a visible banner and hides it.
    /// `false` when no such banner is on screen.
    pub fn dismiss(&mut self, id: &AnnouncementId, at: DateTime<Utc>) -> bool {
        match self.banners.iter_mut().find(|b| b.visible && b.announcement.id == *id) {
            Some(banner) => {
                banner.visible = false;
                if let Some(observer) = banner.observer.take() {
                    observer(at);
                }
                true
            }
            None => false,
        }
    }
}

impl AnnouncementView for TerminalView {
    fn descriptors(&self) -> Vec<BannerDescriptor> {
        self.banners.iter()
            .filter(|b| b.visible)
            .map(|b| BannerDescriptor::from(&b.announcement))
            .collect()
    }

    fn remove(&mut self, id: &AnnouncementId) {
        if let Some(banner) = self.banners.iter_mut().find(|b| b.announcement.id == *id) {
            banner.visible = false;
            banner.observer = None;
        }
    }

    fn on_dismiss(&mut self, id: &AnnouncementId, observer: DismissObserver) {
        if let Some(banner) = self.banners.iter_mut().find(|b| b.visible && b.announcement.id == *id) {
            banner.observer.replace(observer);
        }
    }
}
