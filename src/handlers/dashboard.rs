use chrono::{DateTime, Utc};
use crate::domain::{AnnouncementId, DashboardSnapshot, PlanStatus};
use crate::handlers::{reply, HandlerResult};
use crate::repo::Repositories;
use crate::view::TerminalView;

/// The page-load pass: suppress previously dismissed banners, register
/// dismiss observers for the rest, then render what survived.
pub fn dashboard_load_handler(repos: &Repositories, view: &mut TerminalView,
                              snapshot: &DashboardSnapshot, now: DateTime<Utc>) -> HandlerResult {
    repos.dismissals.initialize(view, &snapshot.login_key, now);
    view.render(&plan_banner(snapshot));
    Ok(())
}

pub fn dismiss_cmd_handler(view: &mut TerminalView, id: &AnnouncementId) -> HandlerResult {
    let answer = if view.dismiss(id, Utc::now()) {
        format!("Announcement {id} dismissed.")
    } else {
        format!("No visible announcement with id {id}.")
    };
    reply(answer);
    Ok(())
}

pub fn plan_cmd_handler(snapshot: &DashboardSnapshot) -> HandlerResult {
    reply(plan_banner(snapshot).to_string());
    Ok(())
}

fn plan_banner(snapshot: &DashboardSnapshot) -> PlanStatus {
    snapshot.plan.clone().unwrap_or_else(PlanStatus::free)
}
