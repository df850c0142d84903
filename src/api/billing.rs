use reqwest::Url;
use serde_json::Value;
use strum_macros::Display;

/// Where the user lands when the server handled a billing flow itself.
pub const DASHBOARD_PATH: &str = "/dashboard/";

const REDIRECT_FIELDS: [&str; 2] = ["redirect_url", "url"];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CheckoutPlan {
    Trial,
    Subscription,
}

impl CheckoutPlan {
    pub(super) fn endpoint(&self) -> &'static str {
        match self {
            Self::Trial => "billing/start-trial/",
            Self::Subscription => "billing/start-subscription/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The server created a checkout session; the user finishes it there.
    Redirect(Url),
    /// Non-JSON (HTML) response: the server handled the flow itself and
    /// left a flash message on the dashboard.
    Dashboard,
}

pub(super) fn parse_checkout_response(body: &str) -> CheckoutOutcome {
    let payload = match serde_json::from_str::<Value>(body) {
        Ok(payload) => payload,
        Err(_) => return CheckoutOutcome::Dashboard,
    };
    REDIRECT_FIELDS.iter()
        .find_map(|field| payload.get(*field).and_then(Value::as_str))
        .and_then(|raw| Url::parse(raw).ok())
        .map(CheckoutOutcome::Redirect)
        .unwrap_or(CheckoutOutcome::Dashboard)
}
