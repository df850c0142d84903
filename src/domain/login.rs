use derive_more::{Constructor, Display, From};
use serde::Deserialize;

/// Changes every time the user establishes a new session. Dismissal records
/// are keyed under it, so logging out and back in surfaces every banner once.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Constructor, From, Deserialize)]
#[serde(transparent)]
pub struct LoginKey(String);

impl From<&str> for LoginKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
