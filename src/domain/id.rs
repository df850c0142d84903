use derive_more::{Constructor, Display, From};
use serde::Deserialize;

/// Opaque, stable identifier the server assigns to an announcement.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Constructor, From, Deserialize)]
#[serde(transparent)]
pub struct AnnouncementId(String);

impl From<&str> for AnnouncementId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Version marker of an announcement's content; the server bumps it on every
/// edit, which is what keeps a dismissal from outliving the text it applied to.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Constructor, From, Deserialize)]
#[serde(transparent)]
pub struct RevisionMarker(String);

impl From<&str> for RevisionMarker {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
