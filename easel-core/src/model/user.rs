use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the peer currently has a stroke in flight.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Idle,
    Painting,
}

impl UserStatus {
    /// Human-readable label shown next to a participant.
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Idle => "waiting",
            UserStatus::Painting => "drawing",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity snapshot carried in every envelope.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct UserInfo {
    pub id: PeerId,
    pub name: String,
    pub status: UserStatus,
    pub version: String,
}

impl UserInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: PeerId::default(),
            name: name.into(),
            status: UserStatus::Idle,
            version: version.into(),
        }
    }
}
