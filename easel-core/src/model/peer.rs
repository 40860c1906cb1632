use serde::{Deserialize, Serialize};
use std::fmt;

/// Peer identifier assigned by the transport on join. Empty until then.
#[derive(Debug, Serialize, Deserialize, Clone, Default, Hash, Eq, PartialEq)]
pub struct PeerId(pub String);

impl PeerId {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PeerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PeerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message destination: every connected peer, or exactly one of them.
/// On the wire this is the string `"all"` or the raw peer id.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum Target {
    All,
    Peer(PeerId),
}

impl Target {
    pub fn is_all(&self) -> bool {
        matches!(self, Target::All)
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        if s == "all" {
            Target::All
        } else {
            Target::Peer(PeerId(s))
        }
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        match target {
            Target::All => "all".to_string(),
            Target::Peer(id) => id.0,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::All => write!(f, "all"),
            Target::Peer(id) => write!(f, "{}", id),
        }
    }
}
