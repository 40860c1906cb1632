use crate::model::extra::RoleExtra;
use crate::model::peer::Target;
use crate::model::user::UserInfo;
use serde::{Deserialize, Serialize};

/// Self-describing message unit. Every envelope carries a full snapshot of
/// the sender's identity and extra; directory state is rebuilt from the
/// latest envelope per sender, never diffed.
///
/// The draw payload stays raw JSON so that a malformed stroke cannot fail
/// envelope parsing. It is interpreted only when a painting message is
/// actually accepted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Envelope {
    pub target: Target,
    pub user: UserInfo,
    pub extra: RoleExtra,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// Typed wire message: `{ "type": "user:...", "payload": { ...envelope } }`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum WireMessage {
    #[serde(rename = "user:join")]
    Join(Envelope),
    #[serde(rename = "user:update")]
    Update(Envelope),
    #[serde(rename = "user:painting")]
    Painting(Envelope),
}

impl WireMessage {
    pub fn envelope(&self) -> &Envelope {
        match self {
            WireMessage::Join(envelope)
            | WireMessage::Update(envelope)
            | WireMessage::Painting(envelope) => envelope,
        }
    }
}
