use crate::error::SessionError;
use easel_core::{Connection, DrawPayload};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ChangeKind {
    Join,
    Exit,
    Update,
}

/// Everything the protocol layer reports to its embedder.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Error(SessionError),
    /// Terminal: the transport lost its rendezvous. The session destroys
    /// itself right after emitting this.
    Disconnect,
    ChangeUsers {
        kind: ChangeKind,
        connection: Connection,
    },
    /// Mis-addressed, unrecognized, or undecodable message, passed through
    /// as raw JSON for diagnostics.
    NotSupportMessage(serde_json::Value),
    /// The extension owning the local host unlinked itself; the
    /// presentation has ended.
    StoppedShared,
    Draw {
        payload: DrawPayload,
        from: Option<Connection>,
    },
}
