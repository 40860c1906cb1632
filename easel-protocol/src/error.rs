use easel_core::PatchError;
use thiserror::Error;

/// Faults surfaced through `SessionEvent::Error`. None of these are raised
/// as panics or returned on the message path; a caller that does not
/// subscribe simply does not learn of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The session was built without a meet id or signaling endpoint.
    #[error("meet id and signaling url are both required")]
    Misconfigured,

    /// Fault reported by the transport layer, forwarded verbatim.
    #[error("transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Patch(#[from] PatchError),
}
