use bytes::Bytes;
use easel_core::PeerId;

/// Lifecycle and message callbacks delivered by the transport layer.
/// Handled strictly run-to-completion; the directory is only ever
/// mutated from inside these handlers.
#[derive(Debug, Clone)]
pub enum TransportEvent {
    /// The rendezvous accepted us and assigned the local peer id.
    Opened(PeerId),
    /// The rendezvous resolved an id collision by reassigning ours.
    IdChanged(PeerId),
    /// A new peer's data channel came up.
    PeerJoined(PeerId),
    /// Raw message frame from some peer.
    Message(Bytes),
    /// A peer's data channel went away.
    PeerLeft(PeerId),
    /// The rendezvous itself is gone. Terminal.
    Disconnected,
    Error(String),
}
