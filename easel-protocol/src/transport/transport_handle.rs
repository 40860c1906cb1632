use async_trait::async_trait;
use easel_core::{Target, WireMessage};

/// Capability interface onto the peer-transport layer. Sends are
/// fire-and-forget; faults come back as `TransportEvent::Error` rather
/// than return values.
#[async_trait]
pub trait TransportHandle: Send + Sync {
    /// Open (or reopen) the named session against the signaling endpoint.
    async fn initialize(&self, meet_id: &str, signaling_url: &str);

    /// Hand a message to the wire. The transport may fan it out to every
    /// peer regardless of `target`; receivers apply the addressing filter.
    async fn send(&self, message: WireMessage, target: Target);

    /// Tear down all peer connections and release local resources.
    async fn close(&self);

    async fn reconnect(&self);
}
