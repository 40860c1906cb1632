use crate::transport::{TransportEvent, TransportHandle};
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use easel_core::{PeerId, Target, WireMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use uuid::Uuid;

struct MeetInner {
    peers: DashMap<PeerId, mpsc::UnboundedSender<TransportEvent>>,
}

/// In-process rendezvous used by the demo and the integration tests.
///
/// Mirrors the real transport's delivery model: every sent frame is fanned
/// out to every *other* attached peer regardless of its target, so the
/// receiving protocol layer has to apply its own addressing filter.
#[derive(Clone)]
pub struct MemoryMeet {
    inner: Arc<MeetInner>,
}

impl MemoryMeet {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MeetInner {
                peers: DashMap::new(),
            }),
        }
    }

    /// Create a transport endpoint and its event stream. The peer is not
    /// announced to the meet until `initialize` is called on the handle.
    pub fn attach(&self) -> (MemoryTransport, mpsc::UnboundedReceiver<TransportEvent>) {
        let local_id = PeerId::from(Uuid::new_v4().to_string());
        let (local_tx, local_rx) = mpsc::unbounded_channel();
        let transport = MemoryTransport {
            inner: self.inner.clone(),
            local_id,
            local_tx,
        };
        (transport, local_rx)
    }

    pub fn peer_count(&self) -> usize {
        self.inner.peers.len()
    }
}

impl Default for MemoryMeet {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MemoryTransport {
    inner: Arc<MeetInner>,
    local_id: PeerId,
    local_tx: mpsc::UnboundedSender<TransportEvent>,
}

impl MemoryTransport {
    pub fn local_id(&self) -> &PeerId {
        &self.local_id
    }

    fn announce(&self) {
        let _ = self
            .local_tx
            .send(TransportEvent::Opened(self.local_id.clone()));

        // Channels come up pairwise, so both sides see a join.
        for entry in self.inner.peers.iter() {
            let _ = entry
                .value()
                .send(TransportEvent::PeerJoined(self.local_id.clone()));
            let _ = self
                .local_tx
                .send(TransportEvent::PeerJoined(entry.key().clone()));
        }

        self.inner
            .peers
            .insert(self.local_id.clone(), self.local_tx.clone());
    }

    fn depart(&self) {
        if self.inner.peers.remove(&self.local_id).is_none() {
            return;
        }
        for entry in self.inner.peers.iter() {
            let _ = entry
                .value()
                .send(TransportEvent::PeerLeft(self.local_id.clone()));
        }
    }
}

#[async_trait]
impl TransportHandle for MemoryTransport {
    async fn initialize(&self, meet_id: &str, _signaling_url: &str) {
        info!("peer {} attaching to meet '{}'", self.local_id, meet_id);
        self.announce();
    }

    async fn send(&self, message: WireMessage, _target: Target) {
        let bytes = match serde_json::to_vec(&message) {
            Ok(bytes) => Bytes::from(bytes),
            Err(e) => {
                error!("failed to encode wire message: {}", e);
                return;
            }
        };

        for entry in self.inner.peers.iter() {
            if *entry.key() == self.local_id {
                continue;
            }
            let _ = entry.value().send(TransportEvent::Message(bytes.clone()));
        }
    }

    async fn close(&self) {
        debug!("peer {} leaving meet", self.local_id);
        self.depart();
    }

    async fn reconnect(&self) {
        self.depart();
        self.announce();
    }
}
