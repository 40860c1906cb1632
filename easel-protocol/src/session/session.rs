use crate::error::SessionError;
use crate::event::{ChangeKind, SessionEvent};
use crate::hub::{EventHub, Listener};
use crate::session::config::SessionConfig;
use crate::session::directory::ConnectionDirectory;
use crate::transport::{TransportEvent, TransportHandle};
use bytes::Bytes;
use easel_core::{
    Connection, DrawPayload, Envelope, ExtraPatch, PeerId, PenPhase, Role, RoleExtra, Target,
    ToolOptions, UserInfo, UserStatus, UserSummary, Version, WireMessage,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The presence-and-message protocol layer.
///
/// Owns the local identity, the directory of known peers, and the rules
/// for join/update/leave/draw handling. Every peer keeps an eventually
/// consistent view of the others purely from whatever envelopes arrive,
/// in whatever order; each envelope carries the sender's full state, so
/// replaying one is idempotent.
///
/// All mutation happens inside `handle_event` and the outbound API, which
/// the embedder drives from a single task. Destruction is a one-way valve:
/// once destroyed, every operation is a no-op.
pub struct PresenceSession {
    meet_id: String,
    signaling_url: String,
    user: UserInfo,
    extra: RoleExtra,
    directory: ConnectionDirectory,
    transport: Arc<dyn TransportHandle>,
    hub: EventHub<SessionEvent>,
    destroyed: bool,
}

impl PresenceSession {
    pub fn new(config: SessionConfig, transport: Arc<dyn TransportHandle>) -> Self {
        Self {
            meet_id: config.meet_id,
            signaling_url: config.signaling_url,
            user: UserInfo::new(config.name, config.version),
            extra: config.extra,
            directory: ConnectionDirectory::new(),
            transport,
            hub: EventHub::new(),
            destroyed: false,
        }
    }

    /// Opens the transport session. Missing meet id or endpoint is
    /// reported through `SessionEvent::Error`, not raised.
    pub async fn connect(&mut self) {
        if self.destroyed {
            return;
        }
        if self.meet_id.is_empty() || self.signaling_url.is_empty() {
            warn!("refusing to connect without a meet id and signaling url");
            self.hub
                .emit(&SessionEvent::Error(SessionError::Misconfigured));
            return;
        }

        info!("connecting to meet '{}' as {}", self.meet_id, self.extra.role());
        self.transport
            .initialize(&self.meet_id, &self.signaling_url)
            .await;
    }

    pub fn subscribe(&mut self, listener: Listener<SessionEvent>) {
        self.hub.subscribe(listener);
    }

    pub fn unsubscribe(&mut self, listener: &Listener<SessionEvent>) {
        self.hub.unsubscribe(listener);
    }

    /// Feed one transport callback through the protocol. Runs to
    /// completion before the embedder hands over the next one.
    pub async fn handle_event(&mut self, event: TransportEvent) {
        if self.destroyed {
            return;
        }

        match event {
            TransportEvent::Opened(id) => {
                info!("assigned local peer id {}", id);
                self.user.id = id;
                self.broadcast_update().await;
            }
            TransportEvent::IdChanged(id) => {
                warn!("peer id reassigned after collision: {}", id);
                self.user.id = id;
                self.broadcast_update().await;
            }
            TransportEvent::PeerJoined(peer_id) => {
                // Point-to-point introduction; broadcasting here would be
                // an O(n^2) storm on every join.
                debug!("introducing ourselves to {}", peer_id);
                let envelope = self.envelope(Target::Peer(peer_id), None);
                self.send(WireMessage::Join(envelope)).await;
            }
            TransportEvent::Message(bytes) => {
                self.handle_message(bytes).await;
            }
            TransportEvent::PeerLeft(peer_id) => {
                match self.directory.remove(&peer_id) {
                    Some(connection) => {
                        self.hub.emit(&SessionEvent::ChangeUsers {
                            kind: ChangeKind::Exit,
                            connection,
                        });
                    }
                    None => debug!("unknown peer {} left", peer_id),
                }
            }
            TransportEvent::Disconnected => {
                info!("transport disconnected, tearing the session down");
                self.hub.emit(&SessionEvent::Disconnect);
                self.destroy().await;
            }
            TransportEvent::Error(reason) => {
                warn!("transport fault: {}", reason);
                self.hub
                    .emit(&SessionEvent::Error(SessionError::Transport(reason)));
            }
        }
    }

    async fn handle_message(&mut self, bytes: Bytes) {
        let raw: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("undecodable frame ({} bytes): {}", bytes.len(), e);
                self.hub
                    .emit(&SessionEvent::NotSupportMessage(serde_json::Value::Null));
                return;
            }
        };

        let message: WireMessage = match serde_json::from_value(raw.clone()) {
            Ok(message) => message,
            Err(_) => {
                debug!("unsupported message format");
                self.hub.emit(&SessionEvent::NotSupportMessage(raw));
                return;
            }
        };

        // Fan-out wire: frames not addressed to us still reach us.
        let addressed = match &message.envelope().target {
            Target::All => true,
            Target::Peer(id) => *id == self.user.id,
        };
        if !addressed {
            self.hub.emit(&SessionEvent::NotSupportMessage(raw));
            return;
        }

        match message {
            WireMessage::Join(envelope) => {
                let connection = self.upsert(envelope);
                debug!("peer {} joined", connection.user.id);
                self.hub.emit(&SessionEvent::ChangeUsers {
                    kind: ChangeKind::Join,
                    connection,
                });
            }
            WireMessage::Update(envelope) => {
                let stopped_shared = self.ends_presentation(&envelope);
                let connection = self.upsert(envelope);
                if stopped_shared {
                    info!("our extension unlinked itself; presentation ended");
                    self.hub.emit(&SessionEvent::StoppedShared);
                }
                self.hub.emit(&SessionEvent::ChangeUsers {
                    kind: ChangeKind::Update,
                    connection,
                });
            }
            WireMessage::Painting(envelope) => {
                // Draw events are point-to-point and only hosts render
                // them. Violations drop without a diagnostic; strokes are
                // far too frequent to surface individually.
                if envelope.target.is_all() || self.extra.role() != Role::Host {
                    return;
                }
                let from = self.directory.get(&envelope.user.id).cloned();
                let Some(raw_payload) = envelope.payload else {
                    return;
                };
                let Ok(payload) = serde_json::from_value::<DrawPayload>(raw_payload) else {
                    return;
                };
                self.hub.emit(&SessionEvent::Draw { payload, from });
            }
        }
    }

    /// Replaces the sender's directory entry with the envelope's full
    /// snapshot. Applying the same envelope twice yields the same state.
    fn upsert(&mut self, envelope: Envelope) -> Connection {
        let Envelope { user, extra, .. } = envelope;
        let id = user.id.clone();
        let connection = Connection { user, extra };
        self.directory.insert(id, connection.clone());
        connection
    }

    /// True when we are the host and the extension that owns us just
    /// cleared its presentation stream id.
    fn ends_presentation(&self, envelope: &Envelope) -> bool {
        let RoleExtra::Host(host) = &self.extra else {
            return false;
        };
        let RoleExtra::Extension(extension) = &envelope.extra else {
            return false;
        };
        host.extension_id == envelope.user.id.as_str() && extension.host_id.is_empty()
    }

    fn envelope(&self, target: Target, payload: Option<serde_json::Value>) -> Envelope {
        Envelope {
            target,
            user: self.user.clone(),
            extra: self.extra.clone(),
            payload,
        }
    }

    async fn send(&self, message: WireMessage) {
        let target = message.envelope().target.clone();
        self.transport.send(message, target).await;
    }

    /// Broadcasts the full local snapshot; peers rebuild their entry for
    /// us from it wholesale.
    async fn broadcast_update(&self) {
        self.send(WireMessage::Update(self.envelope(Target::All, None)))
            .await;
    }

    async fn set_status(&mut self, status: UserStatus) {
        self.user.status = status;
        self.broadcast_update().await;
    }

    /// Renames the local peer and propagates the change.
    pub async fn set_name(&mut self, name: impl Into<String>) {
        if self.destroyed {
            return;
        }
        self.user.name = name.into();
        self.broadcast_update().await;
    }

    /// Merges a partial patch into the local extra and broadcasts the
    /// complete merged value, never a diff. A patch for a different role
    /// is rejected through `SessionEvent::Error`.
    pub async fn update_extra(&mut self, patch: ExtraPatch) {
        if self.destroyed {
            return;
        }
        match self.extra.apply(patch) {
            Ok(()) => self.broadcast_update().await,
            Err(e) => {
                warn!("{}", e);
                self.hub.emit(&SessionEvent::Error(e.into()));
            }
        }
    }

    /// Sends a stroke to one specific peer. A `down` phase flips the local
    /// status to painting and an `up` phase back to idle, each with its own
    /// self-update broadcast, independent of the draw delivery itself.
    pub async fn draw(&mut self, target: PeerId, payload: DrawPayload) {
        if self.destroyed {
            return;
        }
        match payload.phase() {
            PenPhase::Down => self.set_status(UserStatus::Painting).await,
            PenPhase::Up => self.set_status(UserStatus::Idle).await,
            PenPhase::Move => {}
        }

        let Ok(raw) = serde_json::to_value(&payload) else {
            return;
        };
        self.send(WireMessage::Painting(
            self.envelope(Target::Peer(target), Some(raw)),
        ))
        .await;
    }

    /// Irreversible teardown: no further events are accepted or emitted,
    /// listeners are dropped, and the transport releases its connections.
    /// Safe to call any number of times.
    pub async fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        info!("destroying session {}", self.user.id);
        self.destroyed = true;
        self.hub.destroy();
        self.transport.close().await;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn id(&self) -> &PeerId {
        &self.user.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn role(&self) -> Role {
        self.extra.role()
    }

    pub fn status(&self) -> UserStatus {
        self.user.status
    }

    pub fn version(&self) -> &str {
        &self.user.version
    }

    pub fn meet_id(&self) -> &str {
        &self.meet_id
    }

    /// An extension is sharing while it advertises a presentation stream.
    pub fn is_shared(&self) -> bool {
        matches!(&self.extra, RoleExtra::Extension(extra) if !extra.host_id.is_empty())
    }

    /// Deep snapshot of the local role payload.
    pub fn extra(&self) -> RoleExtra {
        self.extra.clone()
    }

    /// Number of connected people, i.e. extension peers.
    pub fn participant_count(&self) -> usize {
        self.directory.role_count(Role::Extension)
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.directory.role_count(role)
    }

    pub fn hosts(&self) -> Vec<UserSummary> {
        self.directory.summaries(Role::Host)
    }

    pub fn extensions(&self) -> Vec<UserSummary> {
        self.directory.summaries(Role::Extension)
    }

    pub fn third_parties(&self) -> Vec<UserSummary> {
        self.directory.summaries(Role::ThirdParty)
    }

    pub fn get_host_by_extension(&self, extension_id: &str) -> Option<UserSummary> {
        self.directory
            .by_role(Role::Host)
            .find(|connection| {
                matches!(&connection.extra, RoleExtra::Host(host) if host.extension_id == extension_id)
            })
            .map(Connection::summary)
    }

    /// Tool options for a peer, defaulting to ourselves. Hosts carry no
    /// tool; the local peer resolves without a directory lookup.
    pub fn get_tool(&self, id: Option<&PeerId>) -> ToolOptions {
        match id {
            None => self.extra.tool(),
            Some(id) if *id == self.user.id => self.extra.tool(),
            Some(id) => self
                .directory
                .get(id)
                .map(|connection| connection.extra.tool())
                .unwrap_or_default(),
        }
    }

    /// Lowest advertised version among peers of the given role (default:
    /// our own role). Tokens compare numerically; no peers means `0.0`.
    pub fn get_lower_version(&self, role: Option<Role>) -> Version {
        let role = role.unwrap_or_else(|| self.extra.role());
        self.directory
            .by_role(role)
            .map(|connection| Version::parse(&connection.user.version))
            .min()
            .unwrap_or_default()
    }

    pub fn get_user_by_id(&self, id: &PeerId) -> Option<UserSummary> {
        self.directory.get(id).map(Connection::summary)
    }

    /// Resolves a peer by presentation or participant stream id. When we
    /// are the matching extension ourselves, answer locally instead of
    /// consulting the directory.
    pub fn get_user_by_video_id(&self, video_id: &str) -> Option<UserSummary> {
        if let RoleExtra::Extension(extra) = &self.extra {
            if extra.host_id == video_id || extra.data_participant_id == video_id {
                return Some(UserSummary::from(&self.user));
            }
        }
        self.directory.by_video_id(video_id).map(Connection::summary)
    }
}
