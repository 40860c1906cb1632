use easel_core::{Connection, PeerId, Role, RoleExtra, UserSummary};
use std::collections::HashMap;

/// Local mapping of peer id to last-known connection record. Holds no
/// self-entry and lives only as long as the session that owns it.
#[derive(Debug, Default)]
pub struct ConnectionDirectory {
    entries: HashMap<PeerId, Connection>,
}

impl ConnectionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole record for this peer; remote state always
    /// arrives as a full snapshot.
    pub fn insert(&mut self, id: PeerId, connection: Connection) {
        self.entries.insert(id, connection);
    }

    pub fn remove(&mut self, id: &PeerId) -> Option<Connection> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &PeerId) -> Option<&Connection> {
        self.entries.get(id)
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Connection> {
        self.entries
            .values()
            .filter(move |connection| connection.extra.role() == role)
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.by_role(role).count()
    }

    pub fn summaries(&self, role: Role) -> Vec<UserSummary> {
        self.by_role(role).map(Connection::summary).collect()
    }

    /// Finds the extension whose presentation or participant stream id
    /// matches `video_id`.
    pub fn by_video_id(&self, video_id: &str) -> Option<&Connection> {
        self.entries.values().find(|connection| {
            let RoleExtra::Extension(extra) = &connection.extra else {
                return false;
            };
            extra.host_id == video_id || extra.data_participant_id == video_id
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
