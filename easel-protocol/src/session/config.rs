use easel_core::RoleExtra;

/// Everything needed to stand up a presence session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Display name broadcast to the other peers.
    pub name: String,
    /// Initial role payload; fixes the session's role for its lifetime.
    pub extra: RoleExtra,
    pub meet_id: String,
    /// Client version advertised as `"<major>.<minor>"`.
    pub version: String,
    pub signaling_url: String,
}
