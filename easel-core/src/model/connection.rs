use crate::model::extra::RoleExtra;
use crate::model::peer::PeerId;
use crate::model::user::UserInfo;
use serde::{Deserialize, Serialize};

/// Last-known identity and role payload of a remote peer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Connection {
    pub user: UserInfo,
    pub extra: RoleExtra,
}

impl Connection {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.user.id.clone(),
            name: self.user.name.clone(),
            version: self.user.version.clone(),
        }
    }
}

/// Projection of a peer for listings; role extras are not exposed here.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct UserSummary {
    pub id: PeerId,
    pub name: String,
    pub version: String,
}

impl From<&UserInfo> for UserSummary {
    fn from(user: &UserInfo) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            version: user.version.clone(),
        }
    }
}
