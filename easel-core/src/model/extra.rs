use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What kind of surface the host is presenting.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, Eq, PartialEq)]
pub enum SharedType {
    #[serde(rename = "screen")]
    Screen,
    #[serde(rename = "window")]
    Window,
    #[serde(rename = "browser:tab")]
    BrowserTab,
    #[default]
    #[serde(rename = "")]
    None,
}

/// Drawing tool options advertised by extension and third-party peers.
#[derive(Debug, Serialize, Deserialize, Clone, Default, Eq, PartialEq)]
pub struct ToolOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HostExtra {
    /// Peer id of the extension that owns this host.
    pub extension_id: String,
    /// Whether drawing on the shared surface is allowed.
    pub active: bool,
    pub shared_type: SharedType,
    /// Screen index, meaningful when `shared_type` is `Screen`.
    pub shared_screen: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionExtra {
    #[serde(default)]
    pub tool: ToolOptions,
    /// Video id of the presentation stream. Empty when nothing is shared.
    pub host_id: String,
    /// Video id of the participant's own stream.
    pub data_participant_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyExtra {
    #[serde(default)]
    pub tool: ToolOptions,
    /// Peer id of the extension this observer follows.
    pub extension_id: String,
}

/// Role-scoped state payload. Exactly one variant is active per peer;
/// remote extras always arrive whole, never as diffs.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum RoleExtra {
    #[serde(rename = "host")]
    Host(HostExtra),
    #[serde(rename = "extension")]
    Extension(ExtensionExtra),
    #[serde(rename = "thirdParty")]
    ThirdParty(ThirdPartyExtra),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Role {
    Host,
    Extension,
    ThirdParty,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Host => f.write_str("host"),
            Role::Extension => f.write_str("extension"),
            Role::ThirdParty => f.write_str("thirdParty"),
        }
    }
}

/// Partial update for the local peer's own extra. Fields left `None`
/// keep their current value.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HostPatch {
    pub extension_id: Option<String>,
    pub active: Option<bool>,
    pub shared_type: Option<SharedType>,
    pub shared_screen: Option<u32>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ExtensionPatch {
    pub tool: Option<ToolOptions>,
    pub host_id: Option<String>,
    pub data_participant_id: Option<String>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ThirdPartyPatch {
    pub tool: Option<ToolOptions>,
    pub extension_id: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExtraPatch {
    Host(HostPatch),
    Extension(ExtensionPatch),
    ThirdParty(ThirdPartyPatch),
}

impl ExtraPatch {
    pub fn role(&self) -> Role {
        match self {
            ExtraPatch::Host(_) => Role::Host,
            ExtraPatch::Extension(_) => Role::Extension,
            ExtraPatch::ThirdParty(_) => Role::ThirdParty,
        }
    }
}

/// A patch targeting a different role than the one the extra currently holds.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("cannot apply a {found} patch to a {expected} extra")]
pub struct PatchError {
    pub expected: Role,
    pub found: Role,
}

impl RoleExtra {
    pub fn role(&self) -> Role {
        match self {
            RoleExtra::Host(_) => Role::Host,
            RoleExtra::Extension(_) => Role::Extension,
            RoleExtra::ThirdParty(_) => Role::ThirdParty,
        }
    }

    /// Shallow-merges a same-role patch into this extra. Cross-role
    /// patches are rejected rather than producing a malformed record.
    pub fn apply(&mut self, patch: ExtraPatch) -> Result<(), PatchError> {
        match (&mut *self, patch) {
            (RoleExtra::Host(extra), ExtraPatch::Host(patch)) => {
                if let Some(extension_id) = patch.extension_id {
                    extra.extension_id = extension_id;
                }
                if let Some(active) = patch.active {
                    extra.active = active;
                }
                if let Some(shared_type) = patch.shared_type {
                    extra.shared_type = shared_type;
                }
                if let Some(shared_screen) = patch.shared_screen {
                    extra.shared_screen = shared_screen;
                }
                Ok(())
            }
            (RoleExtra::Extension(extra), ExtraPatch::Extension(patch)) => {
                if let Some(tool) = patch.tool {
                    extra.tool = tool;
                }
                if let Some(host_id) = patch.host_id {
                    extra.host_id = host_id;
                }
                if let Some(data_participant_id) = patch.data_participant_id {
                    extra.data_participant_id = data_participant_id;
                }
                Ok(())
            }
            (RoleExtra::ThirdParty(extra), ExtraPatch::ThirdParty(patch)) => {
                if let Some(tool) = patch.tool {
                    extra.tool = tool;
                }
                if let Some(extension_id) = patch.extension_id {
                    extra.extension_id = extension_id;
                }
                Ok(())
            }
            (extra, patch) => Err(PatchError {
                expected: extra.role(),
                found: patch.role(),
            }),
        }
    }

    /// Tool options for drawing roles; hosts have none.
    pub fn tool(&self) -> ToolOptions {
        match self {
            RoleExtra::Host(_) => ToolOptions::default(),
            RoleExtra::Extension(extra) => extra.tool.clone(),
            RoleExtra::ThirdParty(extra) => extra.tool.clone(),
        }
    }
}
