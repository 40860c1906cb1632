mod connection;
mod draw;
mod extra;
mod message;
mod peer;
mod user;
mod version;

pub use connection::{Connection, UserSummary};
pub use draw::{DrawPayload, PenPhase, PenSample};
pub use extra::{
    ExtensionExtra, ExtensionPatch, ExtraPatch, HostExtra, HostPatch, PatchError, Role, RoleExtra,
    SharedType, ThirdPartyExtra, ThirdPartyPatch, ToolOptions,
};
pub use message::{Envelope, WireMessage};
pub use peer::{PeerId, Target};
pub use user::{UserInfo, UserStatus};
pub use version::Version;
