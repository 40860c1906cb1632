pub mod model;

pub use model::{
    Connection, DrawPayload, Envelope, ExtensionExtra, ExtensionPatch, ExtraPatch, HostExtra,
    HostPatch, PatchError, PeerId, PenPhase, PenSample, Role, RoleExtra, SharedType, Target,
    ThirdPartyExtra, ThirdPartyPatch, ToolOptions, UserInfo, UserStatus, UserSummary, Version,
    WireMessage,
};
