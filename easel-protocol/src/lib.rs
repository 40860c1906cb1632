mod error;
mod event;
mod hub;
mod session;
mod transport;

pub use error::SessionError;
pub use event::{ChangeKind, SessionEvent};
pub use hub::{EventHub, Listener};
pub use session::{ConnectionDirectory, PresenceSession, SessionConfig};
pub use transport::{MemoryMeet, MemoryTransport, TransportEvent, TransportHandle};
