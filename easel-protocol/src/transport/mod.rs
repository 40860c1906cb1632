mod memory;
mod transport_event;
mod transport_handle;

pub use memory::{MemoryMeet, MemoryTransport};
pub use transport_event::TransportEvent;
pub use transport_handle::TransportHandle;
