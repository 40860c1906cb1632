mod config;
mod directory;
mod session;

pub use config::SessionConfig;
pub use directory::ConnectionDirectory;
pub use session::PresenceSession;
