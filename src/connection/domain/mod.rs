//! Domain model for connection profiles.
//!
//! Profiles carry endpoint, credential, and free-form option data. They are
//! validated on construction and never mutated once handed to a hook.

mod error;
mod extra;
mod ids;
mod profile;
mod uri;

pub use error::ConnectionDomainError;
pub use extra::{ExtraOptions, flag_enabled, is_truthy};
pub use ids::{ConnectionId, ConnectionType};
pub use profile::ConnectionProfile;
pub use uri::parse_connection_uri;
