//! Connection profiles and the stores that hold them.
//!
//! A connection profile is a named bundle of endpoint, credential, and
//! option data used to construct a vendor client. Profiles are owned by an
//! external store and are read-only from a hook's point of view. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
