//! Hookwright: connection-backed client factories for workflow hooks.
//!
//! A hook is bound to a named connection profile. On first use it loads the
//! profile from a [`ConnectionStore`](connection::ports::ConnectionStore),
//! validates the fields its service needs, builds the vendor client, and
//! caches it for the hook's lifetime.
//!
//! # Architecture
//!
//! Hookwright follows hexagonal architecture principles:
//!
//! - **Domain**: profiles, hook configuration, and error types
//! - **Ports**: the connection store and one trait set per vendor
//! - **Adapters**: in-memory, environment, file, and HTTP implementations
//!
//! # Modules
//!
//! - [`connection`]: Connection profiles and stores
//! - [`hook`]: The generic client factory and its error model
//! - [`providers`]: Jira, Jenkins, Opsgenie, Docker, and AWS hooks
//! - [`config`]: Settings for assembling a store from files and environment

pub mod config;
pub mod connection;
pub mod hook;
pub mod providers;

mod fs_utils;
