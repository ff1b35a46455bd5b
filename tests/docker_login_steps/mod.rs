//! Step definitions for Docker registry login scenarios.

pub mod world;
