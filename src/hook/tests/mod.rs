//! Unit tests for the connection client factory.
