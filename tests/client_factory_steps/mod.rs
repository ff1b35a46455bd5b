//! Step definitions for client factory scenarios.


mod given;
