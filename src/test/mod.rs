//! Shared test infrastructure.
//!
//! Metadata factories used by the unit tests of several modules live here, so every test
//! renders the same `Add`, `Reset`, `count` and `Dictionary` fixtures.
