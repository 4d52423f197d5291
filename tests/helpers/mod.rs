//! Shared fixtures for integration tests.

pub mod unit_fixtures;
