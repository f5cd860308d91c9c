//! Integration test support crate
//!
//! Spawns the real API server against a test database and provides
//! request helpers and fixtures.

pub mod fixtures;
pub mod helpers;

pub use helpers::{assert_json, assert_status, check_test_env, promote_to_admin, TestServer};
