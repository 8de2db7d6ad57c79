//! Shared fixtures and assertions for the integration tests.

#![allow(dead_code)]

pub mod hierarchy_assertions;
pub mod source_fixtures;
