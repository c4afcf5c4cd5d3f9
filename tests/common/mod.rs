//! Common test utilities for berth CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus fake cluster tools
//! - Fixtures: fake tool scripts and manifest content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
