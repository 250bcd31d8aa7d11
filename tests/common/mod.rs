//! Common test utilities for lbforge integration tests.
//!
//! This module provides:
//! - Fixtures: the reference topology and its variants
//! - `RecordingDriver`: a legacy driver that logs every call

#![allow(dead_code)]

pub mod driver;

pub use driver::*;
pub use fixtures::*;
