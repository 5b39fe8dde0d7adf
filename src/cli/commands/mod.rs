//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod common;
pub mod init;
pub mod step;
pub mod stl;
pub mod validate;
