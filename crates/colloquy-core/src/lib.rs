//! colloquy-core
//!
//! Pure domain types, chart/network payload validation, route path
//! conventions and the deployment base path. No HTTP dependency — this is
//! the shared vocabulary of the Colloquy system.

pub mod base_path;
pub mod error;
pub mod models;
pub mod route_paths;
