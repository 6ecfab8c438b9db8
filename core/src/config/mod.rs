//! Minimal configuration module for hotel-tools core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{Credentials, ResolvedApiConfig, DEFAULT_BASE_URL};
