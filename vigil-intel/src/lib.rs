//! Vigil Intel - remote threat intelligence boundary
//!
//! Wraps the Safe Browsing style lookup API:
//! - Wire request/response types
//! - TTL-cached lookup client
//! - Fail-open semantics: missing intelligence reads as an empty result

pub mod config;
pub mod lookup;
pub mod wire;

pub use config::*;
pub use lookup::*;
pub use wire::*;
