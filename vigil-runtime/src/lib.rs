//! Vigil Runtime - navigation pipeline and background service
//!
//! Wires scoring to the outside world:
//! - Display collaborator traits (badge, warning overlay, redirect)
//! - Per-tab result registry
//! - The per-navigation pipeline with its activity log
//! - Event loop with the periodic cache sweeper

pub mod collaborators;
pub mod pipeline;
pub mod service;
pub mod tabs;

pub use collaborators::*;
pub use pipeline::*;
pub use service::*;
pub use tabs::*;
