//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod bridge_api;
pub mod line_input;
pub mod progress;
