//! Use cases
//!
//! Application-level operations that orchestrate calls to the bridge.

pub mod interactive_chat;
pub mod run_demo;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
