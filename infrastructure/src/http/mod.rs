//! HTTP adapter for the bridge API
//!
//! [`client::HttpBridgeClient`] implements the
//! [`BridgeApi`](bridge_application::BridgeApi) port on top of `reqwest`.

pub mod client;
mod error;

#[cfg(test)]
mod stub;
