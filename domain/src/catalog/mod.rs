//! Language model catalog exposed by the bridge.

pub mod model;
