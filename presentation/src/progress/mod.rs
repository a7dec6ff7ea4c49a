//! Progress reporting for the demonstration and the interactive loop

pub mod reporter;
