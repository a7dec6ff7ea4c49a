//! Interactive chat module
//!
//! Provides a readline-based interactive chat against the bridge.

mod reader;
mod repl;

pub use reader::RustylineReader;
pub use repl::ChatRepl;
