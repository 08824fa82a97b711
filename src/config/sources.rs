//! Configuration sources, added to the builder in increasing precedence.

pub mod config_file;
pub mod env;
