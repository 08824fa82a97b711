//! Perses: Startup Configuration Resolution
//!
//! Resolves the server's startup configuration by merging caller-supplied
//! database defaults, a structured configuration file, and `PERSES_`-prefixed
//! environment variable overrides into a single validated configuration object.

pub mod config;
pub mod error;
