//! Config file source: structured YAML document given by path at startup.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use std::path::Path;
use tracing::debug;

use crate::error::ConfigError;

/// Add the config file source to the builder.
///
/// An empty path means "no file source". A non-empty path must point at a
/// readable, well-formed document; a missing file is a load error, not a
/// silent skip.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    config_file: &str,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if config_file.is_empty() {
        debug!("No configuration file given; skipping file source");
        return Ok(builder);
    }

    let path = Path::new(config_file);
    if !path.exists() {
        return Err(ConfigError::Load(format!(
            "configuration file not found: {}",
            config_file
        )));
    }

    debug!(config_path = %path.display(), "Adding configuration file source");
    Ok(builder.add_source(File::with_name(config_file).required(true)))
}
