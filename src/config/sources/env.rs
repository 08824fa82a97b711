//! Environment variable source: `PERSES_`-prefixed overrides.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

use crate::config::ENV_PREFIX;

/// Add the environment source to the builder.
///
/// Variables are named by the dotted field path upper-cased with underscores
/// under the fixed prefix, e.g. `PERSES_DATABASE_FILE_FOLDER` overrides
/// `database.file.folder`. This is the highest-precedence layer.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("_"))
}
