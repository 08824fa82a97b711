//! Resolution facade: orchestrates the layered sources in documented order.

use tracing::{debug, warn};

use crate::config::merge::merge_policy;
use crate::config::sources;
use crate::config::Config;
use crate::error::ConfigError;

/// Entry point for configuration resolution.
///
/// Sources are merged in increasing precedence, each overriding fields
/// explicitly set by the previous one and leaving unset fields untouched:
/// 1. Caller-supplied database defaults
/// 2. Configuration file (when a path is given)
/// 3. `PERSES_`-prefixed environment variables
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve the process configuration.
    ///
    /// `config_file` may be empty, meaning no file source. A non-empty
    /// `db_folder` seeds the file database descriptor; `db_extension` is only
    /// meaningful alongside a non-empty `db_folder` and defaults to `yaml`
    /// when left empty.
    pub fn resolve(
        config_file: &str,
        db_folder: &str,
        db_extension: &str,
    ) -> Result<Config, ConfigError> {
        if db_folder.is_empty() && !db_extension.is_empty() {
            warn!(
                extension = %db_extension,
                "Database file extension supplied without a folder; ignoring"
            );
        }

        let mut builder = merge_policy::builder_with_defaults(db_folder, db_extension)?;
        builder = sources::config_file::add_to_builder(builder, config_file)?;
        builder = sources::env::add_to_builder(builder);

        let merged = builder.build()?;
        let config: Config = merged.try_deserialize()?;

        config.validate().map_err(ConfigError::Validation)?;

        debug!(
            file_database = config.database.file.is_some(),
            "Configuration resolved"
        );

        Ok(config)
    }
}
