//! Merge rules: caller-seeded defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;

use crate::error::ConfigError;

/// Create a Config builder seeded with caller-supplied database defaults.
///
/// The seeded values form the lowest-precedence layer; file and environment
/// sources override them field by field. An empty `db_folder` seeds nothing.
/// The extension string is not validated here: a higher-precedence source may
/// still override it, and only the surviving value must parse.
pub fn builder_with_defaults(
    db_folder: &str,
    db_extension: &str,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = Config::builder();

    if !db_folder.is_empty() {
        builder = builder.set_default("database.file.folder", db_folder)?;
        if !db_extension.is_empty() {
            builder = builder.set_default("database.file.extension", db_extension)?;
        }
    }

    Ok(builder)
}
