//! Integration tests for environment variable overrides

use perses_config::config::{ConfigResolver, FileExtension, ValidationError};
use perses_config::error::ConfigError;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::test_utils::{EXTENSION_VAR, FOLDER_VAR};
use crate::integration::with_env_vars;

#[test]
fn test_env_overrides_caller_default() {
    with_env_vars(&[(FOLDER_VAR, "/other")], || {
        let config = ConfigResolver::resolve("", "/default", "yaml").unwrap();

        let file = config.database.file.unwrap();
        assert_eq!(file.folder, PathBuf::from("/other"));
    });
}

#[test]
fn test_env_overrides_file_source() {
    with_env_vars(&[(FOLDER_VAR, "/from-env")], || {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("perses.yaml");

        std::fs::write(
            &config_file,
            r#"
database:
  file:
    folder: /from-file
    extension: json
"#,
        )
        .unwrap();

        let config = ConfigResolver::resolve(config_file.to_str().unwrap(), "", "").unwrap();

        let file = config.database.file.unwrap();
        assert_eq!(file.folder, PathBuf::from("/from-env"));
        // The env var only overrides the folder; the extension keeps the
        // file-supplied value
        assert_eq!(file.extension, FileExtension::Json);
    });
}

#[test]
fn test_env_alone_populates_file_database() {
    with_env_vars(&[(FOLDER_VAR, "/env-only")], || {
        let config = ConfigResolver::resolve("", "", "").unwrap();

        let file = config.database.file.unwrap();
        assert_eq!(file.folder, PathBuf::from("/env-only"));
        assert_eq!(file.extension, FileExtension::Yaml);
    });
}

#[test]
fn test_env_invalid_extension_is_parse_error() {
    with_env_vars(&[(FOLDER_VAR, "/data"), (EXTENSION_VAR, "bogus")], || {
        let err = ConfigResolver::resolve("", "", "").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got: {:?}", err);
    });
}

#[test]
fn test_env_extension_without_folder_is_validation_error() {
    // The extension alone creates the file descriptor but leaves the required
    // folder unset
    with_env_vars(&[(EXTENSION_VAR, "json")], || {
        let err = ConfigResolver::resolve("", "", "").unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert!(matches!(&errors[0], ValidationError::Database(_)));
            }
            other => panic!("expected validation error, got: {:?}", other),
        }
    });
}

#[test]
fn test_full_precedence_chain() {
    // caller < file < env, field by field
    with_env_vars(&[(FOLDER_VAR, "/from-env")], || {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("perses.yaml");

        std::fs::write(
            &config_file,
            r#"
database:
  file:
    folder: /from-file
    extension: yaml
"#,
        )
        .unwrap();

        let config =
            ConfigResolver::resolve(config_file.to_str().unwrap(), "/from-caller", "json")
                .unwrap();

        let file = config.database.file.unwrap();
        assert_eq!(file.folder, PathBuf::from("/from-env"));
        assert_eq!(file.extension, FileExtension::Yaml);
    });
}
