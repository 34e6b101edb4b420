pub mod config;

use std::fs;

use serde_json::Value;

pub use config::{AppConfig, ConfigError, Environment, OverrideSource};

/// Loads environment variables from `.env` when available.
///
/// Missing files are ignored so the function is safe in production builds
/// where dotenv files are not deployed.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

/// Reads and parses the override document described by `source`.
///
/// Only I/O and JSON syntax problems are errors here; shape problems inside
/// a well-formed document are left to the overlay, which skips them.
pub fn load_overrides(source: &OverrideSource) -> Result<Value, ConfigError> {
    let raw = match source {
        OverrideSource::Inline(document) => document.clone(),
        OverrideSource::File(path) => {
            fs::read_to_string(path).map_err(|source| ConfigError::ReadOverrides {
                path: path.clone(),
                source,
            })?
        }
    };

    serde_json::from_str(&raw).map_err(ConfigError::ParseOverrides)
}

#[cfg(test)]
pub(crate) static ENV_GUARD: std::sync::LazyLock<std::sync::Mutex<()>> =
    std::sync::LazyLock::new(|| std::sync::Mutex::new(()));

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn parses_inline_document() {
        let source = OverrideSource::Inline(r#"{"messages":{"addToLiked":"Saved"}}"#.to_string());
        let value = load_overrides(&source).expect("inline document parses");
        assert_eq!(value, json!({"messages": {"addToLiked": "Saved"}}));
    }

    #[test]
    fn reads_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"messages":{{"removeFromLiked":"Unsaved"}}}}"#).expect("write overrides");

        let value = load_overrides(&OverrideSource::File(file.path().to_path_buf()))
            .expect("file document parses");
        assert_eq!(value["messages"]["removeFromLiked"], "Unsaved");
    }

    #[test]
    fn well_formed_but_odd_shapes_are_not_errors() {
        let value = load_overrides(&OverrideSource::Inline("[1, 2, 3]".to_string()))
            .expect("any JSON value is accepted");
        assert!(value.is_array());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let err = load_overrides(&OverrideSource::File(path.clone()))
            .expect_err("missing file should error");
        assert!(matches!(err, ConfigError::ReadOverrides { path: ref p, .. } if *p == path));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = load_overrides(&OverrideSource::Inline("{messages:".to_string()))
            .expect_err("invalid JSON should error");
        assert!(matches!(err, ConfigError::ParseOverrides(_)));
        assert!(err.to_string().starts_with("notifications overrides are not valid JSON"));
    }

    #[test]
    fn describes_file_source_by_path() {
        let source = OverrideSource::File(PathBuf::from("/srv/cms/notifications.json"));
        assert_eq!(source.describe(), "/srv/cms/notifications.json");
    }
}
