use thiserror::Error;
use tracing::{info, warn};

use cms_settings_core::{ConfigOverlay, Notifications, OverlayReport};
use cms_settings_util::{load_overrides, AppConfig, ConfigError};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
}

/// Loads the deployment override document (if any) and initializes `registry` with it.
///
/// Discarded entries are logged and returned; they never fail the bootstrap.
pub fn initialize_notifications(
    config: &AppConfig,
    registry: &ConfigOverlay<Notifications>,
) -> Result<OverlayReport, BootstrapError> {
    let overrides = config
        .notifications
        .as_ref()
        .map(|source| load_overrides(source).map(|value| (source.describe(), value)))
        .transpose()?;

    let report = registry.initialize_with_report(overrides.as_ref().map(|(_, value)| value));

    for rejection in &report.rejections {
        warn!(
            stage = "overlay",
            domain = report.domain,
            path = %rejection.path,
            reason = %rejection.reason,
            "override discarded, keeping default"
        );
    }

    match &overrides {
        Some((origin, _)) => info!(
            stage = "overlay",
            domain = report.domain,
            %origin,
            discarded = report.rejections.len(),
            "configuration initialized with overrides"
        ),
        None => info!(
            stage = "overlay",
            domain = report.domain,
            "configuration initialized with defaults"
        ),
    }

    Ok(report)
}

/// Serializes the current configuration; `null` before initialization.
pub fn render_configuration(
    registry: &ConfigOverlay<Notifications>,
) -> Result<String, BootstrapError> {
    let resolved = registry.get_configuration();
    Ok(serde_json::to_string_pretty(&resolved.as_deref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_settings_util::{Environment, OverrideSource};
    use serde_json::{json, Value};
    use std::io::Write;

    fn app_config(notifications: Option<OverrideSource>) -> AppConfig {
        AppConfig {
            environment: Environment::Test,
            notifications,
        }
    }

    #[test]
    fn initializes_defaults_without_source() {
        let registry = ConfigOverlay::<Notifications>::new();
        let report = initialize_notifications(&app_config(None), &registry)
            .expect("bootstrap succeeds");

        assert!(report.is_clean());
        let resolved = registry.get_configuration().expect("initialized");
        assert_eq!(resolved.messages.add_to_liked, "Added to your liked videos");
    }

    #[test]
    fn applies_file_overrides_and_reports_discards() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"messages":{{"addToDisliked":"Marked as disliked","removeFromLiked":7}},"theme":"dark"}}"#
        )
        .expect("write overrides");

        let registry = ConfigOverlay::<Notifications>::new();
        let config = app_config(Some(OverrideSource::File(file.path().to_path_buf())));
        let report = initialize_notifications(&config, &registry).expect("bootstrap succeeds");

        let resolved = registry.get_configuration().expect("initialized");
        assert_eq!(resolved.messages.add_to_disliked, "Marked as disliked");
        assert_eq!(resolved.messages.remove_from_liked, "Removed from your liked videos");

        let mut paths: Vec<_> = report.rejections.iter().map(|r| r.path.clone()).collect();
        paths.sort();
        assert_eq!(paths, vec!["messages.removeFromLiked".to_string(), "theme".to_string()]);
    }

    #[test]
    fn unreadable_source_fails_and_leaves_registry_untouched() {
        let dir = tempfile::tempdir().expect("temp dir");
        let registry = ConfigOverlay::<Notifications>::new();
        let config = app_config(Some(OverrideSource::File(dir.path().join("missing.json"))));

        let err = initialize_notifications(&config, &registry).expect_err("missing file errors");
        assert!(matches!(err, BootstrapError::Config(ConfigError::ReadOverrides { .. })));
        assert!(!registry.is_initialized());
    }

    #[test]
    fn renders_null_before_initialization() {
        let registry = ConfigOverlay::<Notifications>::new();
        let rendered = render_configuration(&registry).expect("render succeeds");
        assert_eq!(rendered, "null");
    }

    #[test]
    fn renders_resolved_configuration() {
        let registry = ConfigOverlay::<Notifications>::new();
        let config = app_config(Some(OverrideSource::Inline(
            r#"{"messages":{"addToLiked":"Liked"}}"#.to_string(),
        )));
        initialize_notifications(&config, &registry).expect("bootstrap succeeds");

        let rendered = render_configuration(&registry).expect("render succeeds");
        let value: Value = serde_json::from_str(&rendered).expect("rendered JSON parses");
        assert_eq!(value["messages"]["addToLiked"], json!("Liked"));
        assert_eq!(
            value["messages"]["removeFromDisliked"],
            json!("Removed from your disliked videos")
        );
    }
}
