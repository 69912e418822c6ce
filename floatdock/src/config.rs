use crate::errors::DockError;
use egui_float::FloatOptions;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    pub panel: FloatOptions,
    /// Text shown on the floating bubble.
    pub label: String,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            panel: FloatOptions::default(),
            label: String::from("?"),
        }
    }
}

impl DockConfig {
    /// Reads the config at `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DockError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        let config: DockConfig = serde_json::from_str(&content)?;
        config.panel.validate()?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!("failed to load {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_float::Anchor;
    use std::fs;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DockConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DockConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("floatdock.json");
        fs::write(
            &path,
            r#"{"panel": {"anchor": {"vertical": "top", "horizontal": "left"}, "click_threshold": 6}}"#,
        )
        .unwrap();

        let config = DockConfig::load(&path).unwrap();
        assert_eq!(config.panel.anchor, Anchor::TOP_LEFT);
        assert_eq!(config.panel.click_threshold, 6.0);
        assert_eq!(config.panel.settle_duration, FloatOptions::SETTLE_DURATION);
        assert_eq!(config.label, "?");
    }

    #[test]
    fn malformed_or_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("floatdock.json");

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(DockConfig::load(&path), Err(DockError::Json(_))));
        assert_eq!(DockConfig::load_or_default(&path), DockConfig::default());

        fs::write(&path, r#"{"panel": {"settle_duration": -0.5}}"#).unwrap();
        assert!(matches!(DockConfig::load(&path), Err(DockError::Float(_))));
    }
}
