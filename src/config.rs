//! Configuration loaded from `.hrlytics.toml`.
//!
//! Every field has a serde default so a partial (or absent) file works, and
//! the loaded value is passed explicitly to the commands that need it rather
//! than held in ambient state.

use crate::validate::UnknownDepartmentPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".hrlytics.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HrlyticsConfig {
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    /// When true, employees whose `departmentId` matches no declared
    /// department entry reject the import instead of creating a dynamic
    /// bucket.
    #[serde(default)]
    pub reject_unknown_departments: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory export files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl HrlyticsConfig {
    /// Load from an explicit path, or from `.hrlytics.toml` in the current
    /// directory when present, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if local.exists() {
                    Self::load_from(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn unknown_department_policy(&self) -> UnknownDepartmentPolicy {
        if self.import.reject_unknown_departments {
            UnknownDepartmentPolicy::Reject
        } else {
            UnknownDepartmentPolicy::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HrlyticsConfig::default();
        assert!(!config.import.reject_unknown_departments);
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(
            config.unknown_department_policy(),
            UnknownDepartmentPolicy::Allow
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: HrlyticsConfig = toml::from_str(
            r#"
            [import]
            reject_unknown_departments = true
            "#,
        )
        .unwrap();
        assert!(config.import.reject_unknown_departments);
        assert_eq!(
            config.unknown_department_policy(),
            UnknownDepartmentPolicy::Reject
        );
        assert_eq!(config.export.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
            [export]
            output_dir = "reports"
            "#,
        )
        .unwrap();

        let config = HrlyticsConfig::load_from(&path).unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_load_missing_explicit_path_errors() {
        assert!(HrlyticsConfig::load_from(Path::new("/nonexistent/hrlytics.toml")).is_err());
    }
}
