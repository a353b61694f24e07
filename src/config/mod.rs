use crate::errors::{AppError, AppResult};
use crate::models::{Ownership, TimeField};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `init` and expected by `config --check`.
pub const CONFIG_KEYS: [&str; 9] = [
    "office_name",
    "office_address",
    "officer_name",
    "designation",
    "pen",
    "default_ownership",
    "default_time",
    "report_title",
    "output_file",
];

/// Static identity printed in the report letterhead and defaults used by the
/// entry form. Set once per run, never edited from the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub office_name: String,
    pub office_address: String,
    pub officer_name: String,
    pub designation: String,
    pub pen: String,
    /// `Government-owned`, `Private`, or empty for "no preselection".
    pub default_ownership: String,
    pub default_time: String,
    pub report_title: String,
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            office_name: "Office of the Electrical Inspector".to_string(),
            office_address: "Palakkad".to_string(),
            officer_name: "Officer Name".to_string(),
            designation: "Assistant Electrical Inspector".to_string(),
            pen: "000000".to_string(),
            default_ownership: "Private".to_string(),
            default_time: "09:00".to_string(),
            report_title: "Monthly Tour Program".to_string(),
            output_file: "tour_program.pdf".to_string(),
        }
    }
}

/// Letterhead fields handed to the report renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficeIdentity {
    pub office_name: String,
    pub office_address: String,
    pub officer_name: String,
    pub designation: String,
    pub pen: String,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tourprog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tourprog.yaml")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file yields the defaults; missing keys fall back one by one.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Keys of `CONFIG_KEYS` absent from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;
        let map = match yaml.as_mapping() {
            Some(m) => m,
            None if yaml.is_null() => return Ok(CONFIG_KEYS.to_vec()),
            None => {
                return Err(AppError::Config(format!(
                    "{} is not a YAML mapping",
                    path.display()
                )));
            }
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    /// Ownership preselected in the form; `None` when the configured value is
    /// blank or not one of the two known values.
    pub fn default_ownership(&self) -> Option<Ownership> {
        let parsed = Ownership::from_label(&self.default_ownership);
        if parsed.is_none() && !self.default_ownership.trim().is_empty() {
            tracing::warn!(value = %self.default_ownership, "unknown default_ownership ignored");
        }
        parsed
    }

    pub fn default_time(&self) -> TimeField {
        TimeField::from_input(&self.default_time)
    }

    pub fn identity(&self) -> OfficeIdentity {
        OfficeIdentity {
            office_name: self.office_name.clone(),
            office_address: self.office_address.clone(),
            officer_name: self.officer_name.clone(),
            designation: self.designation.clone(),
            pen: self.pen.clone(),
        }
    }
}
