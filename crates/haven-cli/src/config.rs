use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Schema version written by this build. Files with a higher version are
/// refused rather than silently truncated.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HavenConfig {
    /// Schema version. 0 means the file was written by hand without one.
    #[serde(default)]
    pub config_version: u32,
    /// Where the "View resources" follow-up points.
    pub resources_url: String,
    /// Where the "Book a session" follow-up points.
    pub booking_url: String,
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
    /// Format used by `haven score` when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Custom Tera template for text results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_show_progress() -> bool {
    true
}

impl Default for HavenConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            resources_url: "/resources".to_string(),
            booking_url: "/booking".to_string(),
            show_progress: true,
            default_format: OutputFormat::Text,
            template_path: None,
        }
    }
}

/// `<config dir>/haven/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("haven").join("config.json"))
}

/// Load the config at `path`, falling back to defaults when it does not
/// exist.
pub fn load_config(path: &Path) -> eyre::Result<HavenConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(HavenConfig::default());
        }
        Err(e) => return Err(eyre::eyre!("failed to read config at {}: {e}", path.display())),
    };

    let json: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("config at {} is not valid JSON: {e}", path.display()))?;
    let version = json
        .get("config_version")
        .and_then(serde_json::Value::as_u64)
        .map_or(Ok(0), u32::try_from)?;

    let upgraded = migrate(json, version)?;
    Ok(serde_json::from_value(upgraded)?)
}

/// Bring a raw config document written at `from_version` up to
/// [`CURRENT_VERSION`].
///
/// Version 1 is the first schema, so the only work today is refusing files
/// from a newer build and stamping unversioned ones. Future schema changes
/// add a step here keyed on `from_version`.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}); \
             update Haven to read it"
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
    if from_version < CURRENT_VERSION {
        tracing::debug!(from_version, "stamping config with current version");
        obj.insert("config_version".to_string(), CURRENT_VERSION.into());
    }
    Ok(json)
}

/// Write `config` to `path` stamped with [`CURRENT_VERSION`].
///
/// The document goes to a sibling `.tmp` file first and is renamed into
/// place.
pub fn save_config(path: &Path, config: &HavenConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let document = HavenConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, serde_json::to_vec_pretty(&document)?)?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
