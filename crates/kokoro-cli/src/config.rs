use std::path::{Path, PathBuf};

use jiff::civil::Date;
use kokoro_synth::cache::DEFAULT_POPULATION;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when changing shape in a way serde
/// defaults cannot absorb, and add the step to [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Overrides `population_size` when set.
pub const POPULATION_ENV: &str = "KOKORO_POPULATION_SIZE";

pub const DEFAULT_PATIENT: &str = "P001";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KokoroConfig {
    /// Schema version. Missing is read as the current version.
    #[serde(default = "current_version")]
    pub config_version: u32,
    #[serde(default = "default_population")]
    pub population_size: u32,
    /// Patient shown when a command is given no id.
    #[serde(default = "default_patient")]
    pub default_patient: String,
    /// "Today" for period filtering. Unset means the real current date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<Date>,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_population() -> u32 {
    DEFAULT_POPULATION
}

fn default_patient() -> String {
    DEFAULT_PATIENT.to_string()
}

impl Default for KokoroConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            population_size: default_population(),
            default_patient: default_patient(),
            reference_date: None,
        }
    }
}

impl KokoroConfig {
    /// The configured reference date, or today in the system time zone.
    pub fn reference_date_or_today(&self) -> Date {
        self.reference_date
            .unwrap_or_else(|| jiff::Zoned::now().date())
    }

    /// Apply an override from the value of [`POPULATION_ENV`].
    pub fn apply_population_override(&mut self, value: Option<&str>) -> eyre::Result<()> {
        if let Some(raw) = value {
            let size: u32 = raw
                .trim()
                .parse()
                .map_err(|e| eyre::eyre!("invalid {POPULATION_ENV}={raw:?}: {e}"))?;
            tracing::debug!(size, "population size overridden from environment");
            self.population_size = size;
        }
        Ok(())
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("kokoro"))
}

/// `<config_dir>/kokoro/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn load_config(path: &Path) -> eyre::Result<KokoroConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(u64::from(CURRENT_VERSION));
    let on_disk_version = u32::try_from(on_disk_version).unwrap_or(u32::MAX);

    let migrated = migrate(json, on_disk_version)?;
    let config: KokoroConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load `path`, or the defaults when no file exists there.
pub fn load_or_default(path: &Path) -> eyre::Result<KokoroConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(KokoroConfig::default());
    }
    load_config(path)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value. Version 1 is
/// the first shape, so the chain is empty; fields absent from older or
/// partial files are filled by serde defaults.
pub fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update kokoro."
        ));
    }
    if !json.is_object() {
        return Err(eyre::eyre!("config is not a JSON object"));
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(path: &Path, config: &KokoroConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
