use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::mixer::MixerCommand;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub mixer: MixerConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MixerConfig {
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub control: Option<String>,
}

/// Per-run values from the command line. `None` falls through to the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub program: Option<String>,
    pub device: Option<String>,
    pub control: Option<String>,
}

pub fn default_config_path() -> Result<PathBuf> {
    let proj = directories::ProjectDirs::from("", "", "mic-toggle")
        .context("could not determine config directory")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// A missing file at the default location is fine: built-in defaults apply.
pub fn load_default_config() -> Result<Config> {
    let path = default_config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config(&path)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config at {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).context("failed to parse config TOML")?;

    for (key, value) in [
        ("program", &config.mixer.program),
        ("device", &config.mixer.device),
        ("control", &config.mixer.control),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!("mixer.{} must not be empty", key);
        }
    }

    Ok(config)
}

pub fn resolve_command(config: &Config, overrides: Overrides) -> Result<MixerCommand> {
    let defaults = MixerCommand::default();
    let cmd = MixerCommand {
        program: overrides
            .program
            .or_else(|| config.mixer.program.clone())
            .unwrap_or(defaults.program),
        device: overrides
            .device
            .or_else(|| config.mixer.device.clone())
            .unwrap_or(defaults.device),
        control: overrides
            .control
            .or_else(|| config.mixer.control.clone())
            .unwrap_or(defaults.control),
    };

    if cmd.program.trim().is_empty() {
        bail!("mixer program must not be empty");
    }
    if cmd.device.trim().is_empty() {
        bail!("mixer device must not be empty");
    }
    if cmd.control.trim().is_empty() {
        bail!("mixer control must not be empty");
    }

    Ok(cmd)
}
