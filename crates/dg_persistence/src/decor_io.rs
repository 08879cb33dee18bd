use dg_decor::{DecorConfig, EnvironmentTemplate};
use dg_world::UniverseDefinition;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Default directory for decoration settings.
pub const DECOR_DIR: &str = "assets/decor";
/// Decoration config file name inside [`DECOR_DIR`].
pub const CONFIG_FILE: &str = "config.ron";
/// Gate environment template file name inside [`DECOR_DIR`].
pub const TEMPLATE_FILE: &str = "gate_template.ron";

/// Error type for decoration file I/O.
#[derive(Debug)]
pub enum DecorIoError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
}

impl From<std::io::Error> for DecorIoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for DecorIoError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for DecorIoError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for DecorIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
        }
    }
}

impl std::error::Error for DecorIoError {}

fn save_ron<T: Serialize>(path: &Path, value: &T) -> Result<(), DecorIoError> {
    let pretty_config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .separate_tuple_members(true);

    let ron_string = ron::ser::to_string_pretty(value, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DecorIoError> {
    let contents = fs::read_to_string(path)?;
    Ok(ron::from_str(&contents)?)
}

/// Load `path`, or `T::default()` if the file does not exist.
fn load_ron_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, DecorIoError> {
    if !path.exists() {
        return Ok(T::default());
    }
    load_ron(path)
}

pub fn save_config(path: &Path, config: &DecorConfig) -> Result<(), DecorIoError> {
    save_ron(path, config)
}

/// Load a decoration config. Fields missing from the file keep their defaults.
pub fn load_config(path: &Path) -> Result<DecorConfig, DecorIoError> {
    load_ron(path)
}

pub fn load_config_or_default(path: &Path) -> Result<DecorConfig, DecorIoError> {
    load_ron_or_default(path)
}

pub fn save_template(path: &Path, template: &EnvironmentTemplate) -> Result<(), DecorIoError> {
    save_ron(path, template)
}

pub fn load_template(path: &Path) -> Result<EnvironmentTemplate, DecorIoError> {
    load_ron(path)
}

pub fn load_template_or_default(path: &Path) -> Result<EnvironmentTemplate, DecorIoError> {
    load_ron_or_default(path)
}

pub fn save_universe(path: &Path, universe: &UniverseDefinition) -> Result<(), DecorIoError> {
    save_ron(path, universe)
}

pub fn load_universe(path: &Path) -> Result<UniverseDefinition, DecorIoError> {
    load_ron(path)
}
