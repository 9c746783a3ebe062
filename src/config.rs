use std::{env, path::PathBuf};

use color_eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::debug;

const CONFIG: &str = include_str!("../.config/tracker.toml");
const CONFIG_FILE_NAME: &str = "tracker";

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

/// Marker tokens delimiting the date fields of add-commands.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MarkerConfig {
    #[serde(default = "default_by_marker")]
    pub by: String,
    #[serde(default = "default_from_marker")]
    pub from: String,
    #[serde(default = "default_to_marker")]
    pub to: String,
}

fn default_by_marker() -> String {
    String::from("/by")
}
fn default_from_marker() -> String {
    String::from("/from")
}
fn default_to_marker() -> String {
    String::from("/to")
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            by: default_by_marker(),
            from: default_from_marker(),
            to: default_to_marker(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    #[serde(default)]
    pub markers: MarkerConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        toml::from_str(CONFIG).unwrap()
    }
}

impl TrackerConfig {
    /// Loads the config, layering an optional `tracker.toml` from the
    /// config directory (or `config_path`) over the embedded defaults.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config_dir = config_path.unwrap_or_else(get_config_dir);
        let path = config_dir.join(format!("{CONFIG_FILE_NAME}.toml"));
        if !path.is_file() {
            debug!("No configuration file at {}, using defaults", path.display());
        }
        let cfg = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "tasklist", env!("CARGO_PKG_NAME"))
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}
