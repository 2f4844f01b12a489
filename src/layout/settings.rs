use crate::model::{LayoutConfig, Palette, SitePreset, DEFAULT_COLOR};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_PATH_VAR: &str = "TESSERA_SETTINGS";
const SETTINGS_FILE: &str = "tessera-settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub(crate) version: u32,

    #[serde(default)]
    pub initial_layout: LayoutConfig,

    #[serde(default)]
    pub palette: Palette,

    #[serde(default = "default_color")]
    pub default_color: String,

    #[serde(default = "default_selected_color")]
    pub selected_color: String,

    #[serde(default)]
    pub site: SitePreset,

    #[serde(default = "default_cube_seed")]
    pub cube_seed: u64,
}

fn default_version() -> u32 {
    2
}
fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
fn default_selected_color() -> String {
    "ember".to_string()
}
fn default_cube_seed() -> u64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            initial_layout: LayoutConfig::default(),
            palette: Palette::mosaic(),
            default_color: default_color(),
            selected_color: default_selected_color(),
            site: SitePreset::default(),
            cube_seed: default_cube_seed(),
        }
    }
}

impl Settings {
    /// Reads settings from the configured path, falling back to defaults when
    /// the file is missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    return settings;
                }
                Err(err) => {
                    warn!(
                        target: "settings",
                        "Ignoring unreadable settings at {:?}: {}", path, err
                    );
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::settings_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
    }

    pub fn settings_path() -> PathBuf {
        std::env::var(SETTINGS_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(SETTINGS_FILE))
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    fn migrate(&mut self) {
        match self.version {
            // version 1 stored no palette; an empty one would make every
            // color selection fail
            0 | 1 => {
                if self.palette.is_empty() {
                    self.palette = Palette::mosaic();
                }
                self.version = 2;
            }
            _ => (),
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    /// Cube seed from the `SEED` environment variable, if set and numeric.
    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }

    pub fn cube_seed(&self) -> u64 {
        Self::seed_from_env().unwrap_or(self.cube_seed)
    }
}
