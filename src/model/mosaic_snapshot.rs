use serde::{Deserialize, Serialize};

use super::{Grid, LayoutConfig, Offset, Palette, Result};

/// Flat, self-contained record of a mosaic, as written to `mosaicstate.json`.
///
/// The offsets and palette are carried for consumers of the file; only the
/// configuration and grid are needed to rebuild the mosaic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicSnapshot {
    #[serde(flatten)]
    pub config: LayoutConfig,
    pub mosaic: Grid,
    #[serde(default)]
    pub x_offset: f64,
    #[serde(default)]
    pub y_offset: f64,
    #[serde(default)]
    pub colors: Palette,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

impl MosaicSnapshot {
    pub fn offset(&self) -> Offset {
        Offset::new(self.x_offset, self.y_offset)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses without validating the configuration.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}
