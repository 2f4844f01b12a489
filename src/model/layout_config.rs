use serde::{Deserialize, Serialize};

use super::{AnchorX, AnchorY, MosaicError, Result};

/// Display units per inch.
pub const SCALING: f64 = 72.0;

/// Grout is chosen in sixteenths of an inch.
pub const SPACING_DENOMINATOR: f64 = 16.0;

/// Largest grid `validate` accepts. Every module is allocated up front, so
/// an absurd width or a tiny tile is rejected instead of exhausting memory.
pub const MAX_MODULES: f64 = 100_000.0;

/// Physical description of the area to tile. All lengths are inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub width_in: f64,
    pub height_in: f64,
    pub tile_width_in: f64,
    pub spacing_in: f64,
    pub anchor_x: AnchorX,
    pub anchor_y: AnchorY,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width_in: 9.0 * 12.0 + 0.5,
            height_in: 2.0 * 12.0 + 4.5,
            tile_width_in: 4.0,
            spacing_in: 1.0 / 8.0,
            anchor_x: AnchorX::Right,
            anchor_y: AnchorY::Bottom,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("widthIn", self.width_in),
            ("heightIn", self.height_in),
            ("tileWidthIn", self.tile_width_in),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MosaicError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.spacing_in.is_finite() || self.spacing_in < 0.0 {
            return Err(MosaicError::InvalidConfig(format!(
                "spacingIn must not be negative, got {}",
                self.spacing_in
            )));
        }
        let rows = (self.height_in / self.logical_module_height()).ceil();
        let cols = (self.width_in / self.logical_module_width()).ceil();
        if rows * cols > MAX_MODULES {
            return Err(MosaicError::InvalidConfig(format!(
                "{rows} x {cols} modules is more than the {MAX_MODULES} allowed"
            )));
        }
        Ok(())
    }

    /// A module holds two triangles, so it carries interior and exterior grout.
    pub fn logical_module_width(&self) -> f64 {
        self.tile_width_in + 2.0 * self.spacing_in
    }

    pub fn logical_module_height(&self) -> f64 {
        self.tile_width_in + self.spacing_in
    }

    pub fn module_width(&self) -> f64 {
        self.logical_module_width() * SCALING
    }

    pub fn module_height(&self) -> f64 {
        self.logical_module_height() * SCALING
    }

    pub fn tile_width(&self) -> f64 {
        self.tile_width_in * SCALING
    }

    pub fn spacing(&self) -> f64 {
        self.spacing_in * SCALING
    }

    pub fn width(&self) -> f64 {
        self.width_in * SCALING
    }

    pub fn height(&self) -> f64 {
        self.height_in * SCALING
    }

    pub fn n_rows(&self) -> usize {
        (self.height_in / self.logical_module_height()).ceil() as usize
    }

    pub fn n_cols(&self) -> usize {
        (self.width_in / self.logical_module_width()).ceil() as usize
    }

    pub fn spacing_sixteenths(&self) -> f64 {
        self.spacing_in * SPACING_DENOMINATOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width_in: f64, height_in: f64, tile_width_in: f64, spacing_in: f64) -> LayoutConfig {
        LayoutConfig {
            width_in,
            height_in,
            tile_width_in,
            spacing_in,
            anchor_x: AnchorX::Right,
            anchor_y: AnchorY::Bottom,
        }
    }

    #[test]
    fn test_logical_module_size() {
        let config = config(12.0, 4.0, 4.0, 0.125);
        assert_eq!(config.logical_module_width(), 4.25);
        assert_eq!(config.logical_module_height(), 4.125);
        assert_eq!(config.n_cols(), 3);
        assert_eq!(config.n_rows(), 1);
    }

    #[test]
    fn test_display_sizes() {
        let config = config(12.0, 4.0, 4.0, 0.125);
        assert_eq!(config.module_width(), 306.0);
        assert_eq!(config.module_height(), 297.0);
        assert_eq!(config.spacing(), 9.0);
        assert_eq!(config.spacing_sixteenths(), 2.0);
    }

    #[test]
    fn test_validate_rejects_non_positive_dimensions() {
        assert!(config(0.0, 4.0, 4.0, 0.125).validate().is_err());
        assert!(config(12.0, -1.0, 4.0, 0.125).validate().is_err());
        assert!(config(12.0, 4.0, 0.0, 0.125).validate().is_err());
        assert!(config(12.0, 4.0, 4.0, -0.1).validate().is_err());
        assert!(config(f64::NAN, 4.0, 4.0, 0.0).validate().is_err());
        assert!(config(12.0, 4.0, 4.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_caps_module_count() {
        assert!(matches!(
            config(1e15, 4.0, 4.0, 0.125).validate(),
            Err(MosaicError::InvalidConfig(_))
        ));
        assert!(config(108.5, 28.5, 1e-6, 0.0).validate().is_err());
        // 1" tiles over a 25' square wall still fit
        assert!(config(300.0, 300.0, 1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(config(12.0, 4.0, 4.0, 0.125)).unwrap();
        assert_eq!(json["widthIn"], 12.0);
        assert_eq!(json["tileWidthIn"], 4.0);
        assert_eq!(json["anchorX"], "right");
        assert_eq!(json["anchorY"], "bottom");
    }
}
