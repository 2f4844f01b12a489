use log::debug;

use super::geometry::{diamond_height, diamond_width, module_width, Cube, Point};
use super::SeededColorStream;
use crate::model::{Palette, DEFAULT_COLOR};

/// Color names drawn by the stream. The neutrals repeat so the accent shows
/// up roughly once in thirteen faces.
pub const COLOR_OPTIONS: [&str; 13] = [
    "tusk",
    "moonshine",
    "french linen",
    "salton sea",
    "tusk",
    "moonshine",
    "french linen",
    "salton sea",
    "tusk",
    "moonshine",
    "french linen",
    "salton sea",
    "koi",
];

#[derive(Debug, Clone, PartialEq)]
pub struct CubeSettings {
    pub columns: usize,
    pub rows: usize,
    pub length: f64,
    pub padding: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for CubeSettings {
    fn default() -> Self {
        Self {
            columns: 30,
            rows: 20,
            length: 20.0,
            padding: 2.0,
            width: 800.0,
            height: 300.0,
        }
    }
}

/// A field of Escher cubes colored from a seed.
#[derive(Debug, Clone, PartialEq)]
pub struct CubePattern {
    pub seed: u64,
    pub width: f64,
    pub height: f64,
    pub cubes: Vec<Cube>,
}

impl CubePattern {
    /// Lays cubes out column by column, pulling one index triple per cube.
    /// Odd rows are shifted left by one face width so the cubes interlock.
    pub fn generate(seed: u64, settings: &CubeSettings, palette: &Palette) -> Self {
        let mut stream = SeededColorStream::new(seed, COLOR_OPTIONS.len());
        let pitch_x = module_width(settings.length, settings.padding);
        let pitch_y = diamond_height(settings.length) + settings.padding * 2.0;
        let odd_shift = -diamond_width(settings.length) - settings.padding;

        let fill_for = |idx: usize| {
            palette
                .value_of(COLOR_OPTIONS[idx])
                .or_else(|| palette.value_of(DEFAULT_COLOR))
                .unwrap_or("#000000")
                .to_string()
        };

        let mut cubes = Vec::with_capacity(settings.columns * settings.rows);
        for step_x in 0..settings.columns {
            for step_y in 0..settings.rows {
                let Some([left, right, top]) = stream.next_triple() else {
                    break;
                };
                let shift = if step_y % 2 == 1 { odd_shift } else { 0.0 };
                let origin = Point::new(
                    step_x as f64 * pitch_x + shift,
                    step_y as f64 * pitch_y,
                );
                cubes.push(Cube::new(
                    origin,
                    settings.length,
                    settings.padding,
                    [fill_for(left), fill_for(right), fill_for(top)],
                ));
            }
        }
        debug!(target: "cubes", "Generated {} cubes for seed {}", cubes.len(), seed);

        Self {
            seed,
            width: settings.width,
            height: settings.height,
            cubes,
        }
    }
}
