use super::{Grid, LayoutConfig, Offset, Palette};

/// Live mosaic: configuration plus everything derived from or painted onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicState {
    pub config: LayoutConfig,
    pub grid: Grid,
    pub offset: Offset,
    pub palette: Palette,
    pub selected_color: String,
}

impl MosaicState {
    /// Display value for a color name, falling back to `fallback`'s value and
    /// then to black when the name is not in the palette.
    pub fn fill_for(&self, name: &str, fallback: &str) -> String {
        self.palette
            .value_of(name)
            .or_else(|| self.palette.value_of(fallback))
            .unwrap_or("#000000")
            .to_string()
    }
}
