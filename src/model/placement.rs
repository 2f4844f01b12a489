use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Shift applied to every module so the grid sits flush with its anchored
/// edges. Display units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellVisibility {
    Visible,
    Masked,
}

impl CellVisibility {
    pub fn is_visible(self) -> bool {
        self == CellVisibility::Visible
    }
}

/// Triangle count per color name.
pub type ColorTally = BTreeMap<String, usize>;
