use serde::{Deserialize, Serialize};

/// Horizontal edge the grid is flush against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorX {
    #[default]
    Left,
    Right,
}

/// Vertical edge the grid is flush against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorY {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl AnchorX {
    pub fn toggled(self) -> Self {
        match self {
            AnchorX::Left => AnchorX::Right,
            AnchorX::Right => AnchorX::Left,
        }
    }

    /// Right is the far edge: anchoring there shifts the grid by the overflow.
    pub fn is_far_edge(self) -> bool {
        self == AnchorX::Right
    }
}

impl AnchorY {
    pub fn toggled(self) -> Self {
        match self {
            AnchorY::Top => AnchorY::Bottom,
            AnchorY::Bottom => AnchorY::Top,
        }
    }

    pub fn is_far_edge(self) -> bool {
        self == AnchorY::Bottom
    }
}
