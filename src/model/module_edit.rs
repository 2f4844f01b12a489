use super::Orientation;

/// Changes that can be made to a single module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleEdit {
    SetColor { index: usize, color: String },
    SetOrientation(Orientation),
    ToggleOrientation,
    FlipColorOrder,
}
