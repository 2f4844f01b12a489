use super::{Axis, ModuleEdit, MosaicSnapshot, Position};

#[derive(Debug, Clone)]
pub enum MosaicCommand {
    SelectColor(String),
    /// Paint one triangle of a module with the selected color.
    PaintTriangle { position: Position, index: usize },
    EditModule(Position, ModuleEdit),
    SetWidth(f64),
    SetHeight(f64),
    SetTileSize(f64),
    /// Grout width in sixteenths of an inch.
    SetSpacingSixteenths(u32),
    ToggleAnchor(Axis),
    LoadState(MosaicSnapshot),
    ImportJson(String),
    Refresh,
}
