use super::{ColorTally, Module, Offset, Position};

#[derive(Debug, Clone, PartialEq)]
pub enum MosaicEvent {
    GridRegenerated { n_rows: usize, n_cols: usize },
    ModuleChanged(Position, Module),
    OffsetChanged(Offset),
    SelectedColorChanged(String),
    StateLoaded,
    TallyChanged(ColorTally),
}
