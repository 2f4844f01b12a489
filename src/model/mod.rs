mod anchor;
mod error;
mod grid;
mod input_event;
mod layout_config;
mod module;
mod module_edit;
mod mosaic_command;
mod mosaic_event;
pub mod mosaic_snapshot;
mod mosaic_state;
mod palette;
mod placement;
mod region;

pub use anchor::{AnchorX, AnchorY, Axis};
pub use error::{MosaicError, Result};
pub use grid::{Grid, Position};
pub use input_event::{InputEvent, Modifiers, PointerKind, PointerTarget};
pub use layout_config::{LayoutConfig, MAX_MODULES, SCALING, SPACING_DENOMINATOR};
pub use module::{Module, Orientation, DEFAULT_COLOR};
pub use module_edit::ModuleEdit;
pub use mosaic_command::MosaicCommand;
pub use mosaic_event::MosaicEvent;
pub use mosaic_snapshot::MosaicSnapshot;
pub use mosaic_state::MosaicState;
pub use palette::Palette;
pub use placement::{CellVisibility, ColorTally, Offset};
pub use region::{Rect, Site, SitePreset};
