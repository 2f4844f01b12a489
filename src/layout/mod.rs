mod edits;
mod layout_engine;
pub mod mosaic_engine;
pub mod settings;
mod snapshot;

pub use edits::apply_edit;
pub use layout_engine::{cell_bounds, classify_cell, compute_grid, compute_offset, tally_colors};
pub use mosaic_engine::MosaicEngine;
pub use settings::Settings;
pub use snapshot::{export_state, import_snapshot, import_state};
