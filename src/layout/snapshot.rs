use log::debug;

use super::compute_offset;
use crate::model::{Grid, LayoutConfig, MosaicSnapshot, Palette, Result};

/// Captures everything needed to rebuild `grid` and `config`.
pub fn export_state(
    grid: &Grid,
    config: &LayoutConfig,
    palette: &Palette,
    selected_color: Option<&str>,
) -> MosaicSnapshot {
    let offset = compute_offset(config);
    MosaicSnapshot {
        config: config.clone(),
        mosaic: grid.clone(),
        x_offset: offset.x,
        y_offset: offset.y,
        colors: palette.clone(),
        selected_color: selected_color.map(str::to_string),
    }
}

/// Parses and validates a saved mosaic.
///
/// Nothing is returned unless the whole record parses and its configuration is
/// valid, so callers can swap state in only on success.
pub fn import_state(contents: &str) -> Result<(Grid, LayoutConfig)> {
    let snapshot = MosaicSnapshot::from_json(contents)?;
    import_snapshot(snapshot)
}

pub fn import_snapshot(snapshot: MosaicSnapshot) -> Result<(Grid, LayoutConfig)> {
    snapshot.config.validate()?;
    debug!(
        target: "layout",
        "Imported {}x{} mosaic for {:?}",
        snapshot.mosaic.n_rows(),
        snapshot.mosaic.n_cols(),
        snapshot.config
    );
    Ok((snapshot.mosaic, snapshot.config))
}
