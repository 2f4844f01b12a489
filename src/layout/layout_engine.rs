//! Closed-form geometry for a triangle mosaic: grid dimensions, anchor
//! offsets, per-cell visibility and color counts.
//!
//! Row and column counts always come from `ceil(size / logical module size)`.
//! The same counts drive both the grid and the offset, so an offset never
//! refers to a different number of modules than the grid actually holds.

use itertools::Itertools;
use log::{debug, trace};

use crate::model::{
    CellVisibility, ColorTally, Grid, LayoutConfig, Offset, Position, Rect, Result, Site, SCALING,
};

/// Builds a default-filled grid covering the configured area.
pub fn compute_grid(config: &LayoutConfig) -> Result<Grid> {
    config.validate()?;
    let (n_rows, n_cols) = (config.n_rows(), config.n_cols());
    debug!(target: "layout", "Computed {}x{} grid for {:?}", n_rows, n_cols, config);
    Ok(Grid::new(n_rows, n_cols))
}

/// Shift that keeps the grid flush with its anchored edges.
///
/// Anchoring to the near edge (left, top) needs no shift. Anchoring to the far
/// edge moves the grid by the overflow, plus one grout width so the last tile
/// rather than its trailing grout line meets the edge.
pub fn compute_offset(config: &LayoutConfig) -> Offset {
    let x = if config.anchor_x.is_far_edge() {
        let overflow = config.width_in - config.n_cols() as f64 * config.logical_module_width();
        (overflow + config.spacing_in) * SCALING
    } else {
        0.0
    };
    let y = if config.anchor_y.is_far_edge() {
        let overflow = config.height_in - config.n_rows() as f64 * config.logical_module_height();
        (overflow + config.spacing_in) * SCALING
    } else {
        0.0
    };
    trace!(target: "layout", "Offset for {:?}: ({}, {})", config, x, y);
    Offset::new(x, y)
}

/// Bounding box of the module at `position`, in display units.
pub fn cell_bounds(config: &LayoutConfig, offset: Offset, position: Position) -> Rect {
    let width = config.module_width();
    let height = config.module_height();
    let x = position.col as f64 * width + offset.x;
    let y = position.row as f64 * height + offset.y;
    Rect::new(x, y, x + width, y + height)
}

/// A cell is visible when a corner of its box falls inside a visible region.
pub fn classify_cell(
    config: &LayoutConfig,
    offset: Offset,
    position: Position,
    site: &Site,
) -> CellVisibility {
    let bounds = cell_bounds(config, offset, position);
    if site
        .visible
        .iter()
        .any(|region| bounds.corner_overlaps(region))
    {
        CellVisibility::Visible
    } else {
        CellVisibility::Masked
    }
}

/// Counts triangles per color across visible cells.
///
/// Cells the grid has no module for are counted as two `default_color`
/// triangles.
pub fn tally_colors(
    grid: &Grid,
    offset: Offset,
    config: &LayoutConfig,
    site: &Site,
    default_color: &str,
) -> ColorTally {
    let mut tally = ColorTally::new();
    for (row, col) in (0..config.n_rows()).cartesian_product(0..config.n_cols()) {
        let position = Position::new(row, col);
        if !classify_cell(config, offset, position, site).is_visible() {
            trace!(target: "layout", "Module {} is masked", position);
            continue;
        }
        match grid.get(position) {
            Some(module) => {
                for color in &module.colors {
                    *tally.entry(color.clone()).or_default() += 1;
                }
            }
            None => {
                *tally.entry(default_color.to_string()).or_default() += 2;
            }
        }
    }
    tally
}
