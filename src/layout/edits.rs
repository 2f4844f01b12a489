use log::trace;

use crate::model::{Grid, ModuleEdit, MosaicError, Position, Result};

/// Returns a copy of `grid` with the module at `position` edited.
///
/// The input grid is never touched, so a failed edit leaves the caller's
/// state exactly as it was.
pub fn apply_edit(grid: &Grid, position: Position, edit: &ModuleEdit) -> Result<Grid> {
    let mut next = grid.clone();
    let module = next.get_mut(position)?;
    match edit {
        ModuleEdit::SetColor { index, color } => {
            let slot = module
                .colors
                .get_mut(*index)
                .ok_or(MosaicError::InvalidColorIndex(*index))?;
            *slot = color.clone();
        }
        ModuleEdit::SetOrientation(orientation) => module.orientation = *orientation,
        ModuleEdit::ToggleOrientation => module.orientation = module.orientation.toggled(),
        ModuleEdit::FlipColorOrder => module.colors.reverse(),
    }
    trace!(target: "layout", "Applied {:?} at {}: {}", edit, position, module);
    Ok(next)
}
