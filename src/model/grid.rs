use serde::{Deserialize, Serialize};

use super::{Module, MosaicError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.col, self.row)
    }
}

/// Row-major modules of a mosaic.
///
/// Grids built by the layout engine are rectangular. Grids read back from an
/// imported file may have short rows; lookups past the end return `None`.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Module>>,
}

impl Grid {
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            rows: vec![vec![Module::default(); n_cols]; n_rows],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Module>>) -> Self {
        Self { rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn get(&self, position: Position) -> Option<&Module> {
        self.rows.get(position.row)?.get(position.col)
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Result<&mut Module> {
        self.rows
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
            .ok_or(MosaicError::OutOfRange {
                row: position.row,
                col: position.col,
            })
    }

    pub fn rows(&self) -> &[Vec<Module>] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Module)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, modules)| {
            modules
                .iter()
                .enumerate()
                .map(move |(col, module)| (Position::new(row, col), module))
        })
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = String::new();
        output.push('\n');
        for (row, modules) in self.rows.iter().enumerate() {
            output.push_str(&format!("{}|", row));
            for module in modules {
                output.push_str(&format!("{}|", module));
            }
            output.push('\n');
        }
        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Orientation;

    #[test]
    fn test_new_grid_is_default_filled() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.n_rows(), 2);
        assert_eq!(grid.n_cols(), 3);
        assert_eq!(grid.iter().count(), 6);
        assert!(grid.iter().all(|(_, module)| *module == Module::default()));
    }

    #[test]
    fn test_get_outside_grid() {
        let grid = Grid::new(1, 1);
        assert!(grid.get(Position::new(0, 0)).is_some());
        assert!(grid.get(Position::new(0, 1)).is_none());
        assert!(grid.get(Position::new(1, 0)).is_none());
    }

    #[test]
    fn test_get_mut_out_of_range() {
        let mut grid = Grid::new(1, 2);
        let err = grid.get_mut(Position::new(3, 0)).unwrap_err();
        assert!(matches!(err, MosaicError::OutOfRange { row: 3, col: 0 }));
    }

    #[test]
    fn test_short_rows_from_import() {
        let grid = Grid::from_rows(vec![
            vec![Module::default(), Module::default()],
            vec![Module::new("ember", "tusk", Orientation::Sw)],
        ]);
        assert_eq!(grid.n_cols(), 2);
        assert!(grid.get(Position::new(1, 1)).is_none());
        assert_eq!(grid.get(Position::new(1, 0)).unwrap().colors[0], "ember");
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let json = serde_json::to_value(Grid::new(1, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([[{"colors": ["tusk", "tusk"], "orientation": "nw"}]])
        );
    }
}
