//! Tile grid geometry and cell classification
//!
//! A grid is a row-major array of small integer cell codes. What a code means
//! (road, wall, goal, ...) is decided by a per-game [`CellTable`]; every code
//! used in a layout must be classified there.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Integer code stored in each cell
pub type CellType = u8;

/// Gameplay role of a cell type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellRole {
    /// Open ground
    Road,
    /// Blocks movement
    Wall,
    /// Reaching it wins and resets the game
    Goal,
    /// Passable spawn marker for the given player (0-based)
    Start(u8),
    /// Blocking scenery (trees, flags)
    Decoration,
    /// Outside the grid. Never solid, never a goal.
    Void,
}

impl CellRole {
    /// Blocks movement. Closed over the known roles.
    pub fn is_solid(self) -> bool {
        match self {
            CellRole::Wall | CellRole::Goal | CellRole::Decoration => true,
            CellRole::Road | CellRole::Start(_) | CellRole::Void => false,
        }
    }

    pub fn is_goal(self) -> bool {
        self == CellRole::Goal
    }
}

/// Maps cell codes to roles; indexed by code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellTable {
    roles: Vec<CellRole>,
}

impl CellTable {
    /// Build a table where code `n` has role `roles[n]`
    pub fn new(roles: &[CellRole]) -> Self {
        Self {
            roles: roles.to_vec(),
        }
    }

    pub fn role(&self, code: CellType) -> Option<CellRole> {
        self.roles.get(code as usize).copied()
    }

    /// Lowest code classified with `role`
    pub fn code_for(&self, role: CellRole) -> Option<CellType> {
        self.roles
            .iter()
            .position(|&r| r == role)
            .map(|i| i as CellType)
    }

    /// Number of classified codes
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Result of looking up a continuous position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Tile(CellType),
    /// Position lies outside the grid
    OutOfBounds,
}

/// A (column, row) pair inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPosition {
    pub column: u32,
    pub row: u32,
}

impl WorldPosition {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Fixed-size tile world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<CellType>,
    table: CellTable,
}

impl Grid {
    /// Build a grid from a row-major layout, validating size and classification
    pub fn new(
        columns: u32,
        rows: u32,
        cell_width: f32,
        cell_height: f32,
        cells: Vec<CellType>,
        table: CellTable,
    ) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::Empty);
        }
        let valid_size = |s: f32| s.is_finite() && s > 0.0;
        if !valid_size(cell_width) || !valid_size(cell_height) {
            return Err(GridError::CellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        let expected = columns as usize * rows as usize;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                columns,
                rows,
                expected,
                actual: cells.len(),
            });
        }
        if let Some((index, &code)) = cells
            .iter()
            .enumerate()
            .find(|(_, code)| table.role(**code).is_none())
        {
            return Err(GridError::Unclassified { code, index });
        }

        Ok(Self {
            columns,
            rows,
            cell_width,
            cell_height,
            cells,
            table,
        })
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    #[inline]
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// World extent in pixels
    pub fn width(&self) -> f32 {
        self.columns as f32 * self.cell_width
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    /// Number of cells (columns * rows)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn table(&self) -> &CellTable {
        &self.table
    }

    /// Cell code at a column/row, `None` when outside the grid
    pub fn cell_at(&self, column: i32, row: i32) -> Option<CellType> {
        if !self.is_valid_cell(column, row) {
            return None;
        }
        self.cells.get(self.index_of(column as u32, row as u32)).copied()
    }

    /// Row-major lookup, used when iterating the whole grid
    pub fn cell_at_index(&self, index: usize) -> Option<CellType> {
        self.cells.get(index).copied()
    }

    /// Cell under a continuous position
    pub fn cell_for(&self, pos: Vec2) -> Cell {
        match self.cell_at(self.to_column(pos.x), self.to_row(pos.y)) {
            Some(code) => Cell::Tile(code),
            None => Cell::OutOfBounds,
        }
    }

    /// Role of a looked-up cell; out-of-bounds is [`CellRole::Void`]
    pub fn role(&self, cell: Cell) -> CellRole {
        match cell {
            // Codes are validated at construction and on every write
            Cell::Tile(code) => self.table.role(code).unwrap_or(CellRole::Void),
            Cell::OutOfBounds => CellRole::Void,
        }
    }

    pub fn is_solid(&self, cell: Cell) -> bool {
        self.role(cell).is_solid()
    }

    pub fn is_goal(&self, cell: Cell) -> bool {
        self.role(cell).is_goal()
    }

    /// First cell holding `code`, scanning column by column
    pub fn first_cell_matching(&self, code: CellType) -> Option<WorldPosition> {
        for column in 0..self.columns {
            for row in 0..self.rows {
                if self.cells[self.index_of(column, row)] == code {
                    return Some(WorldPosition::new(column, row));
                }
            }
        }
        None
    }

    /// Number of cells holding `code`
    pub fn count_matching(&self, code: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == code).count()
    }

    /// Column containing `x`; may be negative or past the last column
    #[inline]
    pub fn to_column(&self, x: f32) -> i32 {
        (x / self.cell_width).floor() as i32
    }

    /// Row containing `y`; may be negative or past the last row
    #[inline]
    pub fn to_row(&self, y: f32) -> i32 {
        (y / self.cell_height).floor() as i32
    }

    pub fn is_valid_cell(&self, column: i32, row: i32) -> bool {
        column >= 0 && (column as u32) < self.columns && row >= 0 && (row as u32) < self.rows
    }

    /// Grid position under a continuous position
    pub fn to_position(&self, pos: Vec2) -> Option<WorldPosition> {
        let column = self.to_column(pos.x);
        let row = self.to_row(pos.y);
        self.is_valid_cell(column, row)
            .then(|| WorldPosition::new(column as u32, row as u32))
    }

    /// Top-left corner of a cell in pixels
    pub fn cell_origin(&self, position: WorldPosition) -> Vec2 {
        Vec2::new(
            position.column as f32 * self.cell_width,
            position.row as f32 * self.cell_height,
        )
    }

    /// Centre of a cell in pixels
    pub fn cell_center(&self, position: WorldPosition) -> Vec2 {
        self.cell_origin(position) + Vec2::new(self.cell_width / 2.0, self.cell_height / 2.0)
    }

    /// Replace a cell code (destructible layouts only)
    pub fn set_cell(&mut self, position: WorldPosition, code: CellType) -> Result<(), GridError> {
        if position.column >= self.columns || position.row >= self.rows {
            return Err(GridError::OutOfBounds(position));
        }
        let index = self.index_of(position.column, position.row);
        if self.table.role(code).is_none() {
            return Err(GridError::Unclassified { code, index });
        }
        self.cells[index] = code;
        Ok(())
    }

    /// Overwrite every cell with `code`
    pub fn fill(&mut self, code: CellType) -> Result<(), GridError> {
        if self.table.role(code).is_none() {
            return Err(GridError::Unclassified { code, index: 0 });
        }
        self.cells.fill(code);
        Ok(())
    }

    /// Iterate every cell with its position, row by row
    pub fn iter(&self) -> impl Iterator<Item = (WorldPosition, CellType)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(index, &code)| {
            let index = index as u32;
            (WorldPosition::new(index % columns, index / columns), code)
        })
    }

    #[inline]
    fn index_of(&self, column: u32, row: u32) -> usize {
        row as usize * self.columns as usize + column as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROAD: CellType = 0;
    const WALL: CellType = 1;
    const START: CellType = 2;
    const GOAL: CellType = 3;

    fn table() -> CellTable {
        CellTable::new(&[CellRole::Road, CellRole::Wall, CellRole::Start(0), CellRole::Goal])
    }

    fn walled_3x3() -> Grid {
        Grid::new(3, 3, 10.0, 20.0, vec![1, 1, 1, 1, 0, 1, 1, 1, 1], table()).unwrap()
    }

    #[test]
    fn test_length_mismatch() {
        let err = Grid::new(3, 3, 10.0, 10.0, vec![0; 8], table()).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                columns: 3,
                rows: 3,
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        for (w, h) in [(0.0, 10.0), (10.0, -4.0), (f32::NAN, 10.0), (10.0, f32::INFINITY)] {
            let err = Grid::new(2, 1, w, h, vec![0, 0], table()).unwrap_err();
            assert!(matches!(err, GridError::CellSize { .. }), "{w}x{h}: {err:?}");
        }
    }

    #[test]
    fn test_unclassified_code() {
        let err = Grid::new(2, 1, 10.0, 10.0, vec![0, 9], table()).unwrap_err();
        assert_eq!(err, GridError::Unclassified { code: 9, index: 1 });
    }

    #[test]
    fn test_cell_for_in_and_out_of_bounds() {
        let grid = walled_3x3();
        assert_eq!(grid.cell_for(Vec2::new(15.0, 30.0)), Cell::Tile(ROAD));
        assert_eq!(grid.cell_for(Vec2::new(5.0, 5.0)), Cell::Tile(WALL));
        assert_eq!(grid.cell_for(Vec2::new(-0.1, 5.0)), Cell::OutOfBounds);
        assert_eq!(grid.cell_for(Vec2::new(30.0, 5.0)), Cell::OutOfBounds);
        assert_eq!(grid.cell_for(Vec2::new(5.0, 60.0)), Cell::OutOfBounds);
    }

    #[test]
    fn test_out_of_bounds_is_passable() {
        let grid = walled_3x3();
        assert!(!grid.is_solid(Cell::OutOfBounds));
        assert!(!grid.is_goal(Cell::OutOfBounds));
        assert_eq!(grid.role(Cell::OutOfBounds), CellRole::Void);
    }

    #[test]
    fn test_solid_classification() {
        let grid = walled_3x3();
        assert!(!grid.is_solid(Cell::Tile(ROAD)));
        assert!(grid.is_solid(Cell::Tile(WALL)));
        assert!(!grid.is_solid(Cell::Tile(START)));
        // Goal blocks like a wall; collision checks it first
        assert!(grid.is_solid(Cell::Tile(GOAL)));
        assert!(grid.is_goal(Cell::Tile(GOAL)));
        assert!(CellRole::Decoration.is_solid());
        assert!(!CellRole::Start(1).is_solid());
    }

    #[test]
    fn test_code_for_role() {
        let table = table();
        assert_eq!(table.code_for(CellRole::Start(0)), Some(START));
        assert_eq!(table.code_for(CellRole::Start(1)), None);
        assert_eq!(table.role(GOAL), Some(CellRole::Goal));
        assert_eq!(table.role(7), None);
    }

    #[test]
    fn test_coordinate_conversion() {
        let grid = walled_3x3();
        assert_eq!(grid.to_column(-0.5), -1);
        assert_eq!(grid.to_column(9.99), 0);
        assert_eq!(grid.to_column(10.0), 1);
        assert_eq!(grid.to_row(59.0), 2);
        assert_eq!(grid.to_row(60.0), 3);
        assert!(!grid.is_valid_cell(3, 0));
        assert!(!grid.is_valid_cell(0, -1));
        assert_eq!(grid.to_position(Vec2::new(25.0, 45.0)), Some(WorldPosition::new(2, 2)));
        assert_eq!(grid.to_position(Vec2::new(35.0, 45.0)), None);
        assert_eq!(grid.cell_center(WorldPosition::new(1, 1)), Vec2::new(15.0, 30.0));
    }

    #[test]
    fn test_first_cell_matching() {
        let mut cells = vec![ROAD; 4 * 5];
        // column 2, row 3
        cells[3 * 4 + 2] = START;
        let grid = Grid::new(4, 5, 10.0, 10.0, cells, table()).unwrap();
        assert_eq!(grid.first_cell_matching(START), Some(WorldPosition::new(2, 3)));
        assert_eq!(grid.first_cell_matching(GOAL), None);
    }

    #[test]
    fn test_first_cell_matching_scans_columns_first() {
        // (column 1, row 0) and (column 0, row 1) both match; column 0 wins
        let cells = vec![ROAD, GOAL, GOAL, ROAD];
        let grid = Grid::new(2, 2, 10.0, 10.0, cells, table()).unwrap();
        assert_eq!(grid.first_cell_matching(GOAL), Some(WorldPosition::new(0, 1)));
    }

    #[test]
    fn test_set_cell() {
        let mut grid = walled_3x3();
        grid.set_cell(WorldPosition::new(0, 0), ROAD).unwrap();
        assert_eq!(grid.cell_at(0, 0), Some(ROAD));
        assert_eq!(grid.count_matching(WALL), 7);
        assert_eq!(
            grid.set_cell(WorldPosition::new(3, 0), ROAD),
            Err(GridError::OutOfBounds(WorldPosition::new(3, 0)))
        );
        assert!(grid.set_cell(WorldPosition::new(0, 0), 42).is_err());
        grid.fill(WALL).unwrap();
        assert_eq!(grid.count_matching(WALL), 9);
    }

    #[test]
    fn test_iter_row_major() {
        let grid = walled_3x3();
        let (pos, code) = grid.iter().nth(4).unwrap();
        assert_eq!(pos, WorldPosition::new(1, 1));
        assert_eq!(code, ROAD);
        assert_eq!(grid.cell_at_index(4), Some(ROAD));
        assert_eq!(grid.cell_at_index(9), None);
    }
}
