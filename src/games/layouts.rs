//! Literal tile layouts and their cell tables

use crate::consts::{CELL_HEIGHT, CELL_WIDTH, WORLD_COLUMNS, WORLD_ROWS};
use crate::error::GridError;
use crate::sim::grid::{CellRole, CellTable, CellType, Grid};

/// Cell codes of the two-player race track
pub mod track {
    use crate::sim::grid::CellType;

    pub const ROAD: CellType = 0;
    pub const WALL: CellType = 1;
    pub const GOAL: CellType = 2;
    pub const TREE: CellType = 3;
    pub const FLAG: CellType = 4;
    pub const PLAYER1_START: CellType = 5;
    pub const PLAYER2_START: CellType = 6;
}

/// Cell codes of the adventure map
pub mod dungeon {
    use crate::sim::grid::CellType;

    pub const ROAD: CellType = 0;
    pub const WALL: CellType = 1;
    pub const START: CellType = 2;
    pub const GOAL: CellType = 3;
    pub const TREE: CellType = 4;
    pub const FLAG: CellType = 5;
}

#[rustfmt::skip]
const TRACK: [CellType; (WORLD_COLUMNS * WORLD_ROWS) as usize] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 1, 5, 6, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 4, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 4, 1, 1, 0, 0, 1,
    1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1,
    1, 4, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 1, 3, 3, 3, 3, 3, 1, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 1, 1, 3, 3, 3, 3, 3, 1, 0, 0, 1, 0, 0, 0, 1, 1,
    1, 0, 0, 0, 1, 3, 3, 3, 3, 3, 3, 1, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 1, 3, 3, 3, 1, 1, 1, 1, 0, 0, 1, 0, 4, 0, 0, 1,
    1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 2, 2, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1,
];

#[rustfmt::skip]
const DUNGEON: [CellType; (WORLD_COLUMNS * WORLD_ROWS) as usize] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 5, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 5, 1, 1, 0, 0, 1,
    1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1,
    1, 1, 5, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 1, 4, 4, 4, 4, 4, 1, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 1, 1, 4, 4, 4, 4, 4, 1, 0, 0, 1, 0, 0, 0, 1, 1,
    1, 0, 0, 0, 1, 4, 4, 4, 4, 4, 4, 1, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 1, 4, 4, 4, 1, 1, 1, 1, 0, 0, 1, 0, 5, 0, 0, 1,
    1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 3, 3, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1,
];

pub fn track_table() -> CellTable {
    CellTable::new(&[
        CellRole::Road,
        CellRole::Wall,
        CellRole::Goal,
        CellRole::Decoration,
        CellRole::Decoration,
        CellRole::Start(0),
        CellRole::Start(1),
    ])
}

pub fn dungeon_table() -> CellTable {
    CellTable::new(&[
        CellRole::Road,
        CellRole::Wall,
        CellRole::Start(0),
        CellRole::Goal,
        CellRole::Decoration,
        CellRole::Decoration,
    ])
}

/// The two-player race track
pub fn track_grid() -> Result<Grid, GridError> {
    Grid::new(
        WORLD_COLUMNS,
        WORLD_ROWS,
        CELL_WIDTH,
        CELL_HEIGHT,
        TRACK.to_vec(),
        track_table(),
    )
}

/// The single-player adventure map
pub fn dungeon_grid() -> Result<Grid, GridError> {
    Grid::new(
        WORLD_COLUMNS,
        WORLD_ROWS,
        CELL_WIDTH,
        CELL_HEIGHT,
        DUNGEON.to_vec(),
        dungeon_table(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::WorldPosition;

    #[test]
    fn test_layouts_are_valid() {
        let track = track_grid().unwrap();
        assert_eq!(track.first_cell_matching(track::PLAYER1_START), Some(WorldPosition::new(9, 1)));
        assert_eq!(track.first_cell_matching(track::PLAYER2_START), Some(WorldPosition::new(10, 1)));
        assert_eq!(track.count_matching(track::GOAL), 2);

        let dungeon = dungeon_grid().unwrap();
        assert_eq!(dungeon.first_cell_matching(dungeon::START), Some(WorldPosition::new(9, 1)));
        assert_eq!(dungeon.first_cell_matching(dungeon::GOAL), Some(WorldPosition::new(17, 12)));
    }
}
