//! Renderable grid for the active floor and its vertical neighbors.

use std::collections::BTreeMap;

use mapwright_graph::Node;

use crate::borders::Borders;

/// Edge length of one grid cell in display units.
///
/// The caller multiplies by this to size its viewport; the value has no
/// bearing on the graph itself.
pub const CELL_SIZE: u32 = 150;

/// One grid cell: either empty or occupied by a room.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// No room at this coordinate on this floor.
    Empty,
    /// The room occupying this coordinate.
    Room(Node),
}

impl Cell {
    /// Returns true if no room occupies this cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The occupying room, if any.
    #[must_use]
    pub fn room(&self) -> Option<&Node> {
        match self {
            Self::Empty => None,
            Self::Room(node) => Some(node),
        }
    }
}

/// Row-major cell matrix for a single floor.
///
/// Row 0 is the top border (largest y), column 0 the left border; the
/// matrix always covers the full border box regardless of how sparsely
/// rooms occupy it.
#[derive(Clone, Debug)]
pub struct FloorGrid {
    floor: i32,
    rows: Vec<Vec<Cell>>,
}

impl FloorGrid {
    /// The floor index this grid renders.
    #[must_use]
    pub fn floor(&self) -> i32 {
        self.floor
    }

    /// The cell rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Gets a cell by row and column.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| !cell.is_empty()).count())
            .sum()
    }
}

/// Grids for the active floor and the floors immediately below and above.
#[derive(Clone, Debug)]
pub struct GridModel {
    borders: Borders,
    /// Index 0 = below, 1 = active, 2 = above.
    floors: [FloorGrid; 3],
}

impl GridModel {
    /// The border box all three grids cover.
    #[must_use]
    pub fn borders(&self) -> Borders {
        self.borders
    }

    /// Grid for the floor beneath the active one.
    #[must_use]
    pub fn below(&self) -> &FloorGrid {
        &self.floors[0]
    }

    /// Grid for the active floor.
    #[must_use]
    pub fn active(&self) -> &FloorGrid {
        &self.floors[1]
    }

    /// Grid for the floor above the active one.
    #[must_use]
    pub fn above(&self) -> &FloorGrid {
        &self.floors[2]
    }

    /// Viewport size in display units as `(width, height)`, scaling
    /// linearly with the border box.
    #[must_use]
    pub fn viewport_size(&self) -> (u32, u32) {
        let cols = u32::try_from(self.borders.cols()).unwrap_or(u32::MAX);
        let rows = u32::try_from(self.borders.rows()).unwrap_or(u32::MAX);
        (cols.saturating_mul(CELL_SIZE), rows.saturating_mul(CELL_SIZE))
    }
}

/// Builds the render grid for `active_floor` and its vertical neighbors.
///
/// `rooms_by_floor` is the caller's partition of placed rooms by floor
/// index; floors absent from the map simply render empty. Every produced
/// matrix is exactly `borders.rows()` rows of `borders.cols()` cells.
/// Rooms without a grid location or outside the borders are skipped with a
/// warning; when two rooms land on the same cell the later one wins, also
/// with a warning.
#[must_use]
pub fn build_grid(
    borders: &Borders,
    rooms_by_floor: &BTreeMap<i32, Vec<Node>>,
    active_floor: i32,
) -> GridModel {
    let empty: Vec<Node> = Vec::new();
    let floors = [
        active_floor.saturating_sub(1),
        active_floor,
        active_floor.saturating_add(1),
    ]
    .map(|floor| {
        let rooms = rooms_by_floor.get(&floor).unwrap_or(&empty);
        build_floor(borders, rooms, floor)
    });

    GridModel {
        borders: *borders,
        floors,
    }
}

fn build_floor(borders: &Borders, rooms: &[Node], floor: i32) -> FloorGrid {
    let mut rows = vec![vec![Cell::Empty; borders.cols()]; borders.rows()];

    for room in rooms {
        let Some(location) = room.grid_location else {
            tracing::warn!(node = %room.node_id, "room has no grid location, skipped by layout");
            continue;
        };
        if !borders.contains(location) {
            tracing::warn!(node = %room.node_id, "room lies outside the border box, skipped");
            continue;
        }
        let row = usize::try_from(i64::from(borders.top) - i64::from(location.y)).unwrap_or(0);
        let col = usize::try_from(i64::from(location.x) - i64::from(borders.left)).unwrap_or(0);
        if !rows[row][col].is_empty() {
            tracing::warn!(node = %room.node_id, floor, "two rooms share one grid cell");
        }
        rows[row][col] = Cell::Room(room.clone());
    }

    FloorGrid { floor, rows }
}
