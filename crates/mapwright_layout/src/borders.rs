//! Bounding box over room grid coordinates.

use mapwright_graph::{GridLocation, Node};

/// Rectangular bounds of all placed rooms, inclusive on every edge.
///
/// `top`/`bottom` bound the y axis, `left`/`right` the x axis; `top >= bottom`
/// and `right >= left` always hold for a box produced by [`compute_borders`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Borders {
    /// Largest y coordinate of any room.
    pub top: i32,
    /// Smallest y coordinate of any room.
    pub bottom: i32,
    /// Smallest x coordinate of any room.
    pub left: i32,
    /// Largest x coordinate of any room.
    pub right: i32,
}

impl Borders {
    /// Number of grid rows the box spans.
    #[must_use]
    pub fn rows(&self) -> usize {
        usize::try_from(i64::from(self.top) - i64::from(self.bottom) + 1).unwrap_or(0)
    }

    /// Number of grid columns the box spans.
    #[must_use]
    pub fn cols(&self) -> usize {
        usize::try_from(i64::from(self.right) - i64::from(self.left) + 1).unwrap_or(0)
    }

    /// Returns true if the location falls inside the box.
    #[must_use]
    pub fn contains(&self, location: GridLocation) -> bool {
        location.y <= self.top
            && location.y >= self.bottom
            && location.x >= self.left
            && location.x <= self.right
    }
}

/// Computes the tight bounding box of every placed room.
///
/// Returns `None` when no room carries a grid location — callers must treat
/// that as "no rooms yet" and skip grid construction entirely rather than
/// render a degenerate box. Rooms without a location are skipped with a
/// warning.
pub fn compute_borders<'a, I>(rooms: I) -> Option<Borders>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut borders: Option<Borders> = None;

    for room in rooms {
        let Some(location) = room.grid_location else {
            tracing::warn!(node = %room.node_id, "room has no grid location, skipped by layout");
            continue;
        };
        borders = Some(match borders {
            None => Borders {
                top: location.y,
                bottom: location.y,
                left: location.x,
                right: location.x,
            },
            Some(b) => Borders {
                top: b.top.max(location.y),
                bottom: b.bottom.min(location.y),
                left: b.left.min(location.x),
                right: b.right.max(location.x),
            },
        });
    }

    borders
}
