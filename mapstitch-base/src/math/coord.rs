//! Numeric types used for coordinates and related quantities.

use euclid::{Point2D, Size2D, Vector2D};

/// Coordinates that are locked to the tile grid.
pub type GridCoordinate = i32;

/// Numeric type in a [`GridSize`].
pub type GridSizeCoord = u32;

/// Unit-of-measure tag for the render grid's coordinate space: the space in which
/// tiles are finally written, with +X rightward and +Y upward.
///
/// Compare [`LayoutSpace`]. Keeping the two spaces as distinct `euclid` units means a
/// layout-engine position cannot be accidentally used as a tile position without going
/// through [`layout_to_grid()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GridSpace {}

/// Unit-of-measure tag for the layout engine's coordinate space: the space in which
/// the external search assigns room positions and door segments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LayoutSpace {}

/// Positions that are locked to the tile grid.
pub type GridPoint = Point2D<GridCoordinate, GridSpace>;

/// Vectors that are locked to the tile grid.
pub type GridVector = Vector2D<GridCoordinate, GridSpace>;

/// Sizes of grid-aligned objects.
pub type GridSize = Size2D<GridSizeCoord, GridSpace>;

/// Positions in the layout engine's coordinate space.
pub type LayoutPoint = Point2D<GridCoordinate, LayoutSpace>;

/// Vectors in the layout engine's coordinate space.
pub type LayoutVector = Vector2D<GridCoordinate, LayoutSpace>;

/// Converts a layout-engine position to the equivalent tile-grid position.
///
/// Positions carry over axis-for-axis; the two spaces differ only in how door
/// openings are oriented, which is handled by [`canonicalize_door()`].
///
/// [`canonicalize_door()`]: crate::math::canonicalize_door
#[inline]
pub fn layout_to_grid(point: LayoutPoint) -> GridPoint {
    point.cast_unit()
}

/// Inverse of [`layout_to_grid()`].
#[inline]
pub fn grid_to_layout(point: GridPoint) -> LayoutPoint {
    point.cast_unit()
}
