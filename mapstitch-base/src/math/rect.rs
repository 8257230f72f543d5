//! Axis-aligned rectangles of grid cells: the [`GridAab`] type.
//! This module is private but reexported by its parent.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

use crate::math::{GridCoordinate, GridPoint, GridRotation, GridSize, GridVector};

/// An axis-aligned rectangle of grid cells: inclusive lower bounds and exclusive
/// upper bounds, or equivalently lower bounds and size.
///
/// A `GridAab` may have zero size along either axis, in which case it contains no
/// cells, but its bounds may not be in decreasing order.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct GridAab {
    lower_bounds: GridPoint,
    sizes: GridSize,
}

impl GridAab {
    /// Constructs a [`GridAab`] from coordinate lower bounds and sizes.
    pub fn from_lower_size(
        lower_bounds: impl Into<GridPoint>,
        sizes: impl Into<GridSize>,
    ) -> Self {
        Self {
            lower_bounds: lower_bounds.into(),
            sizes: sizes.into(),
        }
    }

    /// Constructs a [`GridAab`] from inclusive lower bounds and exclusive upper bounds.
    ///
    /// Panics if the bounds are in decreasing order.
    #[track_caller]
    pub fn from_lower_upper(
        lower_bounds: impl Into<GridPoint>,
        upper_bounds: impl Into<GridPoint>,
    ) -> Self {
        let lower = lower_bounds.into();
        let upper = upper_bounds.into();
        assert!(
            lower.x <= upper.x && lower.y <= upper.y,
            "GridAab::from_lower_upper bounds {lower:?} to {upper:?} are not in increasing order",
        );
        Self {
            lower_bounds: lower,
            sizes: GridSize::new(
                (upper.x - lower.x).cast_unsigned(),
                (upper.y - lower.y).cast_unsigned(),
            ),
        }
    }

    /// Constructs a [`GridAab`] containing the single given cell.
    pub fn single_cell(cell: GridPoint) -> Self {
        Self {
            lower_bounds: cell,
            sizes: GridSize::new(1, 1),
        }
    }

    /// Computes the number of cells contained, i.e. the product of the sizes.
    pub fn area(&self) -> usize {
        self.sizes.width as usize * self.sizes.height as usize
    }

    /// Returns whether the rectangle contains no cells.
    pub fn is_empty(&self) -> bool {
        self.sizes.width == 0 || self.sizes.height == 0
    }

    /// Inclusive lower bounds, or most negative corner.
    pub fn lower_bounds(&self) -> GridPoint {
        self.lower_bounds
    }

    /// Exclusive upper bounds, or most positive corner plus (1, 1).
    pub fn upper_bounds(&self) -> GridPoint {
        GridPoint::new(
            self.lower_bounds.x + self.sizes.width as GridCoordinate,
            self.lower_bounds.y + self.sizes.height as GridCoordinate,
        )
    }

    /// Size of the rectangle: number of cells along each axis.
    pub fn size(&self) -> GridSize {
        self.sizes
    }

    /// The range of X coordinates of contained cells.
    pub fn x_range(&self) -> Range<GridCoordinate> {
        self.lower_bounds.x..self.upper_bounds().x
    }

    /// The range of Y coordinates of contained cells.
    pub fn y_range(&self) -> Range<GridCoordinate> {
        self.lower_bounds.y..self.upper_bounds().y
    }

    /// Returns whether the rectangle includes the given cell.
    pub fn contains(&self, cell: GridPoint) -> bool {
        self.x_range().contains(&cell.x) && self.y_range().contains(&cell.y)
    }

    /// Returns whether this rectangle includes every cell in the other rectangle.
    pub fn contains_box(&self, other: GridAab) -> bool {
        other.is_empty()
            || (self.contains(other.lower_bounds())
                && self.contains(other.upper_bounds() - GridVector::new(1, 1)))
    }

    /// Returns the intersection of the two rectangles' cell sets, or [`None`] if it
    /// is empty.
    pub fn intersection(self, other: GridAab) -> Option<GridAab> {
        let lower = self.lower_bounds.max(other.lower_bounds);
        let upper = self.upper_bounds().min(other.upper_bounds());
        if lower.x >= upper.x || lower.y >= upper.y {
            return None;
        }
        Some(GridAab::from_lower_upper(lower, upper))
    }

    /// Returns the smallest rectangle which contains both inputs' bounds, including
    /// any cells in between.
    pub fn union_box(self, other: GridAab) -> GridAab {
        GridAab::from_lower_upper(
            self.lower_bounds.min(other.lower_bounds),
            self.upper_bounds().max(other.upper_bounds()),
        )
    }

    /// Displaces the rectangle by the given offset, leaving its size unchanged.
    #[must_use]
    pub fn translate(self, offset: impl Into<GridVector>) -> Self {
        Self {
            lower_bounds: self.lower_bounds + offset.into(),
            sizes: self.sizes,
        }
    }

    /// Rotates the rectangle about the lattice origin.
    ///
    /// The result's cell set is exactly the image of this rectangle's cell set
    /// under [`GridRotation::transform_point()`].
    #[must_use]
    pub fn transform(self, rotation: GridRotation) -> Self {
        if self.is_empty() {
            return GridAab::from_lower_size(
                rotation.transform_point(self.lower_bounds),
                rotation.transform_size(self.sizes),
            );
        }
        let a = rotation.transform_point(self.lower_bounds);
        let b = rotation.transform_point(self.upper_bounds() - GridVector::new(1, 1));
        GridAab::from_lower_upper(a.min(b), a.max(b) + GridVector::new(1, 1))
    }

    /// Iterates over all cells contained in this rectangle, in deterministic order
    /// (row by row, bottom to top; within a row, left to right).
    pub fn interior_iter(self) -> GridIter {
        GridIter::new(self)
    }
}

impl fmt::Debug for GridAab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridAab({:?}, {:?})", self.x_range(), self.y_range())
    }
}

/// Iterator produced by [`GridAab::interior_iter()`].
#[derive(Clone, Debug)]
pub struct GridIter {
    x_range: Range<GridCoordinate>,
    y_end: GridCoordinate,
    x: GridCoordinate,
    y: GridCoordinate,
}

impl GridIter {
    fn new(bounds: GridAab) -> Self {
        let x_range = bounds.x_range();
        Self {
            x: x_range.start,
            y: if bounds.is_empty() {
                bounds.y_range().end
            } else {
                bounds.y_range().start
            },
            x_range,
            y_end: bounds.y_range().end,
        }
    }
}

impl Iterator for GridIter {
    type Item = GridPoint;

    #[inline]
    fn next(&mut self) -> Option<GridPoint> {
        if self.y >= self.y_end {
            return None;
        }
        let item = GridPoint::new(self.x, self.y);
        self.x += 1;
        if self.x >= self.x_range.end {
            self.x = self.x_range.start;
            self.y += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.y >= self.y_end {
            0
        } else {
            let width = i64::from(self.x_range.end) - i64::from(self.x_range.start);
            let full_rows = i64::from(self.y_end) - i64::from(self.y) - 1;
            let this_row = i64::from(self.x_range.end) - i64::from(self.x);
            (full_rows * width + this_row) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter {}
impl FusedIterator for GridIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn consistent_constructors() {
        assert_eq!(
            GridAab::from_lower_size([1, 2], [3, 4]),
            GridAab::from_lower_upper([1, 2], [4, 6]),
        );
        assert_eq!(GridAab::single_cell(GridPoint::new(5, -5)).area(), 1);
    }

    #[test]
    #[should_panic = "not in increasing order"]
    fn from_lower_upper_rejects_decreasing() {
        GridAab::from_lower_upper([0, 0], [-1, 0]);
    }

    #[test]
    fn contains_and_ranges() {
        let aab = GridAab::from_lower_size([-2, 3], [4, 2]);
        assert_eq!(aab.x_range(), -2..2);
        assert_eq!(aab.y_range(), 3..5);
        assert!(aab.contains(GridPoint::new(-2, 3)));
        assert!(aab.contains(GridPoint::new(1, 4)));
        assert!(!aab.contains(GridPoint::new(2, 4)));
        assert!(!aab.contains(GridPoint::new(0, 5)));
    }

    #[test]
    fn union_and_intersection() {
        let a = GridAab::from_lower_size([0, 0], [2, 2]);
        let b = GridAab::from_lower_size([1, 1], [2, 2]);
        let c = GridAab::from_lower_size([10, 10], [1, 1]);
        assert_eq!(a.union_box(b), GridAab::from_lower_upper([0, 0], [3, 3]));
        assert_eq!(a.intersection(b), Some(GridAab::from_lower_size([1, 1], [1, 1])));
        assert_eq!(a.intersection(c), None);
    }

    #[test]
    fn iter_order_and_count() {
        let aab = GridAab::from_lower_size([0, 10], [2, 2]);
        let cells: Vec<GridPoint> = aab.interior_iter().collect();
        assert_eq!(
            cells,
            vec![
                GridPoint::new(0, 10),
                GridPoint::new(1, 10),
                GridPoint::new(0, 11),
                GridPoint::new(1, 11),
            ]
        );
        assert_eq!(aab.interior_iter().len(), aab.area());
        assert_eq!(GridAab::from_lower_size([0, 0], [0, 5]).interior_iter().count(), 0);
    }

    /// `transform` must produce exactly the image of the cell set.
    #[test]
    fn transform_matches_cell_image() {
        let aab = GridAab::from_lower_size([-1, 2], [3, 2]);
        for rot in GridRotation::ALL {
            let image: HashSet<GridPoint> = aab
                .interior_iter()
                .map(|cell| rot.transform_point(cell))
                .collect();
            let transformed: HashSet<GridPoint> =
                aab.transform(rot).interior_iter().collect();
            assert_eq!(image, transformed, "{rot:?}");
            assert_eq!(aab.transform(rot).transform(rot.inverse()), aab, "{rot:?}");
        }
    }
}
