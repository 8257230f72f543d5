//! Axis-aligned unit vectors: the [`Face4`] type.
//! This module is private but reexported by its parent.

use crate::math::{GridCoordinate, GridVector};

/// The axes of the tile grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[repr(u8)]
pub enum Axis {
    /// The horizontal axis.
    X = 0,
    /// The vertical axis.
    Y = 1,
}

impl Axis {
    /// Returns the index of this axis, for indexing two-element arrays: X = 0, Y = 1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Identifies an edge of a grid cell or an orthogonal unit vector.
///
/// The names are read in the render grid's convention: +X rightward, +Y upward,
/// so [`NX`](Self::NX) points left and [`PY`](Self::PY) points up.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[repr(u8)]
pub enum Face4 {
    /// Negative X; the face whose normal vector is `(-1, 0)`; leftward.
    NX,
    /// Negative Y; the face whose normal vector is `(0, -1)`; downward.
    NY,
    /// Positive X; the face whose normal vector is `(1, 0)`; rightward.
    PX,
    /// Positive Y; the face whose normal vector is `(0, 1)`; upward.
    PY,
}

impl Face4 {
    /// All the values of [`Face4`].
    pub const ALL: [Face4; 4] = [Face4::NX, Face4::NY, Face4::PX, Face4::PY];

    /// Returns which axis this face's normal vector is parallel to.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::NX | Self::PX => Axis::X,
            Self::NY | Self::PY => Axis::Y,
        }
    }

    /// Returns whether this face is a “positive” face: one whose unit vector's nonzero
    /// coordinate is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::PX | Self::PY)
    }

    /// Returns whether this face is a negative face: one whose unit vector's nonzero
    /// coordinate is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::NX | Self::NY)
    }

    /// Returns the opposite face (maps [`PX`](Self::PX) to [`NX`](Self::NX) and so on).
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Face4 {
        match self {
            Face4::NX => Face4::PX,
            Face4::NY => Face4::PY,
            Face4::PX => Face4::NX,
            Face4::PY => Face4::NY,
        }
    }

    /// Returns the unit vector normal to this face.
    ///
    /// ```
    /// use mapstitch_base::math::{Face4, GridVector};
    ///
    /// assert_eq!(Face4::PY.normal_vector(), GridVector::new(0, 1));
    /// ```
    #[inline]
    pub fn normal_vector(self) -> GridVector {
        let (x, y): (GridCoordinate, GridCoordinate) = match self {
            Face4::NX => (-1, 0),
            Face4::NY => (0, -1),
            Face4::PX => (1, 0),
            Face4::PY => (0, 1),
        };
        GridVector::new(x, y)
    }
}
