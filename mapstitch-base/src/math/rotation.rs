//! Rotations which exchange axes (thus not leaving the integer grid).
//! This module is private but reexported by its parent.

use core::ops::Mul;

use crate::math::{Axis, Face4, GridPoint, GridSize, GridVector};

/// Represents a discrete (grid-aligned) rotation or reflection of the tile grid.
///
/// These are the eight symmetries of the square: the identity, the three other
/// quarter-turn rotations, and the four reflections. They are used to describe the
/// orientation applied to a room template.
///
/// Each of the variant names specifies the two unit vectors which (*x*, *y*),
/// respectively, should be multiplied by to perform the rotation.
/// Lowercase refers to a negated unit vector.
///
/// See also [`Face4`], which specifies a single direction but no orientation.
#[rustfmt::skip]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum GridRotation {
    #[default]
    RXY, RXy, RxY, Rxy,
    RYX, RYx, RyX, Ryx,
}

impl GridRotation {
    /// All eight possible rotations and reflections.
    #[rustfmt::skip]
    pub const ALL: [Self; 8] = {
        use GridRotation::*;
        [RXY, RXy, RxY, Rxy, RYX, RYx, RyX, Ryx]
    };

    /// All possible rotations that are not reflections.
    #[rustfmt::skip]
    pub const ALL_BUT_REFLECTIONS: [Self; 4] = {
        use GridRotation::*;
        [RXY, Rxy, RYx, RyX]
    };

    /// The identity rotation, also known as [`RXY`](Self::RXY).
    pub const IDENTITY: Self = Self::RXY;

    /// The quarter-turn rotation that is clockwise when +Y is regarded as up.
    ///
    /// ```
    /// use mapstitch_base::math::{Face4::*, GridRotation};
    ///
    /// assert_eq!(GridRotation::CLOCKWISE.transform(PX), NY);
    /// assert_eq!(GridRotation::CLOCKWISE.transform(NY), NX);
    /// assert_eq!(GridRotation::CLOCKWISE.transform(NX), PY);
    /// assert_eq!(GridRotation::CLOCKWISE.transform(PY), PX);
    /// ```
    pub const CLOCKWISE: Self = Self::RyX;

    /// The quarter-turn rotation that is counterclockwise when +Y is regarded as up.
    ///
    /// ```
    /// use mapstitch_base::math::{Face4::*, GridRotation};
    ///
    /// assert_eq!(GridRotation::COUNTERCLOCKWISE.transform(PX), PY);
    /// assert_eq!(GridRotation::COUNTERCLOCKWISE.transform(PY), NX);
    /// ```
    pub const COUNTERCLOCKWISE: Self = Self::RYx;

    /// Constructs a rotation from a basis: that is, the returned rotation will
    /// rotate `PX` into `basis[0]` and `PY` into `basis[1]`.
    ///
    /// Panics if the two provided directions are not perpendicular.
    #[inline]
    pub fn from_basis(basis: [Face4; 2]) -> Self {
        use {Face4::*, GridRotation::*};
        match basis {
            [PX, PY] => RXY,
            [PX, NY] => RXy,
            [NX, PY] => RxY,
            [NX, NY] => Rxy,
            [PY, PX] => RYX,
            [PY, NX] => RYx,
            [NY, PX] => RyX,
            [NY, NX] => Ryx,
            _ => panic!("invalid basis given to GridRotation::from_basis: {basis:?}"),
        }
    }

    /// Returns the images of the +X and +Y unit vectors under this rotation.
    #[inline]
    pub const fn to_basis(self) -> [Face4; 2] {
        use {Face4::*, GridRotation::*};
        match self {
            RXY => [PX, PY],
            RXy => [PX, NY],
            RxY => [NX, PY],
            Rxy => [NX, NY],
            RYX => [PY, PX],
            RYx => [PY, NX],
            RyX => [NY, PX],
            Ryx => [NY, NX],
        }
    }

    /// Rotate the face by this rotation.
    #[inline]
    pub fn transform(self, face: Face4) -> Face4 {
        let image = self.to_basis()[face.axis().index()];
        if face.is_negative() {
            image.opposite()
        } else {
            image
        }
    }

    /// Rotate the vector by this rotation.
    ///
    /// May wrap if `vector` has any components equal to [`GridCoordinate::MIN`].
    ///
    /// [`GridCoordinate::MIN`]: crate::math::GridCoordinate
    #[inline]
    pub fn transform_vector(self, vector: GridVector) -> GridVector {
        let [bx, by] = self.to_basis();
        bx.normal_vector() * vector.x + by.normal_vector() * vector.y
    }

    /// Rotate the point by this rotation, about the lattice origin.
    #[inline]
    pub fn transform_point(self, point: GridPoint) -> GridPoint {
        self.transform_vector(point.to_vector()).to_point()
    }

    /// Rotate the size value by this rotation.
    ///
    /// This is similar to [`GridRotation::transform_vector()`] except that the
    /// components are only swapped, not negated.
    #[inline]
    pub fn transform_size(self, size: GridSize) -> GridSize {
        match self.to_basis()[0].axis() {
            Axis::X => size,
            Axis::Y => GridSize::new(size.height, size.width),
        }
    }

    /// Returns whether this is a reflection.
    ///
    /// ```
    /// use mapstitch_base::math::{Face4::*, GridRotation};
    ///
    /// assert!(!GridRotation::IDENTITY.is_reflection());
    /// assert!(GridRotation::from_basis([NX, PY]).is_reflection());
    /// ```
    #[inline]
    pub fn is_reflection(self) -> bool {
        let [bx, by] = self.to_basis();
        let x = bx.normal_vector();
        let y = by.normal_vector();
        // The determinant of the basis is -1 exactly for reflections.
        x.x * y.y - x.y * y.x < 0
    }

    /// Returns the inverse of this rotation; the one which undoes this.
    ///
    /// ```
    /// use mapstitch_base::math::GridRotation;
    ///
    /// for rotation in GridRotation::ALL {
    ///     assert_eq!(rotation * rotation.inverse(), GridRotation::IDENTITY);
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        use GridRotation::*;
        match self {
            // Reflections and the half turn are self-inverse; only the quarter
            // turns swap.
            RYx => RyX,
            RyX => RYx,
            other => other,
        }
    }
}

impl Mul<Self> for GridRotation {
    type Output = Self;

    /// Multiplication is concatenation: `self * rhs` is equivalent to
    /// applying `rhs` and then applying `self`.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let [bx, by] = rhs.to_basis();
        Self::from_basis([self.transform(bx), self.transform(by)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use Face4::*;

    #[test]
    fn identity() {
        assert_eq!(GridRotation::IDENTITY, GridRotation::default());
        assert_eq!(GridRotation::IDENTITY, GridRotation::from_basis([PX, PY]));
        for face in Face4::ALL {
            assert_eq!(GridRotation::IDENTITY.transform(face), face);
        }
    }

    #[test]
    fn all_is_complete() {
        let set: HashSet<GridRotation> = GridRotation::ALL.into_iter().collect();
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn ccw_cw() {
        assert_eq!(
            GridRotation::IDENTITY,
            GridRotation::COUNTERCLOCKWISE * GridRotation::CLOCKWISE
        );
    }

    #[test]
    fn inverse_axioms() {
        assert_eq!(GridRotation::IDENTITY.inverse(), GridRotation::IDENTITY);
        for rot in GridRotation::ALL {
            assert_eq!(rot * rot.inverse(), GridRotation::IDENTITY, "{rot:?}");
            assert_eq!(rot.inverse().inverse(), rot, "{rot:?}");
        }
    }

    #[test]
    fn inverse_effect() {
        let v = GridVector::new(1, 5);
        for rot in GridRotation::ALL {
            assert_eq!(
                rot.transform_vector(rot.inverse().transform_vector(v)),
                v,
                "{rot:?}"
            );
            assert_eq!(
                rot.inverse().transform_vector(rot.transform_vector(v)),
                v,
                "{rot:?}"
            );
        }
    }

    #[test]
    fn is_reflection_consistency() {
        for a in GridRotation::ALL {
            for b in GridRotation::ALL {
                assert_eq!(
                    a.is_reflection() ^ b.is_reflection(),
                    (a * b).is_reflection(),
                    "{a:?}, {b:?}",
                );
            }
        }
        for rot in GridRotation::ALL_BUT_REFLECTIONS {
            assert!(!rot.is_reflection(), "{rot:?}");
        }
    }

    #[test]
    fn transform_vector_matches_basis() {
        for rot in GridRotation::ALL {
            let [bx, by] = rot.to_basis();
            assert_eq!(
                rot.transform_vector(GridVector::new(1, 0)),
                bx.normal_vector(),
                "{rot:?}"
            );
            assert_eq!(
                rot.transform_vector(GridVector::new(0, 1)),
                by.normal_vector(),
                "{rot:?}"
            );
        }
    }

    #[test]
    fn transform_face_matches_vector() {
        for rot in GridRotation::ALL {
            for face in Face4::ALL {
                assert_eq!(
                    rot.transform(face).normal_vector(),
                    rot.transform_vector(face.normal_vector()),
                    "{rot:?}, {face:?}"
                );
            }
        }
    }
}
