//! Directed lattice line segments and the door orientation convention.
//! This module is private but reexported by its parent.

use crate::math::{Face4, GridPoint, LayoutPoint, layout_to_grid};

/// Cardinal direction of a directed axis-aligned line segment, in the layout
/// engine's axis convention.
///
/// This is the form in which the external layout search reports the orientation of
/// door openings. [`Undefined`](Self::Undefined) covers everything the convention
/// does not name: zero-length and diagonal segments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum SegmentDirection {
    /// Increasing X.
    Right,
    /// Decreasing X.
    Left,
    /// Increasing Y.
    Top,
    /// Decreasing Y.
    Bottom,
    /// Not an axis-aligned direction.
    Undefined,
}

impl SegmentDirection {
    /// Classifies the segment running from `from` to `to`.
    ///
    /// Zero-length and diagonal segments are [`Undefined`](Self::Undefined).
    pub fn of(from: LayoutPoint, to: LayoutPoint) -> Self {
        let delta = to - from;
        match (delta.x, delta.y) {
            (x, 0) if x > 0 => Self::Right,
            (x, 0) if x < 0 => Self::Left,
            (0, y) if y > 0 => Self::Top,
            (0, y) if y < 0 => Self::Bottom,
            _ => Self::Undefined,
        }
    }
}

/// A door opening re-expressed in the render grid's convention: endpoints in
/// increasing-coordinate order and an outward normal.
///
/// Produced by [`canonicalize_door()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CanonicalDoor {
    /// First endpoint; the lesser coordinate along the door's axis.
    pub from: GridPoint,
    /// Second endpoint; the greater coordinate along the door's axis.
    pub to: GridPoint,
    /// The direction pointing out of the room through this door.
    pub normal: Face4,
}

/// Re-expresses a layout-engine door segment in the render grid's convention.
///
/// The two coordinate spaces agree on positions but not on orientation; this fixed
/// table is the entire difference:
///
/// | raw direction | endpoint order | outward normal |
/// |---------------|----------------|----------------|
/// | `Right`       | from → to      | [`Face4::PY`]  |
/// | `Left`        | to → from      | [`Face4::NY`]  |
/// | `Top`         | from → to      | [`Face4::NX`]  |
/// | `Bottom`      | to → from      | [`Face4::PX`]  |
///
/// In every row the output endpoints are in increasing-coordinate order along the
/// door's axis. Returns [`None`] for [`SegmentDirection::Undefined`]; the layout
/// search's contract permits only the four named directions, so callers treat that
/// as a fatal contract violation.
pub fn canonicalize_door(
    from: LayoutPoint,
    to: LayoutPoint,
    direction: SegmentDirection,
) -> Option<CanonicalDoor> {
    let (a, b, normal) = match direction {
        SegmentDirection::Right => (from, to, Face4::PY),
        SegmentDirection::Left => (to, from, Face4::NY),
        SegmentDirection::Top => (from, to, Face4::NX),
        SegmentDirection::Bottom => (to, from, Face4::PX),
        SegmentDirection::Undefined => return None,
    };
    Some(CanonicalDoor {
        from: layout_to_grid(a),
        to: layout_to_grid(b),
        normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lp(x: i32, y: i32) -> LayoutPoint {
        LayoutPoint::new(x, y)
    }

    #[test]
    fn classification() {
        assert_eq!(SegmentDirection::of(lp(0, 0), lp(3, 0)), SegmentDirection::Right);
        assert_eq!(SegmentDirection::of(lp(3, 0), lp(0, 0)), SegmentDirection::Left);
        assert_eq!(SegmentDirection::of(lp(2, 2), lp(2, 7)), SegmentDirection::Top);
        assert_eq!(SegmentDirection::of(lp(2, 7), lp(2, 2)), SegmentDirection::Bottom);
        // degenerate and diagonal
        assert_eq!(SegmentDirection::of(lp(1, 1), lp(1, 1)), SegmentDirection::Undefined);
        assert_eq!(SegmentDirection::of(lp(0, 0), lp(2, 2)), SegmentDirection::Undefined);
    }

    #[test]
    fn canonicalization_table() {
        // Each case: (raw direction, from, to, expected from, expected to, normal).
        let cases = [
            (SegmentDirection::Right, lp(0, 0), lp(4, 0), (0, 0), (4, 0), Face4::PY),
            (SegmentDirection::Left, lp(4, 0), lp(0, 0), (0, 0), (4, 0), Face4::NY),
            (SegmentDirection::Top, lp(1, 2), lp(1, 6), (1, 2), (1, 6), Face4::NX),
            (SegmentDirection::Bottom, lp(1, 6), lp(1, 2), (1, 2), (1, 6), Face4::PX),
        ];
        for (direction, from, to, expected_from, expected_to, normal) in cases {
            let door = canonicalize_door(from, to, direction).unwrap();
            assert_eq!(
                door,
                CanonicalDoor {
                    from: GridPoint::new(expected_from.0, expected_from.1),
                    to: GridPoint::new(expected_to.0, expected_to.1),
                    normal,
                },
                "{direction:?}"
            );
            // Endpoints come out in increasing order along the door's axis.
            assert!(door.from.x <= door.to.x && door.from.y <= door.to.y);
        }
    }

    #[test]
    fn canonicalization_rejects_undefined() {
        assert_eq!(
            canonicalize_door(lp(0, 0), lp(1, 1), SegmentDirection::Undefined),
            None
        );
    }
}
