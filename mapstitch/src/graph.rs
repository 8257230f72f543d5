//! Abstract description of a level: rooms, their shapes, and required adjacencies.
//!
//! A [`LevelGraph`] is the immutable input to generation. It says nothing about
//! where rooms end up; that is the layout search's job.

use crate::math::{GridCoordinate, LayoutPoint};

/// Identifies one room node in a [`LevelGraph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RoomId(pub u32);

/// Identifies a [`RoomDescriptor`] within its [`LevelGraph`]'s descriptor table.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RoomDescriptorId(pub u32);

/// An abstract room shape: a polygon of integer lattice points in layout space,
/// as authored (untransformed).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RoomShape {
    points: Vec<LayoutPoint>,
}

impl RoomShape {
    /// Constructs a shape from its outline points.
    pub fn new(points: Vec<LayoutPoint>) -> Self {
        Self { points }
    }

    /// Constructs the axis-aligned rectangle outline with corners `(0, 0)` and
    /// `(width, height)`.
    pub fn rectangle(width: GridCoordinate, height: GridCoordinate) -> Self {
        Self::new(vec![
            LayoutPoint::new(0, 0),
            LayoutPoint::new(width, 0),
            LayoutPoint::new(width, height),
            LayoutPoint::new(0, height),
        ])
    }

    /// The outline points.
    pub fn points(&self) -> &[LayoutPoint] {
        &self.points
    }

    /// Componentwise minimum over the outline points, or [`None`] for a degenerate
    /// empty shape.
    ///
    /// This is the normalization offset the layout search applies to put the shape
    /// in the first quadrant, and which placement must subtract back out.
    pub fn lower_bounds(&self) -> Option<LayoutPoint> {
        self.points.iter().copied().reduce(|a, b| a.min(b))
    }
}

/// An abstract room shape referenced by graph nodes.
///
/// Many nodes may share one descriptor; each descriptor is realized by exactly one
/// tile template, looked up through a
/// [`TemplateProvider`](crate::template::TemplateProvider).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoomDescriptor {
    /// The room's shape.
    pub shape: RoomShape,
}

/// One node of a [`LevelGraph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoomNode {
    /// This node's identifier; unique within the graph.
    pub id: RoomId,
    /// Which descriptor (shape and template) realizes this node.
    pub descriptor: RoomDescriptorId,
    /// Whether this node is a corridor rather than a proper room.
    pub corridor: bool,
}

/// A required adjacency between two rooms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Adjacency {
    /// One endpoint.
    pub from: RoomId,
    /// The other endpoint.
    pub to: RoomId,
}

/// Immutable description of the level to generate: the rooms, which of them must
/// be adjacent, and the corridor parameters the search may use.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LevelGraph {
    /// Descriptor table, indexed by [`RoomDescriptorId`].
    pub descriptors: Vec<RoomDescriptor>,
    /// The room nodes.
    pub nodes: Vec<RoomNode>,
    /// Required adjacencies between nodes.
    pub adjacencies: Vec<Adjacency>,
    /// Candidate corridor lengths, passed to a corridor-aware search.
    /// Ignored when no node is a corridor.
    pub corridor_offsets: Vec<GridCoordinate>,
}

impl LevelGraph {
    /// Looks up a descriptor by id.
    pub fn descriptor(&self, id: RoomDescriptorId) -> Option<&RoomDescriptor> {
        self.descriptors.get(id.0 as usize)
    }

    /// Returns whether any node is a corridor.
    pub fn has_corridors(&self) -> bool {
        self.nodes.iter().any(|node| node.corridor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_lower_bounds() {
        assert_eq!(RoomShape::new(vec![]).lower_bounds(), None);
        assert_eq!(
            RoomShape::rectangle(3, 4).lower_bounds(),
            Some(LayoutPoint::new(0, 0))
        );
        let offset = RoomShape::new(vec![
            LayoutPoint::new(5, -2),
            LayoutPoint::new(8, -2),
            LayoutPoint::new(8, 1),
            LayoutPoint::new(5, 1),
        ]);
        assert_eq!(offset.lower_bounds(), Some(LayoutPoint::new(5, -2)));
    }
}
