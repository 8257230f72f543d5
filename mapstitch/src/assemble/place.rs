//! Normalizing laid-out rooms into concrete tile placements.

use std::sync::Arc;

use crate::assemble::{GenError, InvariantViolation};
use crate::graph::{LevelGraph, RoomId};
use crate::layout::Layout;
use crate::math::{Face4, GridPoint, canonicalize_door, layout_to_grid};
use crate::template::{TemplateProvider, TileTemplate};

/// Capability to instantiate working copies of templates.
///
/// This is the seam between the pipeline and a host engine's scene machinery:
/// a real host would clone its prefab, parent the copy under the run's container
/// object, and return the copy's tile content. The pipeline itself only needs the
/// content; [`BatchHost`] is sufficient when there is no engine.
pub trait InstanceHost {
    /// Produces a working copy of `template`, tracked by the host so the whole
    /// run's batch can be torn down at once.
    fn instantiate(&mut self, template: &Arc<TileTemplate>) -> TileTemplate;
}

/// The no-engine [`InstanceHost`]: instances are plain clones.
#[derive(Clone, Debug, Default)]
pub struct BatchHost {
    instantiated: usize,
}

impl BatchHost {
    /// How many instances this host has produced.
    pub fn instantiated(&self) -> usize {
        self.instantiated
    }
}

impl InstanceHost for BatchHost {
    fn instantiate(&mut self, template: &Arc<TileTemplate>) -> TileTemplate {
        self.instantiated += 1;
        TileTemplate::clone(template)
    }
}

/// A door of a placed room, re-expressed in render-grid terms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlacedDoor {
    /// First endpoint; the lesser coordinate along the door's axis.
    pub from: GridPoint,
    /// Second endpoint; the greater coordinate along the door's axis.
    pub to: GridPoint,
    /// The direction pointing out of the room through this door.
    pub normal: Face4,
    /// The neighboring room this door connects to.
    pub neighbor: RoomId,
}

/// One room's normalized placement: everything compositing and downstream
/// gameplay need to know about it.
#[derive(Clone, Debug)]
pub struct PlacedRoom {
    /// The graph node this placement realizes.
    pub node: RoomId,
    /// Absolute position of the template's local origin on the render grid.
    pub position: GridPoint,
    /// The transformed template instance.
    pub template: TileTemplate,
    /// Corridor flag, verbatim from the graph node.
    pub corridor: bool,
    /// This room's doors, canonicalized.
    pub doors: Vec<PlacedDoor>,
    /// Index of the originating room in the layout's room list, for
    /// reconstructing level metadata later.
    pub layout_index: usize,
}

/// The per-run batch of placements, in layout order.
///
/// Owns every template instance of the run; dropping it tears the whole batch
/// down at once.
#[derive(Clone, Debug, Default)]
pub struct PlacedLevel {
    /// One record per laid-out room.
    pub rooms: Vec<PlacedRoom>,
}

/// Computes a [`PlacedRoom`] for every room in `layout`.
///
/// The layout search normalizes each room's transformed shape to touch the axes
/// of the first quadrant before assigning its position, so the true placement is
/// recovered by subtracting the shape's own (untransformed) minimum back out.
/// This correction is what makes template content land on the correct cells; it
/// is not cosmetic.
pub fn place_rooms(
    layout: &Layout,
    graph: &LevelGraph,
    templates: &TemplateProvider,
    host: &mut dyn InstanceHost,
) -> Result<PlacedLevel, GenError> {
    let mut rooms = Vec::with_capacity(layout.rooms.len());
    for (layout_index, room) in layout.rooms.iter().enumerate() {
        let descriptor = graph.descriptor(room.descriptor).ok_or(
            InvariantViolation::UnknownDescriptor {
                descriptor: room.descriptor,
            },
        )?;
        let shape_minimum = descriptor.shape.lower_bounds().ok_or(
            InvariantViolation::EmptyRoomShape {
                descriptor: room.descriptor,
            },
        )?;
        let template = templates.get(room.descriptor).ok_or(
            InvariantViolation::MissingTemplate {
                descriptor: room.descriptor,
            },
        )?;

        let instance = host.instantiate(template).transform(room.transform);
        let position =
            layout_to_grid(room.position) - layout_to_grid(shape_minimum).to_vector();

        let mut doors = Vec::with_capacity(room.doors.len());
        for door in &room.doors {
            let canonical = canonicalize_door(door.from, door.to, door.direction).ok_or(
                InvariantViolation::UndirectedDoor {
                    from: door.from,
                    to: door.to,
                },
            )?;
            doors.push(PlacedDoor {
                from: canonical.from,
                to: canonical.to,
                normal: canonical.normal,
                neighbor: door.neighbor,
            });
        }

        rooms.push(PlacedRoom {
            node: room.node,
            position,
            template: instance,
            corridor: room.corridor,
            doors,
            layout_index,
        });
    }
    Ok(PlacedLevel { rooms })
}
