//! The generation-and-compositing pipeline.
//!
//! [`assemble_level()`] drives the three stages in order:
//!
//! 1. [`acquire_layout()`]: run the external layout search on a worker thread,
//!    bounded by a wall-clock timeout;
//! 2. [`place_rooms()`]: normalize every laid-out room into a concrete placement
//!    (absolute position, transformed template instance, canonicalized doors);
//! 3. [`composite()`]: write every placement's tile content into the destination
//!    [`TileGrid`], rooms before corridors, clearing each footprint first.
//!
//! Control flow is strictly sequential and fails fast: any error leaves no partial
//! output beyond what the error itself describes, and nothing is retried.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::graph::{LevelGraph, RoomDescriptorId, RoomId};
use crate::grid::TileGrid;
use crate::layout::LayoutGenerator;
use crate::math::{GridVector, LayoutPoint};
use crate::template::TemplateProvider;

mod acquire;
pub use acquire::*;
mod compose;
pub use compose::*;
mod place;
pub use place::*;

/// Options governing one [`assemble_level()`] run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssembleOptions {
    /// Wall-clock budget for the layout search. Must be nonzero.
    pub timeout: Duration,
    /// Seed for the search's random source; equal seeds and equal inputs
    /// reproduce equal levels.
    pub seed: u64,
    /// When `false`, the layout is acquired and placements are computed, but no
    /// tiles are written to the grid.
    pub apply_templates: bool,
    /// Re-center the grid's container offset on the occupied bounds after all
    /// tiles are written. Cosmetic only.
    pub center_grid: bool,
    /// Log the search's elapsed time and iteration count.
    pub show_debug_info: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            seed: 0,
            apply_templates: true,
            center_grid: false,
            show_debug_info: false,
        }
    }
}

/// Error produced when level assembly fails.
///
/// No variant is retried internally; the pipeline is single-shot per invocation
/// and leaves recovery policy to the caller.
#[derive(Debug, displaydoc::Display)]
#[non_exhaustive]
pub enum GenError {
    /// invalid configuration: the layout search timeout must be positive
    Configuration,
    /// the layout search did not produce a layout within its budget of {budget:?}
    Timeout {
        /// The budget that was exceeded.
        budget: Duration,
    },
    /// the layout search ended without finding a layout
    Exhausted,
    /// generation contract violated: {0}
    Invariant(InvariantViolation),
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Invariant(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<InvariantViolation> for GenError {
    fn from(violation: InvariantViolation) -> Self {
        GenError::Invariant(violation)
    }
}

/// A contract breach by an upstream collaborator: malformed search-engine output
/// or a template set inconsistent with the graph or grid.
///
/// These are never silently recovered; they indicate a bug or bad data outside
/// this crate.
#[derive(Clone, Debug, Eq, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum InvariantViolation {
    /// door segment {from:?} to {to:?} has no cardinal direction
    UndirectedDoor {
        /// Segment start as reported by the search.
        from: LayoutPoint,
        /// Segment end as reported by the search.
        to: LayoutPoint,
    },
    /// template of room {node:?} has {actual} layers but the destination grid has {expected}
    LayerCountMismatch {
        /// The room whose template mismatched.
        node: RoomId,
        /// The destination grid's layer count.
        expected: usize,
        /// The template's layer count.
        actual: usize,
    },
    /// room descriptor {descriptor:?} has an empty shape
    EmptyRoomShape {
        /// The offending descriptor.
        descriptor: RoomDescriptorId,
    },
    /// no template is mapped for room descriptor {descriptor:?}
    MissingTemplate {
        /// The unmapped descriptor.
        descriptor: RoomDescriptorId,
    },
    /// layout references room descriptor {descriptor:?} which is not in the graph
    UnknownDescriptor {
        /// The unknown descriptor id.
        descriptor: RoomDescriptorId,
    },
}

impl std::error::Error for InvariantViolation {}

/// Generates a level: searches for a layout of `graph`, places each room's
/// template, and composites the result into `grid`.
///
/// On success, returns the per-run [`PlacedLevel`]; callers that only want the
/// grid may simply drop it, which tears down the whole batch of template
/// instances at once.
///
/// `generator` is the external search algorithm; it runs on a worker thread and
/// is abandoned (not forcibly stopped) if it exceeds `options.timeout`. `host`
/// instantiates template copies; use [`BatchHost`] when no engine integration is
/// needed.
pub fn assemble_level<G>(
    graph: &LevelGraph,
    templates: &TemplateProvider,
    generator: Arc<G>,
    grid: &mut TileGrid,
    host: &mut dyn InstanceHost,
    options: &AssembleOptions,
) -> Result<PlacedLevel, GenError>
where
    G: LayoutGenerator + Send + Sync + 'static,
{
    let acquired = acquire_layout(graph, generator, options.seed, options.timeout)?;
    if options.show_debug_info {
        log::info!(
            "layout search found a layout in {:.3} s after {} iterations",
            acquired.elapsed.as_secs_f64(),
            acquired.iterations,
        );
    }

    let place_start = Instant::now();
    let level = place_rooms(&acquired.layout, graph, templates, host)?;
    log::trace!(
        "placed {} rooms in {:.3} s",
        level.rooms.len(),
        place_start.elapsed().as_secs_f64()
    );

    if options.apply_templates {
        let compose_start = Instant::now();
        composite(&level, grid)?;
        log::trace!(
            "compositing took {:.3} s",
            compose_start.elapsed().as_secs_f64()
        );
    }

    // Must come after every tile write.
    if options.center_grid {
        center_grid(grid);
    }

    Ok(level)
}

/// Translates the grid's container offset so that the occupied bounds are
/// centered on the coordinate origin. No-op on an empty grid.
fn center_grid(grid: &mut TileGrid) {
    if let Some(bounds) = grid.occupied_bounds() {
        let lower = bounds.lower_bounds();
        let size = bounds.size();
        let center = GridVector::new(
            lower.x + (size.width / 2) as i32,
            lower.y + (size.height / 2) as i32,
        );
        grid.set_origin(-center);
    }
}
