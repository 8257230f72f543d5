//! The contract between this crate and the external layout search algorithm.
//!
//! The search itself (constraint solving, backtracking, simulated annealing,
//! whatever it may be) lives outside this crate behind [`LayoutGenerator`]. This
//! module defines the result types the pipeline consumes and the cancellation
//! handshake.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand_xoshiro::Xoshiro256Plus;

use crate::graph::{LevelGraph, RoomDescriptorId, RoomId};
use crate::math::{GridCoordinate, GridRotation, LayoutPoint, SegmentDirection};

/// The spatial layout produced by the search: a placement for every graph node.
///
/// Consumed read-only by the rest of the pipeline; the order of `rooms` is the
/// insertion order later stages preserve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    /// One entry per graph node.
    pub rooms: Vec<LayoutRoom>,
}

/// One node's placement within a [`Layout`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LayoutRoom {
    /// The graph node this placement is for.
    pub node: RoomId,
    /// The node's descriptor, echoed from the graph.
    pub descriptor: RoomDescriptorId,
    /// The node's corridor flag, echoed from the graph.
    pub corridor: bool,
    /// Assigned position in layout space.
    ///
    /// Engine guarantee, consumed and not re-verified here: before assigning this,
    /// the search translates the transformed shape into the non-negative quadrant
    /// touching both axes.
    pub position: LayoutPoint,
    /// The transformation the search applied to the room's shape.
    pub transform: GridRotation,
    /// The door openings connecting this room to its neighbors.
    pub doors: Vec<LayoutDoor>,
}

/// A door opening as reported by the search: a directed segment on the room
/// boundary, in layout space.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LayoutDoor {
    /// Segment start.
    pub from: LayoutPoint,
    /// Segment end.
    pub to: LayoutPoint,
    /// Raw direction in the search engine's convention. The contract guarantees
    /// one of the four cardinal values; anything else is a contract breach.
    pub direction: SegmentDirection,
    /// The neighboring node this opening connects to.
    pub neighbor: RoomId,
}

/// The first layout found by a search run, plus its iteration count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchOutcome {
    /// The layout.
    pub layout: Layout,
    /// How many search iterations were needed. Informational only.
    pub iterations: u64,
}

/// Which search algorithm variant to run. Chosen once per generation request,
/// from the graph description.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchStrategy {
    /// Rooms only.
    Plain,
    /// The corridor-aware search, parameterized by candidate corridor lengths.
    CorridorAware {
        /// Candidate corridor lengths from the graph description.
        offsets: Vec<GridCoordinate>,
    },
}

impl SearchStrategy {
    /// Chooses the strategy a graph calls for: corridor-aware exactly when the
    /// graph contains corridor nodes.
    pub fn for_graph(graph: &LevelGraph) -> Self {
        if graph.has_corridors() {
            Self::CorridorAware {
                offsets: graph.corridor_offsets.clone(),
            }
        } else {
            Self::Plain
        }
    }
}

/// Cooperative cancellation flag shared between the pipeline and a search worker.
///
/// The pipeline raises the flag when it stops waiting; a well-behaved search polls
/// it and returns early. Cancellation is best-effort: a search that ignores the
/// flag merely wastes its own time, as its result will not be observed.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Constructs an unraised flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether the flag has been raised.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The external layout search algorithm.
///
/// Implementations search for a spatial arrangement of `graph`'s rooms satisfying
/// its adjacencies, using `rng` as their sole source of randomness so that equal
/// seeds reproduce equal layouts.
pub trait LayoutGenerator {
    /// Runs the search until it finds its first layout.
    ///
    /// Returns [`None`] if the search gives up (exhausts its own iteration budget,
    /// or observes `cancel`). Implementations should poll `cancel` at convenient
    /// intervals and abandon the search when it is raised.
    fn generate(
        &self,
        graph: &LevelGraph,
        strategy: &SearchStrategy,
        rng: &mut Xoshiro256Plus,
        cancel: &CancelFlag,
    ) -> Option<SearchOutcome>;
}
