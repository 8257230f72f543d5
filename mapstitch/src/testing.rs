//! Tools for testing the pipeline without a real search algorithm.
//!
//! This module is public so that dependents can unit-test their own integration;
//! it is not intended for production use.

use std::thread;
use std::time::Duration;

use rand_xoshiro::Xoshiro256Plus;

use crate::Tile;
use crate::graph::LevelGraph;
use crate::layout::{CancelFlag, Layout, LayoutGenerator, SearchOutcome, SearchStrategy};
use crate::math::GridAab;
use crate::template::{TemplateLayer, TileTemplate};

/// A [`LayoutGenerator`] that performs no search at all: it replays a canned
/// layout (optionally after a delay, for exercising timeouts), or gives up.
#[derive(Clone, Debug)]
pub struct ScriptedGenerator {
    outcome: Option<SearchOutcome>,
    delay: Duration,
}

impl ScriptedGenerator {
    /// A generator that immediately returns `layout`, reporting one iteration.
    pub fn new(layout: Layout) -> Self {
        Self {
            outcome: Some(SearchOutcome {
                layout,
                iterations: 1,
            }),
            delay: Duration::ZERO,
        }
    }

    /// A generator that always gives up.
    pub fn failing() -> Self {
        Self {
            outcome: None,
            delay: Duration::ZERO,
        }
    }

    /// Sets the iteration count to report.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        if let Some(outcome) = &mut self.outcome {
            outcome.iterations = iterations;
        }
        self
    }

    /// Makes the generator sleep before answering, to simulate a slow search.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl LayoutGenerator for ScriptedGenerator {
    fn generate(
        &self,
        _graph: &LevelGraph,
        _strategy: &SearchStrategy,
        _rng: &mut Xoshiro256Plus,
        cancel: &CancelFlag,
    ) -> Option<SearchOutcome> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        if cancel.is_cancelled() {
            return None;
        }
        self.outcome.clone()
    }
}

/// A single-tile-kind template: every cell of `bounds` holds `tile`, identically
/// on `layer_count` layers.
pub fn filled_template(bounds: GridAab, tile: Tile, layer_count: usize) -> TileTemplate {
    TileTemplate::new(
        (0..layer_count)
            .map(|_| TemplateLayer::from_fn(bounds, |_| Some(tile)))
            .collect(),
    )
}
