//! Bounded-time acquisition of a layout from the external search.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use rand::SeedableRng as _;
use rand_xoshiro::Xoshiro256Plus;

use crate::assemble::GenError;
use crate::graph::LevelGraph;
use crate::layout::{CancelFlag, Layout, LayoutGenerator, SearchStrategy};

/// A successfully acquired [`Layout`], together with acquisition telemetry.
///
/// The counters are informational only; nothing downstream branches on them.
#[derive(Clone, Debug)]
pub struct AcquiredLayout {
    /// The first layout the search produced.
    pub layout: Layout,
    /// Wall-clock time from the start of the search to the first layout.
    pub elapsed: Duration,
    /// Search iterations reported by the generator.
    pub iterations: u64,
}

/// Runs the layout search on a worker thread and waits for its first result, at
/// most `timeout`.
///
/// The strategy (plain or corridor-aware) is chosen here from the graph
/// description, and the generator's random source is seeded from `seed`, so a
/// fixed seed reproduces a fixed layout.
///
/// On timeout the in-flight search is not forcibly stopped: the cancel flag is
/// raised for it to notice, and the channel receiver is dropped, so whatever the
/// worker eventually produces is discarded unread. No partial or late layout can
/// reach the rest of the pipeline.
pub fn acquire_layout<G>(
    graph: &LevelGraph,
    generator: Arc<G>,
    seed: u64,
    timeout: Duration,
) -> Result<AcquiredLayout, GenError>
where
    G: LayoutGenerator + Send + Sync + 'static,
{
    if timeout.is_zero() {
        return Err(GenError::Configuration);
    }

    let strategy = SearchStrategy::for_graph(graph);
    let cancel = CancelFlag::new();
    // Capacity 1 so the worker's single send never blocks, even after the
    // receiver is gone.
    let (result_tx, result_rx) = mpsc::sync_channel(1);
    let start = Instant::now();
    thread::spawn({
        let graph = graph.clone();
        let cancel = cancel.clone();
        move || {
            let mut rng = Xoshiro256Plus::seed_from_u64(seed);
            let outcome = generator.generate(&graph, &strategy, &mut rng, &cancel);
            // The driver may have stopped listening; that is fine.
            let _ = result_tx.send(outcome);
        }
    });

    match result_rx.recv_timeout(timeout) {
        Ok(Some(outcome)) => Ok(AcquiredLayout {
            layout: outcome.layout,
            elapsed: start.elapsed(),
            iterations: outcome.iterations,
        }),
        Ok(None) => Err(GenError::Exhausted),
        Err(mpsc::RecvTimeoutError::Timeout) => {
            cancel.cancel();
            Err(GenError::Timeout { budget: timeout })
        }
        // The worker died without reporting, e.g. a panicking generator.
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(GenError::Exhausted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SearchOutcome;
    use crate::testing::ScriptedGenerator;

    fn empty_layout() -> Layout {
        Layout { rooms: vec![] }
    }

    #[test]
    fn zero_timeout_is_a_configuration_error() {
        let result = acquire_layout(
            &LevelGraph::default(),
            Arc::new(ScriptedGenerator::new(empty_layout())),
            0,
            Duration::ZERO,
        );
        assert!(matches!(result, Err(GenError::Configuration)), "{result:?}");
    }

    #[test]
    fn success_reports_telemetry() {
        let generator = ScriptedGenerator::new(empty_layout()).with_iterations(37);
        let acquired = acquire_layout(
            &LevelGraph::default(),
            Arc::new(generator),
            0,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(acquired.layout, empty_layout());
        assert_eq!(acquired.iterations, 37);
    }

    #[test]
    fn slow_search_times_out() {
        let generator =
            ScriptedGenerator::new(empty_layout()).with_delay(Duration::from_millis(500));
        let budget = Duration::from_millis(20);
        let result = acquire_layout(&LevelGraph::default(), Arc::new(generator), 0, budget);
        assert!(
            matches!(result, Err(GenError::Timeout { budget: b }) if b == budget),
            "{result:?}"
        );
    }

    #[test]
    fn giving_up_is_not_a_timeout() {
        let result = acquire_layout(
            &LevelGraph::default(),
            Arc::new(ScriptedGenerator::failing()),
            0,
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(GenError::Exhausted)), "{result:?}");
    }

    #[test]
    fn dead_worker_is_reported_as_exhausted() {
        struct PanickingGenerator;
        impl LayoutGenerator for PanickingGenerator {
            fn generate(
                &self,
                _: &LevelGraph,
                _: &SearchStrategy,
                _: &mut Xoshiro256Plus,
                _: &CancelFlag,
            ) -> Option<SearchOutcome> {
                panic!("search blew up");
            }
        }

        let result = acquire_layout(
            &LevelGraph::default(),
            Arc::new(PanickingGenerator),
            0,
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(GenError::Exhausted)), "{result:?}");
    }
}
