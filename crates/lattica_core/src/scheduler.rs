//! Background generation loop with atomic publication.
//!
//! A dedicated thread repeatedly derives the next generation from the most
//! recently published one and swaps it into a shared handle. Readers clone
//! the handle and never wait on an in-progress pass; no lock is held across
//! a compute pass, only across the pointer swap itself.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::error::CoreError;
use crate::lattice::Lattice;
use crate::metrics::Metrics;
use crate::rule::Rule;

/// A published lattice paired with its generation index.
///
/// Contents are immutable once published; the scheduler only ever replaces
/// the whole handle, never a cell inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub index: u64,
    pub lattice: Lattice,
}

/// Commands accepted by the scheduler thread between passes.
enum Control {
    /// Shut down the generation loop.
    Stop,
}

struct Shared {
    latest: Mutex<Arc<Generation>>,
    metrics: Metrics,
}

/// Drives repeated rule application on a background thread.
///
/// Each pass reads only the previously published generation and writes a
/// fresh lattice, so a cell updated early in a pass can never leak its new
/// value into a neighbor count within the same pass, and a reader can never
/// observe a grid that is partially old and partially new.
pub struct GenerationScheduler {
    shared: Arc<Shared>,
    control: Sender<Control>,
    handle: Option<JoinHandle<()>>,
}

impl GenerationScheduler {
    /// Starts background computation from `initial`.
    ///
    /// The seed lattice is published immediately as generation zero; the
    /// first pass then derives generation one from it. `cadence` is the
    /// minimum interval between publishes.
    pub fn start(initial: Lattice, rule: Rule, cadence: Duration) -> Result<Self, CoreError> {
        Self::start_with_metrics(initial, rule, cadence, Metrics::default())
    }

    /// Like [`start`](Self::start), with a caller-configured metrics
    /// collector.
    pub fn start_with_metrics(
        initial: Lattice,
        rule: Rule,
        cadence: Duration,
        metrics: Metrics,
    ) -> Result<Self, CoreError> {
        rule.validate()?;
        let shared = Arc::new(Shared {
            latest: Mutex::new(Arc::new(Generation {
                index: 0,
                lattice: initial,
            })),
            metrics,
        });
        let (control, commands) = mpsc::channel();
        let worker = Arc::clone(&shared);
        let handle = thread::spawn(move || run_loop(&worker, &rule, cadence, &commands));
        Ok(Self {
            shared,
            control,
            handle: Some(handle),
        })
    }

    /// Most recently published generation.
    ///
    /// Never blocks on an in-progress pass and may be called concurrently
    /// from any number of readers.
    #[must_use]
    pub fn latest(&self) -> Arc<Generation> {
        let guard = self.shared.latest.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Scheduler metrics.
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.shared.metrics
    }

    /// Signals the background loop to exit after its current pass and waits
    /// for it to finish. [`latest`](Self::latest) keeps returning the last
    /// published generation afterwards.
    pub fn stop(&mut self) {
        let _ = self.control.send(Control::Stop);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for GenerationScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(shared: &Shared, rule: &Rule, cadence: Duration, commands: &Receiver<Control>) {
    let mut next_deadline = Instant::now() + cadence;
    loop {
        let pass_start = Instant::now();
        let previous = {
            let guard = shared.latest.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(&guard)
        };
        let lattice = match compute_next(&previous.lattice, rule) {
            Ok(lattice) => lattice,
            Err(e) => {
                // Publishing after a buffer mismatch could tear a reader's
                // view, so the loop ends here.
                tracing::error!(error = %e, "generation pass failed, stopping scheduler");
                break;
            }
        };
        let generation = Generation {
            index: previous.index + 1,
            lattice,
        };
        let index = generation.index;
        let population = generation.lattice.population();
        {
            let mut guard = shared.latest.lock().unwrap_or_else(|e| e.into_inner());
            *guard = Arc::new(generation);
        }
        shared.metrics.record_pass(pass_start.elapsed(), index, population);

        next_deadline += cadence;
        let now = Instant::now();
        let wait = if next_deadline > now {
            next_deadline - now
        } else {
            // A pass slower than the cadence just delays the next publish.
            next_deadline = now;
            Duration::ZERO
        };
        match commands.recv_timeout(wait) {
            Ok(Control::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

/// Derives the next generation, evaluating every cell against `previous`.
fn compute_next(previous: &Lattice, rule: &Rule) -> Result<Lattice, CoreError> {
    let size = previous.size();
    let cells: Vec<bool> = (0..previous.cell_count())
        .into_par_iter()
        .map(|idx| {
            let (x, y, z) = previous.coords(idx);
            rule.next_state(previous, x, y, z)
        })
        .collect();
    Lattice::from_cells(size, cells)
}
