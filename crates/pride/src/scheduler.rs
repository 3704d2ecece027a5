// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit scheduler.
//!
//! Units run either inline on the submitting thread (zero worker slots) or on
//! a fixed-size table of worker slots used round-robin. Before a slot is reused
//! its previous occupant is joined, so two units mapped to the same slot never
//! overlap. Units in different slots run concurrently in no particular order.
//!
//! There is no timeout: a unit that never returns blocks the next submission
//! to its slot, and [`Scheduler::drain`], forever.
//!
//! Workers are joined with the slot table unlocked, so a unit may read or
//! reconfigure the scheduler running it. Units must not submit to it or drain
//! it.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::config::{self, LogSettings, Settings, UnitSettings};
use crate::counters::RunStats;
use crate::error::ConfigError;
use crate::log::Logger;
use crate::state::{RunState, panic_message};
use crate::stream::{StdStreams, Streams};
use crate::unit::UnitContext;

/// Where a scheduler is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted since construction or the last drain.
    Idle,
    /// Units are being submitted.
    Dispatching,
    /// `drain` is joining outstanding workers.
    Draining,
}

impl Phase {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => Phase::Dispatching,
            2 => Phase::Draining,
            _ => Phase::Idle,
        }
    }
}

/// A worker thread occupying a slot.
struct Worker {
    label: String,
    handle: JoinHandle<()>,
}

enum Slot {
    Empty,
    Occupied(Worker),
    /// Occupant taken out for joining; the slot is not free yet.
    Reserved,
}

/// Fixed-size rotating table of worker slots.
struct SlotTable {
    slots: Vec<Slot>,
    /// Next slot to dispatch into; always `< slots.len()` when non-empty.
    cursor: usize,
}

impl SlotTable {
    fn new(size: usize) -> Self {
        Self { slots: (0..size).map(|_| Slot::Empty).collect(), cursor: 0 }
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| !matches!(s, Slot::Empty)).count()
    }

    /// Mark `index` reserved and hand back its occupant, if any.
    fn reserve(&mut self, index: usize) -> Option<Worker> {
        let slot = self.slots.get_mut(index)?;
        match std::mem::replace(slot, Slot::Reserved) {
            Slot::Occupied(worker) => Some(worker),
            Slot::Empty | Slot::Reserved => None,
        }
    }

    /// Reserve every occupied slot and hand back the occupants.
    fn reserve_occupied(&mut self) -> Vec<(usize, Worker)> {
        let mut workers = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !matches!(slot, Slot::Occupied(_)) {
                continue;
            }
            if let Slot::Occupied(worker) = std::mem::replace(slot, Slot::Reserved) {
                workers.push((index, worker));
            }
        }
        workers
    }

    fn install(&mut self, index: usize, slot: Slot) {
        if let Some(current) = self.slots.get_mut(index) {
            *current = slot;
        }
    }

    fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.slots.len();
    }
}

/// Wait for a worker that left its slot.
fn join_worker(index: usize, worker: Worker) {
    tracing::debug!(slot = index, unit = %worker.label, "joining worker");
    if worker.handle.join().is_err() {
        // Unit panics are caught inside the worker; only a panicking
        // payload drop ends up here.
        tracing::warn!(slot = index, unit = %worker.label, "worker terminated abnormally");
    }
}

/// Runs units inline or across a rotating pool of worker slots.
///
/// ```
/// use pride::Scheduler;
///
/// let scheduler = Scheduler::new();
/// scheduler.configure(2).unwrap();
/// for label in ["a", "b", "c"] {
///     scheduler.submit(label, |t| pride::check!(t, !t.label().is_empty()));
/// }
/// scheduler.drain();
/// assert_eq!(scheduler.stats().assertion_passed_count, 3);
/// ```
pub struct Scheduler {
    state: Arc<RunState>,
    slots: Mutex<SlotTable>,
    /// Held by `submit` and `drain` for their whole duration.
    dispatch: Mutex<()>,
    phase: AtomicU8,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Scheduler with default settings, logging to stdout/stderr.
    pub fn new() -> Self {
        let settings = Settings::default();
        Self::build(settings.log, settings.unit, Arc::new(StdStreams))
    }

    /// Scheduler with explicit settings, logging to stdout/stderr.
    pub fn with_settings(settings: Settings) -> Result<Self, ConfigError> {
        Self::with_streams(settings, Arc::new(StdStreams))
    }

    /// Scheduler with explicit settings and output streams.
    pub fn with_streams(settings: Settings, streams: Arc<dyn Streams>) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::build(settings.log, settings.unit, streams))
    }

    fn build(log: LogSettings, unit: UnitSettings, streams: Arc<dyn Streams>) -> Self {
        let slots = SlotTable::new(unit.threads);
        let logger = Logger::unchecked(log, streams);
        Self {
            state: Arc::new(RunState::new(logger, unit)),
            slots: Mutex::new(slots),
            dispatch: Mutex::new(()),
            phase: AtomicU8::new(Phase::Idle as u8),
        }
    }

    /// Set the number of worker slots; zero runs units inline.
    ///
    /// Fails if `worker_slots` exceeds
    /// [`MAX_THREAD_NUM`](crate::config::defaults::limits::MAX_THREAD_NUM), or
    /// if the size changes while workers are still occupying slots.
    pub fn configure(&self, worker_slots: usize) -> Result<(), ConfigError> {
        config::check_threads(worker_slots)?;

        let mut table = self.slots.lock();
        if table.len() == worker_slots {
            return Ok(());
        }
        let occupied = table.occupied();
        if occupied > 0 {
            return Err(ConfigError::PoolBusy { occupied });
        }
        *table = SlotTable::new(worker_slots);
        self.state.unit.write().threads = worker_slots;
        tracing::debug!(worker_slots, "worker pool resized");
        Ok(())
    }

    pub fn worker_slots(&self) -> usize {
        self.slots.lock().len()
    }

    /// Run `unit` under `label`.
    ///
    /// Inline mode returns after the unit finished. Threaded mode joins the
    /// current occupant of the next slot, starts `unit` there and returns
    /// without waiting for it.
    pub fn submit<F>(&self, label: &str, unit: F)
    where
        F: FnOnce(&UnitContext) + Send + 'static,
    {
        let dispatch = self.dispatch.lock();
        self.phase.store(Phase::Dispatching as u8, Ordering::Release);
        self.state.announce(label);
        self.state.counters.unit_submitted();

        let mut table = self.slots.lock();
        if table.slots.is_empty() {
            drop(table);
            drop(dispatch);
            self.state.counters.inline_unit_started();
            run_guarded(&UnitContext::new(label, Arc::clone(&self.state)), unit);
            return;
        }

        let index = table.cursor;
        let previous = table.reserve(index);
        table.advance();
        drop(table);

        if let Some(worker) = previous {
            join_worker(index, worker);
        }

        let ctx = UnitContext::new(label, Arc::clone(&self.state));
        let spawned = thread::Builder::new()
            .name(format!("pride-slot-{index}"))
            .spawn(move || run_guarded(&ctx, unit));
        let slot = match spawned {
            Ok(handle) => {
                tracing::debug!(slot = index, unit = label, "worker dispatched");
                Slot::Occupied(Worker { label: label.to_string(), handle })
            }
            Err(e) => {
                self.state.unit_aborted(label, &format!("worker not started: {e}"));
                Slot::Empty
            }
        };
        self.slots.lock().install(index, slot);
    }

    /// Join every outstanding worker.
    ///
    /// On return all units submitted so far have finished. Calling it with
    /// nothing outstanding does nothing.
    pub fn drain(&self) {
        let _dispatch = self.dispatch.lock();
        self.phase.store(Phase::Draining as u8, Ordering::Release);

        let workers = self.slots.lock().reserve_occupied();
        let joined = workers.len();
        for (index, worker) in workers {
            join_worker(index, worker);
            self.slots.lock().install(index, Slot::Empty);
        }
        if joined > 0 {
            tracing::debug!(joined, "drained worker slots");
        }
        self.phase.store(Phase::Idle as u8, Ordering::Release);
    }

    /// Record an assertion outside any unit body.
    pub fn check(&self, message: &str, passed: bool) {
        self.state.record(message, passed);
    }

    /// Current counter values.
    pub fn stats(&self) -> RunStats {
        self.state.counters.snapshot()
    }

    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    pub fn logger(&self) -> &Logger {
        &self.state.logger
    }

    /// Snapshot of the unit settings.
    pub fn unit_settings(&self) -> UnitSettings {
        self.state.unit.read().clone()
    }

    pub fn set_unit_format(&self, template: &str) -> Result<(), ConfigError> {
        self.state.unit.write().set_unit_format(template)
    }

    pub fn set_assertion_format(&self, template: &str) -> Result<(), ConfigError> {
        self.state.unit.write().set_assertion_format(template)
    }

    pub fn set_glyphs(&self, passed: &str, failed: &str) -> Result<(), ConfigError> {
        self.state.unit.write().set_glyphs(passed, failed)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.drain();
    }
}

/// Run a unit body, containing any panic to the unit itself.
fn run_guarded<F>(ctx: &UnitContext, unit: F)
where
    F: FnOnce(&UnitContext),
{
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| unit(ctx))) {
        ctx.aborted(&panic_message(&*payload));
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
