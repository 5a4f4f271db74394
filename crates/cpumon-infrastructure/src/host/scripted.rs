//! Scripted time source
//!
//! Replays a fixed sequence of readings in call order. Used to drive the
//! sampler deterministically, and to replay captured counters.

use cpumon_domain::error::{Error, Result};
use cpumon_domain::ports::HostTimeSource;
use cpumon_domain::value_objects::TimeSnapshot;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Host time source that replays queued readings
#[derive(Debug)]
pub struct ScriptedTimeSource {
    steps: Mutex<VecDeque<std::result::Result<TimeSnapshot, String>>>,
    processors: AtomicUsize,
    reads: AtomicUsize,
}

impl ScriptedTimeSource {
    /// Source that returns `snapshots` in order
    pub fn new<I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = TimeSnapshot>,
    {
        Self {
            steps: Mutex::new(snapshots.into_iter().map(Ok).collect()),
            processors: AtomicUsize::new(1),
            reads: AtomicUsize::new(0),
        }
    }

    /// Report `count` processors (0 simulates an unknown count)
    #[must_use]
    pub fn with_processor_count(self, count: usize) -> Self {
        self.processors.store(count, Ordering::SeqCst);
        self
    }

    /// Queue another reading
    pub fn push(&self, snapshot: TimeSnapshot) {
        self.lock().push_back(Ok(snapshot));
    }

    /// Queue a failed reading
    pub fn push_failure<S: Into<String>>(&self, reason: S) {
        self.lock().push_back(Err(reason.into()));
    }

    /// Number of readings taken so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<std::result::Result<TimeSnapshot, String>>> {
        self.steps.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HostTimeSource for ScriptedTimeSource {
    fn read_processor_times(&self) -> Result<TimeSnapshot> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.lock().pop_front() {
            Some(Ok(snapshot)) => Ok(snapshot),
            Some(Err(reason)) => Err(Error::host_time(reason)),
            None => Err(Error::host_time("scripted readings exhausted")),
        }
    }

    fn processor_count(&self) -> usize {
        self.processors.load(Ordering::SeqCst)
    }
}
