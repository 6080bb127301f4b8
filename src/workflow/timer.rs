use std::time::{Duration, Instant};

/// Fixed delays that drive a submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Wait between the submit intent and reporting success.
    pub settle_delay: Duration,
    /// How long the success indicator stays up before the form resets.
    pub success_window: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(1000),
            success_window: Duration::from_millis(5000),
        }
    }
}

/// A state change waiting on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// End of the settle delay: stop submitting, show success.
    Settle,
    /// End of the success window: hide success, reset the fields.
    Dismiss,
}

/// A scheduled [`Transition`], stamped with the generation that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    pub due: Instant,
    pub transition: Transition,
    generation: u64,
}

/// Deadline queue owned by a single form instance.
///
/// [`cancel_all`](Self::cancel_all) bumps the generation; anything scheduled
/// before that is stale and is dropped instead of being returned.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Deadline>,
    generation: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `transition` to fire at `due`.
    pub fn schedule(&mut self, due: Instant, transition: Transition) {
        self.pending.push(Deadline {
            due,
            transition,
            generation: self.generation,
        });
    }

    /// Invalidates and drops every deadline scheduled so far.
    pub fn cancel_all(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending.clear();
    }

    /// Earliest live deadline, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.live().map(|d| d.due).min()
    }

    /// Number of live deadlines.
    pub fn len(&self) -> usize {
        self.live().count()
    }

    /// Returns `true` if nothing live is scheduled.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns the earliest live deadline due at or before `now`.
    ///
    /// Stale deadlines are discarded along the way. Ties keep schedule order.
    pub fn pop_due(&mut self, now: Instant) -> Option<Deadline> {
        let generation = self.generation;
        self.pending.retain(|d| d.generation == generation);

        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, d)| d.due <= now)
            .min_by_key(|(i, d)| (d.due, *i))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index))
    }

    fn live(&self) -> impl Iterator<Item = &Deadline> {
        self.pending
            .iter()
            .filter(move |d| d.generation == self.generation)
    }
}
