use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies one scheduled ticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickHandle(pub u64);

/// A tick event pushed by the host into an animator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Ticker that fired.
    pub handle: TickHandle,
    /// Time since the previous tick of this ticker.
    pub elapsed: Duration,
}

/// Host-side timer service.
///
/// The animator only asks for a repeating ticker and cancels it; delivering [`Tick`]s back to
/// the animator is the host's job. This keeps the stepping logic independent of any event loop.
pub trait Scheduler {
    /// Start a repeating ticker firing every `interval`.
    fn schedule_tick(&mut self, interval: Duration) -> TickHandle;
    /// Stop a ticker. Unknown or already-cancelled handles are ignored.
    fn cancel(&mut self, handle: TickHandle);
}

/// Scheduler driven explicitly by the caller, one frame at a time.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: BTreeMap<TickHandle, Duration>,
}

impl ManualScheduler {
    /// Scheduler with no tickers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` when `handle` is scheduled and not cancelled.
    pub fn is_active(&self, handle: TickHandle) -> bool {
        self.active.contains_key(&handle)
    }

    /// Number of live tickers.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// One tick per live ticker, each carrying its own interval as elapsed time.
    pub fn due_ticks(&self) -> Vec<Tick> {
        self.active
            .iter()
            .map(|(&handle, &elapsed)| Tick { handle, elapsed })
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_tick(&mut self, interval: Duration) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.active.insert(handle, interval);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.active.remove(&handle);
    }
}
