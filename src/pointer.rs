//! Leading-edge throttled pointer sampling for the cursor follower.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use thiserror::Error;

/// ~60Hz
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A cooldown release task that could not be handed to the timer.
#[derive(Error, Debug)]
#[error("could not schedule task: {0}")]
pub struct ScheduleError(pub String);

/// Runs a task once after a delay.
///
/// The tracker only needs fire-and-forget timers: a task that outlives its
/// tracker checks the liveness flag and does nothing. On `Err` the task has
/// been dropped and will never run.
pub trait Scheduler {
    fn schedule_once(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce() + Send + 'static>,
    ) -> Result<(), ScheduleError>;
}

#[derive(Debug)]
struct ThrottleState {
    latest: PointerPosition,
    cooling: bool,
    live: bool,
}

/// Accepts the first pointer event of a window and drops the rest.
///
/// Dropped events are gone: there is no queue and no trailing update when the
/// window closes. The next event after the cooldown is accepted immediately.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    window: Duration,
    state: Arc<Mutex<ThrottleState>>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE)
    }
}

impl PointerTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: Arc::new(Mutex::new(ThrottleState {
                latest: PointerPosition::default(),
                cooling: false,
                live: true,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ThrottleState> {
        lock_state(&self.state)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Offers a sample. Returns it back if it was accepted.
    ///
    /// If the release task cannot be scheduled the sample is still accepted,
    /// but no cooldown is opened.
    pub fn on_move<S>(&self, position: PointerPosition, scheduler: &S) -> Option<PointerPosition>
    where
        S: Scheduler + ?Sized,
    {
        {
            let mut state = self.lock();
            if !state.live || state.cooling {
                log::trace!("pointer sample dropped: {position:?}");
                return None;
            }
            state.latest = position;
            state.cooling = true;
        }

        let state = Arc::clone(&self.state);
        let scheduled = scheduler.schedule_once(
            self.window,
            Box::new(move || {
                let mut state = lock_state(&state);
                if state.live {
                    state.cooling = false;
                }
            }),
        );
        if let Err(e) = scheduled {
            log::warn!("pointer cooldown skipped: {e}");
            let mut state = self.lock();
            if state.live {
                state.cooling = false;
            }
        }
        Some(position)
    }

    /// Latest accepted sample, origin before the first one.
    pub fn latest(&self) -> PointerPosition {
        self.lock().latest
    }

    pub fn is_cooling(&self) -> bool {
        self.lock().cooling
    }

    pub fn is_live(&self) -> bool {
        self.lock().live
    }

    /// Tears the tracker down. Later events are dropped and outstanding
    /// cooldown tasks become no-ops.
    pub fn dispose(&self) {
        self.lock().live = false;
    }
}

// A panicking scheduler task must not wedge the cursor forever.
fn lock_state(state: &Mutex<ThrottleState>) -> MutexGuard<'_, ThrottleState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    type Task = Box<dyn FnOnce() + Send + 'static>;

    /// Virtual clock. Tasks run when time is advanced past their deadline.
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<Duration>,
        pending: RefCell<Vec<(Duration, Task)>>,
    }

    impl ManualScheduler {
        fn advance_to(&self, millis: u64) {
            let target = Duration::from_millis(millis);
            loop {
                let next = {
                    let mut pending = self.pending.borrow_mut();
                    let due = pending
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _))| *at <= target)
                        .min_by_key(|(_, (at, _))| *at)
                        .map(|(i, _)| i);
                    due.map(|i| pending.remove(i))
                };
                match next {
                    Some((at, task)) => {
                        self.now.set(at);
                        task();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }

        fn pending(&self) -> usize {
            self.pending.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule_once(&self, delay: Duration, task: Task) -> Result<(), ScheduleError> {
            let at = self.now.get() + delay;
            self.pending.borrow_mut().push((at, task));
            Ok(())
        }
    }

    /// Timer that refuses every task.
    struct RejectingScheduler;

    impl Scheduler for RejectingScheduler {
        fn schedule_once(&self, _delay: Duration, _task: Task) -> Result<(), ScheduleError> {
            Err(ScheduleError("timer unavailable".into()))
        }
    }

    fn feed(tracker: &PointerTracker, clock: &ManualScheduler, events: &[u64]) -> Vec<u64> {
        events
            .iter()
            .filter(|&&t| {
                clock.advance_to(t);
                let pos = PointerPosition::new(t as i32, t as i32 * 2);
                tracker.on_move(pos, clock).is_some()
            })
            .copied()
            .collect()
    }

    #[test]
    fn test_leading_edge() {
        let tracker = PointerTracker::default();
        let clock = ManualScheduler::default();

        let accepted = feed(&tracker, &clock, &[0, 5, 10, 20, 30]);
        assert_eq!(accepted, vec![0, 20]);
        assert_eq!(tracker.latest(), PointerPosition::new(20, 40));
        assert!(tracker.is_cooling());
    }

    #[test]
    fn test_no_trailing_update() {
        let tracker = PointerTracker::default();
        let clock = ManualScheduler::default();

        feed(&tracker, &clock, &[0, 4, 8, 12]);
        clock.advance_to(100);
        // the dropped t=12 sample never shows up
        assert_eq!(tracker.latest(), PointerPosition::new(0, 0));
        assert!(!tracker.is_cooling());
    }

    #[test]
    fn test_accepts_immediately_after_quiet_period() {
        let tracker = PointerTracker::default();
        let clock = ManualScheduler::default();

        let accepted = feed(&tracker, &clock, &[0, 16, 31, 32, 100]);
        assert_eq!(accepted, vec![0, 16, 32, 100]);
    }

    #[test]
    fn test_window_boundary() {
        let tracker = PointerTracker::new(Duration::from_millis(10));
        let clock = ManualScheduler::default();

        let accepted = feed(&tracker, &clock, &[3, 12, 13, 23]);
        assert_eq!(accepted, vec![3, 13, 23]);
        assert_eq!(tracker.window(), Duration::from_millis(10));
    }

    #[test]
    fn test_dispose_makes_pending_task_inert() {
        let tracker = PointerTracker::default();
        let clock = ManualScheduler::default();

        assert!(tracker.on_move(PointerPosition::new(1, 1), &clock).is_some());
        assert_eq!(clock.pending(), 1);
        tracker.dispose();
        clock.advance_to(50);

        assert_eq!(clock.pending(), 0);
        assert!(!tracker.is_live());
        // still cooling: the task ran against a disposed tracker
        assert!(tracker.is_cooling());
        assert!(tracker.on_move(PointerPosition::new(2, 2), &clock).is_none());
        assert_eq!(tracker.latest(), PointerPosition::new(1, 1));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = PointerTracker::default();
        let handle = tracker.clone();
        let clock = ManualScheduler::default();

        assert!(tracker.on_move(PointerPosition::new(7, 9), &clock).is_some());
        assert!(handle.on_move(PointerPosition::new(8, 9), &clock).is_none());
        assert_eq!(handle.latest(), PointerPosition::new(7, 9));
    }

    #[test]
    fn test_unscheduled_cooldown_does_not_stall() {
        let tracker = PointerTracker::default();

        assert!(tracker.on_move(PointerPosition::new(1, 1), &RejectingScheduler).is_some());
        assert!(!tracker.is_cooling());
        assert!(tracker.on_move(PointerPosition::new(2, 3), &RejectingScheduler).is_some());
        assert_eq!(tracker.latest(), PointerPosition::new(2, 3));

        // a working timer takes over again
        let clock = ManualScheduler::default();
        assert!(tracker.on_move(PointerPosition::new(4, 4), &clock).is_some());
        assert!(tracker.on_move(PointerPosition::new(5, 5), &clock).is_none());
        clock.advance_to(16);
        assert!(tracker.on_move(PointerPosition::new(6, 6), &clock).is_some());
    }

    #[test]
    fn test_unscheduled_cooldown_after_dispose() {
        let tracker = PointerTracker::default();
        tracker.dispose();
        assert!(tracker.on_move(PointerPosition::new(1, 1), &RejectingScheduler).is_none());
        assert_eq!(tracker.latest(), PointerPosition::default());
    }
}
