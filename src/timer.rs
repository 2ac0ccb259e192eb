//! Turn countdown shared between the game loop and a background tick task.
//!
//! One timer runs for a whole game. Accepting a word only refills the shared
//! counter; the ticking task keeps going until the counter hits zero, at which
//! point it flags time-up and exits for good.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

/// Remaining time and the time-up flag for one game.
#[derive(Debug)]
pub struct TurnClock {
    budget: u32,
    time_left: AtomicI64,
    time_is_up: AtomicBool,
    expired_tx: watch::Sender<bool>,
}

impl TurnClock {
    pub fn new(budget: u32) -> Self {
        let (expired_tx, _) = watch::channel(false);
        Self {
            budget,
            time_left: AtomicI64::new(i64::from(budget)),
            time_is_up: AtomicBool::new(false),
            expired_tx,
        }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Seconds left in the current turn. Never negative.
    pub fn time_left(&self) -> i64 {
        self.time_left.load(Ordering::SeqCst).max(0)
    }

    pub fn is_time_up(&self) -> bool {
        self.time_is_up.load(Ordering::SeqCst)
    }

    /// Refill the counter after an accepted word. Does not revive an expired clock.
    pub fn reset(&self) {
        self.time_left.store(i64::from(self.budget), Ordering::SeqCst);
    }

    /// Take one second off the counter.
    ///
    /// Returns `false` once the clock has expired, including on the tick that
    /// expires it. Ticks after expiry change nothing.
    pub fn tick(&self) -> bool {
        if self.is_time_up() {
            return false;
        }

        let left = self.time_left.fetch_sub(1, Ordering::SeqCst) - 1;
        if left <= 0 {
            self.time_is_up.store(true, Ordering::SeqCst);
            self.expired_tx.send_replace(true);
            return false;
        }
        true
    }

    /// Resolves once time is up; immediately if it already is.
    pub async fn expired(&self) {
        let mut rx = self.expired_tx.subscribe();
        // The sender lives in `self`, so the channel cannot close under us
        let _ = rx.wait_for(|up| *up).await;
    }
}

/// Handle to the background tick task.
///
/// Stopping is idempotent, and dropping the handle stops the task too.
#[derive(Debug)]
pub struct TurnTimer {
    handle: JoinHandle<()>,
}

impl TurnTimer {
    /// Spawn the tick task. The first tick lands one `interval` from now.
    pub fn start(clock: Arc<TurnClock>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            loop {
                ticker.tick().await;
                if !clock.tick() {
                    debug!("Turn clock expired, timer stopping");
                    break;
                }
            }
        });

        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TurnTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== TurnClock Tests ====================

    #[test]
    fn test_new_clock_is_full() {
        let clock = TurnClock::new(15);
        assert_eq!(clock.budget(), 15);
        assert_eq!(clock.time_left(), 15);
        assert!(!clock.is_time_up());
    }

    #[test]
    fn test_tick_decrements_by_one() {
        let clock = TurnClock::new(15);
        for expected in (1..15).rev() {
            assert!(clock.tick());
            assert_eq!(clock.time_left(), expected);
            assert!(!clock.is_time_up());
        }
    }

    #[test]
    fn test_tick_to_zero_sets_time_up() {
        let clock = TurnClock::new(2);
        assert!(clock.tick());
        assert!(!clock.tick());
        assert_eq!(clock.time_left(), 0);
        assert!(clock.is_time_up());
    }

    #[test]
    fn test_tick_after_expiry_is_noop() {
        let clock = TurnClock::new(1);
        assert!(!clock.tick());
        assert!(!clock.tick());
        assert!(!clock.tick());
        assert_eq!(clock.time_left(), 0);
        assert!(clock.is_time_up());
    }

    #[test]
    fn test_reset_refills_counter() {
        let clock = TurnClock::new(5);
        clock.tick();
        clock.tick();
        assert_eq!(clock.time_left(), 3);
        clock.reset();
        assert_eq!(clock.time_left(), 5);
    }

    #[test]
    fn test_reset_does_not_revive_expired_clock() {
        let clock = TurnClock::new(1);
        clock.tick();
        clock.reset();
        assert!(clock.is_time_up());
        assert!(!clock.tick());
    }

    // ==================== TurnTimer Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_timer_expires_after_budget() {
        let clock = Arc::new(TurnClock::new(3));
        let started = Instant::now();
        let timer = TurnTimer::start(Arc::clone(&clock), Duration::from_secs(1));

        clock.expired().await;

        assert!(clock.is_time_up());
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        tokio::task::yield_now().await;
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_once_per_interval() {
        let clock = Arc::new(TurnClock::new(15));
        let _timer = TurnTimer::start(Arc::clone(&clock), Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(4500)).await;
        assert_eq!(clock.time_left(), 11);
        assert!(!clock.is_time_up());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_keeps_same_timer_running() {
        let clock = Arc::new(TurnClock::new(3));
        let _timer = TurnTimer::start(Arc::clone(&clock), Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(clock.time_left(), 1);
        clock.reset();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(clock.time_left(), 1);
        assert!(!clock.is_time_up());

        clock.expired().await;
        assert!(clock.is_time_up());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_timer_never_ticks() {
        let clock = Arc::new(TurnClock::new(3));
        let timer = TurnTimer::start(Arc::clone(&clock), Duration::from_secs(1));

        timer.stop();
        timer.stop();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(clock.time_left(), 3);
        assert!(!clock.is_time_up());
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_timer_never_ticks() {
        let clock = Arc::new(TurnClock::new(3));
        drop(TurnTimer::start(Arc::clone(&clock), Duration::from_secs(1)));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(clock.time_left(), 3);
    }

    #[tokio::test]
    async fn test_expired_resolves_immediately_when_already_up() {
        let clock = TurnClock::new(1);
        clock.tick();
        clock.expired().await;
        assert!(clock.is_time_up());
    }
}
