//! Cancellable repeating tick for the session clock.
//!
//! One ticker belongs to at most one session. A host replacing its
//! session must cancel (or drop) the old ticker before installing the
//! new one, so a stale tick can never reach a replaced session. The
//! session's own `tick()` guard is the second line of defense.

use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::session::GameSession;

/// Interval used by [`Ticker::every_second`].
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// Cancellation poll granularity; keeps cancel() prompt without busy-waiting.
const POLL_SLICE: Duration = Duration::from_millis(25);

/// A background thread invoking a callback at a fixed period until
/// cancelled. Cancelling joins the thread, so after `cancel()` returns
/// no further callback will run. Dropping the ticker cancels it.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start a ticker firing every `period`.
    pub fn start<F>(period: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::spawn(move || loop {
            let mut slept = Duration::ZERO;
            while slept < period {
                if thread_stop.load(Ordering::Relaxed) {
                    return;
                }
                let slice = POLL_SLICE.min(period - slept);
                thread::sleep(slice);
                slept += slice;
            }
            if thread_stop.load(Ordering::Relaxed) {
                return;
            }
            callback();
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Start a one-second ticker.
    pub fn every_second<F>(callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::start(TICK_PERIOD, callback)
    }

    /// Stop the ticker and wait for the tick thread to exit.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("ticker cancelled");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Drive a shared session's clock once per second.
///
/// The returned ticker must be dropped (or cancelled) before the host
/// replaces the session behind the mutex with a different game.
pub fn spawn_session_clock(session: Arc<Mutex<GameSession>>) -> Ticker {
    Ticker::every_second(move || {
        if let Ok(mut session) = session.lock() {
            session.tick();
        }
    })
}
