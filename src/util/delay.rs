//! Screen-scoped one-shot and repeating timers.
//!
//! DESIGN
//! ======
//! Every timer is owned by the screen that started it: [`screen_alive`]
//! registers an `on_cleanup` that cancels the flag when the screen
//! unmounts, so a pending timer can never run its action against a screen
//! that is no longer current. The navigator's stale-event guard backs this
//! up at the state-machine level.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation handle scoped to the lifetime of one mounted screen.
/// Clones share the underlying flag.
#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl AliveFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// An [`AliveFlag`] cancelled automatically when the calling screen
/// unmounts.
#[must_use]
pub fn screen_alive() -> AliveFlag {
    let flag = AliveFlag::new();
    let on_unmount = flag.clone();
    leptos::prelude::on_cleanup(move || on_unmount.cancel());
    flag
}

/// Run `action` once after `delay_ms`, unless the flag is cancelled first.
pub fn run_after(flag: &AliveFlag, delay_ms: u32, action: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        let flag = flag.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms)))
                .await;
            if flag.is_alive() {
                action();
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (flag, delay_ms, action);
    }
}

/// Run `action` every `period_ms` until the flag is cancelled.
pub fn run_every(flag: &AliveFlag, period_ms: u32, action: impl Fn() + 'static) {
    #[cfg(feature = "csr")]
    {
        let flag = flag.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(period_ms)))
                    .await;
                if !flag.is_alive() {
                    break;
                }
                action();
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (flag, period_ms, action);
    }
}

/// Next index when cycling through `len` rotating-copy entries.
#[must_use]
pub fn cycle_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}
