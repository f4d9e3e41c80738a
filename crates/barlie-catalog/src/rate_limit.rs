//! Rolling-window request quota for a catalog dispatcher.
//!
//! The quota resets entirely once `window` has elapsed since the window
//! started; it is not a sliding or leaky bucket. Only requests that complete
//! successfully are counted against the window, but a request holds a slot
//! from the moment it passes the pre-check so that concurrent callers sharing
//! one quota cannot overrun it.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::error::CatalogError;

/// Request budget shared by everything that dispatches through one client.
#[derive(Debug)]
pub struct RequestQuota {
    max_requests: u32,
    window: Duration,
    state: Mutex<QuotaWindow>,
}

#[derive(Debug)]
struct QuotaWindow {
    started_at: Instant,
    completed: u32,
    in_flight: u32,
    /// Bumped on every reset so permits from an older window are ignored.
    generation: u64,
}

impl QuotaWindow {
    fn roll_if_elapsed(&mut self, window: Duration) {
        if self.started_at.elapsed() >= window {
            tracing::debug!(
                completed = self.completed,
                "request quota window elapsed; resetting counter"
            );
            self.started_at = Instant::now();
            self.completed = 0;
            self.in_flight = 0;
            self.generation += 1;
        }
    }
}

impl RequestQuota {
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Mutex::new(QuotaWindow {
                started_at: Instant::now(),
                completed: 0,
                in_flight: 0,
                generation: 0,
            }),
        }
    }

    #[must_use]
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Reserves a slot for one request.
    ///
    /// The returned permit must be [`QuotaPermit::commit`]ted once the request
    /// succeeds; dropping it uncommitted releases the slot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RateLimitExceeded`] when the window's budget is
    /// already spent or reserved. `retry_after_secs` carries the time left in
    /// the current window, rounded up.
    pub fn try_acquire(&self) -> Result<QuotaPermit<'_>, CatalogError> {
        let mut state = self.lock();
        state.roll_if_elapsed(self.window);

        if state.completed.saturating_add(state.in_flight) >= self.max_requests {
            let remaining = self.window.saturating_sub(state.started_at.elapsed());
            let retry_after_secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
            tracing::warn!(
                max_requests = self.max_requests,
                completed = state.completed,
                in_flight = state.in_flight,
                retry_after_secs,
                "request quota exhausted"
            );
            return Err(CatalogError::RateLimitExceeded {
                retry_after_secs: Some(retry_after_secs),
            });
        }

        state.in_flight += 1;
        Ok(QuotaPermit {
            quota: self,
            generation: state.generation,
            committed: false,
        })
    }

    /// Requests completed in the current window.
    #[must_use]
    pub fn used(&self) -> u32 {
        let mut state = self.lock();
        state.roll_if_elapsed(self.window);
        state.completed
    }

    /// Requests that may still be started in the current window.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        let mut state = self.lock();
        state.roll_if_elapsed(self.window);
        self.max_requests
            .saturating_sub(state.completed.saturating_add(state.in_flight))
    }

    fn lock(&self) -> MutexGuard<'_, QuotaWindow> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(&self, generation: u64, completed: bool) {
        let mut state = self.lock();
        if state.generation != generation {
            return;
        }
        state.in_flight = state.in_flight.saturating_sub(1);
        if completed {
            state.completed += 1;
        }
    }
}

/// A reserved request slot. See [`RequestQuota::try_acquire`].
#[derive(Debug)]
#[must_use = "dropping a permit releases its slot without counting the request"]
pub struct QuotaPermit<'a> {
    quota: &'a RequestQuota,
    generation: u64,
    committed: bool,
}

impl QuotaPermit<'_> {
    /// Counts the request against the window.
    pub fn commit(mut self) {
        self.committed = true;
        self.quota.release(self.generation, true);
    }
}

impl Drop for QuotaPermit<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.quota.release(self.generation, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn committed_requests_exhaust_the_quota() {
        let quota = RequestQuota::new(2, Duration::from_secs(3600));
        quota.try_acquire().unwrap().commit();
        quota.try_acquire().unwrap().commit();

        let err = quota.try_acquire().unwrap_err();
        assert!(err.is_rate_limited());
        assert_eq!(quota.used(), 2);
        assert_eq!(quota.remaining(), 0);
    }

    #[test]
    fn exhausted_quota_reports_time_left_in_window() {
        let quota = RequestQuota::new(1, Duration::from_secs(3600));
        quota.try_acquire().unwrap().commit();
        match quota.try_acquire() {
            Err(CatalogError::RateLimitExceeded {
                retry_after_secs: Some(secs),
            }) => assert!(secs > 3590 && secs <= 3600, "got {secs}"),
            other => panic!("expected RateLimitExceeded, got {other:?}"),
        };
    }

    #[test]
    fn dropped_permit_releases_its_slot() {
        let quota = RequestQuota::new(1, Duration::from_secs(3600));
        {
            let _permit = quota.try_acquire().unwrap();
            assert_eq!(quota.remaining(), 0);
        }
        assert_eq!(quota.remaining(), 1);
        assert_eq!(quota.used(), 0);
    }

    #[test]
    fn in_flight_permits_count_toward_the_limit() {
        let quota = RequestQuota::new(2, Duration::from_secs(3600));
        let first = quota.try_acquire().unwrap();
        let second = quota.try_acquire().unwrap();
        assert!(quota.try_acquire().is_err());
        first.commit();
        drop(second);
        assert_eq!(quota.used(), 1);
        assert_eq!(quota.remaining(), 1);
    }

    #[test]
    fn window_elapsing_resets_the_counter() {
        let quota = RequestQuota::new(1, Duration::from_millis(40));
        quota.try_acquire().unwrap().commit();
        assert!(quota.try_acquire().is_err());

        std::thread::sleep(Duration::from_millis(60));

        let permit = quota.try_acquire().expect("quota should reset after window");
        permit.commit();
        assert_eq!(quota.used(), 1);
    }

    #[test]
    fn permit_from_previous_window_does_not_leak_into_next() {
        let quota = RequestQuota::new(1, Duration::from_millis(40));
        let stale = quota.try_acquire().unwrap();
        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(quota.remaining(), 1);
        stale.commit();
        assert_eq!(quota.used(), 0);
    }

    #[test]
    fn zero_quota_rejects_everything() {
        let quota = RequestQuota::new(0, Duration::from_secs(60));
        assert!(quota.try_acquire().is_err());
    }
}
