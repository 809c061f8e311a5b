// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot debouncing.

use core::fmt;
use core::time::Duration;

/// Delay before a persisted snapshot is written after the last change.
pub const PERSIST_DELAY: Duration = Duration::from_millis(300);

/// Delay before typed text is committed as an edit.
pub const INPUT_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending<T> {
    deadline: Duration,
    value: T,
}

/// A single-slot debouncer.
///
/// At most one value is pending. Scheduling a new value replaces the pending
/// one and restarts the delay, so only the last value of a burst is ever
/// released. Times are host timestamps measured from an arbitrary epoch (see
/// [`Clock`](crate::Clock)); the debouncer never reads a clock itself.
///
/// ```rust
/// use core::time::Duration;
/// use tailor_timing::Debouncer;
///
/// let ms = Duration::from_millis;
/// let mut d = Debouncer::new(ms(300));
///
/// d.schedule(ms(0), "a");
/// d.schedule(ms(200), "b"); // replaces "a", deadline moves to 500ms
/// assert_eq!(d.poll(ms(400)), None);
/// assert_eq!(d.poll(ms(500)), Some("b"));
/// assert_eq!(d.poll(ms(900)), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Creates an idle debouncer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay for values scheduled from now on.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Schedules `value` to be released `delay` after `now`.
    ///
    /// Returns the value it displaced, if any.
    pub fn schedule(&mut self, now: Duration, value: T) -> Option<T> {
        let deadline = now.saturating_add(self.delay);
        self.pending
            .replace(Pending { deadline, value })
            .map(|p| p.value)
    }

    /// Releases the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.is_due(now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Releases the pending value immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drops the pending value without releasing it.
    ///
    /// Returns `true` if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns the pending value's deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Returns the pending value without releasing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    /// Returns `true` if a value is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` if a value is pending and its deadline is at or before `now`.
    #[must_use]
    pub fn is_due(&self, now: Duration) -> bool {
        self.pending.as_ref().is_some_and(|p| p.deadline <= now)
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("deadline", &self.deadline())
            .finish_non_exhaustive()
    }
}

/// A debouncer bound to the callback that consumes released values.
///
/// Dropping a `Debounced` discards any pending value without invoking the
/// callback, so tearing down the owner never produces a stray late call.
///
/// The callback is fixed at construction, so it cannot borrow the owner of
/// the `Debounced` mutably. Stores that apply released values to themselves
/// poll a [`Debouncer`] directly.
///
/// ```rust
/// use core::time::Duration;
/// use std::cell::RefCell;
/// use tailor_timing::Debounced;
///
/// let ms = Duration::from_millis;
/// let fired = RefCell::new(Vec::new());
/// {
///     let mut d = Debounced::new(ms(100), |v: u32| fired.borrow_mut().push(v));
///     d.schedule(ms(0), 1);
///     d.schedule(ms(50), 2);
///     assert!(d.poll(ms(150)));
///     d.schedule(ms(200), 3);
///     // dropped with 3 pending
/// }
/// assert_eq!(*fired.borrow(), [2]);
/// ```
pub struct Debounced<T, F: FnMut(T)> {
    inner: Debouncer<T>,
    callback: F,
}

impl<T, F: FnMut(T)> Debounced<T, F> {
    /// Creates an idle debouncer that hands released values to `callback`.
    pub fn new(delay: Duration, callback: F) -> Self {
        Self {
            inner: Debouncer::new(delay),
            callback,
        }
    }

    /// Schedules `value`, replacing any pending value.
    pub fn schedule(&mut self, now: Duration, value: T) {
        self.inner.schedule(now, value);
    }

    /// Invokes the callback if the pending value is due.
    ///
    /// Returns `true` if the callback ran.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.inner.poll(now) {
            Some(value) => {
                (self.callback)(value);
                true
            }
            None => false,
        }
    }

    /// Invokes the callback with the pending value now, if there is one.
    pub fn flush(&mut self) -> bool {
        match self.inner.flush() {
            Some(value) => {
                (self.callback)(value);
                true
            }
            None => false,
        }
    }

    /// Drops the pending value without invoking the callback.
    pub fn cancel(&mut self) -> bool {
        self.inner.cancel()
    }

    /// Returns the underlying debouncer.
    #[must_use]
    pub fn debouncer(&self) -> &Debouncer<T> {
        &self.inner
    }
}

impl<T, F: FnMut(T)> fmt::Debug for Debounced<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<T, F: FnMut(T)> Drop for Debounced<T, F> {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn schedule_returns_displaced_value() {
        let mut d = Debouncer::new(ms(10));
        assert_eq!(d.schedule(ms(0), 1), None);
        assert_eq!(d.schedule(ms(5), 2), Some(1));
        assert_eq!(d.peek(), Some(&2));
        assert_eq!(d.deadline(), Some(ms(15)));
    }

    #[test]
    fn deadline_is_inclusive() {
        let mut d = Debouncer::new(ms(10));
        d.schedule(ms(0), ());
        assert!(!d.is_due(ms(9)));
        assert!(d.is_due(ms(10)));
        assert_eq!(d.poll(ms(10)), Some(()));
        assert!(!d.is_pending());
    }

    #[test]
    fn flush_and_cancel_empty_the_slot() {
        let mut d = Debouncer::new(ms(10));
        assert_eq!(d.flush(), None::<u8>);
        assert!(!d.cancel());

        d.schedule(ms(0), 7_u8);
        assert_eq!(d.flush(), Some(7));
        d.schedule(ms(0), 8);
        assert!(d.cancel());
        assert_eq!(d.poll(ms(100)), None);
    }

    #[test]
    fn far_future_deadline_saturates() {
        let mut d = Debouncer::new(Duration::MAX);
        d.schedule(ms(1), 'x');
        assert_eq!(d.deadline(), Some(Duration::MAX));
        assert!(!d.is_due(ms(1_000_000)));
    }

    #[test]
    fn set_delay_applies_to_next_schedule() {
        let mut d = Debouncer::new(ms(10));
        d.schedule(ms(0), 1);
        d.set_delay(ms(50));
        assert_eq!(d.deadline(), Some(ms(10)));
        d.schedule(ms(0), 2);
        assert_eq!(d.deadline(), Some(ms(50)));
        assert_eq!(d.delay(), ms(50));
    }
}
