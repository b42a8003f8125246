// SPDX-License-Identifier: MPL-2.0
//! Scroll event sampling.
//!
//! Scroll reports arrive as fast as the user drags. The sampler accepts at
//! most one every `throttle`, remembers whether a report was dropped, and
//! tells when the scroll has been idle for `settle_delay`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ScrollSampler {
    throttle: Duration,
    settle_delay: Duration,
    last_sample_at: Option<Instant>,
    last_event_at: Option<Instant>,
    pending: bool,
}

impl ScrollSampler {
    #[must_use]
    pub fn new(throttle: Duration, settle_delay: Duration) -> Self {
        Self {
            throttle,
            settle_delay,
            last_sample_at: None,
            last_event_at: None,
            pending: false,
        }
    }

    /// Records a scroll report at `now`. Returns `true` when the report
    /// should be sampled, `false` when it falls inside the throttle window.
    pub fn record(&mut self, now: Instant) -> bool {
        self.last_event_at = Some(now);

        let accept = self
            .last_sample_at
            .is_none_or(|last| now.saturating_duration_since(last) >= self.throttle);

        if accept {
            self.last_sample_at = Some(now);
            self.pending = false;
        } else {
            self.pending = true;
        }
        accept
    }

    /// Whether a scroll is in progress and has not been settled yet.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.last_event_at.is_some()
    }

    /// Closes the current scroll if it has been idle long enough.
    ///
    /// Returns `None` while still scrolling (or when idle), otherwise
    /// `Some(dropped)` where `dropped` says the last report was throttled
    /// away and must be sampled now.
    pub fn take_settled(&mut self, now: Instant) -> Option<bool> {
        let last = self.last_event_at?;
        if now.saturating_duration_since(last) < self.settle_delay {
            return None;
        }

        let dropped = self.pending;
        self.last_event_at = None;
        self.pending = false;
        if dropped {
            self.last_sample_at = Some(now);
        }
        Some(dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THROTTLE: Duration = Duration::from_millis(16);
    const SETTLE: Duration = Duration::from_millis(80);

    fn ms(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn first_report_is_sampled() {
        let mut sampler = ScrollSampler::new(THROTTLE, SETTLE);
        assert!(sampler.record(Instant::now()));
        assert!(sampler.is_scrolling());
    }

    #[test]
    fn reports_inside_throttle_window_are_dropped() {
        let start = Instant::now();
        let mut sampler = ScrollSampler::new(THROTTLE, SETTLE);

        assert!(sampler.record(start));
        assert!(!sampler.record(ms(start, 5)));
        assert!(!sampler.record(ms(start, 15)));
        assert!(sampler.record(ms(start, 16)));
    }

    #[test]
    fn settle_waits_for_idle_delay() {
        let start = Instant::now();
        let mut sampler = ScrollSampler::new(THROTTLE, SETTLE);
        sampler.record(start);

        assert_eq!(sampler.take_settled(ms(start, 40)), None);
        assert_eq!(sampler.take_settled(ms(start, 80)), Some(false));
        assert!(!sampler.is_scrolling());
        assert_eq!(sampler.take_settled(ms(start, 200)), None);
    }

    #[test]
    fn settle_reports_dropped_final_sample() {
        let start = Instant::now();
        let mut sampler = ScrollSampler::new(THROTTLE, SETTLE);
        sampler.record(start);
        sampler.record(ms(start, 4));

        assert_eq!(sampler.take_settled(ms(start, 100)), Some(true));
    }
}
