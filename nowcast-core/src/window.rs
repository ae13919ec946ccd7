//! Time-Pruned Observation Window
//!
//! ## Overview
//!
//! The engine keeps every sample of the last `trend_window_s` seconds, oldest
//! first. Unlike a fixed-capacity ring buffer the bound is a time span: a
//! logger sampling every five minutes keeps 37 samples of a 3-hour window, one
//! sampling every minute keeps 181.
//!
//! ## Pruning Rule
//!
//! After each push, every sample strictly older than
//! `pushed.timestamp_s - window_s` is dropped:
//!
//! ```text
//! window_s = 3h, push at t = 4h
//!
//!   t:  0h   1h   2h   3h   4h
//!       x    ●    ●    ●    ●      x = dropped (0h < 4h - 3h)
//!            └── cutoff = 1h, kept (not strictly older)
//! ```
//!
//! The cutoff is relative to the sample just pushed, never to wall-clock time.
//! Replaying a recorded session therefore reproduces the same windows, and a
//! long pause between pushes evicts nothing until the next sample arrives.
//!
//! The retained sequence is rebuilt by filtering on every push. The window is
//! small, so there is no amortized bookkeeping.
//!
//! ## Thread Safety
//!
//! This type is not thread-safe. It is owned by a single engine and only
//! mutated through it.

use alloc::vec::Vec;

use crate::sample::{Sample, Timestamp};

/// Samples of the last `window_s` seconds, oldest to newest
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationWindow {
    samples: Vec<Sample>,
    window_s: f64,
}

impl ObservationWindow {
    /// Empty window spanning `window_s` seconds
    pub fn new(window_s: f64) -> Self {
        Self {
            samples: Vec::new(),
            window_s,
        }
    }

    /// Window span (s)
    pub fn window_s(&self) -> f64 {
        self.window_s
    }

    /// Append a sample and drop everything older than the window behind it
    pub fn push(&mut self, sample: Sample) {
        let cutoff = sample.timestamp_s - self.window_s;
        self.samples.push(sample);

        let before = self.samples.len();
        self.samples.retain(|s| s.timestamp_s >= cutoff);

        let dropped = before - self.samples.len();
        if dropped > 0 {
            log_trace!("Pruned {} samples older than t={}", dropped, cutoff);
        }
    }

    /// Number of retained samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no sample is retained
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest retained sample
    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Most recent sample
    pub fn newest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Oldest and newest sample, when at least two are retained
    pub fn endpoints(&self) -> Option<(&Sample, &Sample)> {
        match self.samples.as_slice() {
            [first, .., last] => Some((first, last)),
            _ => None,
        }
    }

    /// Time between the oldest and newest sample (s)
    pub fn span_s(&self) -> Timestamp {
        self.endpoints()
            .map_or(0.0, |(first, last)| last.timestamp_s - first.timestamp_s)
    }

    /// Iterate samples from oldest to newest
    pub fn iter(&self) -> core::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Retained samples, oldest first
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Drop every sample
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl<'a> IntoIterator for &'a ObservationWindow {
    type Item = &'a Sample;
    type IntoIter = core::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Reading;

    const HOUR: f64 = 3600.0;

    fn sample_at(t: f64) -> Sample {
        Sample::new(t, Reading::new(10.0, 5.0, 70.0, 1000.0, 900.0))
    }

    #[test]
    fn empty_window() {
        let window = ObservationWindow::new(3.0 * HOUR);
        assert!(window.is_empty());
        assert!(window.newest().is_none());
        assert!(window.endpoints().is_none());
        assert_eq!(window.span_s(), 0.0);
    }

    #[test]
    fn single_sample_has_no_endpoints() {
        let mut window = ObservationWindow::new(3.0 * HOUR);
        window.push(sample_at(0.0));
        assert_eq!(window.len(), 1);
        assert!(window.endpoints().is_none());
    }

    #[test]
    fn prunes_strictly_older_samples() {
        let mut window = ObservationWindow::new(3.0 * HOUR);
        for h in 0..=4 {
            window.push(sample_at(h as f64 * HOUR));
        }

        // 0h dropped, 1h sits exactly on the cutoff and stays
        let times: Vec<f64> = window.iter().map(|s| s.timestamp_s).collect();
        assert_eq!(times, vec![HOUR, 2.0 * HOUR, 3.0 * HOUR, 4.0 * HOUR]);
        assert_eq!(window.span_s(), 3.0 * HOUR);
    }

    #[test]
    fn pause_does_not_evict_until_next_push() {
        let mut window = ObservationWindow::new(HOUR);
        window.push(sample_at(0.0));
        window.push(sample_at(600.0));
        assert_eq!(window.len(), 2);

        // Ten hours later everything older goes at once
        window.push(sample_at(10.0 * HOUR));
        assert_eq!(window.len(), 1);
        assert_eq!(window.oldest().map(|s| s.timestamp_s), Some(10.0 * HOUR));
    }

    #[test]
    fn out_of_order_sample_prunes_relative_to_itself() {
        let mut window = ObservationWindow::new(HOUR);
        window.push(sample_at(5.0 * HOUR));
        // Older than the window behind the previous sample, but the cutoff is
        // taken from this one, so both stay
        window.push(sample_at(4.5 * HOUR));
        assert_eq!(window.len(), 2);
        assert_eq!(window.newest().map(|s| s.timestamp_s), Some(4.5 * HOUR));
    }

    #[test]
    fn clear_empties() {
        let mut window = ObservationWindow::new(HOUR);
        window.push(sample_at(0.0));
        window.clear();
        assert!(window.is_empty());
    }
}
