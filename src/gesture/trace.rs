//! Rolling window of recent pointer samples

use std::collections::VecDeque;

use glam::Vec3;

/// Default number of samples kept in the trace window
pub const DEFAULT_TRACE_CAPACITY: usize = 20;

/// Fixed-capacity FIFO of (position, time delta) samples
///
/// Positions and time deltas are stored side by side and always have the same
/// length. Pushing past capacity evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct TraceBuffer {
    positions: VecDeque<Vec3>,
    time_deltas: VecDeque<f32>,
    capacity: usize,
}

impl TraceBuffer {
    /// Creates an empty buffer holding at most `capacity` samples
    ///
    /// A capacity of zero is bumped to one so the newest sample is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            positions: VecDeque::with_capacity(capacity + 1),
            time_deltas: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Drops every recorded sample
    pub fn clear(&mut self) {
        self.positions.clear();
        self.time_deltas.clear();
    }

    /// Records a sample, evicting the oldest one when over capacity
    pub fn push(&mut self, position: Vec3, time_delta: f32) {
        self.positions.push_back(position);
        self.time_deltas.push_back(time_delta);

        while self.positions.len() > self.capacity {
            self.positions.pop_front();
            self.time_deltas.pop_front();
        }
    }

    /// Sum of all recorded time deltas, in seconds
    pub fn total_elapsed(&self) -> f32 {
        self.time_deltas.iter().sum()
    }

    /// Displacement between two samples of the window
    ///
    /// `start_offset` counts from the oldest sample, `end_offset` counts back
    /// from the newest one. Out-of-range indices are clamped and swapped when
    /// reversed, so any pair of offsets yields a vector. An empty or
    /// single-sample buffer yields zero.
    pub fn vector(&self, start_offset: isize, end_offset: isize) -> Vec3 {
        let len = self.positions.len() as isize;
        if len == 0 {
            return Vec3::ZERO;
        }
        let last = len - 1;

        let mut start = start_offset;
        let mut end = last - end_offset;
        if start < 0 {
            start = 0;
        }
        if end < 0 {
            end = last;
        }
        start = start.min(last);
        end = end.min(last);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        self.positions[end as usize] - self.positions[start as usize]
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Maximum number of samples kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recorded positions, oldest first
    pub fn positions(&self) -> impl Iterator<Item = &Vec3> {
        self.positions.iter()
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRACE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_line(count: usize) -> TraceBuffer {
        let mut trace = TraceBuffer::default();
        for i in 0..count {
            trace.push(Vec3::new(i as f32, 0.0, 0.0), 0.016);
        }
        trace
    }

    #[test]
    fn test_empty_buffer_vector_is_zero() {
        let trace = TraceBuffer::default();
        assert_eq!(trace.vector(0, 0), Vec3::ZERO);
        assert_eq!(trace.vector(-5, 0), Vec3::ZERO);
        assert_eq!(trace.total_elapsed(), 0.0);
    }

    #[test]
    fn test_single_sample_vector_is_zero() {
        let mut trace = TraceBuffer::default();
        trace.push(Vec3::new(3.0, 4.0, 0.0), 0.016);
        assert_eq!(trace.vector(0, 0), Vec3::ZERO);
        assert_eq!(trace.vector(10, 10), Vec3::ZERO);
    }

    #[test]
    fn test_full_vector_spans_oldest_to_newest() {
        let trace = straight_line(5);
        assert_eq!(trace.vector(0, 0), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_recent_segment_vector() {
        let trace = straight_line(10);
        let recent = trace.vector(trace.len() as isize - 5, 0);
        assert_eq!(recent, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_negative_start_clamps_to_oldest() {
        let trace = straight_line(3);
        assert_eq!(trace.vector(3 - 5, 0), trace.vector(0, 0));
    }

    #[test]
    fn test_reversed_indices_are_swapped() {
        let trace = straight_line(10);
        // start = 8, end = 9 - 5 = 4 -> swapped to (4, 8)
        assert_eq!(trace.vector(8, 5), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut trace = TraceBuffer::default();
        for i in 0..=DEFAULT_TRACE_CAPACITY {
            trace.push(Vec3::new(i as f32, 0.0, 0.0), 0.01);
        }

        assert_eq!(trace.len(), DEFAULT_TRACE_CAPACITY);
        assert_eq!(trace.positions().next(), Some(&Vec3::new(1.0, 0.0, 0.0)));
        assert!((trace.total_elapsed() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_clear_resets_samples() {
        let mut trace = straight_line(4);
        trace.clear();
        assert!(trace.is_empty());
        assert_eq!(trace.total_elapsed(), 0.0);
    }

    #[test]
    fn test_zero_capacity_keeps_newest() {
        let mut trace = TraceBuffer::new(0);
        trace.push(Vec3::X, 0.1);
        trace.push(Vec3::Y, 0.2);
        assert_eq!(trace.capacity(), 1);
        assert_eq!(trace.positions().next(), Some(&Vec3::Y));
    }
}
