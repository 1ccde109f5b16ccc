// Fractal Sketch: line reveal pacing
//
// A line is revealed as 2^depth equal sub-segments with a fixed delay after
// each one. Longer lines get more sub-segments so per-segment motion looks
// roughly uniform.

use std::time::Duration;

use sketch_utils::consts::pacing::{
    LONG_LINE_DEPTH, LONG_LINE_THRESHOLD, MAX_BISECTION_DEPTH, SHORT_LINE_DEPTH,
};

/// How many times a line is bisected before it is revealed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bisection {
    /// `long_depth` for lines longer than `threshold`, else `short_depth`
    ByLength {
        threshold: f64,
        long_depth: u32,
        short_depth: u32,
    },
    /// Same depth regardless of length
    Fixed(u32),
}

impl Bisection {
    /// Depth for a line of `length`, never above `MAX_BISECTION_DEPTH`
    pub fn depth_for(&self, length: f64) -> u32 {
        let depth = match *self {
            Bisection::ByLength {
                threshold,
                long_depth,
                short_depth,
            } => {
                if length > threshold {
                    long_depth
                } else {
                    short_depth
                }
            }
            Bisection::Fixed(depth) => depth,
        };
        depth.min(MAX_BISECTION_DEPTH)
    }
}

impl Default for Bisection {
    fn default() -> Self {
        Bisection::ByLength {
            threshold: LONG_LINE_THRESHOLD,
            long_depth: LONG_LINE_DEPTH,
            short_depth: SHORT_LINE_DEPTH,
        }
    }
}

/// Scheduling contract for animated lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    /// Pause after every sub-segment
    pub delay: Duration,
    pub bisection: Bisection,
}

impl Pacing {
    pub fn new(delay: Duration, bisection: Bisection) -> Self {
        Self { delay, bisection }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms), Bisection::default())
    }

    pub fn with_bisection(mut self, bisection: Bisection) -> Self {
        self.bisection = bisection;
        self
    }

    /// Number of sub-segments a line of `length` is revealed in
    pub fn segment_count(&self, length: f64) -> usize {
        1usize << self.bisection.depth_for(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_count_by_length() {
        let pacing = Pacing::from_millis(15);
        assert_eq!(pacing.segment_count(25.0), 32);
        assert_eq!(pacing.segment_count(10.0), 8);
        // The threshold itself counts as short.
        assert_eq!(pacing.segment_count(20.0), 8);
    }

    #[test]
    fn test_fixed_bisection_ignores_length() {
        let pacing = Pacing::from_millis(20).with_bisection(Bisection::Fixed(5));
        assert_eq!(pacing.segment_count(1.0), 32);
        assert_eq!(pacing.segment_count(500.0), 32);
    }

    #[test]
    fn test_oversized_depth_is_clamped() {
        let pacing = Pacing::from_millis(1).with_bisection(Bisection::Fixed(64));
        assert_eq!(pacing.bisection.depth_for(1.0), MAX_BISECTION_DEPTH);
        assert_eq!(pacing.segment_count(1.0), 1 << MAX_BISECTION_DEPTH);

        let pacing = Pacing::from_millis(1).with_bisection(Bisection::ByLength {
            threshold: 1.0,
            long_depth: u32::MAX,
            short_depth: 2,
        });
        assert_eq!(pacing.segment_count(5.0), 1 << MAX_BISECTION_DEPTH);
        assert_eq!(pacing.segment_count(0.5), 4);
    }
}
