// Fractal Sketch: line reveal animation
// A line split into equal sub-segments, handed out one per frame from start to end

use std::time::Duration;

use sketch_utils::Line;

use super::engine::{AnimationEngine, AnimationFrame};
use super::pacing::Pacing;

/// Finite animation that sketches a single line piece by piece
pub struct LineReveal {
    /// Sub-segments in start-to-end order
    segments: Vec<Line>,
    /// Index of the next segment to hand out
    cursor: usize,
    /// Pause after each segment
    delay: Duration,
}

impl LineReveal {
    pub fn new(line: Line, pacing: &Pacing) -> Self {
        let depth = pacing.bisection.depth_for(line.length());
        Self {
            segments: line.bisect(depth),
            cursor: 0,
            delay: pacing.delay,
        }
    }

    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.segments.len()
    }
}

impl AnimationEngine for LineReveal {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        let segment = *self.segments.get(self.cursor)?;
        let frame = AnimationFrame::new(self.cursor, segment);

        self.cursor += 1;

        Some(frame)
    }

    fn frame_duration(&self) -> Duration {
        self.delay
    }

    fn frame_count(&self) -> usize {
        self.segments.len()
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::pacing::Bisection;
    use sketch_utils::Point;

    fn horizontal(length: f64) -> Line {
        Line::new(Point::new(0.0, 0.0), Point::new(length, 0.0))
    }

    #[test]
    fn test_long_line_has_32_frames() {
        let mut anim = LineReveal::new(horizontal(25.0), &Pacing::from_millis(15));
        assert_eq!(anim.frame_count(), 32);

        let mut frames = 0;
        while anim.next_frame().is_some() {
            frames += 1;
        }
        assert_eq!(frames, 32);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_short_line_has_8_frames() {
        let anim = LineReveal::new(horizontal(10.0), &Pacing::from_millis(15));
        assert_eq!(anim.frame_count(), 8);
    }

    #[test]
    fn test_frames_run_start_to_end() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 16.0));
        let pacing = Pacing::from_millis(15).with_bisection(Bisection::Fixed(4));
        let mut anim = LineReveal::new(line, &pacing);

        let mut previous_end = line.start;
        while let Some(frame) = anim.next_frame() {
            assert_eq!(frame.segment.start, previous_end);
            assert_eq!(frame.segment.length(), 1.0);
            previous_end = frame.segment.end;
        }
        assert_eq!(previous_end, line.end);
    }

    #[test]
    fn test_frames_are_indexed() {
        let mut anim = LineReveal::new(horizontal(25.0), &Pacing::from_millis(15));
        let indices: Vec<usize> = std::iter::from_fn(|| anim.next_frame())
            .map(|frame| frame.index)
            .collect();
        assert_eq!(indices, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_reset() {
        let mut anim = LineReveal::new(horizontal(25.0), &Pacing::from_millis(15));
        let first = anim.next_frame().unwrap().segment;
        anim.next_frame();
        anim.next_frame();

        anim.reset();
        assert!(!anim.is_finished());
        assert_eq!(anim.next_frame().unwrap().segment, first);
    }

    #[test]
    fn test_frame_duration() {
        let anim = LineReveal::new(horizontal(25.0), &Pacing::from_millis(15));
        assert_eq!(anim.frame_duration(), Duration::from_millis(15));
        assert_eq!(anim.total_duration(), Duration::from_millis(480));
    }
}
