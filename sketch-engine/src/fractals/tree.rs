// Fractal Sketch: Branching Tree
//
// Every branch forks into two shorter branches at its tip. The fork is
// lopsided: one child leans further right than the other leans left.

use sketch_utils::consts::tree::*;
use sketch_utils::{GeometryResult, Line, Point};

use super::{Fractal, FractalSettings};

pub struct BranchingTree {
    settings: FractalSettings,
    trunk: Line,
    ratio: f64,
    angle_left: f64,
    angle_right: f64,
}

impl BranchingTree {
    pub fn new() -> Self {
        let mut settings = FractalSettings::new(
            ITERATIONS,
            LINE_DRAW_DELAY_MS,
            (
                BASE_LENGTH * CANVAS_WIDTH_MULTIPLE,
                BASE_LENGTH * CANVAS_HEIGHT_MULTIPLE,
            ),
        );
        settings.pen.width = BASE_THICKNESS;

        Self {
            settings,
            trunk: Line::new(
                Point::new(BASE_LENGTH * 3.0, BASE_LENGTH * 4.0),
                Point::new(BASE_LENGTH * 3.0, BASE_LENGTH * 3.0),
            ),
            ratio: RATIO,
            angle_left: ANGLE_LEFT,
            angle_right: ANGLE_RIGHT,
        }
    }

    pub fn with_settings(mut self, settings: FractalSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl Default for BranchingTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Fractal for BranchingTree {
    type Shape = Line;

    fn name(&self) -> &'static str {
        "branching tree"
    }

    fn settings(&self) -> &FractalSettings {
        &self.settings
    }

    fn seed(&self) -> GeometryResult<Line> {
        Ok(self.trunk)
    }

    fn children(&self, parent: &Line, _round: usize) -> GeometryResult<Vec<Line>> {
        let heading = parent.angle()?;
        let length = parent.length() * self.ratio;
        let start = parent.end;
        // Straight up from the tip, then turned relative to the parent.
        let upright = Line::new(start, Point::new(start.x, start.y - length));

        Ok(vec![
            upright.rotate_clockwise(heading + 90.0 + self.angle_right),
            upright.rotate_clockwise(heading + 90.0 - self.angle_left),
        ])
    }

    fn line_width(&self, round: usize) -> f64 {
        (self.settings.pen.width * self.ratio.powi(round as i32)).max(MIN_THICKNESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunk_position() {
        let tree = BranchingTree::new();
        let trunk = tree.seed().unwrap();
        assert_eq!(trunk.start, Point::new(450.0, 600.0));
        assert_eq!(trunk.end, Point::new(450.0, 450.0));
        assert_eq!(tree.settings().canvas, (900, 600));
    }

    #[test]
    fn test_first_fork() {
        let tree = BranchingTree::new();
        let trunk = tree.seed().unwrap();
        let heading = trunk.angle().unwrap();
        let children = tree.children(&trunk, 0).unwrap();

        assert_eq!(children.len(), 2);
        for child in &children {
            assert_eq!(child.start, Point::new(450.0, 450.0));
            assert!((child.length() - 112.5).abs() < 1e-9);
        }

        // An upright branch sits at -90°, then turns by heading + 130° / + 70°.
        let right = children[0].angle().unwrap();
        let left = children[1].angle().unwrap();
        assert!((right - (-90.0 + heading + 130.0)).abs() < 1e-9);
        assert!((left - (-90.0 + heading + 70.0)).abs() < 1e-9);
        assert!((right - -50.0).abs() < 1e-9);
        assert!((left - -110.0).abs() < 1e-9);
    }

    #[test]
    fn test_children_of_zero_length_branch_fail() {
        let tree = BranchingTree::new();
        let p = Point::new(10.0, 10.0);
        assert!(tree.children(&Line::new(p, p), 3).is_err());
    }

    #[test]
    fn test_line_width_shrinks_to_floor() {
        let tree = BranchingTree::new();
        assert_eq!(tree.line_width(0), 15.0);
        assert!((tree.line_width(1) - 11.25).abs() < 1e-9);
        assert!(tree.line_width(5) > 1.0);
        assert_eq!(tree.line_width(12), 1.0);
    }
}
