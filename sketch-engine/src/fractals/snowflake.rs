// Fractal Sketch: Snowflake
//
// Koch-style variant built from whole triangles. Every side of a triangle
// grows an outward equilateral bump on its middle third. The rule changes
// after the first round: the side a child shares with its parent stops
// sprouting, and every child gets a twin rotated about the figure's centre.

use log::debug;
use sketch_utils::consts::snowflake::*;
use sketch_utils::geometry::equilateral_height;
use sketch_utils::{GeometryResult, Point, Polygon};

use super::{Fractal, FractalSettings};
use crate::animation::Bisection;

/// Round-dependent switches of the snowflake rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildFlags {
    /// Whether the closing side (last vertex back to the first) sprouts
    pub base_side: bool,
    /// Whether each child is duplicated by a rotation about the centre
    pub mirror: bool,
}

impl ChildFlags {
    /// Only the children of the seed use every side and skip mirroring.
    /// This is special to the snowflake, not a general rule.
    pub fn for_round(round: usize) -> Self {
        Self {
            base_side: round == 0,
            mirror: round >= 1,
        }
    }
}

pub struct KochSnowflake {
    settings: FractalSettings,
    base: Polygon,
    center: Point,
}

impl KochSnowflake {
    pub fn new() -> Self {
        let height = equilateral_height(BASE_SIDE_LENGTH);
        let base = Polygon::triangle(
            Point::new(0.0, height),
            Point::new(BASE_SIDE_LENGTH / 2.0, 0.0),
            Point::new(BASE_SIDE_LENGTH, height),
        );
        let settings = FractalSettings::new(
            ITERATIONS,
            LINE_DRAW_DELAY_MS,
            (
                BASE_SIDE_LENGTH * CANVAS_WIDTH_MULTIPLE,
                BASE_SIDE_LENGTH * CANVAS_HEIGHT_MULTIPLE,
            ),
        );
        let pacing = settings.pacing.with_bisection(Bisection::Fixed(BISECTION_DEPTH));

        Self {
            center: base.centroid(),
            settings: settings.with_pacing(pacing),
            base,
        }
    }

    pub fn with_settings(mut self, settings: FractalSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Centre that mirrored children are rotated about
    pub fn center(&self) -> Point {
        self.center
    }
}

impl Default for KochSnowflake {
    fn default() -> Self {
        Self::new()
    }
}

impl Fractal for KochSnowflake {
    type Shape = Polygon;

    fn name(&self) -> &'static str {
        "snowflake"
    }

    fn settings(&self) -> &FractalSettings {
        &self.settings
    }

    fn seed(&self) -> GeometryResult<Polygon> {
        Ok(self.base.clone())
    }

    fn children(&self, parent: &Polygon, round: usize) -> GeometryResult<Vec<Polygon>> {
        parent.expect_vertices(3)?;
        let flags = ChildFlags::for_round(round);

        let mut sides = parent.sides();
        if !flags.base_side {
            sides.pop();
        }
        let rotate_angle = 360.0 / sides.len() as f64;

        let mut children = Vec::with_capacity(sides.len() * 2);
        for side in &sides {
            let [_, middle, _] = side.split3();
            let height = equilateral_height(middle.length());
            let [_, second_half] = middle.split();
            // A quarter turn anticlockwise points away from the parent.
            let guide = second_half.rotate_clockwise(-90.0).with_length(height)?;

            let child = Polygon::triangle(middle.start, guide.end, middle.end);
            if flags.mirror {
                let twin = child.rotate_clockwise(rotate_angle, self.center);
                children.push(child);
                children.push(twin);
            } else {
                children.push(child);
            }
        }

        debug!(
            "snowflake round {}: {} children from {} sides",
            round,
            children.len(),
            sides.len()
        );
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_utils::Line;

    #[test]
    fn test_flags_by_round() {
        assert_eq!(
            ChildFlags::for_round(0),
            ChildFlags {
                base_side: true,
                mirror: false
            }
        );
        for round in 1..5 {
            assert_eq!(
                ChildFlags::for_round(round),
                ChildFlags {
                    base_side: false,
                    mirror: true
                }
            );
        }
    }

    #[test]
    fn test_seed_children_are_outward_bumps() {
        let flake = KochSnowflake::new();
        let seed = flake.seed().unwrap();
        let children = flake.children(&seed, 0).unwrap();
        assert_eq!(children.len(), 3);

        let seed_center = seed.centroid();
        for (child, side) in children.iter().zip(seed.sides()) {
            let [_, middle, _] = side.split3();
            let pts = child.points();
            assert_eq!(pts[0], middle.start);
            assert_eq!(pts[2], middle.end);

            // Equilateral with side a third of the parent's.
            for child_side in child.sides() {
                assert!((child_side.length() - 500.0 / 3.0).abs() < 1e-6);
            }

            // Apex lies further from the centre than the side it grows from.
            let apex = pts[1];
            assert!(apex.distance_to(seed_center) > middle.midpoint().distance_to(seed_center));
        }
    }

    #[test]
    fn test_apex_of_left_side() {
        let flake = KochSnowflake::new();
        let seed = flake.seed().unwrap();
        let children = flake.children(&seed, 0).unwrap();

        let side = Line::new(seed.points()[0], seed.points()[1]);
        let [_, middle, _] = side.split3();
        let normal_angle = middle.angle().unwrap() - 90.0;
        let expected = middle.midpoint()
            + Point::new(
                normal_angle.to_radians().cos(),
                normal_angle.to_radians().sin(),
            ) * equilateral_height(middle.length());
        assert!(children[0].points()[1].approx_eq(expected, 1e-6));
    }

    #[test]
    fn test_later_rounds_drop_base_side_and_mirror() {
        let flake = KochSnowflake::new();
        let seed = flake.seed().unwrap();
        let first = flake.children(&seed, 0).unwrap();
        let second = flake.children(&first[0], 1).unwrap();

        // Two sprouting sides, each with a twin.
        assert_eq!(second.len(), 4);

        // Twins are rotated half a turn about the figure's centre.
        let center = flake.center();
        for pair in second.chunks(2) {
            let expected = pair[0].rotate_clockwise(180.0, center);
            for (a, b) in pair[1].points().iter().zip(expected.points()) {
                assert!(a.approx_eq(*b, 1e-9));
            }
        }
    }

    #[test]
    fn test_uses_fixed_bisection() {
        let flake = KochSnowflake::new();
        assert_eq!(flake.settings().pacing.segment_count(1.0), 32);
        assert_eq!(flake.settings().canvas, (500, 1000));
    }
}
