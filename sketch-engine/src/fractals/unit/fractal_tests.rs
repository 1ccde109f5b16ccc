// Scenario tests across all four fractals: round sizes, totals and the
// geometry of the first generations.

use sketch_utils::{Point, Polygon};

use super::*;
use crate::driver::{plan_rounds, planned_total, GenerationDriver, ProgressBoard};
use crate::surface::{Color, RasterSurface, RecordingSurface};

fn round_sizes<F: Fractal>(fractal: &F) -> Vec<usize> {
    plan_rounds(fractal)
        .unwrap()
        .iter()
        .map(Vec::len)
        .collect()
}

#[test]
fn test_tree_total_over_thirteen_iterations() {
    let tree = BranchingTree::new();
    assert_eq!(tree.settings().iterations, 13);
    assert_eq!(planned_total(&tree).unwrap(), (1u64 << 14) - 1);
}

#[test]
fn test_snowflake_round_sizes() {
    let flake = KochSnowflake::new();
    // Seed, three bumps, then two sprouting sides with a twin each.
    assert_eq!(round_sizes(&flake), vec![1, 3, 12, 48, 192]);
    assert_eq!(planned_total(&flake).unwrap(), 256);
}

#[test]
fn test_triangle_round_sizes() {
    let fractal = SierpinskiTriangle::new();
    assert_eq!(round_sizes(&fractal), vec![1, 3, 9, 27, 81, 243, 729]);
    assert_eq!(planned_total(&fractal).unwrap(), 1 + 1093);
}

#[test]
fn test_carpet_shapes_stay_inside_base() {
    let carpet = SierpinskiCarpet::new();
    let settings = carpet.settings().clone().with_iterations(3);
    let carpet = carpet.with_settings(settings);

    for shapes in plan_rounds(&carpet).unwrap() {
        for square in shapes {
            for p in square.points() {
                assert!(p.x >= -1e-9 && p.x <= 800.0 + 1e-9);
                assert!(p.y >= -1e-9 && p.y <= 800.0 + 1e-9);
            }
        }
    }
}

#[test]
fn test_triangle_first_inner_exact() {
    let h = 600.0 * 30f64.to_radians().cos();
    let base = Polygon::triangle(
        Point::new(0.0, h),
        Point::new(300.0, 0.0),
        Point::new(600.0, h),
    );
    let fractal = SierpinskiTriangle::new();
    assert_eq!(fractal.backdrop().unwrap(), base);
    assert_eq!(
        fractal.seed().unwrap(),
        Polygon::triangle(
            Point::new(150.0, h / 2.0),
            Point::new(450.0, h / 2.0),
            Point::new(300.0, h),
        )
    );
}

#[test]
fn test_triangle_children_shrink_by_half() {
    let fractal = SierpinskiTriangle::new();
    let settings = fractal.settings().clone().with_iterations(4);
    let fractal = fractal.with_settings(settings);

    let mut expected_side = 300.0;
    for shapes in plan_rounds(&fractal).unwrap() {
        for triangle in &shapes {
            for side in triangle.sides() {
                assert!((side.length() - expected_side).abs() < 1e-6);
            }
        }
        expected_side /= 2.0;
    }
}

#[test]
fn test_tree_branches_connect() {
    let tree = BranchingTree::new();
    let settings = tree.settings().clone().with_iterations(5);
    let tree = tree.with_settings(settings);
    let rounds = plan_rounds(&tree).unwrap();

    for pair in rounds.windows(2) {
        let (parents, children) = (&pair[0], &pair[1]);
        for (i, parent) in parents.iter().enumerate() {
            for child in &children[2 * i..2 * i + 2] {
                assert_eq!(child.start, parent.end);
                assert!((child.length() - parent.length() * 0.75).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_snowflake_children_have_finite_equal_sides() {
    let flake = KochSnowflake::new();
    let mut side = 500.0;
    for shapes in plan_rounds(&flake).unwrap() {
        for triangle in &shapes {
            for s in triangle.sides() {
                assert!((s.length() - side).abs() < 1e-6);
            }
        }
        side /= 3.0;
    }
}

#[tokio::test(start_paused = true)]
async fn test_snowflake_reveals_every_side_in_32_pieces() {
    let flake = KochSnowflake::new();
    let settings = flake.settings().clone().with_iterations(1);
    let flake = flake.with_settings(settings);

    let mut driver = GenerationDriver::new(flake, RecordingSurface::new(), ProgressBoard::new());
    let summary = driver.run().await.unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(driver.context().surface().stroke_count(), 4 * 3 * 32);
}

#[tokio::test(start_paused = true)]
async fn test_carpet_paints_raster() {
    let carpet = SierpinskiCarpet::new();
    let settings = carpet.settings().clone().with_iterations(1);
    let carpet = carpet.with_settings(settings);
    let (width, height) = carpet.settings().canvas;

    let mut driver =
        GenerationDriver::new(carpet, RasterSurface::new(width, height), ProgressBoard::new());
    let summary = driver.run().await.unwrap();
    assert_eq!(summary.total, 1 + 1 + 8);

    let surface = driver.context().surface();
    assert!(surface.painted_pixels() > 0);
    // Corner of the backdrop and of the centre hole are both painted.
    assert_eq!(surface.pixel(0, 0), Some(Color::WHITE));
    let third = (800.0f64 / 3.0).round() as usize;
    assert_eq!(surface.pixel(third, third), Some(Color::WHITE));
    // Middle of the centre hole stays empty.
    assert_eq!(surface.pixel(400, 400), Some(Color::BLACK));
}
