// Fractal Sketch: round planning
//
// Pure computation of working sets, independent of any surface. The driver
// uses `next_round` between barriers; `plan_rounds` computes a whole run up
// front so it can be inspected or replayed later.

use sketch_utils::GeometryResult;

use crate::fractals::Fractal;
use crate::render::Shape;

/// Children of every shape in `shapes`, which were drawn in round `round`
pub fn next_round<F: Fractal>(
    fractal: &F,
    shapes: &[F::Shape],
    round: usize,
) -> GeometryResult<Vec<F::Shape>> {
    let mut next = Vec::new();
    for shape in shapes {
        for child in fractal.children(shape, round)? {
            next.push(child.ensure_finite()?);
        }
    }
    Ok(next)
}

/// Working set of every round, seed round first
pub fn plan_rounds<F: Fractal>(fractal: &F) -> GeometryResult<Vec<Vec<F::Shape>>> {
    let iterations = fractal.settings().iterations;
    let mut rounds = Vec::with_capacity(iterations + 1);
    rounds.push(vec![fractal.seed()?.ensure_finite()?]);

    for round in 0..iterations {
        let next = next_round(fractal, &rounds[round], round)?;
        rounds.push(next);
    }
    Ok(rounds)
}

/// Shapes a full run draws, backdrop included
pub fn planned_total<F: Fractal>(fractal: &F) -> GeometryResult<u64> {
    let backdrop = fractal.backdrop().map_or(0, |_| 1);
    let drawn: usize = plan_rounds(fractal)?.iter().map(Vec::len).sum();
    Ok(backdrop + drawn as u64)
}
