// Fractal Sketch: Render Context
//
// Owns the drawing surface and the current pen for the lifetime of a run.
// Draw tasks of one round interleave on a single thread, so the surface sits
// in a `RefCell` and is only borrowed between suspension points. Every
// segment draw re-asserts the pen before stroking.

use std::cell::{Cell, Ref, RefCell};

use sketch_utils::consts::DEFAULT_LINE_WIDTH;
use sketch_utils::Line;
use tokio::time::sleep;

use super::shape::Shape;
use crate::animation::{AnimationEngine, LineReveal, Pacing};
use crate::surface::{Color, Surface};

/// Stroke state applied before every segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            width: DEFAULT_LINE_WIDTH,
        }
    }
}

pub struct RenderContext<S: Surface> {
    surface: RefCell<S>,
    pen: Cell<Pen>,
    pacing: Pacing,
}

impl<S: Surface> RenderContext<S> {
    pub fn new(surface: S, pen: Pen, pacing: Pacing) -> Self {
        Self {
            surface: RefCell::new(surface),
            pen: Cell::new(pen),
            pacing,
        }
    }

    pub fn pen(&self) -> Pen {
        self.pen.get()
    }

    pub fn set_pen(&self, pen: Pen) {
        self.pen.set(pen);
    }

    pub fn set_line_width(&self, width: f64) {
        let mut pen = self.pen.get();
        pen.width = width;
        self.pen.set(pen);
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Borrow the surface, e.g. to inspect it between rounds
    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    pub fn into_surface(self) -> S {
        self.surface.into_inner()
    }

    /// Stroke one segment immediately.
    pub fn draw_segment(&self, segment: &Line) {
        let pen = self.pen.get();
        let mut surface = self.surface.borrow_mut();
        surface.set_stroke_style(pen.color);
        surface.set_line_width(pen.width);
        surface.begin_path();
        surface.move_to(segment.start);
        surface.line_to(segment.end);
        surface.stroke();
    }

    /// Sketch `line` as a sequence of sub-segments, pausing after each one.
    ///
    /// The finished picture is identical to stroking the whole line; only
    /// the reveal is paced.
    pub async fn draw_animated(&self, line: Line) {
        let mut animation = LineReveal::new(line, &self.pacing);
        let delay = animation.frame_duration();
        while let Some(frame) = animation.next_frame() {
            self.draw_segment(&frame.segment);
            sleep(delay).await;
        }
    }

    /// Draw every side of `shape`, each side finishing before the next starts.
    pub async fn draw_shape<T: Shape>(&self, shape: &T) {
        for side in shape.sides() {
            self.draw_animated(side).await;
        }
    }
}
