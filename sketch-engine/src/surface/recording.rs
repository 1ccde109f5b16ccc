// Fractal Sketch: Recording Surface
//
// Records every surface call in order. Tests use it to verify draw order,
// pen state and segment counts without a real canvas.

use sketch_utils::{Line, Point};

use super::{Color, Surface};

/// One call made against a surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    SetStrokeStyle(Color),
    SetLineWidth(f64),
}

/// A straight piece that was actually stroked, with the pen it used
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedSegment {
    pub line: Line,
    pub color: Color,
    pub width: f64,
}

/// Surface that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `stroke()` calls seen
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }

    /// Replay the recorded calls and return every stroked straight piece in
    /// the order it became visible. Arcs are skipped.
    pub fn stroked_segments(&self) -> Vec<StrokedSegment> {
        let mut segments = Vec::new();
        let mut pending: Vec<Line> = Vec::new();
        let mut cursor: Option<Point> = None;
        let mut color = Color::BLACK;
        let mut width = 1.0;

        for command in &self.commands {
            match command {
                DrawCommand::BeginPath => {
                    pending.clear();
                    cursor = None;
                }
                DrawCommand::MoveTo(p) => cursor = Some(*p),
                DrawCommand::LineTo(p) => {
                    if let Some(from) = cursor {
                        pending.push(Line::new(from, *p));
                    }
                    cursor = Some(*p);
                }
                DrawCommand::Stroke => {
                    segments.extend(pending.iter().map(|line| StrokedSegment {
                        line: *line,
                        color,
                        width,
                    }));
                }
                DrawCommand::Arc { .. } => {}
                DrawCommand::SetStrokeStyle(c) => color = *c,
                DrawCommand::SetLineWidth(w) => width = *w,
            }
        }

        segments
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke_style(Color::WHITE);
        surface.begin_path();
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(1.0, 1.0));
        surface.stroke();

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::SetStrokeStyle(Color::WHITE),
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(Point::new(0.0, 0.0)),
                DrawCommand::LineTo(Point::new(1.0, 1.0)),
                DrawCommand::Stroke,
            ]
        );
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn test_stroked_segments_use_pen_at_stroke_time() {
        let mut surface = RecordingSurface::new();
        surface.set_line_width(15.0);
        surface.begin_path();
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(0.0, 5.0));
        surface.set_stroke_style(Color::WHITE);
        surface.stroke();

        // Unstroked path is never visible.
        surface.begin_path();
        surface.move_to(Point::new(9.0, 9.0));
        surface.line_to(Point::new(8.0, 8.0));

        let segments = surface.stroked_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].color, Color::WHITE);
        assert_eq!(segments[0].width, 15.0);
        assert_eq!(segments[0].line.end, Point::new(0.0, 5.0));
    }

    #[test]
    fn test_clear() {
        let mut surface = RecordingSurface::new();
        surface.arc(Point::new(1.0, 1.0), 5.0, 0.0, std::f64::consts::TAU);
        surface.stroke();
        assert!(surface.stroked_segments().is_empty());

        surface.clear();
        assert!(surface.commands().is_empty());
    }
}
