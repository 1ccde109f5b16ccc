// Fractal Sketch: Raster Surface
//
// In-memory RGB canvas. A stroke paints the pixels whose centres fall inside
// the band swept by the pen along each path piece; coordinates are rounded
// to whole pixels only here, at final draw time.

use sketch_utils::{Line, Point};

use super::{Color, Surface};

/// Half-width used for strokes thinner than one pixel
const HAIRLINE_HALF_WIDTH: f64 = 0.5;

const COVERAGE_TOLERANCE: f64 = 1e-9;

/// Fixed-size pixel canvas implementing the drawing surface contract
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    background: Color,
    pixels: Vec<Color>,
    /// Sub-paths of the path being built
    path: Vec<Vec<Point>>,
    stroke_style: Color,
    line_width: f64,
}

impl RasterSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, Color::BLACK)
    }

    pub fn with_background(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; width * height],
            path: Vec::new(),
            stroke_style: Color::WHITE,
            line_width: 1.0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of pixels that differ from the background
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p != self.background).count()
    }

    /// Coarse text rendering: one character per block of pixels, `#` where
    /// anything in the block was painted.
    pub fn preview(&self, columns: usize, rows: usize) -> String {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let block_w = (self.width + columns - 1) / columns;
        let block_h = (self.height + rows - 1) / rows;

        let mut out = String::with_capacity((columns + 1) * rows);
        for row in 0..rows {
            for col in 0..columns {
                let painted = (row * block_h..((row + 1) * block_h).min(self.height))
                    .any(|y| {
                        (col * block_w..((col + 1) * block_w).min(self.width))
                            .any(|x| self.pixels[y * self.width + x] != self.background)
                    });
                out.push(if painted { '#' } else { ' ' });
            }
            if row + 1 < rows {
                out.push('\n');
            }
        }
        out
    }

    /// Paint every pixel whose centre lies within half the line width of
    /// `piece`, measured across it. Ends are butt: nothing is painted past
    /// either endpoint.
    fn stroke_piece(&mut self, piece: Line) {
        if piece.is_degenerate() || self.width == 0 || self.height == 0 {
            return;
        }
        let half = (self.line_width / 2.0).max(HAIRLINE_HALF_WIDTH);
        let reach = half.ceil() as i64 + 1;
        let (a, b) = (piece.start.round(), piece.end.round());

        let min_x = (a.x.min(b.x) as i64).saturating_sub(reach).max(0);
        let min_y = (a.y.min(b.y) as i64).saturating_sub(reach).max(0);
        let max_x = (a.x.max(b.x) as i64).saturating_add(reach).min(self.width as i64 - 1);
        let max_y = (a.y.max(b.y) as i64).saturating_add(reach).min(self.height as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if covers(&piece, half, Point::new(x as f64, y as f64)) {
                    self.pixels[y as usize * self.width + x as usize] = self.stroke_style;
                }
            }
        }
    }
}

/// Whether `pixel` falls on the band of half-width `half` along `piece`.
fn covers(piece: &Line, half: f64, pixel: Point) -> bool {
    let direction = piece.end - piece.start;
    let length = piece.length();
    let offset = pixel - piece.start;

    let along = (offset.x * direction.x + offset.y * direction.y) / length;
    let across = (offset.x * direction.y - offset.y * direction.x).abs() / length;

    along >= -COVERAGE_TOLERANCE
        && along <= length + COVERAGE_TOLERANCE
        && across <= half + COVERAGE_TOLERANCE
}

impl Surface for RasterSurface {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.path.push(vec![point]);
    }

    fn line_to(&mut self, point: Point) {
        match self.path.last_mut() {
            Some(sub_path) => sub_path.push(point),
            None => self.path.push(vec![point]),
        }
    }

    fn stroke(&mut self) {
        let pieces: Vec<Line> = self
            .path
            .iter()
            .flat_map(|sub_path| sub_path.windows(2).map(|w| Line::new(w[0], w[1])))
            .collect();
        for piece in pieces {
            self.stroke_piece(piece);
        }
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        let sweep = end_angle - start_angle;
        let steps = (radius.abs() * sweep.abs()).ceil().max(8.0) as usize;
        let points = (0..=steps).map(|i| {
            let angle = start_angle + sweep * (i as f64 / steps as f64);
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        });

        // A canvas arc joins the current point to the arc's start.
        match self.path.last_mut() {
            Some(sub_path) => sub_path.extend(points),
            None => self.path.push(points.collect()),
        }
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_style = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
}
