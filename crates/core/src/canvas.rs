//! Draw-sink contract between the core and the host surface.
//!
//! The core never reads pixels back: it only issues [`DrawCommand`]s against a
//! [`Canvas`]. Coordinates are screen pixels as `f64`; the host is responsible
//! for clipping and rounding.

use crate::types::Rgb;

/// Screen dimensions in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn min_dimension(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Owned RGB raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Image {
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Fill an axis-aligned block, clipped to the image.
    pub fn fill_block(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(y_end)..y_end {
            let row = py as usize * self.width as usize;
            self.pixels[row + x.min(x_end) as usize..row + x_end as usize].fill(color);
        }
    }
}

/// Host rendering surface.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Full-width horizontal line on row `y`.
    fn hline(&mut self, y: i32, color: Rgb);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);

    fn line(&mut self, from: Point, to: Point, color: Rgb, width: u32);

    /// Copy `image` with its top-left corner at `(x, y)`.
    fn blit(&mut self, image: &Image, x: i32, y: i32);
}

/// One drawing operation, replayable against any [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    HLine {
        y: i32,
        color: Rgb,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: u32,
    },
}

impl DrawCommand {
    pub fn apply<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match *self {
            DrawCommand::FillRect { rect, color } => canvas.fill_rect(rect, color),
            DrawCommand::HLine { y, color } => canvas.hline(y, color),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => canvas.fill_circle(center, radius, color),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => canvas.line(from, to, color, width),
        }
    }

    pub fn color(&self) -> Rgb {
        match *self {
            DrawCommand::FillRect { color, .. }
            | DrawCommand::HLine { color, .. }
            | DrawCommand::FillCircle { color, .. }
            | DrawCommand::Line { color, .. } => color,
        }
    }
}

/// Replay a command list in order.
pub fn apply_all<C: Canvas + ?Sized>(commands: &[DrawCommand], canvas: &mut C) {
    for command in commands {
        command.apply(canvas);
    }
}
