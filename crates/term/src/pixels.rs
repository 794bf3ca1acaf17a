//! PixelBuffer: an RGB raster that implements the core `Canvas`.
//!
//! All primitives clip against the buffer edges, so callers may pass
//! rectangles that extend far off screen (close walls do).

use std::ops::Range;

use crate::core::{Canvas, Image, Point, Rect, Viewport};
use crate::types::Rgb;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize(width as usize * height as usize, Rgb::BLACK);
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    fn fill_span(&mut self, y: u32, xs: Range<u32>, color: Rgb) {
        let row = y as usize * self.width as usize;
        self.pixels[row + xs.start as usize..row + xs.end as usize].fill(color);
    }
}

/// Pixel range covered by `[start, start + len)`, clipped to `0..limit`.
fn clip_span(start: f64, len: f64, limit: u32) -> Range<u32> {
    let limit = limit as f64;
    let lo = start.floor().clamp(0.0, limit);
    let hi = (start + len).floor().clamp(0.0, limit);
    lo as u32..hi.max(lo) as u32
}

impl Canvas for PixelBuffer {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let xs = clip_span(rect.x, rect.w, self.width);
        for y in clip_span(rect.y, rect.h, self.height) {
            self.fill_span(y, xs.clone(), color);
        }
    }

    fn hline(&mut self, y: i32, color: Rgb) {
        if y >= 0 && (y as u32) < self.height {
            self.fill_span(y as u32, 0..self.width, color);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        let r2 = radius * radius;
        let x0 = (center.x - radius).floor() as i64;
        let x1 = (center.x + radius).ceil() as i64;
        let y0 = (center.y - radius).floor() as i64;
        let y1 = (center.y + radius).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
        // Tiny radii still mark the centre.
        self.put(center.x.floor() as i64, center.y.floor() as i64, color);
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb, width: u32) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
        let width = width.max(1) as i64;
        let lo = -(width - 1) / 2;

        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            let px = (from.x + dx * t).floor() as i64;
            let py = (from.y + dy * t).floor() as i64;
            for oy in lo..lo + width {
                for ox in lo..lo + width {
                    self.put(px + ox, py + oy, color);
                }
            }
        }
    }

    fn blit(&mut self, image: &Image, x: i32, y: i32) {
        let w = image.width() as usize;
        for (iy, row) in image.pixels().chunks_exact(w.max(1)).enumerate() {
            for (ix, &color) in row.iter().enumerate() {
                self.put(x as i64 + ix as i64, y as i64 + iy as i64, color);
            }
        }
    }
}
