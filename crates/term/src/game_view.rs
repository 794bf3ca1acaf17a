//! GameView: maps a rendered `PixelBuffer` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half block: the glyph's foreground is the top pixel and the cell
//! background is the bottom pixel. Terminal glyphs are roughly twice as tall
//! as they are wide, so this keeps pixels close to square.

use crate::core::Viewport;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::pixels::PixelBuffer;
use crate::types::Rgb;

const HALF_BLOCK: char = '▀';
const HELP_TEXT: &str = " WASD/arrows: move  Q/Esc: quit ";

/// Pixel viewport for a terminal of `cols x rows` cells.
pub fn pixel_viewport(cols: u16, rows: u16) -> Viewport {
    Viewport::new(cols as u32, rows as u32 * 2)
}

/// Status shown over the top-left corner of the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub map: &'static str,
    pub x: f64,
    pub y: f64,
    /// Heading in radians.
    pub angle: f64,
    pub fps: u32,
}

impl Hud {
    fn line(&self) -> String {
        let heading = self.angle.to_degrees().rem_euclid(360.0);
        format!(
            " {} | x {:.0} y {:.0} | heading {:.0}° | {} fps ",
            self.map, self.x, self.y, heading, self.fps
        )
    }
}

pub struct GameView {
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_help: true }
    }
}

impl GameView {
    pub fn new(show_help: bool) -> Self {
        Self { show_help }
    }

    /// Convert `pixels` into `fb`, resizing it to fit, then overlay text.
    pub fn render_into(&self, pixels: &PixelBuffer, hud: Option<&Hud>, fb: &mut FrameBuffer) {
        let cols = pixels.width().min(u16::MAX as u32) as u16;
        let rows = pixels.height().div_ceil(2).min(u16::MAX as u32) as u16;
        fb.resize(cols, rows);

        for row in 0..rows {
            let top_y = row as u32 * 2;
            for col in 0..cols {
                let x = col as u32;
                let top = pixels.get(x, top_y).unwrap_or(Rgb::BLACK);
                let bottom = pixels.get(x, top_y + 1).unwrap_or(Rgb::BLACK);
                fb.set(
                    col,
                    row,
                    Cell {
                        ch: HALF_BLOCK,
                        style: CellStyle {
                            fg: top,
                            bg: bottom,
                            bold: false,
                        },
                    },
                );
            }
        }

        let text = CellStyle {
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            bold: true,
        };
        if let Some(hud) = hud {
            fb.put_str(0, 0, &hud.line(), text);
        }
        if self.show_help && rows > 1 {
            let dim = CellStyle {
                fg: Rgb::LIGHT_GRAY,
                bold: false,
                ..text
            };
            fb.put_str(0, rows - 1, HELP_TEXT, dim);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, pixels: &PixelBuffer, hud: Option<&Hud>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(pixels, hud, &mut fb);
        fb
    }
}
