// surface.rs - Pixel surfaces the renderer can draw onto

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::grid::CanvasSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{0}` is not a #RRGGBB colour")]
pub struct ColorParseError(String);

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError(s.to_owned()));
        }
        let channel = |at: usize| {
            u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| ColorParseError(s.to_owned()))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Straight line in surface coordinates, stroked one pixel wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl LineSegment {
    pub fn new(from: (f32, f32), to: (f32, f32)) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A 2D target supporting batched strokes and solid fills.
pub trait Surface {
    /// Stroke every segment as one path.
    fn stroke_lines(&mut self, lines: &[LineSegment], color: Rgb);

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);
}

/// CPU-side RGB canvas. Drawing outside the canvas is clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(size: CanvasSize, background: Rgb) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![background; size.width as usize * size.height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.offset(x, y)])
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Opaque RGBA bytes, row-major, ready for texture upload.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|px| [px.r, px.g, px.b, 0xFF])
            .collect()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            let idx = self.offset(x as u32, y as u32);
            self.pixels[idx] = color;
        }
    }

    // A 1px stroke centred on integer coordinate `o` lands on pixel `o - 1`.
    fn stroke_pixel(coord: f32) -> i64 {
        (coord - 0.5).floor() as i64
    }

    fn stroke(&mut self, line: &LineSegment, color: Rgb) {
        let (x0, y0) = (Self::stroke_pixel(line.from.0), Self::stroke_pixel(line.from.1));
        let (x1, y1) = (Self::stroke_pixel(line.to.0), Self::stroke_pixel(line.to.1));
        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        if steps == 0 {
            self.put(x0, y0, color);
            return;
        }
        for step in 0..=steps {
            let x = x0 + (x1 - x0) * step / steps;
            let y = y0 + (y1 - y0) * step / steps;
            self.put(x, y, color);
        }
    }
}

impl Surface for PixelCanvas {
    fn stroke_lines(&mut self, lines: &[LineSegment], color: Rgb) {
        for line in lines {
            self.stroke(line, color);
        }
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let x_end = rect.x.saturating_add(rect.width).min(self.width);
        let y_end = rect.y.saturating_add(rect.height).min(self.height);
        for y in rect.y.min(y_end)..y_end {
            let start = self.offset(rect.x.min(x_end), y);
            let end = self.offset(x_end, y);
            self.pixels[start..end].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> PixelCanvas {
        PixelCanvas::new(CanvasSize { width, height }, Rgb::WHITE)
    }

    #[test]
    fn parses_hex_colours() {
        assert_eq!("#94a3b8".parse::<Rgb>().unwrap(), Rgb::new(0x94, 0xA3, 0xB8));
        assert_eq!("CCCCCC".parse::<Rgb>().unwrap(), Rgb::gray(0xCC));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#GG0000".parse::<Rgb>().is_err());
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102FF");
    }

    #[test]
    fn fill_is_clipped_to_canvas() {
        let mut c = canvas(4, 4);
        c.fill_rect(PixelRect { x: 2, y: 3, width: 10, height: 10 }, Rgb::BLACK);
        assert_eq!(c.pixel(3, 3), Some(Rgb::BLACK));
        assert_eq!(c.pixel(1, 3), Some(Rgb::WHITE));
        assert_eq!(c.pixel(3, 2), Some(Rgb::WHITE));

        c.fill_rect(PixelRect { x: 9, y: 9, width: 2, height: 2 }, Rgb::BLACK);
        assert_eq!(c.pixels.iter().filter(|&&p| p == Rgb::BLACK).count(), 2);
    }

    #[test]
    fn vertical_stroke_covers_the_pixel_left_of_its_coordinate() {
        let mut c = canvas(5, 3);
        c.stroke_lines(&[LineSegment::new((1.0, 0.0), (1.0, 3.0))], Rgb::BLACK);
        for y in 0..3 {
            assert_eq!(c.pixel(0, y), Some(Rgb::BLACK));
            assert_eq!(c.pixel(1, y), Some(Rgb::WHITE));
        }
    }

    #[test]
    fn rgba_export_is_opaque() {
        let c = canvas(2, 1);
        assert_eq!(c.to_rgba(), vec![255, 255, 255, 255, 255, 255, 255, 255]);
    }
}
