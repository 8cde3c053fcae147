//! In-memory RGB565 frame buffer for drawing tests.

extern crate std;

use core::convert::Infallible;
use std::vec::Vec;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

/// Colour every pixel starts with, so tests can tell "never drawn" apart
/// from any colour the widgets use.
pub const UNTOUCHED: Rgb565 = Rgb565::new(1, 2, 3);

pub struct TestDisplay {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl TestDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: std::vec![UNTOUCHED; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    pub fn count_in(&self, area: Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|p| self.bounding_box().contains(*p))
            .filter(|p| self.pixel(p.x, p.y) == color)
            .count()
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let idx = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}
