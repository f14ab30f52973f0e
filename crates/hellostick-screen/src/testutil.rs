//! In-memory draw target sized like the real panel.
//!
//! `MockDisplay` is too small for the 240x135 layout, so render tests paint
//! into this canvas and assert on pixel counts.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, Pixel};
use std::vec;
use std::vec::Vec;

use crate::{HEIGHT, WIDTH};

pub(crate) struct TestCanvas {
    pixels: Vec<Rgb565>,
}

impl TestCanvas {
    pub(crate) fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; (WIDTH * HEIGHT) as usize],
        }
    }

    pub(crate) fn count_pixels(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    pub(crate) fn all_pixels_are(&self, color: Rgb565) -> bool {
        self.count_pixels(color) == self.pixels.len()
    }

    pub(crate) fn pixel(&self, x: u32, y: u32) -> Rgb565 {
        self.pixels[(y * WIDTH + x) as usize]
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < WIDTH
                && (point.y as u32) < HEIGHT
            {
                self.pixels[point.y as usize * WIDTH as usize + point.x as usize] =
                    color;
            }
        }
        Ok(())
    }
}
