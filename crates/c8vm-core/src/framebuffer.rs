use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const WIDTH: usize = DISPLAY_WIDTH as usize;
const HEIGHT: usize = DISPLAY_HEIGHT as usize;

/// The black and white pixels of the chip8 display, stored row by row so pixel (x, y) lives at
/// `x + y * 64`.
///
/// The presentation side owns one of these and lends it to the cpu for the duration of a cycle,
/// the cpu is the only writer while it holds it. The dirty flag tells the owner whether anything
/// changed since it last looked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [bool; WIDTH * HEIGHT],
    dirty: bool,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// A blank screen, marked dirty so it gets drawn at least once
    pub fn new() -> Self {
        Self {
            pixels: [false; WIDTH * HEIGHT],
            dirty: true,
        }
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Turns all the pixels off
    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = false);
        self.dirty = true;
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[(x % WIDTH) + (y % HEIGHT) * WIDTH]
    }

    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.pixels[(x % WIDTH) + (y % HEIGHT) * WIDTH] = on;
        self.dirty = true;
    }

    /// Xors an 8 pixel wide sprite onto the screen, one byte per row with the most significant
    /// bit on the left. Pixels that fall off an edge wrap around to the opposite side.
    ///
    /// Returns true when a pixel that was on got turned off (a collision).
    pub fn draw_sprite(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let mut collision = false;
        for (row, sprite) in rows.iter().enumerate() {
            let py = (y + row) % HEIGHT;
            for column in 0..8 {
                if sprite & (0x80 >> column) == 0 {
                    continue;
                }
                let px = (x + column) % WIDTH;
                let pixel = &mut self.pixels[px + py * WIDTH];
                collision |= *pixel;
                *pixel ^= true;
            }
        }
        self.dirty = true;
        collision
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Iterates over `(x, y)` of every pixel that is on
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(index, _)| (index % WIDTH, index / WIDTH))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and resets it
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
