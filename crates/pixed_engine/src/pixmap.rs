use crate::{Color, EngineError, Result};

/// A palette indexed raster image.
///
/// Pixels store indices into the palette. Every index is always smaller than
/// the palette length, the palette is never empty and there are exactly
/// `width * height` pixels stored row by row.
///
/// Mutators never panic: an out of range coordinate or palette index makes
/// them return `false` and leaves the pixmap untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: usize,
    height: usize,
    pixels: Vec<usize>,
    palette: Vec<Color>,
}

/// Number of pixels of a `width` x `height` image, `None` for empty or overflowing sizes.
fn pixel_count(width: usize, height: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    width.checked_mul(height)
}

impl Pixmap {
    /// Creates a pixmap with a single opaque black palette entry.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidDimensions` if width or height is 0 or the size overflows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_palette_size(width, height, 1)
    }

    /// Creates a pixmap with `palette_size` opaque black entries (at least one).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidDimensions` if width or height is 0 or
    /// `width * height` doesn't fit into `usize`.
    pub fn with_palette_size(width: usize, height: usize, palette_size: usize) -> Result<Self> {
        let Some(len) = pixel_count(width, height) else {
            return Err(EngineError::InvalidDimensions { width, height });
        };
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
            palette: vec![Color::BLACK; palette_size.max(1)],
        })
    }

    /// Builds a pixmap from already validated parts.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<usize>, palette: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        debug_assert!(!palette.is_empty());
        debug_assert!(pixels.iter().all(|&p| p < palette.len()));
        Self {
            width,
            height,
            pixels,
            palette,
        }
    }

    pub fn valid(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color_count(&self) -> usize {
        self.palette.len()
    }

    pub fn pixels(&self) -> &[usize] {
        &self.pixels
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Palette index at (x, y), 0 outside of the image.
    pub fn pixel(&self, x: usize, y: usize) -> usize {
        if self.valid(x, y) {
            return self.pixels[x + y * self.width];
        }
        0
    }

    pub fn pixel_color(&self, x: usize, y: usize) -> Color {
        if self.valid(x, y) {
            return self.color(self.pixel(x, y));
        }
        Color::transparent()
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, index: usize) -> bool {
        if self.valid(x, y) && index < self.palette.len() {
            self.pixels[x + y * self.width] = index;
            return true;
        }
        false
    }

    /// Sets the pixel to `color`, reusing a matching palette entry or appending a new one.
    pub fn set_pixel_color(&mut self, x: usize, y: usize, color: Color) -> bool {
        if !self.valid(x, y) {
            return false;
        }
        let index = match self.palette.iter().position(|c| *c == color) {
            Some(index) => index,
            None => self.add_color(color),
        };
        self.set_pixel(x, y, index)
    }

    /// Crops or pads the image, keeping the top left corner in place.
    /// Newly exposed pixels get index 0.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> bool {
        let Some(len) = pixel_count(new_width, new_height) else {
            return false;
        };
        let mut new_pixels = vec![0; len];
        let copy_width = self.width.min(new_width);
        for y in 0..self.height.min(new_height) {
            let src = y * self.width;
            let dest = y * new_width;
            new_pixels[dest..dest + copy_width].copy_from_slice(&self.pixels[src..src + copy_width]);
        }
        self.pixels = new_pixels;
        self.width = new_width;
        self.height = new_height;
        true
    }

    pub fn fill(&mut self, index: usize) -> bool {
        if index < self.palette.len() {
            self.pixels.fill(index);
            return true;
        }
        false
    }

    /// 4-connected fill of the area around (x, y) that shares its palette index.
    pub fn floodfill(&mut self, x: usize, y: usize, index: usize) -> bool {
        if !self.valid(x, y) || index >= self.palette.len() {
            return false;
        }
        let target = self.pixel(x, y);
        if target == index {
            return true;
        }

        let (width, height) = (self.width, self.height);
        let mut stack = vec![(x, y)];
        self.pixels[x + y * width] = index;

        while let Some((x, y)) = stack.pop() {
            let mut visit = |nx: usize, ny: usize| {
                let offset = nx + ny * width;
                if self.pixels[offset] == target {
                    self.pixels[offset] = index;
                    stack.push((nx, ny));
                }
            };
            if x > 0 {
                visit(x - 1, y);
            }
            if x + 1 < width {
                visit(x + 1, y);
            }
            if y > 0 {
                visit(x, y - 1);
            }
            if y + 1 < height {
                visit(x, y + 1);
            }
        }
        true
    }

    /// Palette entry at `index`, transparent if there is none.
    pub fn color(&self, index: usize) -> Color {
        self.palette.get(index).copied().unwrap_or_default()
    }

    pub fn add_color(&mut self, color: Color) -> usize {
        self.palette.push(color);
        self.palette.len() - 1
    }

    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        if let Some(entry) = self.palette.get_mut(index) {
            *entry = color;
            return true;
        }
        false
    }

    pub fn is_transparent_color(&self, index: usize) -> bool {
        self.palette.get(index).is_some_and(Color::is_transparent)
    }

    /// Grows the palette with opaque black or drops trailing entries.
    /// Pixels using a dropped entry fall back to index 0.
    pub fn resize_palette(&mut self, new_size: usize) -> bool {
        if new_size == 0 {
            return false;
        }
        if new_size < self.palette.len() {
            for p in self.pixels.iter_mut().filter(|p| **p >= new_size) {
                *p = 0;
            }
        }
        self.palette.resize(new_size, Color::BLACK);
        true
    }
}
