use crate::color::Color;
use crate::Size;
use anyhow::Context as _;
use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};

/// Something that assigns colors to pixels independently of each other.
pub(crate) trait Field: Sync {
    /// Color at `(x, y)`, or `None` to leave the pixel as it is.
    fn sample(&self, x: u32, y: u32) -> Option<Color>;
}

/// Row-major RGB pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Canvas {
    size: Size,
    pixels: Vec<Color>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas").field("size", &self.size).finish()
    }
}

/// Number of bytes needed to store an RGB image of `size`, if it is addressable.
pub(crate) fn byte_count(size: Size) -> Option<usize> {
    (size.width as usize)
        .checked_mul(size.height as usize)?
        .checked_mul(std::mem::size_of::<Color>())
}

fn pixel_coords(size: Size) -> impl rayon::iter::IndexedParallelIterator<Item = (u32, u32)> {
    use rayon::prelude::*;

    let width = (size.width as usize).max(1);
    let count = size.width as usize * size.height as usize;
    (0..count)
        .into_par_iter()
        .map(move |index| ((index % width) as u32, (index / width) as u32))
}

impl Canvas {
    pub fn new(size: Size, fill: Color) -> anyhow::Result<Canvas> {
        let bytes = byte_count(size).with_context(|| {
            format!("a {}x{} image does not fit in memory", size.width, size.height)
        })?;
        Ok(Canvas {
            size,
            pixels: vec![fill; bytes / std::mem::size_of::<Color>()],
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    #[cfg(test)]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    /// Evaluates `field` for every pixel in parallel.
    pub fn fill_field(&mut self, field: &impl Field) {
        use rayon::prelude::*;

        pixel_coords(self.size)
            .zip_eq(self.pixels.par_iter_mut())
            .for_each(|((x, y), pixel)| {
                if let Some(color) = field.sample(x, y) {
                    *pixel = color;
                }
            });
    }

    /// Plotting surface in pixel coordinates that draws straight into this canvas.
    pub fn drawing_area(&mut self) -> DrawingArea<BitMapBackend<'_>, Shift> {
        let Size { width, height } = self.size;
        BitMapBackend::with_buffer(bytemuck::cast_slice_mut(&mut self.pixels), (width, height))
            .into_drawing_area()
    }

    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            bytemuck::cast_slice(&self.pixels),
            self.size.width,
            self.size.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("failed to write image: {}", path.display()))
    }
}
