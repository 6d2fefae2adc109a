use crate::canvas::{Canvas, Field};
use crate::color::Color;
use crate::Size;

/// Horizontal color ramp. Every row holds the same colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Gradient {
    size: Size,
    row: Vec<Color>,
}

impl Gradient {
    pub const DEFAULT_SIZE: Size = Size {
        width: 300,
        height: 50,
    };

    pub fn into_canvas(self) -> anyhow::Result<Canvas> {
        let mut canvas = Canvas::new(self.size, Color::BLACK)?;
        canvas.fill_field(&self);
        Ok(canvas)
    }
}

/// Every row repeats the same colors.
impl Field for Gradient {
    fn sample(&self, x: u32, _y: u32) -> Option<Color> {
        self.row.get(x as usize).copied()
    }
}

/// Column `x` holds `start + (end - start) * x / width`, rounded down, for every channel.
pub(crate) fn create_gradient(start: Color, end: Color, size: Size) -> Gradient {
    let width = size.width;
    let row = (0..width)
        .map(|x| {
            let channel = |from: u8, to: u8| {
                let delta = to as i64 - from as i64;
                (from as i64 + (delta * x as i64).div_euclid(width as i64)) as u8
            };
            Color::new(
                channel(start.r, end.r),
                channel(start.g, end.g),
                channel(start.b, end.b),
            )
        })
        .collect();

    Gradient { size, row }
}
