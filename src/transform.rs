use crate::color::Color;

/// Pushes red and blue apart, one unit per step, until one of them hits a bound.
///
/// Only applies when all three channels differ. Green is never touched.
pub(crate) fn anna_transform(color: Color) -> Color {
    let Color { mut r, g, mut b } = color;

    if r != g && g != b && r != b {
        if r < b {
            while r > 0 && b < 255 {
                r -= 1;
                b += 1;
            }
        } else if r > b {
            while r < 255 && b > 0 {
                r += 1;
                b -= 1;
            }
        }
    }

    Color { r, g, b }
}

/// Number of steps `anna_transform` takes on `color`.
pub(crate) fn anna_steps(color: Color) -> u32 {
    let Color { r, g, b } = color;
    if r == g || g == b || r == b {
        return 0;
    }

    let (r, b) = (r as u32, b as u32);
    if r < b {
        r.min(255 - b)
    } else {
        (255 - r).min(b)
    }
}
