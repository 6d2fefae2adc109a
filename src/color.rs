use plotters::style::RGBColor;
use std::fmt;
use std::str::FromStr;

#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Color> for RGBColor {
    fn from(color: Color) -> RGBColor {
        RGBColor(color.r, color.g, color.b)
    }
}

impl Color {
    pub const BLACK: Color = Color::gray(0);
    pub const WHITE: Color = Color::gray(255);

    pub const fn gray(gray: u8) -> Color {
        Color::new(gray, gray, gray)
    }

    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

/// Formats as `#RRGGBB` with uppercase digits.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Color { r, g, b } = *self;
        write!(
            f,
            "\x1b[38;2;{};{};{}m██\x1b[0m Color({}, {}, {})",
            r, g, b, r, g, b
        )
    }
}

/// The input did not consist of exactly six hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorFormatError {
    InvalidLength(usize),
    InvalidDigit(char),
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid color format. Please use 6 hexadecimal digits.")
    }
}

impl std::error::Error for ColorFormatError {}

/// Parses `RRGGBB` (case-insensitive, no leading `#`).
impl FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(text: &str) -> Result<Color, ColorFormatError> {
        let length = text.chars().count();
        if length != 6 {
            return Err(ColorFormatError::InvalidLength(length));
        }

        let mut digits = [0u8; 6];
        for (digit, ch) in digits.iter_mut().zip(text.chars()) {
            *digit = ch
                .to_digit(16)
                .ok_or(ColorFormatError::InvalidDigit(ch))? as u8;
        }

        let byte = |i: usize| digits[i] << 4 | digits[i + 1];
        Ok(Color::new(byte(0), byte(2), byte(4)))
    }
}
