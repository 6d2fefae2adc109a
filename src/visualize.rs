use crate::canvas::Canvas;
use crate::color::{Color, ColorFormatError};
use crate::gradient::{create_gradient, Gradient};
use crate::plane;
use crate::projection::PlotRegion;
use crate::transform::{anna_steps, anna_transform};

/// Result of transforming a single start color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Visualization {
    pub start: Color,
    pub end: Color,
}

impl Visualization {
    pub fn new(start: Color) -> Visualization {
        let end = anna_transform(start);
        tracing::debug!(?start, ?end, steps = anna_steps(start), "transformed color");
        Visualization { start, end }
    }

    pub fn parse(text: &str) -> Result<Visualization, ColorFormatError> {
        text.parse().map(Visualization::new)
    }

    pub fn summary(&self) -> String {
        format!("Start: {}, End: {}", self.start, self.end)
    }

    pub fn gradient(&self) -> Gradient {
        create_gradient(self.start, self.end, Gradient::DEFAULT_SIZE)
    }

    pub fn plane(&self, region: PlotRegion) -> anyhow::Result<Canvas> {
        plane::render_plane(self, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_summary() {
        let visualization = Visualization::parse("471975");
        assert_eq!(
            visualization.map(|v| v.summary()),
            Ok("Start: #471975, End: #0019BC".to_string())
        );
    }

    #[test]
    fn lowercase_input_prints_uppercase() {
        // blue reaches 255 after 16 steps
        assert_eq!(
            Visualization::parse("abcdef").map(|v| v.summary()),
            Ok("Start: #ABCDEF, End: #9BCDFF".to_string())
        );
    }

    #[test]
    fn invalid_inputs() {
        for &text in ["12345", "12345G", "", "1234567", "#47197"].iter() {
            assert!(Visualization::parse(text).is_err(), "{:?}", text);
        }
    }

    #[test]
    fn gradient_spans_the_pair() -> anyhow::Result<()> {
        let visualization = Visualization::new(Color::new(200, 10, 100));
        let canvas = visualization.gradient().into_canvas()?;
        assert_eq!(canvas.size(), Gradient::DEFAULT_SIZE);
        assert_eq!(canvas.get(0, 0), Some(visualization.start));
        assert_eq!(visualization.end, Color::new(255, 10, 45));
        Ok(())
    }
}
