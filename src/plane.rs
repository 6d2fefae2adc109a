//! Chart of the plane through RGB space that `PlotRegion` projects onto.

use crate::canvas::{Canvas, Field};
use crate::color::Color;
use crate::font::draw_text;
use crate::linear::Point;
use crate::projection::{PlotRegion, TICKS};
use crate::visualize::Visualization;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::element::{Circle, PathElement};
use plotters::series::DashedLineSeries;
use plotters::style::{Color as _, RGBColor, BLACK, WHITE};

const AXIS_THICKNESS: u32 = 2;
const LINE_THICKNESS: u32 = 2;
const POINT_RADIUS: u32 = 5;
const RING_THICKNESS: u32 = 2;
const DASH_LENGTH: u32 = 8;
const DASH_GAP: u32 = 4;

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Fills the interior of a region with its background colors.
struct Background(PlotRegion);

impl Field for Background {
    fn sample(&self, x: u32, y: u32) -> Option<Color> {
        let Background(region) = self;
        if region.in_interior(x, y) {
            Some(region.background_color(x, y))
        } else {
            None
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Anchor {
    Low,
    Middle,
    High,
}

/// Named color printed next to the part of the plane where it appears.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Landmark {
    pub name: &'static str,
    pub color: Color,
    horizontal: Anchor,
    vertical: Anchor,
    offset: Point,
}

impl Landmark {
    const fn new(
        name: &'static str,
        color: Color,
        horizontal: Anchor,
        vertical: Anchor,
        offset: Point,
    ) -> Landmark {
        Landmark {
            name,
            color,
            horizontal,
            vertical,
            offset,
        }
    }

    pub fn text(&self) -> String {
        let Color { r, g, b } = self.color;
        format!("{} ({}, {}, {})", self.name, r, g, b)
    }

    /// Baseline origin of the label. `Low` is the left or bottom edge of the plane.
    pub fn position(&self, region: PlotRegion) -> Point {
        let width = region.width as i32;
        let height = region.height as i32;
        let margin = region.margin as i32;

        let x = match self.horizontal {
            Anchor::Low => margin,
            Anchor::Middle => width / 2,
            Anchor::High => width - margin,
        };
        let y = match self.vertical {
            Anchor::Low => height - margin,
            Anchor::Middle => height / 2,
            Anchor::High => margin,
        };
        Point::new(x, y) + self.offset
    }
}

const BELOW: i32 = 28;
const ABOVE: i32 = -18;

pub(crate) const LANDMARKS: [Landmark; 8] = {
    use Anchor::*;
    [
        Landmark::new("Blue", Color::new(0, 0, 255), Low, Low, Point::new(0, BELOW)),
        Landmark::new("Green", Color::new(0, 255, 0), Low, High, Point::new(0, ABOVE)),
        Landmark::new("Red", Color::new(255, 0, 0), High, Low, Point::new(-48, BELOW)),
        Landmark::new("Yellow", Color::new(255, 255, 0), High, High, Point::new(-48, ABOVE)),
        Landmark::new("Cyan", Color::new(0, 255, 255), Low, Middle, Point::new(8, 0)),
        Landmark::new("Orange", Color::new(255, 128, 0), High, Middle, Point::new(-54, 0)),
        Landmark::new("Magenta", Color::new(255, 0, 255), Middle, Low, Point::new(-38, BELOW)),
        Landmark::new("Chartreuse", Color::new(128, 255, 0), Middle, High, Point::new(-38, ABOVE)),
    ]
};

/// Label drawn beside a plotted color.
pub(crate) fn point_label(label: &str, color: Color) -> String {
    format!("{}: ({}, {}, {})", label, color.r, color.g, color.b)
}

pub(crate) fn render_plane(
    visualization: &Visualization,
    region: PlotRegion,
) -> anyhow::Result<Canvas> {
    let mut canvas = Canvas::new(region.size(), Color::WHITE)?;
    canvas.fill_field(&Background(region));

    {
        let area = canvas.drawing_area();
        draw_chart(&area, visualization, region)
            .and_then(|()| area.present())
            .map_err(|error| anyhow::anyhow!("failed to draw plane: {}", error))?;
    }

    Ok(canvas)
}

fn draw_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    visualization: &Visualization,
    region: PlotRegion,
) -> DrawResult<DB> {
    draw_axes(area, region)?;

    for landmark in LANDMARKS.iter() {
        draw_text(area, landmark.position(region), &landmark.text(), BLACK)?;
    }

    draw_points(area, visualization, region)
}

fn draw_axes<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, region: PlotRegion) -> DrawResult<DB> {
    let width = region.width as i32;
    let height = region.height as i32;
    let margin = region.margin as i32;
    let origin = (margin, height - margin);

    for &end in [(width - margin, height - margin), (margin, margin)].iter() {
        area.draw(&PathElement::new(
            vec![origin, end],
            BLACK.stroke_width(AXIS_THICKNESS),
        ))?;
    }

    draw_text(area, Point::new(width - margin + 5, height - margin + 15), "R", BLACK)?;
    draw_text(area, Point::new(margin - 15, margin - 5), "G", BLACK)?;

    for &value in TICKS.iter() {
        let tick = region.tick(value);
        let label = value.to_string();
        draw_text(area, Point::new(tick.x, height - margin + 15), &label, BLACK)?;
        draw_text(area, Point::new(margin - 30, tick.y), &label, BLACK)?;
    }

    Ok(())
}

fn draw_points<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    visualization: &Visualization,
    region: PlotRegion,
) -> DrawResult<DB> {
    let start = region.color_to_point(visualization.start);
    let end = region.color_to_point(visualization.end);

    let path: Vec<(i32, i32)> = vec![start.into(), end.into()];
    let connector = DashedLineSeries::new(
        path,
        DASH_LENGTH,
        DASH_GAP,
        WHITE.stroke_width(LINE_THICKNESS),
    );
    for dash in connector {
        area.draw(&dash)?;
    }

    let points = [
        (start, visualization.start, "Start"),
        (end, visualization.end, "End"),
    ];
    for &(point, color, label) in points.iter() {
        let center: (i32, i32) = point.into();
        area.draw(&Circle::new(center, POINT_RADIUS, RGBColor::from(color).filled()))?;
        area.draw(&Circle::new(center, POINT_RADIUS, WHITE.stroke_width(RING_THICKNESS)))?;
        draw_text(area, point + Point::new(10, 10), &point_label(label, color), BLACK)?;
    }

    Ok(())
}
