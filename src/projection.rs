use crate::color::Color;
use crate::linear::Point;
use crate::Size;

/// Rectangle the RG plane is drawn into.
///
/// Red runs along the x-axis from `margin` to `width - margin`. Green runs up the y-axis from
/// `height - margin` to `margin`. Requires `2 * margin` to be less than both dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct PlotRegion {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

/// Channel values that get a tick label on both axes.
pub(crate) const TICKS: [u8; 4] = [0, 64, 128, 192];

impl PlotRegion {
    pub fn new(size: Size, margin: u32) -> PlotRegion {
        PlotRegion {
            width: size.width,
            height: size.height,
            margin,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn inner_width(&self) -> u32 {
        self.width - 2 * self.margin
    }

    pub fn inner_height(&self) -> u32 {
        self.height - 2 * self.margin
    }

    /// Pixels covered by the background field.
    pub fn in_interior(&self, x: u32, y: u32) -> bool {
        (self.margin..self.width - self.margin).contains(&x)
            && (self.margin..self.height - self.margin).contains(&y)
    }

    /// Projects the red and green channels onto the plane. Blue does not affect the position.
    pub fn color_to_point(&self, color: Color) -> Point {
        let margin = self.margin as f64;
        let x = margin + self.inner_width() as f64 * color.r as f64 / 255.0;
        let y = self.height as f64 - margin - self.inner_height() as f64 * color.g as f64 / 255.0;
        Point::new(x as i32, y as i32)
    }

    /// Smallest red and green values that project onto `point`, combined with the given blue.
    ///
    /// Points outside the plane are clamped to its edges.
    pub fn point_to_color(&self, point: Point, b: u8) -> Color {
        let inner_width = self.inner_width() as i64;
        let inner_height = self.inner_height() as i64;
        let margin = self.margin as i64;

        let column = (point.x as i64 - margin).max(0).min(inner_width);
        let r = (255 * column + inner_width - 1) / inner_width;

        let row = (self.height as i64 - margin - point.y as i64)
            .max(0)
            .min(inner_height);
        let g = if row == 0 {
            0
        } else {
            255 * (row - 1) / inner_height + 1
        };

        Color::new(r.min(255) as u8, g.min(255) as u8, b)
    }

    /// Color of the plane at an interior pixel.
    pub fn background_color(&self, x: u32, y: u32) -> Color {
        let margin = self.margin as f64;
        let nx = (x as f64 - margin) / self.inner_width() as f64;
        let ny = (self.height as f64 - y as f64 - margin) / self.inner_height() as f64;

        let r = 255.0 * nx;
        let g = 255.0 * ny;
        let b = 255.0 * (1.0 - nx.max(ny));
        Color::new(r as u8, g as u8, b as u8)
    }

    /// Position of the tick for `value` on both axes: `x` on the red axis, `y` on the green axis.
    pub fn tick(&self, value: u8) -> Point {
        self.color_to_point(Color::new(value, value, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn region(width: u32, height: u32, margin: u32) -> PlotRegion {
        PlotRegion::new(Size { width, height }, margin)
    }

    #[test]
    fn corners() {
        let region = region(700, 700, 50);
        assert_eq!(region.color_to_point(Color::BLACK), Point::new(50, 650));
        assert_eq!(region.color_to_point(Color::WHITE), Point::new(650, 50));
        assert_eq!(
            region.color_to_point(Color::new(255, 0, 0)),
            Point::new(650, 650)
        );
        assert_eq!(
            region.color_to_point(Color::new(0, 255, 0)),
            Point::new(50, 50)
        );
    }

    #[test]
    fn ignores_blue() {
        let region = region(640, 480, 40);
        let a = region.color_to_point(Color::new(12, 200, 0));
        let b = region.color_to_point(Color::new(12, 200, 255));
        assert_eq!(a, b);
    }

    #[test]
    fn floors_coordinates() {
        let region = region(700, 700, 50);
        // 50 + 600 * 71 / 255 = 217.05..., 650 - 600 * 25 / 255 = 591.17...
        assert_eq!(
            region.color_to_point(Color::new(71, 25, 117)),
            Point::new(217, 591)
        );
        // 650 - 600 * 188 / 255 = 207.64...
        assert_eq!(
            region.color_to_point(Color::new(0, 188, 0)),
            Point::new(50, 207)
        );
    }

    #[test]
    fn inverse_recovers_channels() {
        let mut rng = rand::thread_rng();
        for region in [region(700, 700, 50), region(400, 355, 50), region(305, 305, 25)].iter() {
            for _ in 0..2000 {
                let color = Color::new(rng.gen(), rng.gen(), rng.gen());
                let point = region.color_to_point(color);
                assert_eq!(region.point_to_color(point, color.b), color, "{:?}", region);
            }
        }
    }

    #[test]
    fn inverse_on_small_region() {
        // fewer pixels than channel values, so neighbouring values share a pixel
        let region = region(100, 100, 10);
        for value in 0..=255u8 {
            let color = Color::new(value, value, 7);
            let point = region.color_to_point(color);
            let back = region.point_to_color(point, 7);
            assert!(back.r <= color.r && back.g <= color.g);
            assert_eq!(region.color_to_point(back), point);
        }
    }

    #[test]
    fn inverse_clamps_outside() {
        let region = region(700, 700, 50);
        assert_eq!(
            region.point_to_color(Point::new(-20, 900), 3),
            Color::new(0, 0, 3)
        );
        assert_eq!(
            region.point_to_color(Point::new(1000, 0), 3),
            Color::new(255, 255, 3)
        );
    }

    #[test]
    fn interior_bounds() {
        let region = region(700, 600, 50);
        assert!(region.in_interior(50, 50));
        assert!(region.in_interior(649, 549));
        assert!(!region.in_interior(650, 100));
        assert!(!region.in_interior(100, 550));
        assert!(!region.in_interior(49, 100));
    }

    #[test]
    fn background_corners() {
        let region = region(700, 700, 50);
        // bottom-left is blue, top-left green, bottom-right red
        assert_eq!(region.background_color(50, 649), Color::new(0, 0, 254));
        assert_eq!(region.background_color(50, 50), Color::new(0, 255, 0));
        assert_eq!(region.background_color(649, 649), Color::new(254, 0, 0));
        assert_eq!(region.background_color(649, 50), Color::new(254, 255, 0));
    }

    #[test]
    fn background_channels_in_range() {
        let region = region(301, 257, 33);
        for y in region.margin..region.height - region.margin {
            for x in region.margin..region.width - region.margin {
                let color = region.background_color(x, y);
                // blue fades with whichever of red and green is stronger
                assert!(color.b as u32 <= 255 - color.r.max(color.g) as u32 + 1);
            }
        }
    }

    #[test]
    fn ticks_follow_projection() {
        let region = region(700, 700, 50);
        let ticks: Vec<_> = TICKS.iter().map(|&value| region.tick(value)).collect();
        assert_eq!(
            ticks,
            vec![
                Point::new(50, 650),
                Point::new(200, 499),
                Point::new(351, 348),
                Point::new(501, 198),
            ]
        );
    }
}
