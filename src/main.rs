mod canvas;
mod color;
mod font;
mod gradient;
mod linear;
mod plane;
mod projection;
mod transform;
mod visualize;

use crate::linear::Point;
use crate::projection::PlotRegion;
use crate::visualize::Visualization;
use anyhow::Context as _;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Size {
    width: u32,
    height: u32,
}

/// Visualizes the Anna equation: red and blue pushed apart until one of them hits a bound.
#[derive(Debug, Parser)]
#[command(name = "anna", version)]
struct Args {
    /// Start color as six hexadecimal digits, e.g. 471975. Colors are read from stdin, one per
    /// line, when omitted.
    color: Option<String>,

    /// Directory the gradient and plane images are written to.
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Width of the plane image.
    #[arg(long, default_value_t = 700)]
    width: u32,

    /// Height of the plane image.
    #[arg(long, default_value_t = 700)]
    height: u32,

    /// Space between the plane and the image border.
    #[arg(long, default_value_t = 50)]
    margin: u32,

    /// Only print the summary.
    #[arg(long)]
    no_images: bool,

    /// Print the channels found at pixel X,Y of the plane and exit.
    #[arg(long, value_name = "X,Y", value_parser = parse_pixel)]
    pick: Option<Point>,
}

fn parse_pixel(text: &str) -> Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, found `{}`", text))?;
    let coordinate = |value: &str| {
        value
            .trim()
            .parse::<i32>()
            .map_err(|error| format!("invalid coordinate `{}`: {}", value, error))
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

struct Output {
    directory: Option<PathBuf>,
    region: PlotRegion,
}

impl Output {
    fn write(&self, visualization: &Visualization) -> anyhow::Result<()> {
        let directory = match &self.directory {
            Some(directory) => directory,
            None => return Ok(()),
        };

        std::fs::create_dir_all(directory).with_context(|| {
            format!("failed to create output directory: {}", directory.display())
        })?;

        let gradient = visualization.gradient().into_canvas()?;
        save(&gradient, directory.join("gradient.png")).context("failed to save gradient")?;

        let plane = visualization.plane(self.region)?;
        save(&plane, directory.join("plane.png")).context("failed to save plane")?;

        Ok(())
    }

    /// Handles one visualize action. Invalid input prints the error and yields `None`.
    ///
    /// Images are only rewritten when the result differs from `previous`.
    fn visualize(
        &self,
        text: &str,
        previous: Option<Visualization>,
    ) -> anyhow::Result<Option<Visualization>> {
        match Visualization::parse(text) {
            Ok(visualization) => {
                println!("{}", visualization.summary());
                if previous == Some(visualization) {
                    tracing::debug!("color unchanged, keeping previous images");
                } else {
                    self.write(&visualization)?;
                }
                Ok(Some(visualization))
            }
            Err(error) => {
                tracing::warn!(input = text, ?error, "rejected color");
                println!("{}", error);
                Ok(None)
            }
        }
    }
}

fn save(canvas: &canvas::Canvas, path: PathBuf) -> anyhow::Result<()> {
    canvas.save_png(&path)?;
    let size = canvas.size();
    tracing::info!(
        path = %path.display(),
        width = size.width,
        height = size.height,
        "wrote image"
    );
    Ok(())
}

/// Largest plane side accepted on the command line.
const MAX_SIDE: u32 = 1 << 14;

fn plot_region(size: Size, margin: u32) -> anyhow::Result<PlotRegion> {
    anyhow::ensure!(
        size.width <= MAX_SIDE && size.height <= MAX_SIDE,
        "a {}x{} plane is larger than {}x{}",
        size.width,
        size.height,
        MAX_SIDE,
        MAX_SIDE
    );

    let fits = margin
        .checked_mul(2)
        .map_or(false, |both| both < size.width && both < size.height);
    anyhow::ensure!(
        fits,
        "margin {} does not fit a {}x{} plane",
        margin,
        size.width,
        size.height
    );

    Ok(PlotRegion::new(size, margin))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let size = Size {
        width: args.width,
        height: args.height,
    };
    let region = plot_region(size, args.margin)?;

    if let Some(pixel) = args.pick {
        println!("{}", pick(region, pixel));
        return Ok(());
    }

    let output = Output {
        directory: if args.no_images {
            None
        } else {
            Some(args.out)
        },
        region,
    };

    match args.color {
        Some(text) => {
            if output.visualize(&text, None)?.is_none() {
                std::process::exit(1);
            }
        }
        None => {
            let stdin = std::io::stdin();
            let mut current = None;
            for line in stdin.lock().lines() {
                let line = line.context("failed to read color from stdin")?;
                current = output.visualize(line.trim(), current)?;
            }
        }
    }

    Ok(())
}

/// Describes the channels that project onto `pixel`, clamping pixels outside the plane.
fn pick(region: PlotRegion, pixel: Point) -> String {
    let background = if pixel.x >= 0
        && pixel.y >= 0
        && region.in_interior(pixel.x as u32, pixel.y as u32)
    {
        Some(region.background_color(pixel.x as u32, pixel.y as u32))
    } else {
        tracing::warn!(x = pixel.x, y = pixel.y, "pixel is outside the plane, clamping");
        None
    };

    let color = region.point_to_color(pixel, background.map_or(0, |color| color.b));
    match background {
        Some(background) => format!(
            "Pixel ({}, {}): R {}, G {}, background {}",
            pixel.x, pixel.y, color.r, color.g, background
        ),
        None => format!("Pixel ({}, {}): R {}, G {}", pixel.x, pixel.y, color.r, color.g),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_argument() {
        assert_eq!(parse_pixel("217,591"), Ok(Point::new(217, 591)));
        assert_eq!(parse_pixel(" 3 , -4"), Ok(Point::new(3, -4)));
        assert!(parse_pixel("217").is_err());
        assert!(parse_pixel("a,b").is_err());
    }

    #[test]
    fn arguments() {
        let args = Args::try_parse_from(["anna", "471975", "-o", "out", "--no-images"])
            .expect("valid arguments");
        assert_eq!(args.color.as_deref(), Some("471975"));
        assert_eq!(args.out, PathBuf::from("out"));
        assert!(args.no_images);
        assert_eq!((args.width, args.height, args.margin), (700, 700, 50));
        assert!(args.pick.is_none());

        let args = Args::try_parse_from(["anna", "--pick", "10,20", "--width", "300"])
            .expect("valid arguments");
        assert_eq!(args.color, None);
        assert_eq!(args.pick, Some(Point::new(10, 20)));
        assert_eq!(args.width, 300);
    }

    #[test]
    fn summary_only_output() -> anyhow::Result<()> {
        let output = Output {
            directory: None,
            region: PlotRegion::new(
                Size {
                    width: 700,
                    height: 700,
                },
                50,
            ),
        };
        assert_eq!(
            output.visualize("471975", None)?.map(|v| v.end),
            Some(color::Color::new(0, 25, 188))
        );
        assert_eq!(output.visualize("12345G", None)?, None);
        Ok(())
    }

    #[test]
    fn writes_both_images() -> anyhow::Result<()> {
        let directory = std::env::temp_dir().join(format!("anna-output-{}", std::process::id()));
        let output = Output {
            directory: Some(directory.clone()),
            region: PlotRegion::new(
                Size {
                    width: 320,
                    height: 240,
                },
                40,
            ),
        };
        let written = output.visualize("471975", None);
        let gradient = image::open(directory.join("gradient.png"));
        let plane = image::open(directory.join("plane.png"));
        std::fs::remove_dir_all(&directory)?;

        written?;
        let gradient = gradient?.to_rgb8();
        let plane = plane?.to_rgb8();
        assert_eq!(gradient.dimensions(), (300, 50));
        assert_eq!(gradient.get_pixel(0, 0).0, [0x47, 0x19, 0x75]);
        assert_eq!(plane.dimensions(), (320, 240));
        Ok(())
    }

    #[test]
    fn unchanged_color_skips_images() -> anyhow::Result<()> {
        let directory = std::env::temp_dir().join(format!("anna-unchanged-{}", std::process::id()));
        let output = Output {
            directory: Some(directory.clone()),
            region: PlotRegion::new(
                Size {
                    width: 200,
                    height: 200,
                },
                20,
            ),
        };

        let previous = Visualization::new(color::Color::new(0x47, 0x19, 0x75));
        let current = output.visualize("471975", Some(previous))?;
        assert_eq!(current, Some(previous));
        assert!(!directory.exists());
        Ok(())
    }

    fn default_region() -> PlotRegion {
        PlotRegion::new(
            Size {
                width: 700,
                height: 700,
            },
            50,
        )
    }

    #[test]
    fn pick_inside_the_plane() {
        let region = default_region();
        let background = region.background_color(217, 591);
        assert_eq!(
            pick(region, Point::new(217, 591)),
            format!("Pixel (217, 591): R 71, G 25, background {}", background)
        );
    }

    #[test]
    fn pick_outside_clamps() {
        let region = default_region();
        assert_eq!(
            pick(region, Point::new(-20, 900)),
            "Pixel (-20, 900): R 0, G 0"
        );
        assert_eq!(
            pick(region, Point::new(1000, 10)),
            "Pixel (1000, 10): R 255, G 255"
        );
        // the right and top edges are outside the background
        assert_eq!(pick(region, Point::new(650, 50)), "Pixel (650, 50): R 255, G 255");
    }

    #[test]
    fn rejects_planes_that_do_not_fit() {
        let size = |width, height| Size { width, height };
        assert!(plot_region(size(700, 700), 50).is_ok());
        assert!(plot_region(size(700, 700), 350).is_err());
        assert!(plot_region(size(700, 100), 50).is_err());
        assert!(plot_region(size(700, 700), u32::MAX).is_err());
        assert!(plot_region(size(70_000, 70_000), 50).is_err());
        assert!(plot_region(size(u32::MAX, u32::MAX), u32::MAX / 2).is_err());
        assert!(plot_region(size(MAX_SIDE, MAX_SIDE), 1).is_ok());
    }
}
