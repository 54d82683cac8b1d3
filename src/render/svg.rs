//! SVG render

use super::traits::{Point, Render};
use crate::config::DrawingConfig;
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Error, Write},
    path::{Path, PathBuf},
};

/// Margin around the figure, as a fraction of its larger extent
const MARGIN: f64 = 0.05;

/// Writes the traced path as a single stroked SVG path
#[derive(Debug)]
pub struct Svg {
    svg_file: PathBuf,
    title: String,
    width: u32,
    height: u32,
    stroke_width: f64,
    path: Vec<PathEl>,
    bounds: Option<(Point, Point)>,
}

impl Svg {
    pub fn new(path: impl AsRef<Path>, title: impl Into<String>, cfg: &DrawingConfig) -> Self {
        Self {
            svg_file: path.as_ref().to_owned(),
            title: title.into(),
            width: cfg.width,
            height: cfg.height,
            stroke_width: cfg.stroke_width,
            path: Vec::new(),
            bounds: None,
        }
    }

    fn extend_bounds(&mut self, p: Point) {
        let (lo, hi) = self.bounds.get_or_insert((p, p));
        lo.x = lo.x.min(p.x);
        lo.y = lo.y.min(p.y);
        hi.x = hi.x.max(p.x);
        hi.y = hi.y.max(p.y);
    }

    /// Visible area in SVG user units (y pointing down)
    fn view_box(&self) -> (f64, f64, f64, f64) {
        match self.bounds {
            Some((lo, hi)) => {
                let (w, h) = (hi.x - lo.x, hi.y - lo.y);
                let m = (w.max(h) * MARGIN).max(self.stroke_width);
                (lo.x - m, -hi.y - m, w + 2.0 * m, h + 2.0 * m)
            }
            None => {
                let (w, h) = (self.width as f64, self.height as f64);
                (-w / 2.0, -h / 2.0, w, h)
            }
        }
    }

    /// Write the document to `fd`
    pub fn write_to(&self, mut fd: impl Write) -> Result<(), Error> {
        let (width, height) = (self.width, self.height);
        let (left, top, w, h) = self.view_box();
        writeln!(fd, "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{left} {top} {w} {h}\" preserveAspectRatio=\"xMidYMid meet\">")?;
        writeln!(fd, "<title>{}</title>", escape(&self.title))?;

        if self.path.iter().any(|el| matches!(el, PathEl::Line(_))) {
            let sw = self.stroke_width;
            write!(fd, "<path fill=\"none\" stroke=\"black\" stroke-width=\"{sw}\" vector-effect=\"non-scaling-stroke\" d=\"")?;
            for el in &self.path {
                write!(fd, "{el}")?;
            }
            writeln!(fd, "\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>")?;
        }

        writeln!(fd, "</svg>")?;
        fd.flush()
    }
}

impl Render for Svg {
    fn move_to(&mut self, point: Point) {
        if let Some(PathEl::Move(last)) = self.path.last_mut() {
            *last = point;
        } else {
            self.path.push(PathEl::Move(point));
        }
    }

    fn line_to(&mut self, point: Point) {
        if self.path.is_empty() {
            self.path.push(PathEl::Move(Point::ORIGIN));
        }
        if let Some(&PathEl::Move(p)) = self.path.last() {
            self.extend_bounds(p);
        }
        self.path.push(PathEl::Line(point));
        self.extend_bounds(point);
    }

    fn finalize(self: Box<Self>) -> Result<(), Error> {
        let fd = File::create(&self.svg_file)?;
        self.write_to(BufWriter::new(fd))
    }
}

#[derive(Debug, Clone, Copy)]
enum PathEl {
    Move(Point),
    Line(Point),
}

impl fmt::Display for PathEl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use PathEl::*;
        match self {
            Move(Point { x, y }) => write!(f, "M{x} {yy}", yy = flip(*y)),
            Line(Point { x, y }) => write!(f, "L{x} {yy}", yy = flip(*y)),
        }
    }
}

/// SVG y axis points down
fn flip(y: f64) -> f64 {
    0.0 - y
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::Svg;
    use crate::{config::DrawingConfig, geometry::Point, render::Render};

    fn render(svg: &Svg) -> String {
        let mut buf = Vec::new();
        svg.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn path_and_view_box() {
        let mut svg = Svg::new("unused.svg", "Triangle", &DrawingConfig::default());
        svg.move_to(Point::new(0.0, 0.0));
        svg.move_to(Point::new(-50.0, -10.0));
        svg.line_to(Point::new(50.0, -10.0));
        svg.line_to(Point::new(0.0, 90.0));
        svg.line_to(Point::new(-50.0, -10.0));

        let text = render(&svg);
        assert!(text.contains("<title>Triangle</title>"));
        assert!(text.contains("d=\"M-50 10L50 10L0 -90L-50 10\""), "{text}");
        // 100x100 figure, 5 units of margin, y flipped
        assert!(text.contains("viewBox=\"-55 -95 110 110\""), "{text}");
    }

    #[test]
    fn empty_drawing() {
        let svg = Svg::new("unused.svg", "a < b", &DrawingConfig::default());
        let text = render(&svg);
        assert!(text.contains("viewBox=\"-500 -400 1000 800\""));
        assert!(text.contains("a &lt; b"));
        assert!(!text.contains("<path"));
    }

    #[test]
    fn pen_up_moves_split_subpaths() {
        let mut svg = Svg::new("unused.svg", "", &DrawingConfig::default());
        svg.line_to(Point::new(1.0, 0.0));
        svg.move_to(Point::new(5.0, 0.0));
        svg.line_to(Point::new(6.0, 0.0));
        let text = render(&svg);
        assert!(text.contains("d=\"M0 0L1 0M5 0L6 0\""), "{text}");
    }
}
