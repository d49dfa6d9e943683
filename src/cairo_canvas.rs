use cairo::{Context, Format, ImageSurface};
use log::{trace, warn};

use crate::canvas::{Canvas, Raster, TextAlign};
use crate::color::Color;
use crate::error::Error;
use crate::font::Font;

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Control points of the cubic equal to the quadratic from `p0` through
/// control `c` to `p`.
pub fn quadratic_to_cubic(p0: (f64, f64), c: (f64, f64), p: (f64, f64)) -> [f64; 6] {
    let two_thirds = 2.0 / 3.0;
    [
	p0.0 + two_thirds * (c.0 - p0.0),
	p0.1 + two_thirds * (c.1 - p0.1),
	p.0 + two_thirds * (c.0 - p.0),
	p.1 + two_thirds * (c.1 - p.1),
	p.0,
	p.1,
    ]
}

/// Canvas drawing into an ARGB32 cairo image surface.
pub struct CairoCanvas {
    surface: ImageSurface,
    cr: Context,
    fill: Color,
    stroke: Color,
    font: Font,
    align: TextAlign,
}

impl CairoCanvas {
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
	let surface = ImageSurface::create(Format::ARgb32, width, height).map_err(Error::Cairo)?;
	let cr = Context::new(&surface);
	cr.set_line_width(1.0);

	Ok(CairoCanvas {
	    surface,
	    cr,
	    fill: Color::black(),
	    stroke: Color::black(),
	    font: Font::default(),
	    align: TextAlign::Start,
	})
    }

    fn parse_color(value: &str) -> Option<Color> {
	match value.parse() {
	    Ok(color) => Some(color),
	    Err(err) => {
		warn!("ignoring color {:?}: {:?}", value, err);
		None
	    },
	}
    }
}

impl Canvas for CairoCanvas {
    fn begin_path(&mut self) {
	self.cr.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
	if finite(&[x, y]) {
	    self.cr.move_to(x, y);
	}
    }

    fn line_to(&mut self, x: f64, y: f64) {
	if finite(&[x, y]) {
	    self.cr.line_to(x, y);
	}
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
	if !finite(&[cx, cy, x, y]) {
	    return;
	}
	if !self.cr.has_current_point() {
	    self.cr.move_to(cx, cy);
	}

	let p0 = self.cr.get_current_point();
	let c = quadratic_to_cubic(p0, (cx, cy), (x, y));
	self.cr.curve_to(c[0], c[1], c[2], c[3], c[4], c[5]);
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
	if !finite(&[c1x, c1y, c2x, c2y, x, y]) {
	    return;
	}
	if !self.cr.has_current_point() {
	    self.cr.move_to(c1x, c1y);
	}
	self.cr.curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
	if !finite(&[cx, cy, radius, start_angle, end_angle]) || radius < 0.0 {
	    trace!("skipping arc at ({}, {}) r={}", cx, cy, radius);
	    return;
	}
	self.cr.arc(cx, cy, radius, start_angle, end_angle);
    }

    // canvas semantics: the path survives stroke and fill
    fn stroke(&mut self) {
	self.stroke.apply_to_context(&self.cr);
	self.cr.stroke_preserve();
    }

    fn fill(&mut self) {
	self.fill.apply_to_context(&self.cr);
	self.cr.fill_preserve();
    }

    fn set_font(&mut self, font: &str) {
	match font.parse() {
	    Ok(parsed) => self.font = parsed,
	    Err(err) => warn!("ignoring font {:?}: {:?}", font, err),
	}
    }

    fn set_text_align(&mut self, align: TextAlign) {
	self.align = align;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
	if !finite(&[x, y]) {
	    return;
	}

	self.font.apply_to_context(&self.cr);
	let extents = self.cr.text_extents(text);
	let dx = match self.align {
	    TextAlign::Start => 0.0,
	    TextAlign::Center => -(extents.x_bearing + extents.width / 2.0),
	    TextAlign::End => -(extents.x_bearing + extents.width),
	};

	// show_text moves the current point, keep the open path as it was
	let path = self.cr.copy_path();
	self.cr.new_path();
	self.fill.apply_to_context(&self.cr);
	self.cr.move_to(x + dx, y);
	self.cr.show_text(text);
	self.cr.new_path();
	self.cr.append_path(&path);
    }

    fn set_stroke_style(&mut self, color: &str) {
	if let Some(color) = CairoCanvas::parse_color(color) {
	    self.stroke = color;
	}
    }

    fn set_fill_style(&mut self, color: &str) {
	if let Some(color) = CairoCanvas::parse_color(color) {
	    self.fill = color;
	}
    }

    fn set_line_width(&mut self, width: f64) {
	if width.is_finite() && width > 0.0 {
	    self.cr.set_line_width(width);
	} else {
	    trace!("ignoring line width {}", width);
	}
    }

    fn status(&self) -> Result<(), Error> {
	match self.cr.status() {
	    cairo::Status::Success => Ok(()),
	    status => Err(Error::Cairo(status)),
	}
    }

    fn capture(&mut self) -> Result<Raster, Error> {
	self.status()?;
	self.surface.flush();

	let mut png = Vec::new();
	self.surface
	    .write_to_png(&mut png)
	    .map_err(|err| Error::Capture(format!("{:?}", err)))?;

	Ok(Raster {
	    width: self.surface.get_width(),
	    height: self.surface.get_height(),
	    png,
	})
    }
}
