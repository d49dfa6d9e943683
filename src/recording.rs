use crate::canvas::{Canvas, Raster, TextAlign};
use crate::error::Error;

/// One primitive call made on a `RecordingCanvas`.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadraticCurveTo(f64, f64, f64, f64),
    BezierCurveTo(f64, f64, f64, f64, f64, f64),
    Arc {
	cx: f64,
	cy: f64,
	radius: f64,
	start_angle: f64,
	end_angle: f64,
    },
    Stroke,
    Fill,
    SetFont(String),
    SetTextAlign(TextAlign),
    FillText(String, f64, f64),
    SetStrokeStyle(String),
    SetFillStyle(String),
    SetLineWidth(f64),
    Capture,
}

/// A canvas that draws nothing and keeps the calls made on it.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: i32,
    height: i32,
    ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
	RecordingCanvas { width, height, ops: Vec::new() }
    }

    pub fn ops(&self) -> &[Op] { &self.ops }

    pub fn take_ops(&mut self) -> Vec<Op> {
	std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    fn begin_path(&mut self) { self.ops.push(Op::BeginPath) }

    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(Op::MoveTo(x, y)) }

    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(Op::LineTo(x, y)) }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
	self.ops.push(Op::QuadraticCurveTo(cx, cy, x, y))
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
	self.ops.push(Op::BezierCurveTo(c1x, c1y, c2x, c2y, x, y))
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
	self.ops.push(Op::Arc { cx, cy, radius, start_angle, end_angle })
    }

    fn stroke(&mut self) { self.ops.push(Op::Stroke) }

    fn fill(&mut self) { self.ops.push(Op::Fill) }

    fn set_font(&mut self, font: &str) { self.ops.push(Op::SetFont(String::from(font))) }

    fn set_text_align(&mut self, align: TextAlign) { self.ops.push(Op::SetTextAlign(align)) }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
	self.ops.push(Op::FillText(String::from(text), x, y))
    }

    fn set_stroke_style(&mut self, color: &str) { self.ops.push(Op::SetStrokeStyle(String::from(color))) }

    fn set_fill_style(&mut self, color: &str) { self.ops.push(Op::SetFillStyle(String::from(color))) }

    fn set_line_width(&mut self, width: f64) { self.ops.push(Op::SetLineWidth(width)) }

    fn capture(&mut self) -> Result<Raster, Error> {
	self.ops.push(Op::Capture);
	Ok(Raster {
	    width: self.width,
	    height: self.height,
	    png: Vec::new(),
	})
    }
}
