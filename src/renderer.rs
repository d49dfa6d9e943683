use std::f64::consts::PI;

use log::trace;
use svgr::{CommandKind, PathCommand};

use crate::canvas::{Canvas, TextAlign};

// control point offset for a quarter circle drawn as one cubic bezier
const KAPPA: f64 = 0.5522848;

/// Style state last handed to the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStyle {
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: Option<f64>,
}

/// Cursor carried through one path's commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathState {
    pub previous_point: Option<(f64, f64)>,
}

impl PathState {
    pub fn advance(self, command: &PathCommand) -> PathState {
	PathState { previous_point: Some(command.end_point()) }
    }
}

/// Start point and the four cubic segments `(c1x, c1y, c2x, c2y, x, y)`
/// approximating the ellipse centred on `(cx, cy)`.
pub fn ellipse_arcs(cx: f64, cy: f64, rx: f64, ry: f64) -> ((f64, f64), [[f64; 6]; 4]) {
    let w = rx * 2.0;
    let h = ry * 2.0;
    let x = cx - w / 2.0;
    let y = cy - h / 2.0;

    let ox = (w / 2.0) * KAPPA;
    let oy = (h / 2.0) * KAPPA;
    let xe = x + w;
    let ye = y + h;
    let xm = x + w / 2.0;
    let ym = y + h / 2.0;

    ((x, ym), [
	[x, ym - oy, xm - ox, y, xm, y],
	[xm + ox, y, xe, ym - oy, xe, ym],
	[xe, ym + oy, xm + ox, ye, xm, ye],
	[xm - ox, ye, x, ym + oy, x, ym],
    ])
}

/// Draws shapes onto a canvas it owns, keeping track of the style it set.
pub struct ShapeRenderer<C> {
    canvas: C,
    style: ShapeStyle,
}

impl<C: Canvas> ShapeRenderer<C> {
    pub fn new(canvas: C) -> Self {
	ShapeRenderer { canvas, style: ShapeStyle::default() }
    }

    pub fn canvas(&self) -> &C { &self.canvas }

    pub fn canvas_mut(&mut self) -> &mut C { &mut self.canvas }

    pub fn into_canvas(self) -> C { self.canvas }

    pub fn style(&self) -> &ShapeStyle { &self.style }

    pub fn move_to(&mut self, x: f64, y: f64) {
	self.canvas.move_to(x, y);
    }

    pub fn line(&mut self, start_x: f64, start_y: f64, end_x: f64, end_y: f64) {
	self.canvas.move_to(start_x, start_y);
	self.canvas.line_to(end_x, end_y);
	self.canvas.stroke();
    }

    /// Quadratic curve from the canvas' current point; the start
    /// coordinates are accepted but not used.
    pub fn curve_segment(&mut self, _start_x: f64, _start_y: f64,
			 control_x: f64, control_y: f64, end_x: f64, end_y: f64) {
	self.canvas.quadratic_curve_to(control_x, control_y, end_x, end_y);
	self.canvas.stroke();
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, fill: bool) {
	self.canvas.begin_path();
	self.canvas.arc(cx, cy, radius, 0.0, 2.0 * PI);
	self.canvas.stroke();
	if fill {
	    self.canvas.fill();
	}
    }

    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, fill: bool) {
	let ((x, y), arcs) = ellipse_arcs(cx, cy, rx, ry);

	self.canvas.begin_path();
	self.canvas.move_to(x, y);
	for a in arcs.iter() {
	    self.canvas.bezier_curve_to(a[0], a[1], a[2], a[3], a[4], a[5]);
	}
	self.canvas.stroke();
	if fill {
	    self.canvas.fill();
	}
    }

    fn apply(&mut self, state: PathState, command: &PathCommand) -> PathState {
	trace!("path command {} {:?}", command.kind.letter(), command.args);

	match command.kind {
	    CommandKind::MoveTo => self.move_to(command.arg(0), command.arg(1)),
	    CommandKind::CurveSegment => self.curve_segment(
		command.arg(0), command.arg(1),
		command.arg(2), command.arg(3),
		command.arg(4), command.arg(5)),
	    CommandKind::LineTo => {
		let (x, y) = state.previous_point.unwrap_or((f64::NAN, f64::NAN));
		self.line(x, y, command.arg(0), command.arg(1));
	    },
	}

	state.advance(command)
    }

    pub fn styled_path(&mut self, fill_color: &str, stroke_color: &str, commands: &[PathCommand]) {
	self.set_fill_color(fill_color);
	self.set_stroke_color(stroke_color);

	commands.iter().fold(PathState::default(), |state, command| self.apply(state, command));
    }

    pub fn text(&mut self, font: &str, content: &str, x: f64, y: f64) {
	self.canvas.set_font(font);
	self.canvas.set_text_align(TextAlign::Center);
	self.canvas.fill_text(content, x, y);
    }

    pub fn set_stroke_color(&mut self, color: &str) {
	self.style.stroke_color = String::from(color);
	self.canvas.set_stroke_style(color);
    }

    pub fn set_fill_color(&mut self, color: &str) {
	self.style.fill_color = String::from(color);
	self.canvas.set_fill_style(color);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
	self.style.stroke_width = Some(width);
	self.canvas.set_line_width(width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Op, RecordingCanvas};

    fn renderer() -> ShapeRenderer<RecordingCanvas> {
	ShapeRenderer::new(RecordingCanvas::new(100, 100))
    }

    fn cubic_point(p0: (f64, f64), a: &[f64; 6], t: f64) -> (f64, f64) {
	let u = 1.0 - t;
	let b0 = u * u * u;
	let b1 = 3.0 * u * u * t;
	let b2 = 3.0 * u * t * t;
	let b3 = t * t * t;
	(b0 * p0.0 + b1 * a[0] + b2 * a[2] + b3 * a[4],
	 b0 * p0.1 + b1 * a[1] + b2 * a[3] + b3 * a[5])
    }

    #[test]
    fn line_moves_then_strokes() {
	let mut r = renderer();
	r.line(1.0, 2.0, 3.0, 4.0);
	assert_eq!(r.canvas().ops(), &[Op::MoveTo(1.0, 2.0), Op::LineTo(3.0, 4.0), Op::Stroke]);
    }

    #[test]
    fn curve_segment_ignores_start_point() {
	let mut a = renderer();
	a.move_to(5.0, 5.0);
	a.curve_segment(999.0, 999.0, 10.0, 10.0, 50.0, 50.0);

	let mut b = renderer();
	b.move_to(5.0, 5.0);
	b.curve_segment(0.0, 0.0, 10.0, 10.0, 50.0, 50.0);

	assert_eq!(a.canvas().ops(), b.canvas().ops());
	assert_eq!(a.canvas().ops(), &[
	    Op::MoveTo(5.0, 5.0),
	    Op::QuadraticCurveTo(10.0, 10.0, 50.0, 50.0),
	    Op::Stroke,
	]);
    }

    #[test]
    fn circle_fills_only_when_asked() {
	let mut r = renderer();
	r.circle(50.0, 50.0, 20.0, false);
	assert_eq!(r.canvas().ops(), &[
	    Op::BeginPath,
	    Op::Arc { cx: 50.0, cy: 50.0, radius: 20.0, start_angle: 0.0, end_angle: 2.0 * PI },
	    Op::Stroke,
	]);

	let mut r = renderer();
	r.circle(50.0, 50.0, 20.0, true);
	assert_eq!(r.canvas().ops().last(), Some(&Op::Fill));
    }

    #[test]
    fn ellipse_visits_the_four_extremes() {
	let mut r = renderer();
	r.ellipse(50.0, 40.0, 30.0, 10.0, true);
	let ops = r.canvas().ops();

	assert_eq!(ops[0], Op::BeginPath);
	assert_eq!(ops[1], Op::MoveTo(20.0, 40.0));
	let ends: Vec<(f64, f64)> = ops[2..6].iter().map(|op| match op {
	    Op::BezierCurveTo(_, _, _, _, x, y) => (*x, *y),
	    other => panic!("unexpected op {:?}", other),
	}).collect();
	assert_eq!(ends, vec![(50.0, 30.0), (80.0, 40.0), (50.0, 50.0), (20.0, 40.0)]);
	assert_eq!(&ops[6..], &[Op::Stroke, Op::Fill]);
    }

    #[test]
    fn ellipse_with_equal_radii_matches_circle() {
	let (cx, cy, r) = (50.0, 50.0, 20.0);
	let (start, arcs) = ellipse_arcs(cx, cy, r, r);

	let mut p0 = start;
	for a in arcs.iter() {
	    for step in 0..=10 {
		let (x, y) = cubic_point(p0, a, step as f64 / 10.0);
		let distance = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
		assert!((distance - r).abs() < r * 1e-3, "point ({}, {}) is {} from centre", x, y, distance);
	    }
	    p0 = (a[4], a[5]);
	}
    }

    #[test]
    fn styled_path_draws_lines_from_previous_point() {
	let mut r = renderer();
	r.styled_path("blue", "black", &[
	    PathCommand::move_to(0.0, 0.0),
	    PathCommand::line_to(10.0, 10.0),
	    PathCommand::line_to(20.0, 0.0),
	]);

	assert_eq!(r.canvas().ops(), &[
	    Op::SetFillStyle(String::from("blue")),
	    Op::SetStrokeStyle(String::from("black")),
	    Op::MoveTo(0.0, 0.0),
	    Op::MoveTo(0.0, 0.0),
	    Op::LineTo(10.0, 10.0),
	    Op::Stroke,
	    Op::MoveTo(10.0, 10.0),
	    Op::LineTo(20.0, 0.0),
	    Op::Stroke,
	]);
    }

    #[test]
    fn line_after_curve_starts_at_curve_end() {
	let mut r = renderer();
	r.styled_path("none", "black", &[
	    PathCommand::move_to(0.0, 0.0),
	    PathCommand::curve(1.0, 1.0, 5.0, 5.0, 8.0, 9.0),
	    PathCommand::line_to(20.0, 20.0),
	]);

	let ops = r.canvas().ops();
	assert_eq!(&ops[ops.len() - 3..], &[Op::MoveTo(8.0, 9.0), Op::LineTo(20.0, 20.0), Op::Stroke]);
    }

    #[test]
    fn line_without_previous_point_starts_at_nan() {
	let mut r = renderer();
	r.styled_path("", "", &[PathCommand::line_to(3.0, 4.0)]);

	match r.canvas().ops()[2] {
	    Op::MoveTo(x, y) => assert!(x.is_nan() && y.is_nan()),
	    ref other => panic!("unexpected op {:?}", other),
	}
    }

    #[test]
    fn text_is_centred() {
	let mut r = renderer();
	r.text("20px serif", "hi", 5.0, 6.0);
	assert_eq!(r.canvas().ops(), &[
	    Op::SetFont(String::from("20px serif")),
	    Op::SetTextAlign(TextAlign::Center),
	    Op::FillText(String::from("hi"), 5.0, 6.0),
	]);
    }

    #[test]
    fn setters_track_style() {
	let mut r = renderer();
	r.set_fill_color("red");
	r.set_stroke_color("#000");
	r.set_stroke_width(3.0);

	assert_eq!(r.style(), &ShapeStyle {
	    fill_color: String::from("red"),
	    stroke_color: String::from("#000"),
	    stroke_width: Some(3.0),
	});
    }
}
