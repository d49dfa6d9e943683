use std::f64::consts::PI;
use std::path::PathBuf;

use svg2pdf::svgr::{read_svg, AttributeBag, ShapeCollection};
use svg2pdf::{Canvas, DocumentExporter, Error, Op, Raster, RecordingCanvas, SvgToCanvas, TextAlign};

#[derive(Default)]
struct RecordingExporter {
    exports: Vec<(Raster, String)>,
}

impl DocumentExporter for RecordingExporter {
    fn export(&mut self, raster: &Raster, base_name: &str) -> Result<PathBuf, Error> {
	self.exports.push((raster.clone(), String::from(base_name)));
	Ok(PathBuf::from(format!("{}.pdf", base_name)))
    }
}

fn s(value: &str) -> String { String::from(value) }

// records like RecordingCanvas, and reports a fault once anything was stroked
struct FaultingCanvas {
    inner: RecordingCanvas,
}

impl Canvas for FaultingCanvas {
    fn begin_path(&mut self) { self.inner.begin_path() }
    fn move_to(&mut self, x: f64, y: f64) { self.inner.move_to(x, y) }
    fn line_to(&mut self, x: f64, y: f64) { self.inner.line_to(x, y) }
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
	self.inner.quadratic_curve_to(cx, cy, x, y)
    }
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
	self.inner.bezier_curve_to(c1x, c1y, c2x, c2y, x, y)
    }
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
	self.inner.arc(cx, cy, radius, start_angle, end_angle)
    }
    fn stroke(&mut self) { self.inner.stroke() }
    fn fill(&mut self) { self.inner.fill() }
    fn set_font(&mut self, font: &str) { self.inner.set_font(font) }
    fn set_text_align(&mut self, align: TextAlign) { self.inner.set_text_align(align) }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) { self.inner.fill_text(text, x, y) }
    fn set_stroke_style(&mut self, color: &str) { self.inner.set_stroke_style(color) }
    fn set_fill_style(&mut self, color: &str) { self.inner.set_fill_style(color) }
    fn set_line_width(&mut self, width: f64) { self.inner.set_line_width(width) }

    fn status(&self) -> Result<(), Error> {
	if self.inner.ops().contains(&Op::Stroke) {
	    Err(Error::Capture(s("surface fault")))
	} else {
	    Ok(())
	}
    }

    fn capture(&mut self) -> Result<Raster, Error> { self.inner.capture() }
}

#[test]
fn path_then_circle_then_one_capture() {
    let document = read_svg(r#"<svg width="100" height="100">
  <circle cx="50" cy="50" r="20" fill="red"/>
  <path d="M0,0 L10,10" fill="blue"/>
</svg>"#).unwrap();

    let mut svg_to_canvas = SvgToCanvas::initialize(document.shapes, RecordingCanvas::new(100, 100));
    svg_to_canvas.render().unwrap();

    let mut exporter = RecordingExporter::default();
    let path = svg_to_canvas.export_document("drawing", &mut exporter).unwrap();
    assert_eq!(path, PathBuf::from("drawing.pdf"));
    assert_eq!(exporter.exports.len(), 1);
    assert_eq!(exporter.exports[0].1, "drawing");

    assert_eq!(svg_to_canvas.canvas().ops(), &[
	// path
	Op::SetFillStyle(s("blue")),
	Op::SetStrokeStyle(s("")),
	Op::MoveTo(0.0, 0.0),
	Op::MoveTo(0.0, 0.0),
	Op::LineTo(10.0, 10.0),
	Op::Stroke,
	// circle
	Op::SetFillStyle(s("red")),
	Op::SetStrokeStyle(s("")),
	Op::BeginPath,
	Op::Arc { cx: 50.0, cy: 50.0, radius: 20.0, start_angle: 0.0, end_angle: 2.0 * PI },
	Op::Stroke,
	Op::Fill,
	Op::Capture,
    ]);
}

#[test]
fn shapes_are_drawn_by_kind_not_document_order() {
    let document = read_svg(r#"<svg>
  <text x="5" y="6" font="10px serif" fill="black"><tspan>label</tspan></text>
  <ellipse cx="1" cy="2" rx="3" ry="4" fill="green" stroke="black" stroke-width="2"/>
  <circle cx="1" cy="1" r="1px"/>
  <path d="M1,1" fill="none" stroke="black"/>
</svg>"#).unwrap();

    let mut svg_to_canvas = SvgToCanvas::initialize(document.shapes, RecordingCanvas::new(10, 10));
    svg_to_canvas.render().unwrap();

    let fills: Vec<&str> = svg_to_canvas.canvas().ops().iter().filter_map(|op| match op {
	Op::SetFillStyle(color) => Some(color.as_str()),
	_ => None,
    }).collect();
    assert_eq!(fills, vec!["none", "", "green", "black"]);

    let ops = svg_to_canvas.canvas().ops();
    assert!(ops.contains(&Op::SetLineWidth(2.0)));
    assert_eq!(&ops[ops.len() - 3..], &[
	Op::SetFont(s("10px serif")),
	Op::SetTextAlign(TextAlign::Center),
	Op::FillText(s("label"), 5.0, 6.0),
    ]);
}

#[test]
fn radius_with_unit_is_drawn_as_number() {
    let mut shapes = ShapeCollection::new();
    shapes.circles.push(AttributeBag::new().with("cx", "0").with("cy", "0").with("r", "40px"));
    shapes.circles.push(AttributeBag::new().with("cx", "0").with("cy", "0").with("r", "40"));

    let mut svg_to_canvas = SvgToCanvas::initialize(shapes, RecordingCanvas::new(10, 10));
    svg_to_canvas.render().unwrap();

    let radii: Vec<f64> = svg_to_canvas.into_canvas().take_ops().into_iter().filter_map(|op| match op {
	Op::Arc { radius, .. } => Some(radius),
	_ => None,
    }).collect();
    assert_eq!(radii, vec![40.0, 40.0]);
}

#[test]
fn empty_document_draws_nothing() {
    let document = read_svg("<svg></svg>").unwrap();
    let mut svg_to_canvas = SvgToCanvas::initialize(document.shapes, RecordingCanvas::new(1, 1));
    svg_to_canvas.render().unwrap();
    assert!(svg_to_canvas.canvas().ops().is_empty());
}

#[test]
fn first_surface_fault_stops_rendering() {
    let document = read_svg(r#"<svg>
  <path d="M0,0 L10,10" fill="blue"/>
  <path d="M5,5 L6,6" fill="green"/>
  <circle cx="1" cy="1" r="1" fill="red"/>
</svg>"#).unwrap();

    let canvas = FaultingCanvas { inner: RecordingCanvas::new(10, 10) };
    let mut svg_to_canvas = SvgToCanvas::initialize(document.shapes, canvas);
    assert!(svg_to_canvas.render().is_err());

    let ops = svg_to_canvas.into_canvas().inner.take_ops();
    assert_eq!(ops.iter().filter(|op| **op == Op::Stroke).count(), 1);
    assert!(!ops.contains(&Op::SetFillStyle(s("green"))));
    assert!(!ops.iter().any(|op| matches!(op, Op::Arc { .. })));
}
