use std::path::PathBuf;

use log::{debug, info, trace};
use svgr::{ElementKind, ShapeCollection};

use crate::canvas::Canvas;
use crate::error::Error;
use crate::export::DocumentExporter;
use crate::renderer::{ShapeRenderer, ShapeStyle};
use crate::shapes::Shape;

/// Draws a document's shapes onto a canvas and hands the result to an exporter.
///
/// ```ignore
/// let mut svg_to_canvas = SvgToCanvas::initialize(document.shapes, canvas);
/// svg_to_canvas.render()?;
/// svg_to_canvas.export_document("drawing", &mut PdfExporter::new("."))?;
/// ```
pub struct SvgToCanvas<C> {
    renderer: ShapeRenderer<C>,
    shapes: ShapeCollection,
}

impl<C: Canvas> SvgToCanvas<C> {
    pub fn initialize(shapes: ShapeCollection, canvas: C) -> Self {
	SvgToCanvas {
	    renderer: ShapeRenderer::new(canvas),
	    shapes,
	}
    }

    pub fn canvas(&self) -> &C { self.renderer.canvas() }

    pub fn into_canvas(self) -> C { self.renderer.into_canvas() }

    /// Draws paths, then circles, then ellipses, then text. The first fault
    /// the canvas reports stops the run.
    pub fn render(&mut self) -> Result<(), Error> {
	for &kind in ElementKind::DRAW_ORDER.iter() {
	    let count = self.shapes.of_kind(kind).len();
	    if count > 0 {
		debug!("drawing {} {} element(s)", count, kind.tag_name());
	    }

	    for index in 0..count {
		let shape = Shape::from_attributes(kind, &self.shapes.of_kind(kind)[index]);
		self.draw(&shape);
		self.renderer.canvas().status()?;
	    }
	}

	Ok(())
    }

    fn apply_style(&mut self, style: &ShapeStyle) {
	self.renderer.set_fill_color(&style.fill_color);
	self.renderer.set_stroke_color(&style.stroke_color);
	if let Some(width) = style.stroke_width {
	    self.renderer.set_stroke_width(width);
	}
    }

    pub fn draw(&mut self, shape: &Shape) {
	trace!("{} {:?}", shape.kind().tag_name(), shape);

	match shape {
	    Shape::Path(path) => {
		self.renderer.styled_path(&path.fill, &path.stroke, &path.commands);
	    },
	    Shape::Circle(circle) => {
		self.apply_style(&circle.style);
		self.renderer.circle(circle.cx, circle.cy, circle.r, true);
	    },
	    Shape::Ellipse(ellipse) => {
		self.apply_style(&ellipse.style);
		self.renderer.ellipse(ellipse.cx, ellipse.cy, ellipse.rx, ellipse.ry, true);
	    },
	    Shape::Text(text) => {
		self.renderer.set_fill_color(&text.fill);
		self.renderer.set_stroke_color(&text.stroke);
		self.renderer.text(&text.font, &text.content, text.x, text.y);
	    },
	}
    }

    /// Captures the canvas once and exports it as `<base_name>.pdf`.
    pub fn export_document<E>(&mut self, base_name: &str, exporter: &mut E) -> Result<PathBuf, Error>
    where
	E: DocumentExporter + ?Sized,
    {
	let raster = self.renderer.canvas_mut().capture()?;
	let path = exporter.export(&raster, base_name)?;
	info!("exported {}x{} raster to {}", raster.width, raster.height, path.display());
	Ok(path)
    }
}
