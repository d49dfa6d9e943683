use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

impl Default for TextAlign {
    fn default() -> Self { TextAlign::Start }
}

/// A finished raster, PNG encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: i32,
    pub height: i32,
    pub png: Vec<u8>,
}

/// The drawing surface shapes are rendered onto.
///
/// Semantics follow a 2D canvas context: `stroke` and `fill` leave the
/// current path in place, a primitive given non-finite coordinates does
/// nothing, and a style value the surface does not understand is ignored.
pub trait Canvas {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    /// Reports a fault the surface ran into while drawing.
    fn status(&self) -> Result<(), Error> { Ok(()) }

    /// Takes the rendered raster for export.
    fn capture(&mut self) -> Result<Raster, Error>;
}
