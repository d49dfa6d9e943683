//! Draws the `path`, `circle`, `ellipse` and `text` elements of an SVG
//! document onto a raster canvas and exports the result as a PDF page.

mod cairo_canvas;
mod canvas;
mod color;
mod error;
mod export;
mod font;
mod orchestrator;
mod recording;
mod renderer;
mod shapes;

pub mod config;
pub mod logging;

pub use cairo_canvas::{quadratic_to_cubic, CairoCanvas};
pub use canvas::{Canvas, Raster, TextAlign};
pub use color::{Color, ParseColorError};
pub use error::Error;
pub use export::{DocumentExporter, PdfExporter, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, PX_TO_PT};
pub use font::{Font, ParseFontError};
pub use orchestrator::SvgToCanvas;
pub use recording::{Op, RecordingCanvas};
pub use renderer::{ellipse_arcs, PathState, ShapeRenderer, ShapeStyle};
pub use shapes::{normalize_radius, CircleShape, EllipseShape, PathShape, Shape, TextShape};

pub use svgr;
