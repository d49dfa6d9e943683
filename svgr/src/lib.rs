//! Reads the drawable parts of an SVG document: `path`, `circle`, `ellipse`
//! and `text` elements as raw attribute bags, plus the path-data mini
//! language used by `<path d="...">`.

mod error;
mod parse;
mod path_data;
mod tag;
mod types;

pub use error::Error;
pub use parse::{load_svg, read_svg, Document};
pub use path_data::parse_path_data;
pub use tag::{AttributeBag, ElementKind, ShapeCollection};
pub use types::{leading_number, CommandKind, PathCommand};
