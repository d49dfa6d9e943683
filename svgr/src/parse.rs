use std::path::Path;

use log::debug;
use svg::node::element::tag;
use svg::parser::Event;

use crate::error::Error;
use crate::tag::{AttributeBag, ElementKind, ShapeCollection};
use crate::types::leading_number;

/// Shapes of one SVG document plus the root element's intrinsic size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub shapes: ShapeCollection,
}

// an open <text> element while its children stream past
struct OpenText {
    bag: AttributeBag,
    own: String,
    first_tspan: Option<String>,
    tspan_depth: usize,
    in_first_tspan: bool,
}

impl OpenText {
    fn new(bag: AttributeBag) -> Self {
	OpenText {
	    bag,
	    own: String::new(),
	    first_tspan: None,
	    tspan_depth: 0,
	    in_first_tspan: false,
	}
    }

    fn text(&mut self, text: &str) {
	if self.in_first_tspan {
	    self.first_tspan.get_or_insert_with(String::new).push_str(text);
	} else if self.tspan_depth == 0 {
	    self.own.push_str(text);
	}
    }

    fn open_tspan(&mut self) {
	self.tspan_depth += 1;
	if self.first_tspan.is_none() {
	    self.first_tspan = Some(String::new());
	    self.in_first_tspan = true;
	}
    }

    fn close_tspan(&mut self) {
	self.tspan_depth = self.tspan_depth.saturating_sub(1);
	if self.tspan_depth == 0 {
	    self.in_first_tspan = false;
	}
    }

    // first tspan wins, otherwise the element's own character data
    fn finish(mut self) -> AttributeBag {
	let own = self.own.trim();
	let content = match self.first_tspan {
	    Some(run) => Some(run),
	    None if !own.is_empty() => Some(String::from(own)),
	    None => None,
	};
	self.bag.set_content(content);
	self.bag
    }
}

fn dimension(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value.ends_with('%') {
	return None;
    }
    leading_number(value)
}

fn parse_events<'l, I>(events: I) -> Result<Document, Error>
where
    I: IntoIterator<Item = Event<'l>>,
{
    let mut document = Document::default();
    let mut open_text: Option<OpenText> = None;
    let mut seen_root = false;

    for event in events {
	match &event {
	    Event::Error(err) => return Err(Error::Parse(err.to_string())),
	    Event::Tag("svg", kind, attributes) if !seen_root && *kind != tag::Type::End => {
		seen_root = true;
		let bag = AttributeBag::from(attributes);
		document.width = dimension(bag.get("width"));
		document.height = dimension(bag.get("height"));
	    },
	    Event::Tag("text", tag::Type::Start, attributes) => {
		if open_text.is_none() {
		    open_text = Some(OpenText::new(AttributeBag::from(attributes)));
		}
	    },
	    Event::Tag("text", tag::Type::End, _) => {
		if let Some(text) = open_text.take() {
		    document.shapes.push(ElementKind::Text, text.finish());
		}
	    },
	    Event::Tag("tspan", tag::Type::Start, _) => {
		if let Some(open) = open_text.as_mut() {
		    open.open_tspan();
		}
	    },
	    Event::Tag("tspan", tag::Type::End, _) => {
		if let Some(open) = open_text.as_mut() {
		    open.close_tspan();
		}
	    },
	    Event::Tag(name, kind, attributes) if *kind != tag::Type::End => {
		if let Some(element) = ElementKind::from_tag(name) {
		    document.shapes.push(element, AttributeBag::from(attributes));
		}
	    },
	    Event::Text(text) => {
		if let Some(open) = open_text.as_mut() {
		    open.text(text);
		}
	    },
	    _ => (),
	}
    }

    debug!("found {} paths, {} circles, {} ellipses, {} texts",
	   document.shapes.paths.len(),
	   document.shapes.circles.len(),
	   document.shapes.ellipses.len(),
	   document.shapes.texts.len());

    Ok(document)
}

/// Reads the drawable elements of the SVG file at `path`.
pub fn load_svg<P: AsRef<Path>>(path: P) -> Result<Document, Error> {
    let path = path.as_ref();
    let mut content = String::new();
    let svg_doc = svg::open(path, &mut content).map_err(|source| Error::Open {
	path: path.to_path_buf(),
	source,
    })?;

    parse_events(svg_doc)
}

/// Reads the drawable elements of an in-memory SVG document.
pub fn read_svg(content: &str) -> Result<Document, Error> {
    let svg_doc = svg::read(content).map_err(Error::Read)?;
    parse_events(svg_doc)
}
