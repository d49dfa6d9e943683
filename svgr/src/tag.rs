use std::collections::BTreeMap;

use svg::node::Attributes;

/// The element kinds that get drawn, in the order they are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Path,
    Circle,
    Ellipse,
    Text,
}

impl ElementKind {
    pub const DRAW_ORDER: [ElementKind; 4] = [
	ElementKind::Path,
	ElementKind::Circle,
	ElementKind::Ellipse,
	ElementKind::Text,
    ];

    pub fn from_tag(name: &str) -> Option<ElementKind> {
	match name {
	    "path" => Some(ElementKind::Path),
	    "circle" => Some(ElementKind::Circle),
	    "ellipse" => Some(ElementKind::Ellipse),
	    "text" => Some(ElementKind::Text),
	    _ => None,
	}
    }

    pub fn tag_name(self) -> &'static str {
	match self {
	    ElementKind::Path => "path",
	    ElementKind::Circle => "circle",
	    ElementKind::Ellipse => "ellipse",
	    ElementKind::Text => "text",
	}
    }
}

/// Raw attribute strings of one element, plus its text content for `<text>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBag {
    attributes: BTreeMap<String, String>,
    content: Option<String>,
}

impl AttributeBag {
    pub fn new() -> Self { AttributeBag::default() }

    pub fn with(mut self, name: &str, value: &str) -> Self {
	self.insert(name, value);
	self
    }

    pub fn with_content(mut self, content: &str) -> Self {
	self.content = Some(String::from(content));
	self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
	self.attributes.insert(String::from(name), String::from(value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
	self.attributes.get(name).map(String::as_str)
    }

    pub fn content(&self) -> Option<&str> {
	self.content.as_deref()
    }

    pub(crate) fn set_content(&mut self, content: Option<String>) {
	self.content = content;
    }
}

impl From<&Attributes> for AttributeBag {
    fn from(attributes: &Attributes) -> Self {
	let mut bag = AttributeBag::new();
	for (name, value) in attributes {
	    bag.insert(name, value);
	}
	bag
    }
}

/// Attribute bags per element kind, each list in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeCollection {
    pub paths: Vec<AttributeBag>,
    pub circles: Vec<AttributeBag>,
    pub ellipses: Vec<AttributeBag>,
    pub texts: Vec<AttributeBag>,
}

impl ShapeCollection {
    pub fn new() -> Self { ShapeCollection::default() }

    pub fn of_kind(&self, kind: ElementKind) -> &[AttributeBag] {
	match kind {
	    ElementKind::Path => &self.paths,
	    ElementKind::Circle => &self.circles,
	    ElementKind::Ellipse => &self.ellipses,
	    ElementKind::Text => &self.texts,
	}
    }

    pub fn push(&mut self, kind: ElementKind, bag: AttributeBag) {
	match kind {
	    ElementKind::Path => self.paths.push(bag),
	    ElementKind::Circle => self.circles.push(bag),
	    ElementKind::Ellipse => self.ellipses.push(bag),
	    ElementKind::Text => self.texts.push(bag),
	}
    }

    pub fn len(&self) -> usize {
	ElementKind::DRAW_ORDER.iter().map(|&kind| self.of_kind(kind).len()).sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
