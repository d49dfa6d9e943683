use svgr::{leading_number, parse_path_data, AttributeBag, ElementKind, PathCommand};

use crate::renderer::ShapeStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct PathShape {
    pub fill: String,
    pub stroke: String,
    pub commands: Vec<PathCommand>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub style: ShapeStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    pub style: ShapeStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub x: f64,
    pub y: f64,
    pub font: String,
    pub content: String,
    pub fill: String,
    pub stroke: String,
}

/// A drawable element with its attributes turned into typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path(PathShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Text(TextShape),
}

fn string(bag: &AttributeBag, name: &str) -> String {
    String::from(bag.get(name).unwrap_or_default())
}

// absent or non-numeric values become NaN and are left to the canvas
fn number(bag: &AttributeBag, name: &str) -> f64 {
    bag.get(name)
	.and_then(|v| v.trim().parse().ok())
	.unwrap_or(f64::NAN)
}

/// `"40px"` -> `40.0`; a radius with no leading number is NaN.
pub fn normalize_radius(value: Option<&str>) -> f64 {
    value.and_then(leading_number).unwrap_or(f64::NAN)
}

fn style(bag: &AttributeBag) -> ShapeStyle {
    ShapeStyle {
	fill_color: string(bag, "fill"),
	stroke_color: string(bag, "stroke"),
	stroke_width: bag.get("stroke-width").map(|_| number(bag, "stroke-width")),
    }
}

impl Shape {
    pub fn from_attributes(kind: ElementKind, bag: &AttributeBag) -> Shape {
	match kind {
	    ElementKind::Path => Shape::Path(PathShape {
		// a fill of "none" is passed through as is
		fill: string(bag, "fill"),
		stroke: string(bag, "stroke"),
		commands: parse_path_data(bag.get("d").unwrap_or_default()),
	    }),
	    ElementKind::Circle => Shape::Circle(CircleShape {
		cx: number(bag, "cx"),
		cy: number(bag, "cy"),
		r: normalize_radius(bag.get("r")),
		style: style(bag),
	    }),
	    ElementKind::Ellipse => Shape::Ellipse(EllipseShape {
		cx: number(bag, "cx"),
		cy: number(bag, "cy"),
		rx: number(bag, "rx"),
		ry: number(bag, "ry"),
		style: style(bag),
	    }),
	    ElementKind::Text => Shape::Text(TextShape {
		x: number(bag, "x"),
		y: number(bag, "y"),
		font: font(bag),
		content: String::from(bag.content().unwrap_or_default()),
		fill: string(bag, "fill"),
		stroke: string(bag, "stroke"),
	    }),
	}
    }

    pub fn kind(&self) -> ElementKind {
	match self {
	    Shape::Path(_) => ElementKind::Path,
	    Shape::Circle(_) => ElementKind::Circle,
	    Shape::Ellipse(_) => ElementKind::Ellipse,
	    Shape::Text(_) => ElementKind::Text,
	}
    }
}

// the `font` shorthand, else one assembled from font-size and font-family
fn font(bag: &AttributeBag) -> String {
    if let Some(font) = bag.get("font") {
	return String::from(font);
    }

    match (bag.get("font-size"), bag.get("font-family")) {
	(Some(size), Some(family)) => match size.trim().parse::<f64>() {
	    Ok(px) => format!("{}px {}", px, family),
	    Err(_) => format!("{} {}", size.trim(), family),
	},
	_ => String::new(),
    }
}
