use std::str::FromStr;

use nom::{
    bytes::complete::tag_no_case,
    character::complete::{char, space0},
    combinator::opt,
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, pair, preceded, tuple},
    Finish, IResult,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    RGBA(f64, f64, f64, f64),
    RGB(f64, f64, f64),
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseColorError(pub String);

const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("lime", (0, 255, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("cyan", (0, 255, 255)),
    ("aqua", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("fuchsia", (255, 0, 255)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("navy", (0, 0, 128)),
    ("purple", (128, 0, 128)),
    ("teal", (0, 128, 128)),
    ("orange", (255, 165, 0)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
];

impl Color {
    pub fn apply_to_context(self, cr: &cairo::Context) {
	match self {
	    Color::RGBA(r, g, b, a) => cr.set_source_rgba(r, g, b, a),
	    Color::RGB(r, g, b) => cr.set_source_rgb(r, g, b),
	    Color::None => cr.set_source_rgba(0.0, 0.0, 0.0, 0.0),
	}
    }

    pub fn black() -> Color { Color::RGB(0.0, 0.0, 0.0) }

    fn from_bytes((r, g, b): (u8, u8, u8)) -> Color {
	Color::RGB(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let err = || ParseColorError(format!("invalid hex color: #{}", s));
    let channel = |s_rep: &str| u8::from_str_radix(s_rep, 16)
	.map(|v| (v as f64) / 255.0)
	.map_err(|_| err());
    if !s.is_ascii() {
	return Err(err());
    }

    match s.len() {
	3 => {
	    let doubled: String = s.chars().flat_map(|c| vec![c, c]).collect();
	    parse_hex(&doubled)
	},
	6 => Ok(Color::RGB(channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
	8 => Ok(Color::RGBA(channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?, channel(&s[6..8])?)),
	_ => Err(err()),
    }
}

// rgb(r, g, b) and rgba(r, g, b, a), channels 0-255, alpha 0-1
fn rgb_function(input: &str) -> IResult<&str, Vec<f64>> {
    let args = separated_list1(delimited(space0, char(','), space0), double);

    preceded(
	tuple((tag_no_case("rgb"), opt(tag_no_case("a")), space0)),
	delimited(pair(char('('), space0), args, pair(space0, char(')'))),
    )(input)
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	let s = s.trim();
	if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("transparent") {
	    return Ok(Color::None);
	}

	if let Some(hex) = s.strip_prefix('#') {
	    return parse_hex(hex);
	}

	if let Some(&(_, rgb)) = NAMED.iter().find(|(name, _)| s.eq_ignore_ascii_case(name)) {
	    return Ok(Color::from_bytes(rgb));
	}

	let channels = match rgb_function(s).finish() {
	    Ok(("", channels)) => channels,
	    _ => return Err(ParseColorError(String::from(s))),
	};
	let c = |v: f64| v.max(0.0).min(255.0) / 255.0;

	match channels.as_slice() {
	    [r, g, b] => Ok(Color::RGB(c(*r), c(*g), c(*b))),
	    [r, g, b, a] => Ok(Color::RGBA(c(*r), c(*g), c(*b), a.max(0.0).min(1.0))),
	    _ => Err(ParseColorError(String::from(s))),
	}
    }
}
