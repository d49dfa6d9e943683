use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, tag_no_case},
    character::complete::{char, digit1, space1},
    combinator::{map, opt, rest, value},
    multi::many0,
    number::complete::double,
    sequence::{pair, preceded, terminated, tuple},
    Finish, IResult,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Keyword {
    Italic,
    Bold,
    Normal,
}

/// The parts of a CSS `font` shorthand cairo's toy text API can use.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub italic: bool,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseFontError(pub String);

impl Default for Font {
    fn default() -> Self {
	Font {
	    family: String::from("sans-serif"),
	    size: 10.0,
	    italic: false,
	    bold: false,
	}
    }
}

impl Font {
    pub fn apply_to_context(&self, cr: &cairo::Context) {
	let slant = if self.italic { cairo::FontSlant::Italic } else { cairo::FontSlant::Normal };
	let weight = if self.bold { cairo::FontWeight::Bold } else { cairo::FontWeight::Normal };

	cr.select_font_face(&self.family, slant, weight);
	cr.set_font_size(self.size);
    }
}

fn keyword(input: &str) -> IResult<&str, Keyword> {
    alt((
	value(Keyword::Italic, alt((tag_no_case("italic"), tag_no_case("oblique")))),
	value(Keyword::Bold, alt((tag_no_case("bolder"), tag_no_case("bold")))),
	value(Keyword::Normal, alt((tag_no_case("normal"), tag_no_case("lighter"), tag_no_case("small-caps")))),
	map(digit1, |weight: &str| match weight.parse::<u32>() {
	    Ok(w) if w >= 600 => Keyword::Bold,
	    _ => Keyword::Normal,
	}),
    ))(input)
}

fn size(input: &str) -> IResult<&str, f64> {
    alt((
	terminated(double, tag("px")),
	map(terminated(double, tag("pt")), |pt: f64| pt * 4.0 / 3.0),
    ))(input)
}

// [style|weight ...] <size>[/<line-height>] <family>[, fallback ...]
fn shorthand(input: &str) -> IResult<&str, (Vec<Keyword>, f64, &str)> {
    map(
	tuple((
	    many0(terminated(keyword, space1)),
	    size,
	    opt(preceded(char('/'), is_not(" "))),
	    pair(space1, rest),
	)),
	|(keywords, size, _, (_, family))| (keywords, size, family),
    )(input)
}

fn first_family(family: &str) -> &str {
    family
	.split(',')
	.next()
	.unwrap_or_default()
	.trim()
	.trim_matches(|c| c == '"' || c == '\'')
}

impl FromStr for Font {
    type Err = ParseFontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	let err = || ParseFontError(String::from(s));
	let (_, (keywords, size, family)) = shorthand(s.trim()).finish().map_err(|_| err())?;

	let family = first_family(family);
	if family.is_empty() || !(size > 0.0) {
	    return Err(err());
	}

	Ok(Font {
	    family: String::from(family),
	    size,
	    italic: keywords.contains(&Keyword::Italic),
	    bold: keywords.contains(&Keyword::Bold),
	})
    }
}
