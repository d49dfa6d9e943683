use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    CurveSegment,
    LineTo,
}

impl CommandKind {
    pub fn from_letter(letter: char) -> Option<CommandKind> {
	match letter {
	    'M' => Some(CommandKind::MoveTo),
	    'C' => Some(CommandKind::CurveSegment),
	    'L' => Some(CommandKind::LineTo),
	    _ => None,
	}
    }

    pub fn letter(self) -> char {
	match self {
	    CommandKind::MoveTo => 'M',
	    CommandKind::CurveSegment => 'C',
	    CommandKind::LineTo => 'L',
	}
    }

    ///Number of arguments the renderer reads from a command of this kind
    pub fn arity(self) -> usize {
	match self {
	    CommandKind::MoveTo | CommandKind::LineTo => 2,
	    CommandKind::CurveSegment => 6,
	}
    }
}

/// One command of a path's `d` attribute, arguments kept exactly as parsed.
///
/// A `C` command carries `(ignored_x, ignored_y, control_x, control_y, end_x, end_y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub args: Vec<f64>,
}

impl PathCommand {
    pub fn new(kind: CommandKind, args: Vec<f64>) -> Self {
	PathCommand { kind, args }
    }

    pub fn move_to(x: f64, y: f64) -> Self {
	PathCommand::new(CommandKind::MoveTo, vec![x, y])
    }

    pub fn line_to(x: f64, y: f64) -> Self {
	PathCommand::new(CommandKind::LineTo, vec![x, y])
    }

    pub fn curve(x0: f64, y0: f64, cx: f64, cy: f64, x: f64, y: f64) -> Self {
	PathCommand::new(CommandKind::CurveSegment, vec![x0, y0, cx, cy, x, y])
    }

    ///Positional argument, NaN when the command is short of it
    pub fn arg(&self, index: usize) -> f64 {
	self.args.get(index).copied().unwrap_or(f64::NAN)
    }

    /// The last coordinate pair the command's kind reads.
    pub fn end_point(&self) -> (f64, f64) {
	let n = self.kind.arity();
	(self.arg(n - 2), self.arg(n - 1))
    }
}

// [sign] digits [. digits] | [sign] . digits; no exponent, so "20em" stops at "20"
fn number_prefix(input: &str) -> IResult<&str, f64> {
    map_res(
	recognize(tuple((
	    opt(one_of("+-")),
	    alt((
		recognize(pair(digit1, opt(pair(char('.'), digit0)))),
		recognize(pair(char('.'), digit1)),
	    )),
	))),
	|digits: &str| digits.parse::<f64>(),
    )(input)
}

/// Numeric prefix of an attribute value with any unit text after it dropped:
/// `"40px"` gives `40.0`. `None` when the value does not start with a number.
pub fn leading_number(value: &str) -> Option<f64> {
    number_prefix(value.trim_start()).ok().map(|(_, n)| n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_point_of_curve_is_last_pair() {
	let c = PathCommand::curve(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
	assert_eq!(c.end_point(), (5.0, 6.0));
    }

    #[test]
    fn short_command_reads_nan() {
	let m = PathCommand::new(CommandKind::MoveTo, vec![3.0]);
	assert_eq!(m.arg(0), 3.0);
	assert!(m.arg(1).is_nan());
	assert!(m.end_point().1.is_nan());
    }

    #[test]
    fn leading_number_strips_units() {
	assert_eq!(leading_number("40px"), Some(40.0));
	assert_eq!(leading_number("40"), Some(40.0));
	assert_eq!(leading_number(" 12.5pt"), Some(12.5));
	assert_eq!(leading_number("20em"), Some(20.0));
	assert_eq!(leading_number("5ex"), Some(5.0));
	assert_eq!(leading_number("2e1px"), Some(2.0));
	assert_eq!(leading_number(".5px"), Some(0.5));
	assert_eq!(leading_number("px"), None);
	assert_eq!(leading_number(""), None);
    }
}
