use log::trace;
use nom::{
    bytes::complete::is_a,
    character::complete::{alpha1, anychar},
    combinator::map,
    multi::many_till,
    sequence::pair,
    IResult, Parser,
};

use crate::types::{CommandKind, PathCommand};

const NUMERIC_RUN: &str = "0123456789.,";

fn snd<T, U>(input: (U, T)) -> T { input.1 }

// a run of letters directly followed by digits, dots and commas; the last letter names the command
fn command(input: &str) -> IResult<&str, (char, &str)> {
    map(pair(alpha1, is_a(NUMERIC_RUN)),
	|(letters, run): (&str, &str)| (letters.chars().next_back().unwrap_or('\0'), run))(input)
}

fn parse_args(run: &str) -> Vec<f64> {
    run.split(',')
	.map(|token| token.trim().parse().unwrap_or(f64::NAN))
	.collect()
}

/// Splits path data into `M`, `C` and `L` commands in textual order.
///
/// Anything that does not match `letter+ [0-9.,]+` is skipped, as are
/// commands with any other letter. Never fails: unusable input gives an
/// empty list.
pub fn parse_path_data(d: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    let mut next_command = many_till(anychar, command).map(snd);
    let mut rest = d;

    while !rest.is_empty() {
	let (remaining, (letter, run)) = match next_command.parse(rest) {
	    Ok(found) => found,
	    Err(_) => break,
	};
	rest = remaining;

	match CommandKind::from_letter(letter) {
	    Some(kind) => commands.push(PathCommand::new(kind, parse_args(run))),
	    None => trace!("skipping unsupported path command '{}'", letter),
	}
    }

    commands
}
