//! Command stream line parser

use crate::{
    errors::SimpleError,
    geometry::{Degrees, Point},
    turtle::DrawCommand,
};
use nom::{
    branch::alt,
    character::complete::{char, space0, space1},
    combinator::{all_consuming, cut, map, opt, rest, value, verify},
    number::complete::double,
    sequence::{delimited, pair, preceded, separated_pair, terminated},
    IResult,
};

/// Parse one line of a command stream.
///
/// Blank lines and `#` comments yield `None`. Syntax errors quote the
/// input from the first token that could not be parsed.
pub fn parse_line(line: &str) -> Result<Option<DrawCommand>, SimpleError> {
    parse_command(line).map(|(_, c)| c).map_err(|e| {
        use nom::Err::*;
        SimpleError(match e {
            Incomplete(_) => "Incomplete data".into(),
            Error(e) | Failure(e) if e.input.is_empty() => "Unexpected end of line".into(),
            Error(e) | Failure(e) => format!("Invalid syntax at '{}'", e.input),
        })
    })
}

fn parse_command(line: &str) -> IResult<&str, Option<DrawCommand>> {
    // Arguments are cut so a bad one is reported instead of the whole line
    let command = alt((
        map(preceded(pair(char('F'), space1), cut(number)), DrawCommand::MoveForward),
        map(preceded(pair(char('L'), space1), cut(number)), |a| {
            DrawCommand::TurnLeft(Degrees(a))
        }),
        value(DrawCommand::PenUp, char('U')),
        value(DrawCommand::PenDown, char('D')),
        map(
            preceded(
                pair(char('G'), space1),
                cut(separated_pair(number, space1, number)),
            ),
            |(x, y)| DrawCommand::GoTo(Point::new(x, y)),
        ),
    ));

    all_consuming(terminated(
        delimited(space0, opt(command), space0),
        opt(comment),
    ))(line)
}

fn number(s: &str) -> IResult<&str, f64> {
    verify(double, |v: &f64| v.is_finite())(s)
}

fn comment(s: &str) -> IResult<&str, &str> {
    preceded(char('#'), rest)(s)
}

#[cfg(test)]
mod tests {
    use super::parse_line;
    use crate::{
        geometry::{Degrees, Point},
        turtle::DrawCommand::*,
    };

    #[test]
    fn commands() {
        assert_eq!(parse_line("F 100"), Ok(Some(MoveForward(100.0))));
        assert_eq!(parse_line("F 33.333333333333336"), Ok(Some(MoveForward(100.0 / 3.0))));
        assert_eq!(parse_line("L -120"), Ok(Some(TurnLeft(Degrees(-120.0)))));
        assert_eq!(parse_line("L 1.2e2"), Ok(Some(TurnLeft(Degrees(120.0)))));
        assert_eq!(parse_line("U"), Ok(Some(PenUp)));
        assert_eq!(parse_line("D"), Ok(Some(PenDown)));
        assert_eq!(
            parse_line("G -150 -86.60254037844386"),
            Ok(Some(GoTo(Point::new(-150.0, -86.60254037844386))))
        );
    }

    #[test]
    fn spacing_and_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# header"), Ok(None));
        assert_eq!(parse_line("  F\t2  # two"), Ok(Some(MoveForward(2.0))));
        assert_eq!(parse_line("U# lift"), Ok(Some(PenUp)));
    }

    #[test]
    fn errors() {
        assert!(parse_line("F").is_err());
        assert!(parse_line("F100").is_err());
        assert!(parse_line("F 1 2").is_err());
        assert!(parse_line("G 1").is_err());
        assert!(parse_line("X 1").is_err());
        assert!(parse_line("F inf").is_err());
        assert!(parse_line("U D").is_err());
        assert!(parse_line("f 1").is_err());
    }

    #[test]
    fn error_points_at_bad_token() {
        fn message(line: &str) -> String {
            parse_line(line).unwrap_err().0
        }

        assert_eq!(message("L nope"), "Invalid syntax at 'nope'");
        assert_eq!(message("F 1x"), "Invalid syntax at 'x'");
        assert_eq!(message("F 1 2"), "Invalid syntax at '2'");
        assert_eq!(message("G 1 y"), "Invalid syntax at 'y'");
        assert_eq!(message("G 1"), "Unexpected end of line");
        assert_eq!(message("X 1"), "Invalid syntax at 'X 1'");
    }

    #[test]
    fn display_is_parseable() {
        let cmds = [
            MoveForward(100.0 / 3.0),
            TurnLeft(Degrees(-60.0)),
            PenUp,
            GoTo(Point::new(-0.5, 1e-7)),
            PenDown,
        ];
        for cmd in cmds {
            assert_eq!(parse_line(&cmd.to_string()), Ok(Some(cmd)));
        }
    }
}
