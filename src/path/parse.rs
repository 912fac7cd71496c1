use crate::foundation::error::{MorphError, MorphResult};
use crate::path::command::{Case, CommandKind, PathCommand, PathCommands, PathOp};

/// Parses SVG path data, tolerating malformed input.
///
/// `None`, empty and whitespace-only input yield an empty sequence. Input
/// that does not match the grammar is skipped up to the next command letter;
/// everything parsed before and after it is kept.
pub fn parse_path<'a>(input: impl Into<Option<&'a str>>) -> PathCommands {
    let Some(src) = input.into() else {
        return PathCommands::new();
    };
    let mut p = Parser::new(src);
    p.run(Mode::Permissive);
    p.out
}

/// Parses SVG path data, rejecting anything outside the grammar.
///
/// Returns [`MorphError::Parse`] with the byte offset of the first problem.
pub fn try_parse_path(src: &str) -> MorphResult<PathCommands> {
    let mut p = Parser::new(src);
    match p.run(Mode::Strict) {
        Some(err) => Err(err),
        None => Ok(p.out),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Strict,
    Permissive,
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    // Command applied to argument groups that follow without a new letter.
    current: Option<(CommandKind, Case)>,
    out: PathCommands,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            current: None,
            out: PathCommands::new(),
        }
    }

    fn run(&mut self, mode: Mode) -> Option<MorphError> {
        loop {
            self.skip_separators();
            if self.pos >= self.bytes.len() {
                return None;
            }
            if let Err(err) = self.step() {
                match mode {
                    Mode::Strict => return Some(err),
                    Mode::Permissive => {
                        tracing::debug!(error = %err, "skipping malformed path data");
                        self.recover();
                    }
                }
            }
        }
    }

    fn step(&mut self) -> MorphResult<()> {
        let start = self.pos;
        let c = self.bytes[start] as char;

        if let Some((kind, case)) = CommandKind::from_letter(c) {
            self.pos += 1;
            if kind == CommandKind::ClosePath {
                self.out.push(PathCommand::new(case, PathOp::ClosePath));
                self.current = None;
                return Ok(());
            }
            self.current = Some((kind, case));
            return self.group(kind, case);
        }

        if starts_number(c) {
            return match self.current {
                Some((kind, case)) => self.group(kind, case),
                None => Err(MorphError::parse(start, "number before any command")),
            };
        }

        Err(MorphError::parse(
            start,
            format!("unexpected character '{}'", self.char_at(start)),
        ))
    }

    /// Reads one argument group for `kind` and pushes the command.
    fn group(&mut self, kind: CommandKind, case: Case) -> MorphResult<()> {
        let mut fields = [0.0f64; 7];
        for (i, slot) in fields.iter_mut().enumerate().take(kind.arity()) {
            self.skip_separators();
            *slot = if kind.is_flag_field(i) {
                self.flag()?
            } else {
                self.number()?
            };
        }

        self.out
            .push(PathCommand::new(case, PathOp::from_fields(kind, &fields)));

        // Only the first pair after `M`/`m` is a move.
        if kind == CommandKind::MoveTo {
            self.current = Some((CommandKind::LineTo, case));
        }
        Ok(())
    }

    // Number: [+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?
    fn number(&mut self) -> MorphResult<f64> {
        let bytes = self.bytes;
        let start = self.pos;
        let mut i = start;

        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let mut digits = i - int_start;
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            let frac_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            digits += i - frac_start;
        }
        if digits == 0 {
            return Err(if start >= bytes.len() {
                MorphError::parse(start, "expected a number, found end of input")
            } else {
                MorphError::parse(
                    start,
                    format!("expected a number, found '{}'", self.char_at(start)),
                )
            });
        }

        if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
            let e_pos = i;
            i += 1;
            if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
                i += 1;
            }
            let exp_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if exp_start == i {
                return Err(MorphError::parse(
                    e_pos,
                    "invalid number exponent (expected digits)",
                ));
            }
        }

        let v: f64 = self.src[start..i]
            .parse()
            .map_err(|_| MorphError::parse(start, "invalid number"))?;
        if !v.is_finite() {
            return Err(MorphError::parse(start, "number out of range"));
        }
        self.pos = i;
        Ok(v)
    }

    /// Arc flags are a single `0` or `1`, so `11` reads as two flags.
    fn flag(&mut self) -> MorphResult<f64> {
        match self.bytes.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(0.0)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(1.0)
            }
            Some(_) => Err(MorphError::parse(
                self.pos,
                format!("invalid arc flag '{}'", self.char_at(self.pos)),
            )),
            None => Err(MorphError::parse(
                self.pos,
                "expected an arc flag, found end of input",
            )),
        }
    }

    fn skip_separators(&mut self) {
        while self.pos < self.bytes.len() && is_separator(self.bytes[self.pos]) {
            self.pos += 1;
        }
    }

    /// Drops input up to the next command letter.
    fn recover(&mut self) {
        self.current = None;
        self.pos += self.char_at(self.pos).len_utf8();
        while self.pos < self.bytes.len()
            && CommandKind::from_letter(self.bytes[self.pos] as char).is_none()
        {
            self.pos += 1;
        }
    }

    fn char_at(&self, pos: usize) -> char {
        self.src
            .get(pos..)
            .and_then(|s| s.chars().next())
            .unwrap_or('\u{fffd}')
    }
}

fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b'\x0c' | b',')
}

fn starts_number(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(x: f64, y: f64) -> PathCommand {
        PathCommand::move_to(x, y)
    }

    fn l(x: f64, y: f64) -> PathCommand {
        PathCommand::line_to(x, y)
    }

    #[test]
    fn none_and_blank_input_is_empty() {
        assert!(parse_path(None).is_empty());
        assert!(parse_path("").is_empty());
        assert!(parse_path("  \r\n ").is_empty());
    }

    #[test]
    fn implicit_separators_around_signs_and_points() {
        assert_eq!(parse_path("M10-10L-15-15"), vec![m(10.0, -10.0), l(-15.0, -15.0)]);
        assert_eq!(
            parse_path("M.5,10L15,15C5.5.5,10,.5.5.5"),
            vec![
                m(0.5, 10.0),
                l(15.0, 15.0),
                PathCommand::cubic_to(5.5, 0.5, 10.0, 0.5, 0.5, 0.5),
            ]
        );
    }

    #[test]
    fn arc_flags_do_not_need_separators() {
        let cmds = parse_path("M0,0a25,25 -30 0110,20");
        assert_eq!(
            cmds[1],
            PathCommand::relative(PathOp::ArcTo {
                rx: 25.0,
                ry: 25.0,
                x_axis_rotation: -30.0,
                large_arc: false,
                sweep: true,
                x: 10.0,
                y: 20.0,
            })
        );
    }

    #[test]
    fn trailing_point_number_is_accepted() {
        assert_eq!(parse_path("M5. 6L7,8"), vec![m(5.0, 6.0), l(7.0, 8.0)]);
    }

    #[test]
    fn permissive_parse_skips_to_next_command() {
        assert_eq!(parse_path("M0,0 L10 X 99 L20,20"), vec![m(0.0, 0.0), l(20.0, 20.0)]);
        assert_eq!(parse_path("12 13 M1,1"), vec![m(1.0, 1.0)]);
        assert_eq!(parse_path("M1,1 L2"), vec![m(1.0, 1.0)]);
    }

    #[test]
    fn strict_parse_reports_offsets() {
        let err = try_parse_path("M0,0 L10 X").unwrap_err();
        assert_eq!(err.offset(), Some(9));

        let err = try_parse_path("10,10").unwrap_err();
        assert_eq!(err.offset(), Some(0));
        assert!(err.to_string().contains("number before any command"));

        let err = try_parse_path("M1e,2").unwrap_err();
        assert_eq!(err.offset(), Some(2));

        let err = try_parse_path("M0,0A1,1,0,2,0,5,5").unwrap_err();
        assert!(err.to_string().contains("invalid arc flag '2'"));

        assert_eq!(try_parse_path(" M1 2 ").unwrap(), vec![m(1.0, 2.0)]);
    }

    #[test]
    fn overflowing_numbers_are_rejected() {
        let err = try_parse_path("M0,0L1e400,0").unwrap_err();
        assert_eq!(err.offset(), Some(5));
        assert!(err.to_string().contains("number out of range"), "{err}");

        assert_eq!(parse_path("M0,0L1e400,0L2,2"), vec![m(0.0, 0.0), l(2.0, 2.0)]);
        assert!(parse_path("M1e400,0L1,1").iter().all(|c| c.fields().iter().all(|v| v.is_finite())));
    }

    #[test]
    fn numbers_after_close_are_rejected() {
        assert!(try_parse_path("M0,0Z 5,5").is_err());
        assert_eq!(parse_path("M0,0Z 5,5"), vec![m(0.0, 0.0), PathCommand::close()]);
    }
}
