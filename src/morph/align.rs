use crate::geometry::pen::{Pen, Segment};
use crate::geometry::promote::{convert_command, explicit_form};
use crate::geometry::split::split_command;
use crate::morph::options::SegmentFilter;
use crate::path::command::{Case, PathCommand, PathCommands, PathOp};

/// Two command sequences of equal length whose commands match in kind and
/// case at every index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aligned {
    /// Source side, extended and converted to the destination's kinds.
    pub from: PathCommands,
    /// Destination side, extended where it was the shorter one.
    pub to: PathCommands,
}

impl Aligned {
    /// Number of aligned command pairs.
    pub fn len(&self) -> usize {
        self.to.len()
    }

    /// Whether both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.to.is_empty()
    }
}

/// Aligns `a` onto `b` so that the two can be blended field by field.
///
/// The shorter sequence is extended by splitting its segments, which leaves
/// its rendered geometry unchanged; then every command of `a` is converted
/// to the kind and case of its partner in `b`.
pub fn align(a: &[PathCommand], b: &[PathCommand], filter: Option<&SegmentFilter>) -> Aligned {
    if a.is_empty() && b.is_empty() {
        return Aligned::default();
    }

    let mut a = if a.is_empty() { seed_from(b) } else { a.to_vec() };
    let mut b = if b.is_empty() { seed_from(&a) } else { b.to_vec() };

    // A trailing close only pairs with another close.
    let closes = match (ends_with_close(&a), ends_with_close(&b)) {
        (true, true) => a.pop().zip(b.pop()),
        (true, false) => {
            open_trailing_close(&mut a);
            None
        }
        (false, true) => {
            open_trailing_close(&mut b);
            None
        }
        (false, false) => None,
    };
    ensure_anchor(&mut a);
    ensure_anchor(&mut b);

    if a.len() < b.len() {
        a = extend(&a, b.len() - a.len(), filter);
    } else if b.len() < a.len() {
        b = extend(&b, a.len() - b.len(), filter);
    }

    if let Some((za, zb)) = closes {
        a.push(za);
        b.push(zb);
    }

    let mut pen = Pen::new();
    let from = a
        .iter()
        .zip(&b)
        .map(|(cmd, target)| {
            let converted = convert_command(&pen, cmd, target);
            pen.advance(cmd);
            converted
        })
        .collect();

    Aligned { from, to: b }
}

/// Stand-in for an absent path: the other path's first point as a move, plus
/// its trailing close if it has one.
fn seed_from(other: &[PathCommand]) -> PathCommands {
    let Some(first) = other.first() else {
        return PathCommands::new();
    };
    let end = Pen::new().resolve(first).end();
    let mut out = vec![PathCommand::new(first.case, PathOp::MoveTo { x: end.x, y: end.y })];
    if let Some(z) = other.last().filter(|c| c.is_close()) {
        out.push(*z);
    }
    out
}

fn ends_with_close(commands: &[PathCommand]) -> bool {
    commands.last().is_some_and(PathCommand::is_close)
}

/// Rewrites a trailing `Z` as a line back to the subpath start.
fn open_trailing_close(commands: &mut PathCommands) {
    let Some((last, body)) = commands.split_last() else {
        return;
    };
    let mut pen = Pen::new();
    for cmd in body {
        pen.advance(cmd);
    }
    let line = match pen.resolve(last) {
        Segment::Close { from, to } => Segment::Line { from, to }.to_command(last.case),
        _ => return,
    };
    if let Some(slot) = commands.last_mut() {
        *slot = line;
    }
}

/// A sequence that lost everything to its close still needs a first command.
fn ensure_anchor(commands: &mut PathCommands) {
    if commands.is_empty() {
        commands.push(PathCommand::move_to(0.0, 0.0));
    }
}

/// Adds `deficit` commands to `commands` without changing its geometry.
fn extend(commands: &[PathCommand], deficit: usize, filter: Option<&SegmentFilter>) -> PathCommands {
    let Some((anchor, segments)) = commands.split_first() else {
        return PathCommands::new();
    };

    if segments.is_empty() {
        tracing::debug!(deficit, "padding a bare point with zero-length lines");
        let end = Pen::new().resolve(anchor).end();
        let pad = match anchor.case {
            Case::Absolute => PathCommand::line_to(end.x, end.y),
            Case::Relative => PathCommand::relative(PathOp::LineTo { x: 0.0, y: 0.0 }),
        };
        let mut out = commands.to_vec();
        out.extend(std::iter::repeat_n(pad, deficit));
        return out;
    }

    let pieces = distribute(commands, deficit, filter);
    tracing::debug!(segments = segments.len(), deficit, "splitting segments of the shorter path");

    let mut out = PathCommands::with_capacity(commands.len() + deficit);
    out.push(*anchor);
    let mut pen = Pen::new();
    pen.advance(anchor);
    let mut prev_split = false;
    for (cmd, &n) in segments.iter().zip(&pieces) {
        if n > 1 {
            out.extend(split_command(&pen, cmd, n));
        } else if prev_split && cmd.is_smooth() {
            out.push(explicit_form(&pen, cmd));
        } else {
            out.push(*cmd);
        }
        prev_split = n > 1;
        pen.advance(cmd);
    }
    out
}

/// Piece count per segment (`commands[1..]`) after handing out `deficit`
/// extra pieces from the last segment backward, wrapping around.
fn distribute(commands: &[PathCommand], deficit: usize, filter: Option<&SegmentFilter>) -> Vec<usize> {
    let count = commands.len().saturating_sub(1);
    let mut pieces = vec![1; count];
    if count == 0 {
        return pieces;
    }

    let mut eligible: Vec<usize> = (0..count)
        .filter(|&i| filter.is_none_or(|f| !f(&commands[i], &commands[i + 1])))
        .collect();
    if eligible.is_empty() {
        tracing::debug!("every segment excluded from splitting; ignoring the filter");
        eligible = (0..count).collect();
    }

    for k in 0..deficit {
        let idx = eligible[eligible.len() - 1 - k % eligible.len()];
        pieces[idx] += 1;
    }
    pieces
}
