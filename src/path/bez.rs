use kurbo::BezPath;

use crate::geometry::pen::{Pen, Segment};
use crate::path::command::PathCommand;

/// Arc flattening tolerance, in path units.
const ARC_TOLERANCE: f64 = 0.1;

/// Resolves commands into an absolute kurbo path.
///
/// Arcs are approximated with cubics; arcs drawn as straight lines (zero
/// radius or coincident end points) become lines. Drawing after a close
/// starts a new subpath at the closed one's start, as SVG does.
pub fn to_bez_path(commands: &[PathCommand]) -> BezPath {
    let mut path = BezPath::new();
    let mut pen = Pen::new();
    let mut open = false;

    for cmd in commands {
        let seg = pen.advance(cmd);
        if !matches!(seg, Segment::Move { .. }) && !open {
            path.move_to(seg.start());
            open = true;
        }
        match seg {
            Segment::Move { to, .. } => {
                path.move_to(to);
                open = true;
            }
            Segment::Line { to, .. } => path.line_to(to),
            Segment::Quad(q) => path.quad_to(q.p1, q.p2),
            Segment::Cubic(c) => path.curve_to(c.p1, c.p2, c.p3),
            Segment::Arc(a) => match kurbo::Arc::from_svg_arc(&a.to_svg_arc()) {
                Some(arc) => path.extend(arc.append_iter(ARC_TOLERANCE)),
                None => path.line_to(a.to),
            },
            Segment::Close { .. } => {
                path.close_path();
                open = false;
            }
        }
    }
    path
}
