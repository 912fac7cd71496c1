use kurbo::{CubicBez, Point, Vec2};

use crate::geometry::pen::{ArcSegment, Pen, Segment};
use crate::path::command::{Case, CommandKind, PathCommand, PathOp};

/// Re-expresses `cmd` with the kind and case of `target`.
///
/// `pen` must be positioned at the start of `cmd`. The end point is always
/// kept. Control points the target kind needs come from `cmd` where it has
/// them; otherwise they coincide with the end point, which still traces the
/// original straight segment. Quadratics become cubics through exact degree
/// elevation, and an arc becomes the single cubic (or quadratic) closest to
/// its sweep. A non-arc becomes a zero-radius arc (drawn as a line) that takes
/// its rotation and flags from `target`.
///
/// Converting to a weaker kind (a curve to `L`, anything to `H`/`V`) keeps
/// only what the weaker kind can express.
pub fn convert_command(pen: &Pen, cmd: &PathCommand, target: &PathCommand) -> PathCommand {
    if cmd.same_shape(target) {
        return *cmd;
    }

    let seg = pen.resolve(cmd);
    let end = seg.end();
    let kind = target.kind();
    if matches!(seg, Segment::Arc(_)) != (kind == CommandKind::ArcTo) {
        tracing::debug!(
            from = %cmd.letter(),
            to = %target.letter(),
            "converting between arc and non-arc command through its end point"
        );
    }

    let op = match target.op {
        PathOp::MoveTo { .. } => PathOp::MoveTo { x: end.x, y: end.y },
        PathOp::LineTo { .. } => PathOp::LineTo { x: end.x, y: end.y },
        PathOp::HorizontalLineTo { .. } => PathOp::HorizontalLineTo { x: end.x },
        PathOp::VerticalLineTo { .. } => PathOp::VerticalLineTo { y: end.y },
        PathOp::CubicCurveTo { .. } => {
            let (c1, c2) = cubic_controls(&seg);
            PathOp::CubicCurveTo {
                x1: c1.x,
                y1: c1.y,
                x2: c2.x,
                y2: c2.y,
                x: end.x,
                y: end.y,
            }
        }
        PathOp::SmoothCubicCurveTo { .. } => {
            let (_, c2) = cubic_controls(&seg);
            PathOp::SmoothCubicCurveTo {
                x2: c2.x,
                y2: c2.y,
                x: end.x,
                y: end.y,
            }
        }
        PathOp::QuadraticCurveTo { .. } => {
            let c = match seg {
                Segment::Quad(q) => q.p1,
                Segment::Cubic(c) => c.p1,
                Segment::Arc(a) => match arc_as_cubic(&a) {
                    Some(c) => {
                        let v = (c.p1.to_vec2() + c.p2.to_vec2()) * 0.75
                            - (c.p0.to_vec2() + c.p3.to_vec2()) * 0.25;
                        v.to_point()
                    }
                    None => end,
                },
                _ => end,
            };
            PathOp::QuadraticCurveTo {
                x1: c.x,
                y1: c.y,
                x: end.x,
                y: end.y,
            }
        }
        PathOp::SmoothQuadraticCurveTo { .. } => PathOp::SmoothQuadraticCurveTo { x: end.x, y: end.y },
        PathOp::ArcTo {
            x_axis_rotation,
            large_arc,
            sweep,
            ..
        } => match seg {
            Segment::Arc(a) => PathOp::ArcTo {
                rx: a.rx,
                ry: a.ry,
                x_axis_rotation: a.x_axis_rotation,
                large_arc: a.large_arc,
                sweep: a.sweep,
                x: end.x,
                y: end.y,
            },
            _ => PathOp::ArcTo {
                rx: 0.0,
                ry: 0.0,
                x_axis_rotation,
                large_arc,
                sweep,
                x: end.x,
                y: end.y,
            },
        },
        PathOp::ClosePath => PathOp::ClosePath,
    };

    PathCommand::new(target.case, relativize(op, seg.start(), target.case))
}

/// `S` as `C` and `T` as `Q` with the implied control point written out;
/// other commands unchanged.
pub fn explicit_form(pen: &Pen, cmd: &PathCommand) -> PathCommand {
    match pen.resolve(cmd) {
        seg @ (Segment::Cubic(_) | Segment::Quad(_)) if cmd.is_smooth() => seg.to_command(cmd.case),
        _ => *cmd,
    }
}

fn cubic_controls(seg: &Segment) -> (Point, Point) {
    match *seg {
        Segment::Cubic(c) => (c.p1, c.p2),
        Segment::Quad(q) => {
            let c = q.raise();
            (c.p1, c.p2)
        }
        Segment::Arc(a) => match arc_as_cubic(&a) {
            Some(c) => (c.p1, c.p2),
            None => (a.to, a.to),
        },
        _ => {
            let end = seg.end();
            (end, end)
        }
    }
}

/// One cubic through the arc's end points with tangents matching the ellipse
/// there. `None` when the arc is drawn as a straight line.
fn arc_as_cubic(arc: &ArcSegment) -> Option<CubicBez> {
    let ellipse = kurbo::Arc::from_svg_arc(&arc.to_svg_arc())?;
    let (sin_phi, cos_phi) = ellipse.x_rotation.sin_cos();
    let tangent = |angle: f64| {
        let (sin_a, cos_a) = angle.sin_cos();
        let v = Vec2::new(-ellipse.radii.x * sin_a, ellipse.radii.y * cos_a);
        Vec2::new(
            v.x * cos_phi - v.y * sin_phi,
            v.x * sin_phi + v.y * cos_phi,
        )
    };
    let k = 4.0 / 3.0 * (ellipse.sweep_angle / 4.0).tan();
    let end_angle = ellipse.start_angle + ellipse.sweep_angle;
    Some(CubicBez::new(
        arc.from,
        arc.from + tangent(ellipse.start_angle) * k,
        arc.to - tangent(end_angle) * k,
        arc.to,
    ))
}

fn relativize(op: PathOp, start: Point, case: Case) -> PathOp {
    if case == Case::Absolute {
        return op;
    }
    let (dx, dy) = (start.x, start.y);
    match op {
        PathOp::MoveTo { x, y } => PathOp::MoveTo { x: x - dx, y: y - dy },
        PathOp::LineTo { x, y } => PathOp::LineTo { x: x - dx, y: y - dy },
        PathOp::HorizontalLineTo { x } => PathOp::HorizontalLineTo { x: x - dx },
        PathOp::VerticalLineTo { y } => PathOp::VerticalLineTo { y: y - dy },
        PathOp::CubicCurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => PathOp::CubicCurveTo {
            x1: x1 - dx,
            y1: y1 - dy,
            x2: x2 - dx,
            y2: y2 - dy,
            x: x - dx,
            y: y - dy,
        },
        PathOp::SmoothCubicCurveTo { x2, y2, x, y } => PathOp::SmoothCubicCurveTo {
            x2: x2 - dx,
            y2: y2 - dy,
            x: x - dx,
            y: y - dy,
        },
        PathOp::QuadraticCurveTo { x1, y1, x, y } => PathOp::QuadraticCurveTo {
            x1: x1 - dx,
            y1: y1 - dy,
            x: x - dx,
            y: y - dy,
        },
        PathOp::SmoothQuadraticCurveTo { x, y } => PathOp::SmoothQuadraticCurveTo {
            x: x - dx,
            y: y - dy,
        },
        PathOp::ArcTo {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        } => PathOp::ArcTo {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x: x - dx,
            y: y - dy,
        },
        PathOp::ClosePath => PathOp::ClosePath,
    }
}
