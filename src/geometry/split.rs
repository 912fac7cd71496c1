use kurbo::{CubicBez, Point, QuadBez, Vec2};

use crate::foundation::math::Lerp;
use crate::geometry::pen::{ArcSegment, Pen, Segment};
use crate::path::command::PathCommand;

/// De Casteljau subdivision of a cubic at `t`.
pub fn subdivide_cubic(c: CubicBez, t: f64) -> (CubicBez, CubicBez) {
    let p01 = <Point as Lerp>::lerp(&c.p0, &c.p1, t);
    let p12 = <Point as Lerp>::lerp(&c.p1, &c.p2, t);
    let p23 = <Point as Lerp>::lerp(&c.p2, &c.p3, t);
    let p012 = <Point as Lerp>::lerp(&p01, &p12, t);
    let p123 = <Point as Lerp>::lerp(&p12, &p23, t);
    let mid = <Point as Lerp>::lerp(&p012, &p123, t);
    (
        CubicBez::new(c.p0, p01, p012, mid),
        CubicBez::new(mid, p123, p23, c.p3),
    )
}

/// De Casteljau subdivision of a quadratic at `t`.
pub fn subdivide_quad(q: QuadBez, t: f64) -> (QuadBez, QuadBez) {
    let p01 = <Point as Lerp>::lerp(&q.p0, &q.p1, t);
    let p12 = <Point as Lerp>::lerp(&q.p1, &q.p2, t);
    let mid = <Point as Lerp>::lerp(&p01, &p12, t);
    (QuadBez::new(q.p0, p01, mid), QuadBez::new(mid, p12, q.p2))
}

/// Splits a cubic into `pieces` curves of equal parameter length.
///
/// Each step cuts `1 / remaining` off the front of what is left, so the
/// boundaries land on `i / pieces` of the original parameter range.
pub fn split_cubic(c: CubicBez, pieces: usize) -> Vec<CubicBez> {
    split_with(c, pieces, subdivide_cubic)
}

/// Quadratic counterpart of [`split_cubic`].
pub fn split_quad(q: QuadBez, pieces: usize) -> Vec<QuadBez> {
    split_with(q, pieces, subdivide_quad)
}

fn split_with<T: Copy>(curve: T, pieces: usize, subdivide: fn(T, f64) -> (T, T)) -> Vec<T> {
    let pieces = pieces.max(1);
    let mut out = Vec::with_capacity(pieces);
    let mut rest = curve;
    for i in 0..pieces - 1 {
        let (head, tail) = subdivide(rest, 1.0 / (pieces - i) as f64);
        out.push(head);
        rest = tail;
    }
    out.push(rest);
    out
}

/// Splits a line into `pieces` equal parts, returning the piece end points.
pub fn split_line(from: Point, to: Point, pieces: usize) -> Vec<Point> {
    let pieces = pieces.max(1);
    (1..=pieces)
        .map(|i| {
            if i == pieces {
                to
            } else {
                <Point as Lerp>::lerp(&from, &to, i as f64 / pieces as f64)
            }
        })
        .collect()
}

/// Splits an arc into `pieces` sub-arcs covering equal angular spans.
///
/// Sub-arcs keep the radii, rotation and sweep direction; none of them spans
/// more than half the original, so all have `large_arc == false`. Radii that
/// are too small for the end points are replaced by the corrected radii the
/// arc is actually drawn with. Arcs drawn as straight lines (a zero radius)
/// are cut at evenly spaced points along that line.
pub fn split_arc(arc: &ArcSegment, pieces: usize) -> Vec<ArcSegment> {
    let pieces = pieces.max(1);
    if pieces == 1 {
        return vec![*arc];
    }

    let piece = |from: Point, to: Point, rx: f64, ry: f64| ArcSegment {
        from,
        to,
        rx,
        ry,
        large_arc: false,
        ..*arc
    };

    let Some(ellipse) = kurbo::Arc::from_svg_arc(&arc.to_svg_arc()) else {
        let mut from = arc.from;
        return split_line(arc.from, arc.to, pieces)
            .into_iter()
            .map(|to| {
                let p = piece(from, to, arc.rx, arc.ry);
                from = to;
                p
            })
            .collect();
    };

    let scaled = ellipse.radii.x > arc.rx.abs() * (1.0 + 1e-9);
    let (rx, ry) = if scaled {
        (ellipse.radii.x, ellipse.radii.y)
    } else {
        (arc.rx, arc.ry)
    };

    let (sin_phi, cos_phi) = ellipse.x_rotation.sin_cos();
    let point_at = |angle: f64| {
        let (sin_a, cos_a) = angle.sin_cos();
        let v = Vec2::new(ellipse.radii.x * cos_a, ellipse.radii.y * sin_a);
        ellipse.center
            + Vec2::new(
                v.x * cos_phi - v.y * sin_phi,
                v.x * sin_phi + v.y * cos_phi,
            )
    };

    let step = ellipse.sweep_angle / pieces as f64;
    let mut from = arc.from;
    (1..=pieces)
        .map(|i| {
            let to = if i == pieces {
                arc.to
            } else {
                point_at(ellipse.start_angle + step * i as f64)
            };
            let p = piece(from, to, rx, ry);
            from = to;
            p
        })
        .collect()
}

/// Replaces `cmd` by `pieces` commands tracing the same geometry.
///
/// `pen` must be positioned at the start of `cmd`. Pieces keep the command's
/// case; relative pieces are relative to their own start. Lines (`L`/`H`/`V`)
/// become `L`, `S` becomes `C`, `T` becomes `Q`. A close is cut into lines
/// along the closing edge followed by the close itself.
pub fn split_command(pen: &Pen, cmd: &PathCommand, pieces: usize) -> Vec<PathCommand> {
    if pieces <= 1 {
        return vec![*cmd];
    }
    let case = cmd.case;

    let segments: Vec<Segment> = match pen.resolve(cmd) {
        Segment::Move { from, to } => (0..pieces)
            .map(|i| Segment::Move {
                from: if i == 0 { from } else { to },
                to,
            })
            .collect(),
        Segment::Line { from, to } => chain(from, split_line(from, to, pieces), |from, to| {
            Segment::Line { from, to }
        }),
        Segment::Close { from, to } => {
            let mut points = split_line(from, to, pieces);
            points.pop();
            let last = points.last().copied().unwrap_or(from);
            let mut segs = chain(from, points, |from, to| Segment::Line { from, to });
            segs.push(Segment::Close { from: last, to });
            segs
        }
        Segment::Cubic(c) => split_cubic(c, pieces)
            .into_iter()
            .map(Segment::Cubic)
            .collect(),
        Segment::Quad(q) => split_quad(q, pieces).into_iter().map(Segment::Quad).collect(),
        Segment::Arc(a) => split_arc(&a, pieces)
            .into_iter()
            .map(Segment::Arc)
            .collect(),
    };

    segments.iter().map(|s| s.to_command(case)).collect()
}

fn chain(
    start: Point,
    ends: Vec<Point>,
    make: impl Fn(Point, Point) -> Segment,
) -> Vec<Segment> {
    let mut from = start;
    ends.into_iter()
        .map(|to| {
            let seg = make(from, to);
            from = to;
            seg
        })
        .collect()
}
