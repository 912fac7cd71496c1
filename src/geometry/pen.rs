use kurbo::{CubicBez, Point, QuadBez, SvgArc, Vec2};

use crate::path::command::{Case, PathCommand, PathOp};

/// An elliptical arc in absolute endpoint form.
///
/// The x-axis rotation stays in degrees so that a split or converted arc
/// serializes the caller's value unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// X radius as written.
    pub rx: f64,
    /// Y radius as written.
    pub ry: f64,
    /// Rotation of the ellipse's x axis, in degrees.
    pub x_axis_rotation: f64,
    /// `largeArcFlag`.
    pub large_arc: bool,
    /// `sweepFlag`.
    pub sweep: bool,
}

impl ArcSegment {
    /// The same arc as a kurbo [`SvgArc`] (radians, absolute radii).
    pub fn to_svg_arc(&self) -> SvgArc {
        SvgArc {
            from: self.from,
            to: self.to,
            radii: Vec2::new(self.rx.abs(), self.ry.abs()),
            x_rotation: self.x_axis_rotation.to_radians(),
            large_arc: self.large_arc,
            sweep: self.sweep,
        }
    }
}

/// Absolute, explicit geometry of one command.
///
/// `H`/`V` resolve to lines and `S`/`T` to curves with their implied control
/// point made explicit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Pen moves without drawing.
    Move {
        /// Pen position before the move.
        from: Point,
        /// Target.
        to: Point,
    },
    /// Straight line.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Quadratic bezier.
    Quad(QuadBez),
    /// Cubic bezier.
    Cubic(CubicBez),
    /// Elliptical arc.
    Arc(ArcSegment),
    /// Line back to the start of the current subpath.
    Close {
        /// Pen position before closing.
        from: Point,
        /// Subpath start.
        to: Point,
    },
}

impl Segment {
    /// Pen position where the segment starts.
    pub fn start(&self) -> Point {
        match self {
            Self::Move { from, .. } | Self::Line { from, .. } | Self::Close { from, .. } => *from,
            Self::Quad(q) => q.p0,
            Self::Cubic(c) => c.p0,
            Self::Arc(a) => a.from,
        }
    }

    /// Pen position after the segment.
    pub fn end(&self) -> Point {
        match self {
            Self::Move { to, .. } | Self::Line { to, .. } | Self::Close { to, .. } => *to,
            Self::Quad(q) => q.p2,
            Self::Cubic(c) => c.p3,
            Self::Arc(a) => a.to,
        }
    }

    /// Writes the segment back as a single command in `case`.
    ///
    /// Relative output is expressed against the segment's own start point.
    pub fn to_command(&self, case: Case) -> PathCommand {
        let p0 = self.start();
        let rel = |p: Point| match case {
            Case::Absolute => (p.x, p.y),
            Case::Relative => (p.x - p0.x, p.y - p0.y),
        };
        let op = match *self {
            Self::Move { to, .. } => {
                let (x, y) = rel(to);
                PathOp::MoveTo { x, y }
            }
            Self::Line { to, .. } => {
                let (x, y) = rel(to);
                PathOp::LineTo { x, y }
            }
            Self::Quad(q) => {
                let (x1, y1) = rel(q.p1);
                let (x, y) = rel(q.p2);
                PathOp::QuadraticCurveTo { x1, y1, x, y }
            }
            Self::Cubic(c) => {
                let (x1, y1) = rel(c.p1);
                let (x2, y2) = rel(c.p2);
                let (x, y) = rel(c.p3);
                PathOp::CubicCurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                }
            }
            Self::Arc(a) => {
                let (x, y) = rel(a.to);
                PathOp::ArcTo {
                    rx: a.rx,
                    ry: a.ry,
                    x_axis_rotation: a.x_axis_rotation,
                    large_arc: a.large_arc,
                    sweep: a.sweep,
                    x,
                    y,
                }
            }
            Self::Close { .. } => PathOp::ClosePath,
        };
        PathCommand::new(case, op)
    }
}

/// Pen state while walking a command sequence.
///
/// Tracks the current point, the start of the current subpath and the last
/// control points that `S`/`T` reflect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pen {
    position: Point,
    subpath_start: Point,
    cubic_ctrl: Option<Point>,
    quad_ctrl: Option<Point>,
}

impl Pen {
    /// A pen at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current absolute position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Position of the most recent move, where `Z` returns to.
    pub fn subpath_start(&self) -> Point {
        self.subpath_start
    }

    /// Resolves `cmd` against the current state without moving the pen.
    pub fn resolve(&self, cmd: &PathCommand) -> Segment {
        let p0 = self.position;
        let relative = cmd.case == Case::Relative;
        let abs = |x: f64, y: f64| {
            if relative {
                Point::new(p0.x + x, p0.y + y)
            } else {
                Point::new(x, y)
            }
        };

        match cmd.op {
            PathOp::MoveTo { x, y } => Segment::Move {
                from: p0,
                to: abs(x, y),
            },
            PathOp::LineTo { x, y } => Segment::Line {
                from: p0,
                to: abs(x, y),
            },
            PathOp::HorizontalLineTo { x } => Segment::Line {
                from: p0,
                to: Point::new(if relative { p0.x + x } else { x }, p0.y),
            },
            PathOp::VerticalLineTo { y } => Segment::Line {
                from: p0,
                to: Point::new(p0.x, if relative { p0.y + y } else { y }),
            },
            PathOp::CubicCurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Segment::Cubic(CubicBez::new(p0, abs(x1, y1), abs(x2, y2), abs(x, y))),
            PathOp::SmoothCubicCurveTo { x2, y2, x, y } => {
                let c1 = self.cubic_ctrl.map_or(p0, |c| p0 + (p0 - c));
                Segment::Cubic(CubicBez::new(p0, c1, abs(x2, y2), abs(x, y)))
            }
            PathOp::QuadraticCurveTo { x1, y1, x, y } => {
                Segment::Quad(QuadBez::new(p0, abs(x1, y1), abs(x, y)))
            }
            PathOp::SmoothQuadraticCurveTo { x, y } => {
                let c = self.quad_ctrl.map_or(p0, |c| p0 + (p0 - c));
                Segment::Quad(QuadBez::new(p0, c, abs(x, y)))
            }
            PathOp::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => Segment::Arc(ArcSegment {
                from: p0,
                to: abs(x, y),
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
            }),
            PathOp::ClosePath => Segment::Close {
                from: p0,
                to: self.subpath_start,
            },
        }
    }

    /// Resolves `cmd` and moves the pen past it.
    pub fn advance(&mut self, cmd: &PathCommand) -> Segment {
        let seg = self.resolve(cmd);
        self.position = seg.end();
        if let Segment::Move { to, .. } = seg {
            self.subpath_start = to;
        }
        self.cubic_ctrl = match seg {
            Segment::Cubic(c) => Some(c.p2),
            _ => None,
        };
        self.quad_ctrl = match seg {
            Segment::Quad(q) => Some(q.p1),
            _ => None,
        };
        seg
    }

    /// Resolves a whole sequence from a fresh pen.
    pub fn segments(commands: &[PathCommand]) -> Vec<Segment> {
        let mut pen = Self::new();
        commands.iter().map(|cmd| pen.advance(cmd)).collect()
    }
}
