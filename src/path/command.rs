use smallvec::SmallVec;

/// Numeric fields of a command in their fixed per-kind order.
pub type Fields = SmallVec<[f64; 7]>;

/// An ordered path command sequence.
pub type PathCommands = Vec<PathCommand>;

/// Absolute (upper-case letter) or relative (lower-case letter) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Case {
    /// Coordinates are in user space.
    #[default]
    Absolute,
    /// Coordinates are offsets from the command's start point.
    Relative,
}

impl Case {
    fn of_letter(c: char) -> Self {
        if c.is_ascii_lowercase() {
            Self::Relative
        } else {
            Self::Absolute
        }
    }
}

/// Fieldless tag for each path command kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M`
    MoveTo,
    /// `L`
    LineTo,
    /// `H`
    HorizontalLineTo,
    /// `V`
    VerticalLineTo,
    /// `C`
    CubicCurveTo,
    /// `S`
    SmoothCubicCurveTo,
    /// `Q`
    QuadraticCurveTo,
    /// `T`
    SmoothQuadraticCurveTo,
    /// `A`
    ArcTo,
    /// `Z`
    ClosePath,
}

impl CommandKind {
    /// Every kind, in letter order `MLHVCSQTAZ`.
    pub const ALL: [CommandKind; 10] = [
        Self::MoveTo,
        Self::LineTo,
        Self::HorizontalLineTo,
        Self::VerticalLineTo,
        Self::CubicCurveTo,
        Self::SmoothCubicCurveTo,
        Self::QuadraticCurveTo,
        Self::SmoothQuadraticCurveTo,
        Self::ArcTo,
        Self::ClosePath,
    ];

    /// Number of numeric fields one command of this kind carries.
    pub fn arity(self) -> usize {
        self.field_names().len()
    }

    /// Field names in serialization order, as used by the JSON command form.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::MoveTo | Self::LineTo | Self::SmoothQuadraticCurveTo => &["x", "y"],
            Self::HorizontalLineTo => &["x"],
            Self::VerticalLineTo => &["y"],
            Self::CubicCurveTo => &["x1", "y1", "x2", "y2", "x", "y"],
            Self::SmoothCubicCurveTo => &["x2", "y2", "x", "y"],
            Self::QuadraticCurveTo => &["x1", "y1", "x", "y"],
            Self::ArcTo => &[
                "rx",
                "ry",
                "xAxisRotation",
                "largeArcFlag",
                "sweepFlag",
                "x",
                "y",
            ],
            Self::ClosePath => &[],
        }
    }

    /// The SVG letter for this kind in the given case.
    pub fn letter(self, case: Case) -> char {
        let upper = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CubicCurveTo => 'C',
            Self::SmoothCubicCurveTo => 'S',
            Self::QuadraticCurveTo => 'Q',
            Self::SmoothQuadraticCurveTo => 'T',
            Self::ArcTo => 'A',
            Self::ClosePath => 'Z',
        };
        match case {
            Case::Absolute => upper,
            Case::Relative => upper.to_ascii_lowercase(),
        }
    }

    /// Inverse of [`CommandKind::letter`].
    pub fn from_letter(c: char) -> Option<(Self, Case)> {
        let kind = match c.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'C' => Self::CubicCurveTo,
            'S' => Self::SmoothCubicCurveTo,
            'Q' => Self::QuadraticCurveTo,
            'T' => Self::SmoothQuadraticCurveTo,
            'A' => Self::ArcTo,
            'Z' => Self::ClosePath,
            _ => return None,
        };
        Some((kind, Case::of_letter(c)))
    }

    /// Whether the field at `index` is an arc flag (`largeArcFlag`/`sweepFlag`).
    pub fn is_flag_field(self, index: usize) -> bool {
        self == Self::ArcTo && (index == 3 || index == 4)
    }
}

/// The operation of a path command together with its numeric fields.
///
/// Coordinates are interpreted according to the owning command's [`Case`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum PathOp {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    HorizontalLineTo {
        x: f64,
    },
    VerticalLineTo {
        y: f64,
    },
    CubicCurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    SmoothCubicCurveTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    SmoothQuadraticCurveTo {
        x: f64,
        y: f64,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        /// Degrees.
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    ClosePath,
}

impl PathOp {
    /// Kind tag of this operation.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::MoveTo { .. } => CommandKind::MoveTo,
            Self::LineTo { .. } => CommandKind::LineTo,
            Self::HorizontalLineTo { .. } => CommandKind::HorizontalLineTo,
            Self::VerticalLineTo { .. } => CommandKind::VerticalLineTo,
            Self::CubicCurveTo { .. } => CommandKind::CubicCurveTo,
            Self::SmoothCubicCurveTo { .. } => CommandKind::SmoothCubicCurveTo,
            Self::QuadraticCurveTo { .. } => CommandKind::QuadraticCurveTo,
            Self::SmoothQuadraticCurveTo { .. } => CommandKind::SmoothQuadraticCurveTo,
            Self::ArcTo { .. } => CommandKind::ArcTo,
            Self::ClosePath => CommandKind::ClosePath,
        }
    }

    /// Numeric fields in [`CommandKind::field_names`] order; flags as `0.0`/`1.0`.
    pub fn fields(&self) -> Fields {
        let mut out = Fields::new();
        match *self {
            Self::MoveTo { x, y }
            | Self::LineTo { x, y }
            | Self::SmoothQuadraticCurveTo { x, y } => out.extend([x, y]),
            Self::HorizontalLineTo { x } => out.push(x),
            Self::VerticalLineTo { y } => out.push(y),
            Self::CubicCurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => out.extend([x1, y1, x2, y2, x, y]),
            Self::SmoothCubicCurveTo { x2, y2, x, y } => out.extend([x2, y2, x, y]),
            Self::QuadraticCurveTo { x1, y1, x, y } => out.extend([x1, y1, x, y]),
            Self::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => out.extend([
                rx,
                ry,
                x_axis_rotation,
                flag_value(large_arc),
                flag_value(sweep),
                x,
                y,
            ]),
            Self::ClosePath => {}
        }
        out
    }

    /// Builds an operation of `kind` from fields in [`PathOp::fields`] order.
    ///
    /// Missing trailing fields read as `0`. Flag fields are rounded to the
    /// nearest of `0`/`1`, with `0.5` rounding up.
    pub fn from_fields(kind: CommandKind, fields: &[f64]) -> Self {
        let f = |i: usize| fields.get(i).copied().unwrap_or(0.0);
        match kind {
            CommandKind::MoveTo => Self::MoveTo { x: f(0), y: f(1) },
            CommandKind::LineTo => Self::LineTo { x: f(0), y: f(1) },
            CommandKind::HorizontalLineTo => Self::HorizontalLineTo { x: f(0) },
            CommandKind::VerticalLineTo => Self::VerticalLineTo { y: f(0) },
            CommandKind::CubicCurveTo => Self::CubicCurveTo {
                x1: f(0),
                y1: f(1),
                x2: f(2),
                y2: f(3),
                x: f(4),
                y: f(5),
            },
            CommandKind::SmoothCubicCurveTo => Self::SmoothCubicCurveTo {
                x2: f(0),
                y2: f(1),
                x: f(2),
                y: f(3),
            },
            CommandKind::QuadraticCurveTo => Self::QuadraticCurveTo {
                x1: f(0),
                y1: f(1),
                x: f(2),
                y: f(3),
            },
            CommandKind::SmoothQuadraticCurveTo => Self::SmoothQuadraticCurveTo { x: f(0), y: f(1) },
            CommandKind::ArcTo => Self::ArcTo {
                rx: f(0),
                ry: f(1),
                x_axis_rotation: f(2),
                large_arc: f(3) >= 0.5,
                sweep: f(4) >= 0.5,
                x: f(5),
                y: f(6),
            },
            CommandKind::ClosePath => Self::ClosePath,
        }
    }
}

fn flag_value(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

/// One command of an SVG path: an operation plus its coordinate case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathCommand {
    /// Absolute or relative coordinates.
    pub case: Case,
    /// The operation and its fields.
    pub op: PathOp,
}

impl PathCommand {
    /// Creates a command.
    pub fn new(case: Case, op: PathOp) -> Self {
        Self { case, op }
    }

    /// Creates an absolute (upper-case) command.
    pub fn absolute(op: PathOp) -> Self {
        Self::new(Case::Absolute, op)
    }

    /// Creates a relative (lower-case) command.
    pub fn relative(op: PathOp) -> Self {
        Self::new(Case::Relative, op)
    }

    /// `M x,y`
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::absolute(PathOp::MoveTo { x, y })
    }

    /// `L x,y`
    pub fn line_to(x: f64, y: f64) -> Self {
        Self::absolute(PathOp::LineTo { x, y })
    }

    /// `C x1,y1,x2,y2,x,y`
    pub fn cubic_to(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        Self::absolute(PathOp::CubicCurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        })
    }

    /// `Q x1,y1,x,y`
    pub fn quad_to(x1: f64, y1: f64, x: f64, y: f64) -> Self {
        Self::absolute(PathOp::QuadraticCurveTo { x1, y1, x, y })
    }

    /// `Z`
    pub fn close() -> Self {
        Self::absolute(PathOp::ClosePath)
    }

    /// Kind tag of this command.
    pub fn kind(&self) -> CommandKind {
        self.op.kind()
    }

    /// The SVG letter, honoring case.
    pub fn letter(&self) -> char {
        self.kind().letter(self.case)
    }

    /// Numeric fields; see [`PathOp::fields`].
    pub fn fields(&self) -> Fields {
        self.op.fields()
    }

    /// Whether this is a `Z`/`z`.
    pub fn is_close(&self) -> bool {
        matches!(self.op, PathOp::ClosePath)
    }

    /// Whether this is an `M`/`m`.
    pub fn is_move(&self) -> bool {
        matches!(self.op, PathOp::MoveTo { .. })
    }

    /// Whether `S`/`s` or `T`/`t`, whose first control point is implied.
    pub fn is_smooth(&self) -> bool {
        matches!(
            self.op,
            PathOp::SmoothCubicCurveTo { .. } | PathOp::SmoothQuadraticCurveTo { .. }
        )
    }

    /// Same kind and case, so the two can be blended field by field.
    pub fn same_shape(&self, other: &PathCommand) -> bool {
        self.kind() == other.kind() && self.case == other.case
    }
}
