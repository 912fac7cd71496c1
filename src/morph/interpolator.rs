use crate::foundation::math::Lerp;
use crate::morph::align::{Aligned, align};
use crate::morph::options::MorphOptions;
use crate::path::command::{Case, CommandKind, Fields, PathCommand, PathCommands, PathOp};
use crate::path::parse::parse_path;
use crate::path::serialize::serialize_path;

#[derive(Clone, Debug)]
struct PlannedCommand {
    kind: CommandKind,
    case: Case,
    from: Fields,
    to: Fields,
}

impl PlannedCommand {
    fn blend(&self, t: f64) -> PathCommand {
        let fields: Fields = self
            .from
            .iter()
            .zip(&self.to)
            .map(|(a, b)| <f64 as Lerp>::lerp(a, b, t))
            .collect();
        PathCommand::new(self.case, PathOp::from_fields(self.kind, &fields))
    }
}

#[derive(Clone, Debug)]
/// Aligned field pairs for two paths, built once and evaluated many times.
pub struct MorphPlan {
    commands: Vec<PlannedCommand>,
    aligned: Aligned,
    target: PathCommands,
    options: MorphOptions,
}

impl MorphPlan {
    #[tracing::instrument(skip_all, fields(from_len = a.len(), to_len = b.len()))]
    /// Aligns `a` onto `b` and captures the per-field blend pairs.
    pub fn build(a: &[PathCommand], b: &[PathCommand], options: &MorphOptions) -> Self {
        let aligned = align(a, b, options.exclude_segment.as_ref());
        let commands = aligned
            .from
            .iter()
            .zip(&aligned.to)
            .map(|(from, to)| PlannedCommand {
                kind: to.kind(),
                case: to.case,
                from: from.fields(),
                to: to.fields(),
            })
            .collect::<Vec<_>>();
        tracing::debug!(aligned_len = commands.len(), "morph plan built");

        Self {
            commands,
            aligned,
            target: b.to_vec(),
            options: options.clone(),
        }
    }

    /// Path at `t`, returning the destination as given once `t >= 1` when
    /// snapping is enabled.
    pub fn eval(&self, t: f64) -> PathCommands {
        if self.snaps_at(t) {
            return self.target.clone();
        }
        self.blend(t)
    }

    /// Path at `t` without snapping.
    ///
    /// Every field is `from + (to - from) * t`; arc flags round to the nearer
    /// of 0 and 1, with 0.5 going to 1. `t` outside `[0, 1]` extrapolates.
    pub fn blend(&self, t: f64) -> PathCommands {
        self.commands.iter().map(|c| c.blend(t)).collect()
    }

    /// Number of commands every evaluated path has.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether both inputs were empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Options the plan was built with.
    pub fn options(&self) -> &MorphOptions {
        &self.options
    }

    /// The aligned sequences the plan blends between.
    pub fn aligned(&self) -> &Aligned {
        &self.aligned
    }

    fn snaps_at(&self, t: f64) -> bool {
        self.options.snap_ends_to_input && t >= 1.0
    }
}

#[derive(Clone, Debug)]
/// Interpolates between two path strings.
pub struct PathInterpolator {
    plan: MorphPlan,
    target: Option<String>,
}

impl PathInterpolator {
    /// Path data at `t`.
    ///
    /// With snapping enabled, `t >= 1` returns the destination string exactly
    /// as it was passed in (`""` when it was absent).
    pub fn eval(&self, t: f64) -> String {
        if self.plan.snaps_at(t) {
            return self.target.clone().unwrap_or_default();
        }
        serialize_path(&self.plan.blend(t))
    }

    /// The underlying plan.
    pub fn plan(&self) -> &MorphPlan {
        &self.plan
    }
}

#[derive(Clone, Debug)]
/// Interpolates between two command sequences.
pub struct CommandInterpolator {
    plan: MorphPlan,
}

impl CommandInterpolator {
    /// Commands at `t`; see [`MorphPlan::eval`].
    pub fn eval(&self, t: f64) -> PathCommands {
        self.plan.eval(t)
    }

    /// The underlying plan.
    pub fn plan(&self) -> &MorphPlan {
        &self.plan
    }
}

/// Builds an interpolator between two SVG path strings.
///
/// Absent or unparsable input counts as an empty path.
pub fn interpolate_path<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
    options: MorphOptions,
) -> PathInterpolator {
    let b = b.into();
    let plan = MorphPlan::build(&parse_path(a), &parse_path(b), &options);
    PathInterpolator {
        plan,
        target: b.map(str::to_owned),
    }
}

/// Builds an interpolator between two command sequences.
pub fn interpolate_path_commands(
    a: Option<&[PathCommand]>,
    b: Option<&[PathCommand]>,
    options: MorphOptions,
) -> CommandInterpolator {
    CommandInterpolator {
        plan: MorphPlan::build(a.unwrap_or_default(), b.unwrap_or_default(), &options),
    }
}
