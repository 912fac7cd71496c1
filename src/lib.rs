//! wavyte-morph turns two SVG path descriptions into an evaluator for the
//! in-between shapes.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: path data (`d` attribute) `-> PathCommands`
//! 2. **Align**: extend the shorter path by splitting its segments, then give
//!    every source command the kind and case of its destination partner
//! 3. **Plan**: capture the aligned `(from, to)` field pairs in a [`MorphPlan`]
//! 4. **Evaluate**: blend each field linearly at `t`, optionally serialize
//!
//! Building does all the work once; evaluation is a pure function of `t` and
//! interpolators are `Send + Sync`.
//!
//! ```
//! use wavyte_morph::{MorphOptions, interpolate_path};
//!
//! let morph = interpolate_path("M0,0L10,10", "M10,10L20,20L200,200", MorphOptions::default());
//! assert_eq!(morph.eval(0.5), "M5,5L12.5,12.5L105,105");
//! assert_eq!(morph.eval(1.0), "M10,10L20,20L200,200");
//! ```
//!
//! Splitting never changes a path's rendered geometry: lines split at even
//! spacing, curves by de Casteljau subdivision and arcs into equal angular
//! spans. Malformed input is tolerated; [`try_parse_path`] is the strict
//! alternative when errors should surface.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod geometry;
mod morph;
mod path;

pub use foundation::error::{MorphError, MorphResult};
pub use foundation::math::{CubicBez, Lerp, Point, QuadBez, Vec2};
pub use geometry::pen::{ArcSegment, Pen, Segment};
pub use geometry::promote::{convert_command, explicit_form};
pub use geometry::split::{
    split_arc, split_command, split_cubic, split_line, split_quad, subdivide_cubic, subdivide_quad,
};
pub use morph::align::{Aligned, align};
pub use morph::interpolator::{
    CommandInterpolator, MorphPlan, PathInterpolator, interpolate_path, interpolate_path_commands,
};
pub use morph::options::{MorphOptions, SegmentFilter};
pub use path::bez::to_bez_path;
pub use path::command::{Case, CommandKind, Fields, PathCommand, PathCommands, PathOp};
pub use path::parse::{parse_path, try_parse_path};
pub use path::record::{commands_from_json, commands_to_json};
pub use path::serialize::serialize_path;
