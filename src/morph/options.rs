use std::sync::Arc;

use crate::foundation::error::{MorphError, MorphResult};
use crate::path::command::PathCommand;

/// Predicate over `(segment start command, segment command)`.
///
/// Returning `true` keeps the segment from receiving extra pieces when the
/// shorter path is extended.
pub type SegmentFilter = Arc<dyn Fn(&PathCommand, &PathCommand) -> bool + Send + Sync>;

#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Settings resolved once when an interpolator is built.
pub struct MorphOptions {
    /// Return the destination input unchanged for `t >= 1`.
    #[serde(alias = "snapEndsToInput")]
    pub snap_ends_to_input: bool,
    /// Segments that must not be split while extending the shorter path.
    #[serde(skip)]
    pub exclude_segment: Option<SegmentFilter>,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            snap_ends_to_input: true,
            exclude_segment: None,
        }
    }
}

impl std::fmt::Debug for MorphOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphOptions")
            .field("snap_ends_to_input", &self.snap_ends_to_input)
            .field("exclude_segment", &self.exclude_segment.is_some())
            .finish()
    }
}

impl MorphOptions {
    /// Sets [`MorphOptions::snap_ends_to_input`].
    pub fn with_snap_ends_to_input(mut self, snap: bool) -> Self {
        self.snap_ends_to_input = snap;
        self
    }

    /// Sets [`MorphOptions::exclude_segment`].
    pub fn with_exclude_segment(
        mut self,
        filter: impl Fn(&PathCommand, &PathCommand) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.exclude_segment = Some(Arc::new(filter));
        self
    }

    /// Reads options from JSON; absent keys keep their defaults.
    pub fn from_json(json: &str) -> MorphResult<Self> {
        serde_json::from_str(json).map_err(|e| MorphError::serde(e.to_string()))
    }
}
