pub(crate) mod align;
pub(crate) mod interpolator;
pub(crate) mod options;
