pub(crate) mod pen;
pub(crate) mod promote;
pub(crate) mod split;
