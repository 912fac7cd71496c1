pub(crate) mod bez;
pub(crate) mod command;
pub(crate) mod parse;
pub(crate) mod record;
pub(crate) mod serialize;
