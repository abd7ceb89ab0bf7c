pub(crate) mod participation;
pub(crate) mod spectrum;
pub(crate) mod stride;
