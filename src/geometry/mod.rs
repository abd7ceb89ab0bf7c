pub(crate) mod chord;
