pub(crate) mod spotify;
