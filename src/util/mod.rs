pub(crate) mod fast;
pub(crate) mod utf8;
