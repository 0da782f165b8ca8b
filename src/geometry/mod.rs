pub(crate) mod bounds;
pub(crate) mod builder;
pub(crate) mod path;
