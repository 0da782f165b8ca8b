pub(crate) mod engine;
pub(crate) mod output;
pub(crate) mod policy;
pub(crate) mod trim;
