pub(crate) mod candidates;
pub(crate) mod model;
