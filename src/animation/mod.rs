pub(crate) mod random;
pub(crate) mod spring;
