//! Serializable configuration and its validation.

pub(crate) mod color;
pub(crate) mod model;
pub(crate) mod validate;
