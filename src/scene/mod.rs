//! Declarative per-frame output.

pub(crate) mod fingerprint;
pub(crate) mod model;
