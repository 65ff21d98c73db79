//! Command implementations

pub(crate) mod common;
pub(crate) mod ls;
pub(crate) mod new;
pub(crate) mod status;
pub(crate) mod up;
pub(crate) mod validate;
