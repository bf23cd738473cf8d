//! API middleware and request utilities

pub mod validation;
