//! Linux packaging backends.

pub mod debian;
