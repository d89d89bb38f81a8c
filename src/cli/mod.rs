//! Command-line interface.
//!
//! Parses the requested action and its overrides and turns them into a
//! [`VolumeRequest`](crate::control::VolumeRequest).

mod args;

#[cfg(test)]
mod tests;

pub use args::{ActionArg, Args};
