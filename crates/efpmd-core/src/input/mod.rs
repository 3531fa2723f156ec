//! # Input Module
//!
//! Turns an EFPMD input file into a [`Config`](crate::core::models::config::Config).
//!
//! - [`fields`] - The option table, defaults and per-line option dispatch
//! - [`fragment`] - Reader for `fragment` blocks in each coordinate convention
//! - [`loader`] - The line loop tying both together, plus unit conversion
//! - [`error`] - Error types for every way a load can fail
//!
//! Loading is all-or-nothing: the first problem aborts it with an
//! [`InputError`](error::InputError) naming the line and the offending option
//! or construct.

pub mod error;
pub mod fields;
pub mod fragment;
pub mod loader;
