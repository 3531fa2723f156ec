//! # Models Module
//!
//! Plain data produced by the input reader: the run [`config::Config`], the
//! [`fragment::Fragment`] list it carries, and the keyword-valued option types
//! in [`options`].

pub mod config;
pub mod fragment;
pub mod options;
