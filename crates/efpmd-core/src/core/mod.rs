//! # Core Module
//!
//! Stateless building blocks shared by the input reader: data models, unit
//! constants and the line and value readers.
//!
//! - **Data Models** ([`models`]) - `Config`, `Fragment` and option enums
//! - **Text Input** ([`io`]) - Lowercasing line stream and primitive value readers
//! - **Units** ([`units`]) - Conversion constants into atomic units

pub mod io;
pub mod models;
pub mod units;
