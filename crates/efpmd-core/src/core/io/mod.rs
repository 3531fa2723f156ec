//! Line-level input primitives.
//!
//! [`stream`] turns a byte source into lowercased lines with a read cursor;
//! [`readers`] extracts single values (strings, numbers, keyword tokens) from
//! that cursor without committing on failure.

pub mod readers;
pub mod stream;
