//! # EFPMD Input Library
//!
//! Reads the text input file of an EFP simulation run into a [`Config`]: the
//! run type, numerical controls, physical units and the list of rigid
//! fragments with their starting geometry and optional velocities.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** Data models (`Config`, `Fragment`, option
//!   enums), unit constants, and the lowercasing line stream with its
//!   primitive value readers.
//!
//! - **[`input`]: The Reader.** The option table with its defaults, the
//!   fragment block reader, and the loader that drives them line by line.
//!
//! ## Example
//!
//! ```no_run
//! let config = efpmd::load_config("water.in")?;
//! for fragment in &config.fragments {
//!     println!("{} {:?}", fragment.name, fragment.coords());
//! }
//! # Ok::<(), efpmd::InputError>(())
//! ```

pub mod core;
pub mod input;

pub use crate::core::models::config::Config;
pub use crate::core::models::fragment::{Fragment, FragmentGeometry};
pub use crate::core::models::options::{
    CoordType, DispDamp, ElecDamp, Ensemble, PolDamp, RunType, Terms, Units,
};
pub use crate::input::error::{InputError, ParseErrorKind};
pub use crate::input::fields::default_config;
pub use crate::input::loader::{load_config, load_config_from_reader};
