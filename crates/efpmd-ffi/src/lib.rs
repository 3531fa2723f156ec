//! C interface to the EFPMD input reader.
//!
//! A driver loads an input file with [`efpmd_config_load`], reads options
//! and fragments through the accessor functions, and hands the config back to
//! [`efpmd_config_free`] when done. Strings returned by the library are owned
//! by the caller and released with [`efpmd_string_free`].

mod config;
mod constants;
mod logging;

pub use config::{
    EfpmdLoadResult, EfpmdOptions, efpmd_config_fragment_coords, efpmd_config_fragment_count,
    efpmd_config_fragment_name, efpmd_config_fragment_velocity, efpmd_config_fraglib_path,
    efpmd_config_free, efpmd_config_load, efpmd_config_options, efpmd_config_userlib_path,
    efpmd_string_free,
};
pub use constants::*;
pub use logging::efpmd_logging_init;
