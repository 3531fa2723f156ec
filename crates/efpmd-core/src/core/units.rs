//! Physical constants used when bringing input values into atomic units.

/// Bohr radius in angstroms.
pub const BOHR_RADIUS: f64 = 0.52917721092;

/// Femtoseconds to atomic units of time.
pub const FS_TO_AU: f64 = 1.0 / 2.41888432650516e-2;

/// Factor that turns a length in angstroms into bohr.
pub const ANGSTROM_TO_BOHR: f64 = 1.0 / BOHR_RADIUS;
