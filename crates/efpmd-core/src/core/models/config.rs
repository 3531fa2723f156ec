use super::fragment::Fragment;
use super::options::{CoordType, DispDamp, ElecDamp, Ensemble, PolDamp, RunType, Terms, Units};
use crate::core::units::{ANGSTROM_TO_BOHR, FS_TO_AU};
use std::path::PathBuf;

/// Everything a simulation run is configured with.
///
/// A loaded `Config` is in atomic units: coordinates are in bohr and the time
/// step and thermostat relaxation time are in atomic units of time. The
/// `units` field records what the input file was written in.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub run_type: RunType,
    pub coord_type: CoordType,
    pub units: Units,
    pub terms: Terms,
    pub elec_damp: ElecDamp,
    pub disp_damp: DispDamp,
    pub pol_damp: PolDamp,
    /// Finite-difference displacement for the numerical Hessian.
    pub hess_delta: f64,
    pub max_steps: i32,
    pub print_step: i32,
    /// Target temperature in kelvin.
    pub temperature: f64,
    pub time_step: f64,
    pub ensemble: Ensemble,
    pub thermostat_tau: f64,
    /// Gradient convergence tolerance for geometry optimization.
    pub opt_tol: f64,
    /// Directory with the bundled fragment library.
    pub fraglib_path: PathBuf,
    /// Directory searched for user-supplied fragment parameters.
    pub userlib_path: PathBuf,
    pub fragments: Vec<Fragment>,
}

impl Config {
    /// A config with every option at its zero value and no fragments.
    ///
    /// This is the state before defaults are applied and is not meant to be
    /// handed to a driver.
    pub(crate) fn blank() -> Self {
        Self {
            run_type: RunType::SinglePoint,
            coord_type: CoordType::Points,
            units: Units::Bohr,
            terms: Terms::empty(),
            elec_damp: ElecDamp::Screen,
            disp_damp: DispDamp::TangToennies,
            pol_damp: PolDamp::TangToennies,
            hess_delta: 0.0,
            max_steps: 0,
            print_step: 0,
            temperature: 0.0,
            time_step: 0.0,
            ensemble: Ensemble::Nve,
            thermostat_tau: 0.0,
            opt_tol: 0.0,
            fraglib_path: PathBuf::new(),
            userlib_path: PathBuf::new(),
            fragments: Vec::new(),
        }
    }

    /// Multiplier taking input lengths to bohr.
    pub fn units_factor(&self) -> f64 {
        match self.units {
            Units::Bohr => 1.0,
            Units::Angstrom => ANGSTROM_TO_BOHR,
        }
    }

    /// Brings times and fragment lengths into atomic units.
    ///
    /// Must run exactly once, after the last fragment has been read.
    pub(crate) fn convert_units(&mut self) {
        self.time_step *= FS_TO_AU;
        self.thermostat_tau *= FS_TO_AU;

        let factor = self.units_factor();
        for fragment in &mut self.fragments {
            fragment.scale_lengths(factor);
        }
    }
}
