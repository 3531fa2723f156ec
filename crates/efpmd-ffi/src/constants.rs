//! Integer values of the enum fields in [`EfpmdOptions`](crate::EfpmdOptions).

use efpmd::{CoordType, DispDamp, ElecDamp, Ensemble, PolDamp, RunType, Terms};

pub const EFPMD_RUN_TYPE_SP: u32 = RunType::SinglePoint as u32;
pub const EFPMD_RUN_TYPE_GRAD: u32 = RunType::Gradient as u32;
pub const EFPMD_RUN_TYPE_HESS: u32 = RunType::Hessian as u32;
pub const EFPMD_RUN_TYPE_OPT: u32 = RunType::Optimize as u32;
pub const EFPMD_RUN_TYPE_MD: u32 = RunType::MolecularDynamics as u32;

pub const EFPMD_COORD_POINTS: u32 = CoordType::Points as u32;
pub const EFPMD_COORD_XYZABC: u32 = CoordType::XyzAbc as u32;
pub const EFPMD_COORD_ROTMAT: u32 = CoordType::RotMat as u32;

pub const EFPMD_ELEC_DAMP_SCREEN: u32 = ElecDamp::Screen as u32;
pub const EFPMD_ELEC_DAMP_OVERLAP: u32 = ElecDamp::Overlap as u32;
pub const EFPMD_ELEC_DAMP_OFF: u32 = ElecDamp::Off as u32;

pub const EFPMD_DISP_DAMP_TT: u32 = DispDamp::TangToennies as u32;
pub const EFPMD_DISP_DAMP_OVERLAP: u32 = DispDamp::Overlap as u32;
pub const EFPMD_DISP_DAMP_OFF: u32 = DispDamp::Off as u32;

pub const EFPMD_POL_DAMP_TT: u32 = PolDamp::TangToennies as u32;
pub const EFPMD_POL_DAMP_OFF: u32 = PolDamp::Off as u32;

pub const EFPMD_ENSEMBLE_NVE: u32 = Ensemble::Nve as u32;
pub const EFPMD_ENSEMBLE_NVT: u32 = Ensemble::Nvt as u32;

pub const EFPMD_TERM_ELEC: u32 = Terms::ELEC.bits();
pub const EFPMD_TERM_POL: u32 = Terms::POL.bits();
pub const EFPMD_TERM_DISP: u32 = Terms::DISP.bits();
pub const EFPMD_TERM_XR: u32 = Terms::XR.bits();
