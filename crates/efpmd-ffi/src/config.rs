use efpmd::{Config, Fragment, load_config};
use std::ffi::{CStr, CString, c_char};
use std::path::Path;
use std::ptr;

/// Outcome of [`efpmd_config_load`]. Exactly one of the two pointers is set.
#[repr(C)]
pub struct EfpmdLoadResult {
    pub config: *mut Config,
    pub error: *mut c_char,
}

impl EfpmdLoadResult {
    fn success(config: Config) -> Self {
        Self {
            config: Box::into_raw(Box::new(config)),
            error: ptr::null_mut(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            config: ptr::null_mut(),
            error: to_c_string(message),
        }
    }
}

/// Scalar options of a loaded config.
///
/// Enum fields hold the `EFPMD_RUN_TYPE_*`, `EFPMD_COORD_*`,
/// `EFPMD_ELEC_DAMP_*`, `EFPMD_DISP_DAMP_*`, `EFPMD_POL_DAMP_*` and
/// `EFPMD_ENSEMBLE_*` values; `terms` is a mask of `EFPMD_TERM_*` bits.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EfpmdOptions {
    pub run_type: u32,
    pub coord_type: u32,
    pub units_factor: f64,
    pub terms: u32,
    pub elec_damp: u32,
    pub disp_damp: u32,
    pub pol_damp: u32,
    pub hess_delta: f64,
    pub max_steps: i32,
    pub print_step: i32,
    pub temperature: f64,
    pub time_step: f64,
    pub ensemble: u32,
    pub thermostat_tau: f64,
    pub opt_tol: f64,
}

impl From<&Config> for EfpmdOptions {
    fn from(config: &Config) -> Self {
        Self {
            run_type: config.run_type as u32,
            coord_type: config.coord_type as u32,
            units_factor: config.units_factor(),
            terms: config.terms.bits(),
            elec_damp: config.elec_damp as u32,
            disp_damp: config.disp_damp as u32,
            pol_damp: config.pol_damp as u32,
            hess_delta: config.hess_delta,
            max_steps: config.max_steps,
            print_step: config.print_step,
            temperature: config.temperature,
            time_step: config.time_step,
            ensemble: config.ensemble as u32,
            thermostat_tau: config.thermostat_tau,
            opt_tol: config.opt_tol,
        }
    }
}

fn to_c_string(text: &str) -> *mut c_char {
    CString::new(text.replace('\0', " "))
        .unwrap_or_default()
        .into_raw()
}

/// Loads an input file.
///
/// # Safety
///
/// `path` must be null or point to a NUL-terminated string. The returned
/// config must be released with [`efpmd_config_free`] and the error string
/// with [`efpmd_string_free`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_load(path: *const c_char) -> EfpmdLoadResult {
    if path.is_null() {
        return EfpmdLoadResult::error("Input path is null");
    }
    let path = match unsafe { CStr::from_ptr(path) }.to_str() {
        Ok(path) => path,
        Err(_) => return EfpmdLoadResult::error("Invalid UTF-8 in input path"),
    };
    match load_config(Path::new(path)) {
        Ok(config) => EfpmdLoadResult::success(config),
        Err(e) => {
            tracing::error!("{}", e);
            EfpmdLoadResult::error(&e.to_string())
        }
    }
}

/// Releases a config returned by [`efpmd_config_load`].
///
/// # Safety
///
/// `config` must be null or a pointer from [`efpmd_config_load`] that has not
/// been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_free(config: *mut Config) {
    if !config.is_null() {
        drop(unsafe { Box::from_raw(config) });
    }
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `s` must be null or a string returned by this library that has not been
/// freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Copies the scalar options out of `config`, or all zeros if it is null.
///
/// # Safety
///
/// `config` must be null or a live pointer from [`efpmd_config_load`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_options(config: *const Config) -> EfpmdOptions {
    unsafe { config.as_ref() }.map_or_else(EfpmdOptions::default, EfpmdOptions::from)
}

/// Null if `config` is null.
///
/// # Safety
///
/// `config` must be null or a live pointer from [`efpmd_config_load`]. A
/// non-null result must be released with [`efpmd_string_free`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_fraglib_path(config: *const Config) -> *mut c_char {
    unsafe { config.as_ref() }.map_or(ptr::null_mut(), |config| {
        to_c_string(&config.fraglib_path.to_string_lossy())
    })
}

/// Null if `config` is null.
///
/// # Safety
///
/// `config` must be null or a live pointer from [`efpmd_config_load`]. A
/// non-null result must be released with [`efpmd_string_free`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_userlib_path(config: *const Config) -> *mut c_char {
    unsafe { config.as_ref() }.map_or(ptr::null_mut(), |config| {
        to_c_string(&config.userlib_path.to_string_lossy())
    })
}

/// Zero if `config` is null.
///
/// # Safety
///
/// `config` must be null or a live pointer from [`efpmd_config_load`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_fragment_count(config: *const Config) -> usize {
    unsafe { config.as_ref() }.map_or(0, |config| config.fragments.len())
}

/// Fragment `index` of `config`, if both exist.
///
/// # Safety
///
/// `config` must be null or a live pointer from [`efpmd_config_load`].
unsafe fn fragment_at<'a>(config: *const Config, index: usize) -> Option<&'a Fragment> {
    unsafe { config.as_ref() }?.fragments.get(index)
}

/// Name of fragment `index`, or null if there is no such fragment.
///
/// # Safety
///
/// `config` must be null or a live pointer from [`efpmd_config_load`]. A
/// non-null result must be released with [`efpmd_string_free`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_fragment_name(
    config: *const Config,
    index: usize,
) -> *mut c_char {
    unsafe { fragment_at(config, index) }
        .map_or(ptr::null_mut(), |fragment| to_c_string(&fragment.name))
}

/// Copies the geometry values of fragment `index` into `out` and returns how
/// many were written (6, 9 or 12), or 0 if there is no such fragment.
///
/// # Safety
///
/// `config` must be null or a live pointer from [`efpmd_config_load`] and
/// `out` must have room for 12 values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_fragment_coords(
    config: *const Config,
    index: usize,
    out: *mut f64,
) -> usize {
    let Some(fragment) = (unsafe { fragment_at(config, index) }) else {
        return 0;
    };
    if out.is_null() {
        return 0;
    }
    let coords = fragment.coords();
    unsafe { ptr::copy_nonoverlapping(coords.as_ptr(), out, coords.len()) };
    coords.len()
}

/// Copies the six velocity values of fragment `index` into `out`.
///
/// # Safety
///
/// `config` must be null or a live pointer from [`efpmd_config_load`] and
/// `out` must have room for 6 values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn efpmd_config_fragment_velocity(
    config: *const Config,
    index: usize,
    out: *mut f64,
) -> bool {
    match unsafe { fragment_at(config, index) } {
        Some(fragment) if !out.is_null() => {
            let velocity = &fragment.velocity;
            unsafe { ptr::copy_nonoverlapping(velocity.as_ptr(), out, velocity.len()) };
            true
        }
        _ => false,
    }
}
