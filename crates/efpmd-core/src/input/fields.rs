//! The option table and the single code path that assigns options.
//!
//! Each row pairs a keyword with its default, written exactly as it would
//! appear in an input file, and an `assign` function that reads the value,
//! validates it and stores it in one named field of [`Config`]. Defaults and
//! user input go through the same `assign`, so they cannot be interpreted
//! differently.

use super::error::{InputError, ParseErrorKind};
use crate::core::io::readers::{read_double, read_int, read_keyword, read_path, read_terms};
use crate::core::io::stream::Cursor;
use crate::core::models::config::Config;
use tracing::debug;

/// Compiled-in location of the bundled fragment library.
pub const DEFAULT_FRAGLIB_PATH: &str = match option_env!("EFPMD_DATA_DIR") {
    Some(path) => path,
    None => "/usr/local/share/efpmd/fraglib",
};

/// Why a row's `assign` rejected its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldFault {
    /// The value did not parse.
    Value,
    /// The value parsed but failed the row's range check.
    Range,
}

type Assign = fn(&mut Cursor<'_>, &mut Config) -> Result<(), FieldFault>;

/// One row of the option table.
pub struct FieldDescriptor {
    pub name: &'static str,
    pub default: &'static str,
    assign: Assign,
}

impl FieldDescriptor {
    pub(crate) fn assign(
        &self,
        cursor: &mut Cursor<'_>,
        config: &mut Config,
    ) -> Result<(), FieldFault> {
        (self.assign)(cursor, config)
    }
}

macro_rules! field {
    ($name:literal, $default:expr, $read:path, $slot:ident) => {
        field!(@row $name, $default, $read, $slot, any_value)
    };
    ($name:literal, $default:expr, $read:path, $slot:ident, check = $check:path) => {
        field!(@row $name, $default, $read, $slot, $check)
    };
    (@row $name:literal, $default:expr, $read:path, $slot:ident, $check:expr) => {
        FieldDescriptor {
            name: $name,
            default: $default,
            assign: {
                fn assign(cursor: &mut Cursor<'_>, config: &mut Config) -> Result<(), FieldFault> {
                    let value = $read(cursor).ok_or(FieldFault::Value)?;
                    if !$check(&value) {
                        return Err(FieldFault::Range);
                    }
                    config.$slot = value;
                    Ok(())
                }
                assign
            },
        }
    };
}

fn any_value<T>(_: &T) -> bool {
    true
}

fn int_gt_zero(value: &i32) -> bool {
    *value > 0
}

fn double_gt_zero(value: &f64) -> bool {
    *value > 0.0
}

/// Every option the input file accepts, matched by prefix in this order.
///
/// A keyword that is a textual prefix of another must be listed after it.
pub static FIELDS: [FieldDescriptor; 17] = [
    field!("run_type", "sp", read_keyword, run_type),
    field!("coord", "xyzabc", read_keyword, coord_type),
    field!("units", "angs", read_keyword, units),
    field!("terms", "elec pol disp xr", read_terms, terms),
    field!("elec_damp", "screen", read_keyword, elec_damp),
    field!("disp_damp", "tt", read_keyword, disp_damp),
    field!("pol_damp", "tt", read_keyword, pol_damp),
    field!("hess_delta", "0.001", read_double, hess_delta, check = double_gt_zero),
    field!("max_steps", "100", read_int, max_steps, check = int_gt_zero),
    field!("print_step", "1", read_int, print_step, check = int_gt_zero),
    field!("temperature", "300.0", read_double, temperature, check = double_gt_zero),
    field!("time_step", "1.0", read_double, time_step, check = double_gt_zero),
    field!("ensemble", "nve", read_keyword, ensemble),
    field!("thermostat_tau", "1.0e3", read_double, thermostat_tau, check = double_gt_zero),
    field!("opt_tol", "1.0e-4", read_double, opt_tol, check = double_gt_zero),
    field!("fraglib_path", DEFAULT_FRAGLIB_PATH, read_path, fraglib_path),
    field!("userlib_path", ".", read_path, userlib_path),
];

/// Looks up the row whose keyword starts the cursor's unread text.
pub fn find_field(text: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|field| text.starts_with(field.name))
}

/// Applies one option line to `config`.
///
/// The cursor must sit on the keyword. On success the whole line has been
/// consumed and the matched row is returned.
pub(crate) fn apply_option(
    cursor: &mut Cursor<'_>,
    config: &mut Config,
) -> Result<&'static FieldDescriptor, ParseErrorKind> {
    let field = find_field(cursor.rest()).ok_or(ParseErrorKind::UnknownOption)?;
    cursor.advance(field.name.len());
    cursor.skip_space();

    field.assign(cursor, config).map_err(|fault| match fault {
        FieldFault::Value => ParseErrorKind::IncorrectValue { option: field.name },
        FieldFault::Range => ParseErrorKind::OutOfRange { option: field.name },
    })?;

    cursor.skip_space();
    if !cursor.is_empty() {
        return Err(ParseErrorKind::TrailingContent);
    }

    debug!(option = field.name, "Option assigned.");
    Ok(field)
}

/// A config holding every option's default and no fragments.
pub fn default_config() -> Result<Config, InputError> {
    let mut config = Config::blank();
    for field in &FIELDS {
        let mut cursor = Cursor::new(field.default);
        field
            .assign(&mut cursor, &mut config)
            .map_err(|_| InputError::InvalidDefault { option: field.name })?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::options::{
        CoordType, DispDamp, ElecDamp, Ensemble, PolDamp, RunType, Terms, Units,
    };
    use std::path::PathBuf;

    fn apply(line: &str, config: &mut Config) -> Result<&'static str, ParseErrorKind> {
        let mut cursor = Cursor::new(line);
        apply_option(&mut cursor, config).map(|field| field.name)
    }

    #[test]
    fn every_default_parses_and_passes_its_check() {
        for field in &FIELDS {
            let mut config = Config::blank();
            let mut cursor = Cursor::new(field.default);
            assert_eq!(
                field.assign(&mut cursor, &mut config),
                Ok(()),
                "default for {} was rejected",
                field.name
            );
        }
    }

    #[test]
    fn default_config_matches_published_defaults() {
        let config = default_config().unwrap();
        assert_eq!(config.run_type, RunType::SinglePoint);
        assert_eq!(config.coord_type, CoordType::XyzAbc);
        assert_eq!(config.units, Units::Angstrom);
        assert_eq!(config.terms, Terms::all());
        assert_eq!(config.elec_damp, ElecDamp::Screen);
        assert_eq!(config.disp_damp, DispDamp::TangToennies);
        assert_eq!(config.pol_damp, PolDamp::TangToennies);
        assert_eq!(config.hess_delta, 0.001);
        assert_eq!(config.max_steps, 100);
        assert_eq!(config.print_step, 1);
        assert_eq!(config.temperature, 300.0);
        assert_eq!(config.time_step, 1.0);
        assert_eq!(config.ensemble, Ensemble::Nve);
        assert_eq!(config.thermostat_tau, 1000.0);
        assert_eq!(config.opt_tol, 1.0e-4);
        assert_eq!(config.fraglib_path, PathBuf::from(DEFAULT_FRAGLIB_PATH));
        assert_eq!(config.userlib_path, PathBuf::from("."));
        assert!(config.fragments.is_empty());
    }

    #[test]
    fn no_keyword_shadows_a_later_keyword() {
        for (i, earlier) in FIELDS.iter().enumerate() {
            for later in &FIELDS[i + 1..] {
                assert!(
                    !later.name.starts_with(earlier.name),
                    "'{}' is listed before '{}' and would always match first",
                    earlier.name,
                    later.name
                );
            }
        }
    }

    #[test]
    fn apply_option_sets_named_field() {
        let mut config = default_config().unwrap();
        assert_eq!(apply("run_type md", &mut config), Ok("run_type"));
        assert_eq!(config.run_type, RunType::MolecularDynamics);
        assert_eq!(apply("max_steps   250  ", &mut config), Ok("max_steps"));
        assert_eq!(config.max_steps, 250);
        assert_eq!(apply("ensemble nvt", &mut config), Ok("ensemble"));
        assert_eq!(config.ensemble, Ensemble::Nvt);
        let line = "userlib_path \"/home/me/my frags\"";
        assert_eq!(apply(line, &mut config), Ok("userlib_path"));
        assert_eq!(config.userlib_path, PathBuf::from("/home/me/my frags"));
    }

    #[test]
    fn apply_option_rejects_unknown_keyword() {
        let mut config = default_config().unwrap();
        assert_eq!(apply("bogus 1", &mut config), Err(ParseErrorKind::UnknownOption));
    }

    #[test]
    fn apply_option_reports_unparsable_value() {
        let mut config = default_config().unwrap();
        assert_eq!(
            apply("run_type fast", &mut config),
            Err(ParseErrorKind::IncorrectValue { option: "run_type" })
        );
        assert_eq!(
            apply("temperature warm", &mut config),
            Err(ParseErrorKind::IncorrectValue { option: "temperature" })
        );
        assert_eq!(
            apply("max_steps", &mut config),
            Err(ParseErrorKind::IncorrectValue { option: "max_steps" })
        );
    }

    #[test]
    fn apply_option_enforces_range_checks() {
        let mut config = default_config().unwrap();
        for line in ["max_steps 0", "max_steps -5"] {
            assert_eq!(
                apply(line, &mut config),
                Err(ParseErrorKind::OutOfRange { option: "max_steps" })
            );
        }
        assert_eq!(
            apply("opt_tol 0.0", &mut config),
            Err(ParseErrorKind::OutOfRange { option: "opt_tol" })
        );
        assert_eq!(
            apply("temperature nan", &mut config),
            Err(ParseErrorKind::OutOfRange { option: "temperature" })
        );
        assert_eq!(apply("max_steps 1", &mut config), Ok("max_steps"));
        assert_eq!(config.max_steps, 1);
    }

    #[test]
    fn failed_assignment_leaves_field_untouched() {
        let mut config = default_config().unwrap();
        let _ = apply("max_steps 0", &mut config);
        assert_eq!(config.max_steps, 100);
        let _ = apply("terms elec foo", &mut config);
        assert_eq!(config.terms, Terms::all());
    }

    #[test]
    fn apply_option_rejects_second_option_on_line() {
        let mut config = default_config().unwrap();
        assert_eq!(
            apply("max_steps 10 print_step 2", &mut config),
            Err(ParseErrorKind::TrailingContent)
        );
    }

    #[test]
    fn apply_option_rejects_partial_keyword_match_leftovers() {
        let mut config = default_config().unwrap();
        assert_eq!(
            apply("run_type optimize", &mut config),
            Err(ParseErrorKind::TrailingContent)
        );
        assert_eq!(apply("max_steps 1.5", &mut config), Err(ParseErrorKind::TrailingContent));
    }

    #[test]
    fn terms_option_replaces_previous_set() {
        let mut config = default_config().unwrap();
        assert_eq!(apply("terms elec disp", &mut config), Ok("terms"));
        assert_eq!(config.terms, Terms::ELEC | Terms::DISP);
        assert_eq!(
            apply("terms", &mut config),
            Err(ParseErrorKind::IncorrectValue { option: "terms" })
        );
        assert_eq!(
            apply("terms elec foo", &mut config),
            Err(ParseErrorKind::IncorrectValue { option: "terms" })
        );
    }

    #[test]
    fn units_option_sets_factor() {
        let mut config = default_config().unwrap();
        assert_eq!(apply("units bohr", &mut config), Ok("units"));
        assert_eq!(config.units_factor(), 1.0);
    }

    #[test]
    fn find_field_uses_literal_prefix() {
        assert_eq!(find_field("coord points").map(|f| f.name), Some("coord"));
        assert_eq!(find_field("max_steps10").map(|f| f.name), Some("max_steps"));
        assert!(find_field(" coord points").is_none());
    }
}
