use super::error::{InputError, ParseErrorKind};
use super::fields::{apply_option, default_config};
use super::fragment::{FRAGMENT_KEYWORD, read_fragment};
use crate::core::io::stream::LineStream;
use crate::core::models::config::Config;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, instrument, trace};

/// Loads a run configuration from the input file at `path`.
///
/// The file is closed before this returns, whether or not loading succeeded.
///
/// # Errors
///
/// Returns [`InputError::Open`] if the file cannot be opened and otherwise
/// the first error [`load_config_from_reader`] runs into.
#[instrument(skip_all, name = "load_config", fields(path = %path.as_ref().display()))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_reader(BufReader::new(file))
}

/// Loads a run configuration from any buffered source.
///
/// Options start at their defaults. Each non-blank, non-comment line either
/// opens a fragment block or assigns one option. Comment lines may hold any
/// bytes; every other line must be UTF-8. Once input runs out, at
/// least one fragment must have been read; times and fragment lengths are
/// then converted to atomic units.
///
/// # Errors
///
/// The first malformed line aborts the load; no partial config is returned.
pub fn load_config_from_reader<R: BufRead>(reader: R) -> Result<Config, InputError> {
    let mut config = default_config()?;
    let mut stream = LineStream::new(reader);
    stream.advance()?;

    while let Some(mut cursor) = stream.cursor() {
        let line = stream.line_number();
        cursor.skip_space();

        if cursor.is_empty() || cursor.peek() == Some('#') {
            trace!(line, "Skipping blank or comment line.");
            stream.advance()?;
            continue;
        }

        if !stream.is_valid_utf8() {
            return Err(InputError::parse(line, ParseErrorKind::InvalidEncoding));
        }

        if cursor.eat(FRAGMENT_KEYWORD) {
            let offset = cursor.offset();
            stream.seek(offset);
            let fragment = read_fragment(&mut stream, config.coord_type)?;
            config.fragments.push(fragment);
            continue;
        }

        let coord_type = config.coord_type;
        apply_option(&mut cursor, &mut config).map_err(|kind| InputError::parse(line, kind))?;
        if config.coord_type != coord_type && !config.fragments.is_empty() {
            return Err(InputError::parse(
                line,
                ParseErrorKind::CoordChangedAfterFragments,
            ));
        }
        stream.advance()?;
    }

    if config.fragments.is_empty() {
        return Err(InputError::NoFragments);
    }

    config.convert_units();

    info!(
        fragments = config.fragments.len(),
        run_type = %config.run_type,
        "Input loaded."
    );
    Ok(config)
}
