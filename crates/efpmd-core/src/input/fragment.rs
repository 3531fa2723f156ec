use super::error::{InputError, ParseErrorKind};
use crate::core::io::readers::{read_double, read_string};
use crate::core::io::stream::LineStream;
use crate::core::models::fragment::Fragment;
use crate::core::models::options::CoordType;
use std::io::BufRead;
use tracing::debug;

/// Keyword that opens a fragment block.
pub const FRAGMENT_KEYWORD: &str = "fragment";

/// Keyword of the optional line that precedes a fragment's velocities.
pub const VELOCITY_KEYWORD: &str = "velocity";

/// Reads one fragment block.
///
/// The stream must be positioned just past the `fragment` keyword. On return
/// the stream sits on the first line after the block (or is exhausted), so
/// the caller must not advance it again.
///
/// `coord_type` decides the block shape: one row of six values for
/// `xyzabc`, three rows of three for `points`, four rows of three for
/// `rotmat`. Values after the required ones on a row are ignored.
pub(crate) fn read_fragment<R: BufRead>(
    stream: &mut LineStream<R>,
    coord_type: CoordType,
) -> Result<Fragment, InputError> {
    let mut fragment = Fragment::new(coord_type);

    fragment.name = stream
        .cursor()
        .and_then(|mut cursor| read_string(&mut cursor))
        .ok_or_else(|| {
            InputError::parse(stream.line_number(), ParseErrorKind::MissingFragmentName)
        })?;
    stream.advance()?;

    let (rows, columns) = coord_type.layout();
    for row in fragment.coords[..rows * columns].chunks_mut(columns) {
        read_row(stream, row, ParseErrorKind::IncorrectCoordinates)?;
    }

    let has_velocity = stream.cursor().is_some_and(|mut cursor| {
        cursor.skip_space();
        cursor.eat(VELOCITY_KEYWORD)
    });
    if has_velocity {
        stream.advance()?;
        read_row(stream, &mut fragment.velocity, ParseErrorKind::IncorrectVelocities)?;
    }

    debug!(
        name = %fragment.name,
        coord = %coord_type,
        has_velocity,
        "Fragment read."
    );
    Ok(fragment)
}

/// Fills `values` from the current line, then moves to the next line.
fn read_row<R: BufRead>(
    stream: &mut LineStream<R>,
    values: &mut [f64],
    kind: ParseErrorKind,
) -> Result<(), InputError> {
    let line = stream.line_number();
    let mut cursor = stream
        .cursor()
        .ok_or_else(|| InputError::parse(line + 1, kind.clone()))?;

    for value in values.iter_mut() {
        *value =
            read_double(&mut cursor).ok_or_else(|| InputError::parse(line, kind.clone()))?;
    }

    stream.advance()?;
    Ok(())
}
