//! # Integer lists
//!
//! Reading a text file with one decimal integer per line, and writing one line of output for each
//! of them. Empty lines at the end of the file are ignored, an empty line followed by more values
//! is an error.
use std::error::Error;
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{Read, Write};
use std::ops::Div;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use num::{BigUint, One};

use crate::data::number_types::traits::factorization::{Factorizable, SmallestDivisor};
use crate::io::error::{FileLocation, Import, Parse, ParseResult};
use crate::io::output::{divisor_line, factorization_line, Format};

/// Split a list into numbered lines.
///
/// # Arguments
///
/// * `text`: The entire list.
///
/// # Return value
///
/// An iterator over the lines, numbered from 1, without the empty or whitespace only lines at the
/// end. Empty lines between values are kept.
pub fn into_lines<'a>(text: &'a str) -> impl Iterator<Item = FileLocation<'a>> + 'a {
    let lines = text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line))
        .collect::<Vec<_>>();

    let end = lines.iter()
        .rposition(|(_, line)| !line.trim().is_empty())
        .map_or(0, |index| index + 1);
    if end < lines.len() {
        debug!("Ignoring {} empty lines at the end", lines.len() - end);
    }

    lines.into_iter().take(end)
}

/// Read the integer on a line.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// If the line is empty, or not a decimal integer that fits in `T`.
pub fn parse_value<T>(location: FileLocation) -> ParseResult<T>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    let (_, line) = location;
    let text = line.trim();

    if text.is_empty() {
        return Err(Parse::new("Empty line before the end of the list").with_file_location(location));
    }

    text.parse()
        .map_err(|error| Parse::wrap_other(
            error,
            format!("Failed to parse \"{}\" as an integer", text),
        ).with_file_location(location))
}

/// Write one line for every value in a list.
///
/// # Arguments
///
/// * `program`: Integers, one per line.
/// * `format`: Whether to print the smallest divisor or the entire factorization.
/// * `out`: Where the lines are written to, one for each value, in input order.
///
/// # Return value
///
/// The number of values that were processed.
///
/// # Errors
///
/// At the first line that isn't an integer of at least 2, including an empty line that is followed
/// by more values, or when writing fails. Lines before
/// that one have been written already.
pub fn factorize_list<T, W>(program: &str, format: Format, out: &mut W) -> Result<usize, Import>
where
    T: FromStr + SmallestDivisor + Factorizable<Factor=T> + Clone + One + Display + Debug + Send + Sync + 'static,
    <T as Factorizable>::Power: Display + Debug + One + PartialEq,
    T::Err: Error + Send + Sync + 'static,
    for<'r> &'r T: Div<&'r T, Output=T>,
    W: Write,
{
    let mut count = 0;

    for location in into_lines(program) {
        let n = parse_value::<T>(location)?;

        let line = match format {
            Format::Divisor => {
                let divisor = n.smallest_divisor()
                    .map_err(|error| Parse::wrap_other(error, "Value has no smallest divisor")
                        .with_file_location(location))?;
                if divisor.is_prime() {
                    debug!("{} is prime", n);
                } else {
                    debug!("Smallest divisor of {}: {:?}", n, divisor);
                }
                divisor_line(&n, divisor)
            },
            Format::Factorization => {
                let factorization = n.factorize()
                    .map_err(|error| Parse::wrap_other(error, "Value can't be factorized")
                        .with_file_location(location))?;
                debug!("Factorization of {}: {:?}", n, factorization.factors);
                factorization_line(&n, &factorization)
            },
        };

        writeln!(out, "{}", line)?;
        count += 1;
    }

    Ok(count)
}

/// Read a list from a file and write one line for each value.
///
/// See `factorize_list`.
///
/// # Errors
///
/// When the file can't be read, or as described at `factorize_list`.
pub fn factorize_file<T, W>(file_path: &Path, format: Format, out: &mut W) -> Result<usize, Import>
where
    T: FromStr + SmallestDivisor + Factorizable<Factor=T> + Clone + One + Display + Debug + Send + Sync + 'static,
    <T as Factorizable>::Power: Display + Debug + One + PartialEq,
    T::Err: Error + Send + Sync + 'static,
    for<'r> &'r T: Div<&'r T, Output=T>,
    W: Write,
{
    info!("Reading {:?}", file_path);

    let mut program = String::new();
    File::open(file_path)
        .map_err(Import::IO)?
        .read_to_string(&mut program)
        .map_err(Import::IO)?;

    let count = factorize_list::<T, W>(&program, format, out)?;
    info!("Processed {} values from {:?}", count, file_path);

    Ok(count)
}

/// Integer type that the values of a list are read as.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Precision {
    /// No upper bound on the values.
    Arbitrary,
    /// Values up to `u64::MAX`, faster for lists that fit.
    U64,
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Arbitrary
    }
}

/// Read a list from a file, parsing the values with the given precision.
///
/// See `factorize_file`.
///
/// # Errors
///
/// As described at `factorize_file`. With `Precision::U64`, values that don't fit in 64 bits are
/// a parse error.
pub fn factorize_file_with<W: Write>(
    file_path: &Path,
    precision: Precision,
    format: Format,
    out: &mut W,
) -> Result<usize, Import> {
    match precision {
        Precision::Arbitrary => factorize_file::<BigUint, W>(file_path, format, out),
        Precision::U64 => factorize_file::<u64, W>(file_path, format, out),
    }
}
