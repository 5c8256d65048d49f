//! # Factor lists
//!
//! Integer lists read from files, as the `factors` binary does.
use std::path::{Path, PathBuf};

use num::BigUint;

use factors::io::error::Import;
use factors::io::list::{factorize_file, factorize_file_with, Precision};
use factors::io::output::Format;
use factors::timing::try_measure;

/// Relative path of the folder where the list files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Compute the path of a list file, based on its name.
///
/// # Arguments
///
/// * `name`: File name without extension.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}

fn run_u64(name: &str, format: Format) -> (Result<usize, Import>, String) {
    let mut out = Vec::new();
    let result = factorize_file::<u64, _>(&get_test_file_path(name), format, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn run_big(name: &str, format: Format) -> (Result<usize, Import>, String) {
    let mut out = Vec::new();
    let result = factorize_file::<BigUint, _>(&get_test_file_path(name), format, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn mixed() {
    let (result, output) = run_u64("mixed", Format::Divisor);
    assert_eq!(result.unwrap(), 10);
    assert_eq!(output, "\
        15=5*3\n\
        2=1*2\n\
        3=3*1\n\
        9=3*3\n\
        91=13*7\n\
        7919=7919*1\n\
        600851475143=8462696833*71\n\
        1000000007=1000000007*1\n\
        18446744073709551615=6148914691236517205*3\n\
        4295098369=65537*65537\n\
    ");
}

#[test]
fn mixed_big_agrees() {
    let (small_result, small_output) = run_u64("mixed", Format::Divisor);
    let (big_result, big_output) = run_big("mixed", Format::Divisor);
    assert_eq!(small_result.unwrap(), big_result.unwrap());
    assert_eq!(small_output, big_output);

    let (small_result, small_output) = run_u64("mixed", Format::Factorization);
    let (big_result, big_output) = run_big("mixed", Format::Factorization);
    assert_eq!(small_result.unwrap(), big_result.unwrap());
    assert_eq!(small_output, big_output);
}

#[test]
fn composites() {
    let (result, output) = run_u64("composites", Format::Factorization);
    assert_eq!(result.unwrap(), 4);
    assert_eq!(output, "360=2^3*3^2*5\n1024=2^10\n97=97\n600851475143=71*839*1471*6857\n");
}

#[test]
fn empty_line() {
    let (result, output) = run_u64("empty_line", Format::Divisor);
    match result {
        Err(Import::Parse(error)) => assert_eq!(error.line_number(), Some(3)),
        other => panic!("{:?}", other),
    }
    assert_eq!(output, "21=7*3\n35=7*5\n");
}

#[test]
fn trailing_empty_lines() {
    let (result, output) = run_big("trailing_empty_lines", Format::Divisor);
    assert_eq!(result.unwrap(), 2);
    assert_eq!(output, "21=7*3\n35=7*5\n");
}

#[test]
fn beyond_u64_by_default() {
    let path = get_test_file_path("beyond_u64");

    let mut out = Vec::new();
    let result = factorize_file_with(&path, Precision::default(), Format::Divisor, &mut out);
    assert_eq!(result.unwrap(), 2);
    assert_eq!(String::from_utf8(out).unwrap(), "\
        18446744073709551617=67280421310721*274177\n\
        18446744073709551616=9223372036854775808*2\n\
    ");

    let mut out = Vec::new();
    let result = factorize_file_with(&path, Precision::U64, Format::Divisor, &mut out);
    assert!(matches!(result, Err(Import::Parse(_))));
    assert!(out.is_empty());
}

#[test]
fn not_a_number() {
    let (result, output) = run_u64("not_a_number", Format::Divisor);
    match result {
        Err(Import::Parse(error)) => {
            assert_eq!(error.line_number(), Some(3));
            assert!(error.to_string().contains("forty-nine"));
        },
        other => panic!("{:?}", other),
    }
    assert_eq!(output, "21=7*3\n35=7*5\n");
}

#[test]
fn too_small() {
    let (result, output) = run_u64("too_small", Format::Factorization);
    match result {
        Err(Import::Parse(error)) => assert_eq!(error.line_number(), Some(2)),
        other => panic!("{:?}", other),
    }
    assert_eq!(output, "21=3*7\n");
}

#[test]
fn big() {
    let (result, output) = run_big("big", Format::Divisor);
    assert_eq!(result.unwrap(), 2);
    assert_eq!(output, "\
        340282366920938463463374607431768211456=170141183460469231731687303715884105728*2\n\
        10070220912104633783561751105640143175249=1006317668842273786705481273672443607*10007\n\
    ");

    let (result, output) = run_big("big", Format::Factorization);
    assert_eq!(result.unwrap(), 2);
    assert_eq!(output, "\
        340282366920938463463374607431768211456=2^128\n\
        10070220912104633783561751105640143175249=10007^10\n\
    ");

    // Too large for 64 bits
    let (result, output) = run_u64("big", Format::Divisor);
    assert!(matches!(result, Err(Import::Parse(_))));
    assert!(output.is_empty());
}

#[test]
fn missing_file() {
    let (result, _) = run_u64("does_not_exist", Format::Divisor);
    assert!(matches!(result, Err(Import::IO(_))));
}

#[test]
fn timed() {
    let mut out = Vec::new();
    let measurement = try_measure(|| {
        factorize_file::<u64, _>(&get_test_file_path("mixed"), Format::Divisor, &mut out).map(|_| ())
    }).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 10);

    let report = measurement.to_string();
    let lines = report.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "");
    assert!(lines[1].starts_with("real: "));
    assert!(lines[2].starts_with("user: "));
    assert!(lines[3].starts_with("sys: "));
    for line in &lines[1..] {
        let (_, seconds) = line.split_at(line.find(": ").unwrap() + 2);
        assert!(seconds.parse::<f64>().unwrap() >= 0.0);
    }
}

#[test]
fn timed_failure() {
    let mut out = Vec::new();
    let result = try_measure(|| {
        factorize_file::<u64, _>(&get_test_file_path("not_a_number"), Format::Divisor, &mut out).map(|_| ())
    });
    assert!(matches!(result, Err(Import::Parse(_))));
}
