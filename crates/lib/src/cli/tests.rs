use core::time::Duration;

use super::error::pos_from;
use super::{error_context, LineCol, Mode, Opts, OutputEq, Report};
use crate::input::IStr;

#[test]
fn test_parse_opts() {
    let opts = Opts::parse_from(["--bench", "--count", "3", "--json"]).unwrap();
    assert_eq!(opts.mode, Mode::Bench);
    assert_eq!(opts.count, Some(3));
    assert!(opts.json);

    assert!(Opts::parse_from(["--bench", "--bench"]).is_err());
    assert!(Opts::parse_from(["--warmup"]).is_err());
    assert!(Opts::parse_from(["--time-limit", "soon"]).is_err());
    assert!(Opts::parse_from(["--frobnicate"]).is_err());

    let opts = Opts::parse_from(["--", "--frobnicate"]).unwrap();
    assert_eq!(opts.mode, Mode::Default);
}

#[test]
fn test_pos_from() {
    let data = b"abc\ndef\nghi";
    assert_eq!(pos_from(data, 0..1), LineCol::new(0, 0));
    assert_eq!(pos_from(data, 5..6), LineCol::new(1, 1));
    assert_eq!(pos_from(data, 8..11), LineCol::new(2, 0));
    assert_eq!(LineCol::new(1, 1).to_string(), "2:2");
}

#[test]
fn test_error_context() {
    let mut input = IStr::new(b"1 2\n3 x\n", 0);
    let original = input;

    let error = input
        .iter::<u32>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err();

    let error = error_context("inputs/test.txt", original, error);
    assert_eq!(error.to_string(), "inputs/test.txt:2:3");
}

#[test]
fn test_report() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
    let report = Report::from_sorted(&samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.p50, Duration::from_millis(50));
    assert_eq!(report.p99, Duration::from_millis(99));
    assert_eq!(report.avg, Duration::from_micros(50_500));

    let empty = Report::from_sorted(&[]);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.avg, Duration::ZERO);
}

#[test]
fn test_output_eq() {
    let mut code = arrayvec::ArrayString::<8>::new();
    code.push_str("5DB3");

    assert!((code, Some(42u32)).output_eq(&("5DB3", Some(42u32))));
    assert!(!String::from("1985").output_eq(&"5DB3"));
}
