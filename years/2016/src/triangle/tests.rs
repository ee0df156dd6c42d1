use lib::input::IStr;

use super::{by_columns, count, is_triangle, PartialGroup};

const INPUT: &[u8] = b"101 301 501\n102 302 502\n103 303 503\n201 401 601\n202 402 602\n203 403 603\n";

fn parse(input: &'static [u8]) -> Vec<[u32; 3]> {
    let mut input = IStr::new(input, 0);
    let mut rows = Vec::new();

    while let Some(row) = input.try_line::<[u32; 3]>().unwrap() {
        rows.push(row);
    }

    rows
}

#[test]
fn test_is_triangle() {
    assert!(!is_triangle([5, 10, 25]));
    assert!(!is_triangle([1, 2, 3]));
    assert!(is_triangle([2, 2, 3]));
    assert!(is_triangle([u32::MAX, u32::MAX, u32::MAX]));
}

#[test]
fn test_rows() {
    let rows = parse(b"  5  10  25\n  3   4   5\n");
    assert_eq!(rows, [[5, 10, 25], [3, 4, 5]]);
    assert_eq!(count(&rows), 1);
}

#[test]
fn test_columns() {
    let rows = parse(INPUT);
    assert_eq!(count(&rows), 3);

    let columns = by_columns(&rows).unwrap();
    assert_eq!(columns.len(), 6);
    assert_eq!(columns[0], [101, 102, 103]);
    assert_eq!(columns[5], [601, 602, 603]);
    assert_eq!(count(&columns), 6);
}

#[test]
fn test_partial_group() {
    let rows = parse(b"1 2 3\n4 5 6\n7 8 9\n10 11 12\n");
    assert!(matches!(by_columns(&rows), Err(PartialGroup(1))));
}

#[test]
fn test_bad_row() {
    let mut input = IStr::new(b"1 2\n", 0);
    assert!(input.try_line::<[u32; 3]>().is_err());
}
