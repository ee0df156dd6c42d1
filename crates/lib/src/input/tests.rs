use super::{ErrorKind, IStr, B, W};

#[test]
fn test_lines_and_words() {
    let mut input = IStr::new(b"R2, L3\nfoo bar\n", 0);

    let mut line = input.line::<IStr>().unwrap();
    let W(first) = line.next::<W<&str>>().unwrap();
    let W(second) = line.next::<W<&str>>().unwrap();
    assert_eq!((first, second), ("R2,", "L3"));
    assert!(line.try_next::<W<&str>>().unwrap().is_none());

    assert_eq!(input.try_line::<&str>().unwrap(), Some("foo bar"));
    assert_eq!(input.try_line::<&str>().unwrap(), None);
}

#[test]
fn test_tuple_per_line() {
    let mut input = IStr::new(b"  5 10  25\n 3 4 5\n", 0);

    assert_eq!(input.try_line::<(u32, u32, u32)>().unwrap(), Some((5, 10, 25)));
    assert_eq!(input.try_line::<(u32, u32, u32)>().unwrap(), Some((3, 4, 5)));
    assert_eq!(input.try_line::<(u32, u32, u32)>().unwrap(), None);
}

#[test]
fn test_short_tuple() {
    let mut input = IStr::new(b"1 2\n", 0);
    let error = input.try_line::<(u32, u32, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(3)));
    assert_eq!(error.span(), 0..3);

    let mut input = IStr::new(b"7", 0);
    let error = input.next::<(u32, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));
    assert_eq!(error.span(), 0..1);
}

#[test]
fn test_not_integer_span() {
    let mut input = IStr::new(b"12\nab 7", 0);
    assert_eq!(input.next::<u32>().unwrap(), 12);

    let error = input.next::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("ab")));
    assert_eq!(error.span(), 3..5);
}

#[test]
fn test_bytes() {
    let mut input = IStr::new(b"UD\nL", 0);
    let line = input.line::<Vec<B>>().unwrap();
    assert_eq!(line.iter().map(|B(b)| *b).collect::<Vec<_>>(), b"UD");
    assert_eq!(input.index(), 3);
    assert!(input.eat(b"L"));
    assert!(input.is_empty());
}
