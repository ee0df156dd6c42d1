use super::{digits, Door, DoorError, HashSearch, DIFFICULTY};

#[test]
fn test_digits() {
    let mut buf = [0; 20];
    assert_eq!(digits(0, &mut buf), b"0");
    assert_eq!(digits(3231929, &mut buf), b"3231929");
    assert_eq!(digits(u64::MAX, &mut buf), b"18446744073709551615");
}

#[test]
fn test_search() {
    let hits = HashSearch::new("abc", 2)
        .take(3)
        .map(|hit| hit.index)
        .collect::<Vec<_>>();

    assert_eq!(hits, [18, 185, 444]);
}

#[test]
fn test_restart() {
    let search = HashSearch::new("abc", 2);
    let hit = search.clone().starting_at(186).next().unwrap();
    assert_eq!(hit.index, 444);
    assert_eq!(hit.hex(), "0066030a305313f8a04929dfedd34123");

    let hit = HashSearch::new("abc", DIFFICULTY)
        .starting_at(3231929)
        .next()
        .unwrap();

    assert_eq!(hit.index, 3231929);
    assert_eq!(hit.hex(), "00000155f8105dff7f56ee10fa9b9abd");
    assert_eq!(hit.nibble(5), Some(1));
    assert_eq!(hit.nibble(6), Some(5));
}

#[test]
fn test_end_of_search() {
    let mut search = HashSearch::new("abc", 0).starting_at(u64::MAX);
    assert_eq!(search.next().map(|hit| hit.index), Some(u64::MAX));
    assert!(search.next().is_none());
}

#[test]
fn test_passwords() {
    let door = Door::new("abc", 2).unwrap();
    assert_eq!(door.simple_password().unwrap().as_str(), "35675755");
    assert_eq!(door.positional_password().unwrap().as_str(), "d7342f64");
}

#[test]
fn test_difficulty() {
    assert!(Door::new("abc", 30).is_ok());
    assert!(matches!(
        Door::new("abc", 31),
        Err(DoorError::Difficulty(31))
    ));
}
