use lib::input::IStr;

use super::{code, Direction, Keypad, KeypadError, Navigator};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn parse(input: &'static [u8]) -> Vec<Vec<Direction>> {
    let mut input = IStr::new(input, 0);
    let mut lines = Vec::new();

    while let Some(line) = input.try_line::<Vec<Direction>>().unwrap() {
        lines.push(line);
    }

    lines
}

#[test]
fn test_example() {
    let lines = parse(b"ULL\nRRDDD\nLURDL\nUUUUD\n");
    assert_eq!(code(&Keypad::square(), &lines), "1985");
    assert_eq!(code(&Keypad::diamond(), &lines), "5DB3");
}

#[test]
fn test_bad_direction() {
    let mut input = IStr::new(b"UDX\n", 0);
    let error = input.try_line::<Vec<Direction>>().unwrap_err();
    assert_eq!(error.span(), 2..3);
    assert_eq!(error.to_string(), "bad direction 'X' (at 2..3)");
}

#[test]
fn test_rejected_moves() {
    let keypad = Keypad::diamond();
    let mut navigator = Navigator::new(&keypad);
    assert_eq!(navigator.symbol(), '5');

    assert!(!navigator.step(Direction::Up));
    assert!(!navigator.step(Direction::Left));
    assert_eq!(navigator.position(), (2, 0));

    assert!(navigator.step(Direction::Right));
    assert!(navigator.step(Direction::Up));
    assert_eq!(navigator.symbol(), '2');
    assert!(!navigator.step(Direction::Left));
    assert_eq!(navigator.symbol(), '2');
}

/// Every sequence of up to six steps keeps the navigator on a key.
#[test]
fn test_stays_on_keys() {
    for keypad in [Keypad::square(), Keypad::diamond()] {
        for n in 0..4usize.pow(6) {
            let mut navigator = Navigator::new(&keypad);
            let mut n = n;

            for _ in 0..6 {
                let direction = DIRECTIONS[n % 4];
                n /= 4;

                let before = navigator.position();
                let moved = navigator.step(direction);

                let (row, column) = navigator.position();
                assert_eq!(keypad.key(row, column), Some(navigator.symbol()));
                assert_eq!(moved, before != navigator.position());
            }
        }
    }
}

#[test]
fn test_custom_keypad() {
    let cells = vec![Some('a'), None, Some('b'), Some('c')];
    let keypad = Keypad::new(cells.clone(), 2, 'c').unwrap();

    let mut navigator = Navigator::new(&keypad);
    assert_eq!(navigator.follow([Direction::Left, Direction::Up]), 'a');
    assert_eq!(navigator.follow([Direction::Right]), 'a');

    assert!(matches!(
        Keypad::new(cells.clone(), 3, 'a'),
        Err(KeypadError::Ragged(4, 3))
    ));
    assert!(matches!(
        Keypad::new(cells, 2, 'z'),
        Err(KeypadError::MissingStart('z'))
    ));
}
