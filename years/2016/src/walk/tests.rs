use lib::input::IStr;

use super::{distance, first_revisit, Heading, Instruction, InstructionError, Turn, Walker};

fn parse(input: &'static [u8]) -> Vec<Instruction> {
    IStr::new(input, 0)
        .iter::<Instruction>()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn test_distance() {
    assert_eq!(distance(&parse(b"R2, L3")), 5);
    assert_eq!(distance(&parse(b"R2, R2, R2")), 2);
    assert_eq!(distance(&parse(b"R5, L5, R5, R3\n")), 12);
}

#[test]
fn test_first_revisit() {
    assert_eq!(first_revisit(&parse(b"R8, R4, R4, R8")), Some(4));
    assert_eq!(first_revisit(&parse(b"R2, L3")), None);
    // Passing back through the origin.
    assert_eq!(first_revisit(&parse(b"R1, R1, R1, R1")), Some(0));
}

#[test]
fn test_walker() {
    let mut walker = Walker::default();
    assert_eq!(walker.heading(), Heading::North);

    walker.turn(Turn::Left);
    walker.advance(3);
    assert_eq!(walker.position(), (-3, 0));

    walker.turn(Turn::Left);
    walker.advance(4);
    assert_eq!(walker.heading(), Heading::South);
    assert_eq!(walker.position(), (-3, -4));
    assert_eq!(walker.distance(), 7);
}

#[test]
fn test_bad_instructions() {
    assert!(matches!(
        "".parse::<Instruction>(),
        Err(InstructionError::Empty)
    ));
    assert!(matches!(
        "X2".parse::<Instruction>(),
        Err(InstructionError::Turn(..))
    ));
    assert!(matches!(
        "R".parse::<Instruction>(),
        Err(InstructionError::Steps(..))
    ));

    let mut input = IStr::new(b"R2, Q3", 0);
    assert!(input.next::<Instruction>().is_ok());
    let error = input.next::<Instruction>().unwrap_err();
    assert_eq!(error.span(), 3..6);
    assert_eq!(error.to_string(), "bad turn 'Q' (at 3..6)");
}
