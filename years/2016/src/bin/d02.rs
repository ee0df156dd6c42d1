use lib::prelude::*;
use y2016::keypad::{self, Direction, Keypad};

#[entry(input = "d02.txt")]
fn main(mut input: IStr) -> Result<(String, String)> {
    let mut lines = Vec::new();

    while let Some(line) = input.try_line::<Vec<Direction>>()? {
        lines.push(line);
    }

    let part1 = keypad::code(&Keypad::square(), &lines);
    let part2 = keypad::code(&Keypad::diamond(), &lines);
    Ok((part1, part2))
}
