use lib::prelude::*;
use y2016::walk::{self, Instruction};

#[entry(input = "d01.txt")]
fn main(mut input: IStr) -> Result<(u64, Option<u64>)> {
    let instructions = input.iter::<Instruction>().collect::<Result<Vec<_>, _>>()?;
    log::debug!("{} instructions", instructions.len());

    let part1 = walk::distance(&instructions);
    let part2 = walk::first_revisit(&instructions);
    Ok((part1, part2))
}
