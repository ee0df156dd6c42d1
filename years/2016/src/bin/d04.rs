use lib::prelude::*;
use y2016::room::{self, Room};

/// Name of the room the north pole objects are stored in.
const TARGET: &str = "northpole object storage";

#[entry(input = "d04.txt")]
fn main(mut input: IStr) -> Result<(u64, Option<u32>)> {
    let mut rooms = Vec::new();

    while let Some(room) = input.try_line::<Room>()? {
        rooms.push(room);
    }

    let part1 = room::sector_sum(&rooms);
    let part2 = room::find_sector(&rooms, TARGET);
    Ok((part1, part2))
}
