use lib::prelude::*;
use y2016::triangle;

#[entry(input = "d03.txt")]
fn main(mut input: IStr) -> Result<(usize, usize)> {
    let mut rows = Vec::new();

    while let Some(row) = input.try_line::<[u32; 3]>()? {
        rows.push(row);
    }

    let part1 = triangle::count(&rows);
    let part2 = triangle::count(&triangle::by_columns(&rows)?);
    Ok((part1, part2))
}
