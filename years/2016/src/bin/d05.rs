use lib::prelude::*;
use y2016::door::{Door, DIFFICULTY};

#[entry(input = "d05.txt", expect = ("d4cd2ee1", "f2c730e5"))]
fn main(mut input: IStr) -> Result<(ArrayString<8>, ArrayString<8>)> {
    let W(id) = input.next::<W<&str>>()?;
    let door = Door::new(id, DIFFICULTY)?;
    Ok((door.simple_password()?, door.positional_password()?))
}
