//! Encrypted room records.

#[cfg(test)]
mod tests;

use core::str::FromStr;
use std::num::ParseIntError;

use thiserror::Error;

/// Maximum number of letters in a checksum.
pub const CHECKSUM_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("missing checksum `[`")]
    MissingChecksum,
    #[error("missing dash before sector id")]
    MissingDash,
    #[error("empty name")]
    EmptyName,
    #[error("bad sector id {0:?}")]
    BadSectorId(String, #[source] ParseIntError),
    #[error("missing final `]`")]
    MissingBracket,
    #[error("checksum has {0} letters, expected 1 to 5")]
    ChecksumLength(usize),
}

/// A room record such as `aaaaa-bbb-z-y-x-123[abxyz]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Encrypted name, dashes included.
    pub name: String,
    pub sector_id: u32,
    pub checksum: String,
}

impl FromStr for Room {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bracket = s.find('[').ok_or(RoomError::MissingChecksum)?;
        let dash = s[..bracket].rfind('-').ok_or(RoomError::MissingDash)?;

        let name = &s[..dash];

        if name.is_empty() {
            return Err(RoomError::EmptyName);
        }

        let sector_id = &s[dash + 1..bracket];
        let sector_id = sector_id
            .parse()
            .map_err(|e| RoomError::BadSectorId(sector_id.to_owned(), e))?;

        let Some(checksum) = s[bracket + 1..].strip_suffix(']') else {
            return Err(RoomError::MissingBracket);
        };

        if checksum.is_empty() || checksum.len() > CHECKSUM_LEN {
            return Err(RoomError::ChecksumLength(checksum.len()));
        }

        Ok(Self {
            name: name.to_owned(),
            sector_id,
            checksum: checksum.to_owned(),
        })
    }
}

lib::from_input! {
    |line: &'static str| -> Room {
        Ok(line.parse()?)
    }
}

impl Room {
    /// Test if the checksum of the room matches its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2016::room::Room;
    ///
    /// let room: Room = "not-a-real-room-404[oarel]".parse()?;
    /// assert!(room.is_real());
    ///
    /// let room: Room = "totally-real-room-200[decoy]".parse()?;
    /// assert!(!room.is_real());
    /// # Ok::<_, y2016::room::RoomError>(())
    /// ```
    #[inline]
    pub fn is_real(&self) -> bool {
        checksum(&self.name) == self.checksum
    }

    /// Decrypt the name of the room.
    #[inline]
    pub fn decrypt(&self) -> String {
        rotate(&self.name, self.sector_id)
    }
}

/// Sum the sector ids of the real rooms.
pub fn sector_sum(rooms: &[Room]) -> u64 {
    rooms
        .iter()
        .filter(|room| room.is_real())
        .map(|room| u64::from(room.sector_id))
        .sum()
}

/// Find the sector id of the first real room whose name decrypts to `target`.
pub fn find_sector(rooms: &[Room], target: &str) -> Option<u32> {
    let room = rooms
        .iter()
        .find(|room| room.is_real() && room.decrypt() == target)?;

    log::debug!("{target} is in sector {}", room.sector_id);
    Some(room.sector_id)
}

/// Calculate the checksum of a name: its most common letters, with ties
/// broken alphabetically.
///
/// Names with fewer distinct letters than [CHECKSUM_LEN] produce a shorter
/// checksum.
pub fn checksum(name: &str) -> String {
    let mut counts = [0u32; 26];

    for b in name.bytes() {
        if b.is_ascii_lowercase() {
            counts[usize::from(b - b'a')] += 1;
        }
    }

    let mut letters = (b'a'..=b'z')
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .collect::<Vec<_>>();

    // NB: stable, so equal counts stay in alphabetical order.
    letters.sort_by(|a, b| b.1.cmp(&a.1));

    letters
        .into_iter()
        .take(CHECKSUM_LEN)
        .map(|(letter, _)| char::from(letter))
        .collect()
}

/// Rotate every letter `n` steps forward in the alphabet, turning dashes into
/// spaces.
pub fn rotate(text: &str, n: u32) -> String {
    // Fits in a u8 since it's less than 26.
    let n = (n % 26) as u8;

    text.chars()
        .map(|c| match c {
            '-' => ' ',
            'a'..='z' => char::from(b'a' + (c as u8 - b'a' + n) % 26),
            'A'..='Z' => char::from(b'A' + (c as u8 - b'A' + n) % 26),
            c => c,
        })
        .collect()
}
