//! Finding door passwords by searching for MD5 hashes with a zero prefix.

#[cfg(test)]
mod tests;

use core::fmt;

use lib::prelude::ArrayString;
use thiserror::Error;

/// Number of leading zero nibbles the doors are configured with.
pub const DIFFICULTY: u32 = 5;

/// Number of characters in a password.
pub const PASSWORD_LEN: usize = 8;

/// Leaves room for the two nibbles read after the prefix.
const MAX_ZERO_NIBBLES: u32 = 30;

#[derive(Debug, Error)]
pub enum DoorError {
    #[error("difficulty {0} is out of range, expected at most {MAX_ZERO_NIBBLES}")]
    Difficulty(u32),
    #[error("hash search exhausted after {0} hits")]
    Exhausted(usize),
}

/// A hash whose hex digest starts with the requested number of zeros.
#[derive(Clone, Copy)]
pub struct Hit {
    pub index: u64,
    pub digest: md5::Digest,
}

impl Hit {
    /// Get the `n`th hex digit of the digest.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2016::door::HashSearch;
    ///
    /// let hit = HashSearch::new("abc", 2).next().unwrap();
    /// assert_eq!(hit.index, 18);
    /// assert_eq!(hit.nibble(2), Some(3));
    /// assert_eq!(hit.nibble(3), Some(4));
    /// assert_eq!(hit.nibble(32), None);
    /// ```
    #[inline]
    pub fn nibble(&self, n: usize) -> Option<u8> {
        let byte = *self.digest.0.get(n / 2)?;
        Some(if n % 2 == 0 { byte >> 4 } else { byte & 0xf })
    }

    /// The `n`th hex digit of the digest as a character.
    #[inline]
    fn hex_digit(&self, n: usize) -> Option<char> {
        char::from_digit(u32::from(self.nibble(n)?), 16)
    }

    /// Hex representation of the digest.
    #[inline]
    pub fn hex(&self) -> String {
        format!("{:x}", self.digest)
    }
}

impl fmt::Debug for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hit")
            .field("index", &self.index)
            .field("digest", &format_args!("{:x}", self.digest))
            .finish()
    }
}

/// Lazy search for hashes of `door + index` starting with zero nibbles.
///
/// The search is only bounded by the range of the index, callers decide how
/// many hits to take.
#[derive(Clone)]
pub struct HashSearch {
    prefix: md5::Context,
    zero_nibbles: u32,
    index: Option<u64>,
}

impl HashSearch {
    /// Start a search from index zero.
    pub fn new(door: &str, zero_nibbles: u32) -> Self {
        let mut prefix = md5::Context::new();
        prefix.consume(door.as_bytes());

        Self {
            prefix,
            zero_nibbles,
            index: Some(0),
        }
    }

    /// Restart the search at the given index.
    #[inline]
    pub fn starting_at(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    fn test(&self, index: u64) -> Option<Hit> {
        let mut buf = [0u8; 20];
        let mut context = self.prefix.clone();
        context.consume(digits(index, &mut buf));
        let digest = context.compute();

        let zeros = u128::from_be_bytes(digest.0).leading_zeros();
        (zeros >= self.zero_nibbles * 4).then_some(Hit { index, digest })
    }
}

impl Iterator for HashSearch {
    type Item = Hit;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let index = self.index?;
            self.index = index.checked_add(1);

            if let Some(hit) = self.test(index) {
                return Some(hit);
            }
        }
    }
}

/// Write the decimal digits of `n` to the end of `buf`.
fn digits(mut n: u64, buf: &mut [u8; 20]) -> &[u8] {
    let mut at = buf.len();

    loop {
        at -= 1;
        // Always a single digit.
        buf[at] = b'0' + (n % 10) as u8;
        n /= 10;

        if n == 0 {
            break;
        }
    }

    &buf[at..]
}

/// A door identified by its id.
#[derive(Debug, Clone, Copy)]
pub struct Door<'a> {
    id: &'a str,
    zero_nibbles: u32,
}

impl<'a> Door<'a> {
    /// Construct a door requiring hashes with `zero_nibbles` leading zeros.
    pub fn new(id: &'a str, zero_nibbles: u32) -> Result<Self, DoorError> {
        if zero_nibbles > MAX_ZERO_NIBBLES {
            return Err(DoorError::Difficulty(zero_nibbles));
        }

        Ok(Self { id, zero_nibbles })
    }

    /// Search hashes for this door.
    #[inline]
    pub fn search(&self) -> HashSearch {
        HashSearch::new(self.id, self.zero_nibbles)
    }

    fn position(&self) -> usize {
        // Never truncates, bounded by `MAX_ZERO_NIBBLES`.
        self.zero_nibbles as usize
    }

    /// The password made up of the digit following the zero prefix of the
    /// first hits.
    pub fn simple_password(&self) -> Result<ArrayString<PASSWORD_LEN>, DoorError> {
        let mut password = ArrayString::<PASSWORD_LEN>::new();
        let mut hits = self.search();

        while !password.is_full() {
            let n = password.len();
            let hit = hits.next().ok_or(DoorError::Exhausted(n))?;

            let Some(c) = hit.hex_digit(self.position()) else {
                continue;
            };

            log::info!("found {n} @ {}: {}", hit.index, hit.hex());
            password.push(c);
        }

        Ok(password)
    }

    /// The password where the digit following the zero prefix is a position,
    /// and the one after it the character to put there. Only the first hit
    /// for each position counts.
    pub fn positional_password(&self) -> Result<ArrayString<PASSWORD_LEN>, DoorError> {
        let mut slots = [None; PASSWORD_LEN];
        let mut found = 0;
        let mut hits = self.search();

        while found < PASSWORD_LEN {
            let hit = hits.next().ok_or(DoorError::Exhausted(found))?;

            let Some(position) = hit.nibble(self.position()) else {
                continue;
            };

            let Some(slot) = slots.get_mut(usize::from(position)) else {
                log::debug!("ignoring position {position} @ {}", hit.index);
                continue;
            };

            if slot.is_some() {
                continue;
            }

            let Some(c) = hit.hex_digit(self.position() + 1) else {
                continue;
            };

            log::info!("found {found} @ {}: {}", hit.index, hit.hex());
            *slot = Some(c);
            found += 1;
        }

        let mut password = ArrayString::<PASSWORD_LEN>::new();

        for c in slots.into_iter().flatten() {
            password.push(c);
        }

        Ok(password)
    }
}
