//! Walking a city grid by following turn-and-advance instructions.

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::num::ParseIntError;

use lib::input::W;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Error)]
#[error("bad turn {0:?}")]
pub struct TurnError(char);

impl TryFrom<char> for Turn {
    type Error = TurnError;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            c => Err(TurnError(c)),
        }
    }
}

#[derive(Debug, Error)]
pub enum InstructionError {
    #[error("empty instruction")]
    Empty,
    #[error(transparent)]
    Turn(#[from] TurnError),
    #[error("bad step count {0:?}")]
    Steps(String, #[source] ParseIntError),
}

/// A single instruction like `R2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub turn: Turn,
    pub steps: u32,
}

impl core::str::FromStr for Instruction {
    type Err = InstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let turn = Turn::try_from(chars.next().ok_or(InstructionError::Empty)?)?;
        let steps = chars.as_str();

        let steps = steps
            .parse()
            .map_err(|e| InstructionError::Steps(steps.to_owned(), e))?;

        Ok(Self { turn, steps })
    }
}

// Instructions are separated by whitespace, with an optional trailing comma.
lib::from_input! {
    |W(token): W<&'static str>| -> Instruction {
        Ok(token.strip_suffix(',').unwrap_or(token).parse()?)
    }
}

/// Compass heading.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// The heading after making a turn.
    #[inline]
    pub fn turn(self, turn: Turn) -> Self {
        match (self, turn) {
            (Heading::North, Turn::Left) | (Heading::South, Turn::Right) => Heading::West,
            (Heading::North, Turn::Right) | (Heading::South, Turn::Left) => Heading::East,
            (Heading::East, Turn::Left) | (Heading::West, Turn::Right) => Heading::North,
            (Heading::East, Turn::Right) | (Heading::West, Turn::Left) => Heading::South,
        }
    }

    /// Unit step along the heading as `(x, y)`.
    #[inline]
    fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }
}

/// A walker starting at the origin facing north.
#[derive(Debug, Default, Clone)]
pub struct Walker {
    x: i64,
    y: i64,
    heading: Heading,
}

impl Walker {
    /// Current position as `(x, y)`.
    #[inline]
    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Turn 90 degrees.
    #[inline]
    pub fn turn(&mut self, turn: Turn) {
        self.heading = self.heading.turn(turn);
    }

    /// Move `steps` blocks along the current heading.
    #[inline]
    pub fn advance(&mut self, steps: u32) {
        let (dx, dy) = self.heading.delta();
        self.x += dx * i64::from(steps);
        self.y += dy * i64::from(steps);
    }

    /// Turn and advance according to an instruction.
    #[inline]
    pub fn follow(&mut self, instruction: &Instruction) {
        self.turn(instruction.turn);
        self.advance(instruction.steps);
    }

    /// Taxicab distance from the origin.
    #[inline]
    pub fn distance(&self) -> u64 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }
}

/// Distance from the origin after following all instructions.
///
/// # Examples
///
/// ```
/// use y2016::walk::{distance, Instruction};
///
/// let instructions = ["R5", "L5", "R5", "R3"]
///     .into_iter()
///     .map(str::parse)
///     .collect::<Result<Vec<Instruction>, _>>()?;
///
/// assert_eq!(distance(&instructions), 12);
/// # Ok::<_, y2016::walk::InstructionError>(())
/// ```
pub fn distance(instructions: &[Instruction]) -> u64 {
    let mut walker = Walker::default();

    for instruction in instructions {
        walker.follow(instruction);
    }

    walker.distance()
}

/// Distance from the origin of the first block visited twice, including every
/// block passed through along the way. The origin counts as visited.
pub fn first_revisit(instructions: &[Instruction]) -> Option<u64> {
    let mut walker = Walker::default();
    let mut visited = HashSet::new();
    visited.insert(walker.position());

    for instruction in instructions {
        walker.turn(instruction.turn);

        for _ in 0..instruction.steps {
            walker.advance(1);

            if !visited.insert(walker.position()) {
                log::debug!("revisited {:?}", walker.position());
                return Some(walker.distance());
            }
        }
    }

    None
}
