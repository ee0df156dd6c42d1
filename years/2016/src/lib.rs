//! Solutions for Advent of Code 2016.
//!
//! Each module holds the reusable part of a day, the binaries under `bin`
//! wire them up to the puzzle input.

pub mod door;
pub mod keypad;
pub mod room;
pub mod triangle;
pub mod walk;
