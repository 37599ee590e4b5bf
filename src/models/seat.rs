//! Seat and seat pool models.
//!
//! A seat is a `(row, col)` coordinate. On the wire it travels as the token
//! `"row-col"`, which is also the key the seat chart renderer uses, so the
//! token format is a compatibility contract.
//!
//! The seat pool is the finite set of coordinates the planner selected as
//! usable for one run.

use rand::seq::index;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A physical seat coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Seat {
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub col: u32,
}

impl Seat {
    /// Creates a seat at `(row, col)`.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance `|Δrow| + |Δcol|`.
    ///
    /// Widened to `u64` so that any two `u32` coordinates fit.
    #[inline]
    pub fn distance(&self, other: &Seat) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }

    /// The `"row-col"` token for this seat.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// A seat token that is not a `"row-col"` pair of non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed seat token '{token}': expected \"row-col\" with non-negative integers")]
pub struct ParseSeatError {
    /// The offending token.
    pub token: String,
}

impl FromStr for Seat {
    type Err = ParseSeatError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let err = || ParseSeatError {
            token: token.to_string(),
        };
        let (row, col) = token.split_once('-').ok_or_else(err)?;
        let row = row.trim().parse::<u32>().map_err(|_| err())?;
        let col = col.trim().parse::<u32>().map_err(|_| err())?;
        Ok(Seat { row, col })
    }
}

/// The set of seats available for one run.
///
/// Duplicate coordinates collapse; first-occurrence order is kept so that
/// sampling is reproducible for a given seed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatPool {
    seats: Vec<Seat>,
    members: HashSet<Seat>,
}

impl SeatPool {
    /// Builds a pool from seats, dropping repeated coordinates.
    pub fn new(seats: impl IntoIterator<Item = Seat>) -> Self {
        let mut pool = Self::default();
        for seat in seats {
            if pool.members.insert(seat) {
                pool.seats.push(seat);
            }
        }
        pool
    }

    /// Parses `"row-col"` tokens into a pool.
    ///
    /// Returns one error per malformed token.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, Vec<ParseSeatError>> {
        let (pool, errors) = Self::parse_partial(tokens);
        if errors.is_empty() {
            Ok(pool)
        } else {
            Err(errors)
        }
    }

    /// Parses `"row-col"` tokens, keeping the well-formed ones.
    ///
    /// Returns the pool of valid seats together with one error per
    /// malformed token.
    pub fn parse_partial<S: AsRef<str>>(tokens: &[S]) -> (Self, Vec<ParseSeatError>) {
        let mut seats = Vec::with_capacity(tokens.len());
        let mut errors = Vec::new();
        for token in tokens {
            match token.as_ref().parse::<Seat>() {
                Ok(seat) => seats.push(seat),
                Err(e) => errors.push(e),
            }
        }
        (Self::new(seats), errors)
    }

    /// Distinct seats in first-occurrence order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Whether `seat` belongs to the pool.
    #[inline]
    pub fn contains(&self, seat: &Seat) -> bool {
        self.members.contains(seat)
    }

    /// Number of distinct seats.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Whether the pool has no seats.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Draws `amount` distinct seats uniformly at random, in random order.
    ///
    /// Returns fewer seats if the pool is smaller than `amount`.
    pub fn sample<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Vec<Seat> {
        let amount = amount.min(self.seats.len());
        index::sample(rng, self.seats.len(), amount)
            .into_iter()
            .map(|i| self.seats[i])
            .collect()
    }

    /// Draws one seat uniformly at random, `None` if the pool is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Seat> {
        self.seats.choose(rng).copied()
    }

    /// Grid extent `(rows, cols)` covering every seat (`max + 1`).
    pub fn extent(&self) -> (u64, u64) {
        let rows = self.seats.iter().map(|s| u64::from(s.row) + 1).max().unwrap_or(0);
        let cols = self.seats.iter().map(|s| u64::from(s.col) + 1).max().unwrap_or(0);
        (rows, cols)
    }
}
