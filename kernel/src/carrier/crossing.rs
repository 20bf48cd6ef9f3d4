//! `Crossing`: a group of entities moving to one bank.
//!
//! A crossing is encoded in the same `2 * N`-bit layout as
//! [`Placement`](crate::carrier::placement::Placement): the mover mask sits in
//! the half of the destination bank. With four entities where entity 3 is the
//! peasant and entity 1 the goat, "peasant and goat cross left" is `0xA0` and
//! "peasant crosses right" is `0x08`.

use std::fmt;

use crate::carrier::identity::IdentityBytes;
use crate::carrier::placement::{Side, MAX_ENTITIES};

/// Why a mover mask or bit pattern is not a valid crossing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossingError {
    /// Nobody moves.
    NoMovers,
    /// The mask names entities at or above `N`.
    UnknownEntities { mask: u32 },
    /// The bit pattern has movers in both halves.
    BothDirections { bits: u32 },
}

impl fmt::Display for CrossingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMovers => write!(f, "crossing moves no entities"),
            Self::UnknownEntities { mask } => {
                write!(f, "crossing names unknown entities: {mask:#x}")
            }
            Self::BothDirections { bits } => {
                write!(f, "crossing bits point both ways: {bits:#x}")
            }
        }
    }
}

impl std::error::Error for CrossingError {}

/// Entities (bit `i` = entity `i`) moving to bank `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing<const N: usize> {
    movers: u32,
    to: Side,
}

impl<const N: usize> Crossing<N> {
    const FITS: () = assert!(
        N > 0 && N <= MAX_ENTITIES,
        "crossing needs 1..=16 entities"
    );

    const ENTITY_MASK: u32 = (1u32 << N) - 1;

    #[allow(clippy::cast_possible_truncation)]
    const SIDE_BITS: u32 = 2 * N as u32;

    /// Construct from a mover mask and destination.
    ///
    /// # Errors
    ///
    /// Returns [`CrossingError::NoMovers`] for an empty mask and
    /// [`CrossingError::UnknownEntities`] if the mask has bits at or above `N`.
    pub fn new(movers: u32, to: Side) -> Result<Self, CrossingError> {
        let () = Self::FITS;
        if movers == 0 {
            return Err(CrossingError::NoMovers);
        }
        if movers & !Self::ENTITY_MASK != 0 {
            return Err(CrossingError::UnknownEntities { mask: movers });
        }
        Ok(Self { movers, to })
    }

    /// Decode from the `2 * N`-bit layout.
    ///
    /// # Errors
    ///
    /// Returns [`CrossingError`] if both halves (or neither) carry movers, or
    /// if bits above the layout are set.
    pub fn from_bits(bits: u32) -> Result<Self, CrossingError> {
        let () = Self::FITS;
        let right = bits & Self::ENTITY_MASK;
        let left = (bits >> N) & Self::ENTITY_MASK;
        if bits.checked_shr(Self::SIDE_BITS).unwrap_or(0) != 0 {
            return Err(CrossingError::UnknownEntities { mask: bits });
        }
        match (left, right) {
            (0, 0) => Err(CrossingError::NoMovers),
            (0, r) => Self::new(r, Side::Right),
            (l, 0) => Self::new(l, Side::Left),
            _ => Err(CrossingError::BothDirections { bits }),
        }
    }

    /// Mover mask.
    #[must_use]
    pub const fn movers(&self) -> u32 {
        self.movers
    }

    /// Destination bank.
    #[must_use]
    pub const fn to(&self) -> Side {
        self.to
    }

    /// Whether entity `entity` is in the boat.
    #[must_use]
    pub const fn moves(&self, entity: usize) -> bool {
        entity < N && self.movers & (1 << entity) != 0
    }

    /// Number of entities in the boat.
    #[must_use]
    pub const fn passenger_count(&self) -> u32 {
        self.movers.count_ones()
    }

    /// Encode into the `2 * N`-bit layout.
    #[must_use]
    pub const fn to_bits(&self) -> u32 {
        match self.to {
            Side::Right => self.movers,
            Side::Left => self.movers << N,
        }
    }
}

impl<const N: usize> IdentityBytes for Crossing<N> {
    fn identity_bytes(&self) -> Vec<u8> {
        let width = (2 * N).div_ceil(8);
        self.to_bits().to_le_bytes()[..width].to_vec()
    }
}
