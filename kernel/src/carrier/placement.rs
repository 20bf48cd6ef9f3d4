//! `Placement`: which bank every entity of a crossing world stands on.
//!
//! # Bit layout (`2 * N` bits)
//!
//! | Bits        | Meaning                      |
//! |-------------|------------------------------|
//! | `0..N`      | entity `i` is on the right   |
//! | `N..2N`     | entity `i` is on the left    |
//!
//! For four entities this is one byte: `0x0F` is everyone on the right,
//! `0xF0` everyone on the left.
//!
//! # Invariant
//!
//! Every entity is on exactly one side. `Placement` stores `[Side; N]`, so the
//! invariant holds by construction; [`Placement::from_bits`] is the only way a
//! raw pattern gets in, and it rejects patterns with zero or two side-bits for
//! an entity.

use std::fmt;

use crate::carrier::crossing::Crossing;
use crate::carrier::identity::IdentityBytes;

/// Largest entity count whose placement fits the 32-bit layout.
pub const MAX_ENTITIES: usize = 16;

/// A river bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    /// The other bank.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name, used in records and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Why a raw bit pattern is not a valid placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Neither side-bit is set for this entity.
    Unplaced { entity: usize },
    /// Both side-bits are set for this entity.
    OnBothSides { entity: usize },
    /// Bits above `2 * N` are set.
    StrayBits { bits: u32 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unplaced { entity } => write!(f, "entity {entity} is on neither side"),
            Self::OnBothSides { entity } => write!(f, "entity {entity} is on both sides"),
            Self::StrayBits { bits } => write!(f, "bits outside the placement layout: {bits:#x}"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Side assignment for `N` entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement<const N: usize> {
    sides: [Side; N],
}

impl<const N: usize> Placement<N> {
    const FITS: () = assert!(
        N > 0 && N <= MAX_ENTITIES,
        "placement needs 1..=16 entities"
    );

    #[allow(clippy::cast_possible_truncation)]
    const SIDE_BITS: u32 = 2 * N as u32;

    /// Every entity on `side`.
    #[must_use]
    pub const fn all_on(side: Side) -> Self {
        let () = Self::FITS;
        Self { sides: [side; N] }
    }

    /// Build from an explicit side per entity.
    #[must_use]
    pub const fn from_sides(sides: [Side; N]) -> Self {
        let () = Self::FITS;
        Self { sides }
    }

    /// The side of entity `entity`.
    ///
    /// # Panics
    ///
    /// Panics if `entity >= N`.
    #[must_use]
    pub const fn side_of(&self, entity: usize) -> Side {
        self.sides[entity]
    }

    /// All sides, indexed by entity.
    #[must_use]
    pub const fn sides(&self) -> &[Side; N] {
        &self.sides
    }

    /// Copy with entity `entity` moved to `side`.
    ///
    /// # Panics
    ///
    /// Panics if `entity >= N`.
    #[must_use]
    pub fn with_side(mut self, entity: usize, side: Side) -> Self {
        self.sides[entity] = side;
        self
    }

    /// Entity mask (bit `i` = entity `i`) of everyone standing on `side`.
    #[must_use]
    pub fn mask_on(&self, side: Side) -> u32 {
        self.sides
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == side)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Encode into the `2 * N`-bit layout.
    #[must_use]
    pub fn to_bits(&self) -> u32 {
        self.mask_on(Side::Right) | (self.mask_on(Side::Left) << N)
    }

    /// Decode from the `2 * N`-bit layout.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] if any entity has zero or two side-bits, or
    /// if bits above the layout are set.
    pub fn from_bits(bits: u32) -> Result<Self, PlacementError> {
        let () = Self::FITS;
        if bits.checked_shr(Self::SIDE_BITS).unwrap_or(0) != 0 {
            return Err(PlacementError::StrayBits { bits });
        }
        let mut sides = [Side::Left; N];
        for (entity, side) in sides.iter_mut().enumerate() {
            let right = bits & (1 << entity) != 0;
            let left = bits & (1 << (N + entity)) != 0;
            *side = match (left, right) {
                (true, false) => Side::Left,
                (false, true) => Side::Right,
                (false, false) => return Err(PlacementError::Unplaced { entity }),
                (true, true) => return Err(PlacementError::OnBothSides { entity }),
            };
        }
        Ok(Self { sides })
    }

    /// Move every entity named by `crossing` to its destination bank.
    ///
    /// Entities not in the crossing keep their side. Whether the move is legal
    /// in this placement is the caller's business.
    #[must_use]
    pub fn apply(&self, crossing: &Crossing<N>) -> Self {
        let mut next = *self;
        for (entity, side) in next.sides.iter_mut().enumerate() {
            if crossing.moves(entity) {
                *side = crossing.to();
            }
        }
        next
    }
}

impl<const N: usize> IdentityBytes for Placement<N> {
    /// Little-endian bits, truncated to the bytes the layout occupies.
    fn identity_bytes(&self) -> Vec<u8> {
        let width = (2 * N).div_ceil(8);
        self.to_bits().to_le_bytes()[..width].to_vec()
    }
}
