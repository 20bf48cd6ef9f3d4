//! `RiverCrossing`: the wolf, goat and cabbage puzzle.
//!
//! A peasant must ferry a wolf, a goat and a cabbage across a river. The boat
//! carries the peasant and at most one passenger. Left alone, the wolf eats
//! the goat and the goat eats the cabbage.
//!
//! States are [`Placement<4>`] values and actions are [`Crossing<4>`] values,
//! both sharing the kernel's one-byte layout (low nibble = right bank, high
//! nibble = left bank, entity order wolf, goat, cabbage, peasant). The moves
//! are a fixed table over the ten safe configurations; the order of each row
//! is the tie-break order the search sees.

use ferry_kernel::carrier::crossing::Crossing;
use ferry_kernel::carrier::placement::{Placement, Side};
use ferry_search::contract::SearchProblemV1;

/// Number of entities in the puzzle.
pub const ENTITY_COUNT: usize = 4;

/// Puzzle state: which bank each entity stands on.
pub type Bank = Placement<ENTITY_COUNT>;

/// Puzzle action: who rides the boat, and where to.
pub type Ferry = Crossing<ENTITY_COUNT>;

/// The puzzle's entities, in bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Entity {
    Wolf = 0,
    Goat = 1,
    Cabbage = 2,
    Peasant = 3,
}

impl Entity {
    /// All entities, in bit order.
    pub const ALL: [Self; ENTITY_COUNT] = [Self::Wolf, Self::Goat, Self::Cabbage, Self::Peasant];

    /// Index into a [`Bank`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-entity mover mask.
    #[must_use]
    pub const fn mask(self) -> u32 {
        1 << self as u32
    }

    /// The layout bit meaning "this entity is on `side`".
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn on(self, side: Side) -> u32 {
        match side {
            Side::Right => self.mask(),
            Side::Left => self.mask() << ENTITY_COUNT as u32,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wolf => "wolf",
            Self::Goat => "goat",
            Self::Cabbage => "cabbage",
            Self::Peasant => "peasant",
        }
    }
}

pub(crate) const RW: u32 = Entity::Wolf.on(Side::Right);
pub(crate) const RG: u32 = Entity::Goat.on(Side::Right);
pub(crate) const RC: u32 = Entity::Cabbage.on(Side::Right);
pub(crate) const RP: u32 = Entity::Peasant.on(Side::Right);
pub(crate) const LW: u32 = Entity::Wolf.on(Side::Left);
pub(crate) const LG: u32 = Entity::Goat.on(Side::Left);
pub(crate) const LC: u32 = Entity::Cabbage.on(Side::Left);
pub(crate) const LP: u32 = Entity::Peasant.on(Side::Left);

/// Everyone on the right bank (`0x0F`).
pub const START_BITS: u32 = RW | RG | RC | RP;

/// Everyone on the left bank (`0xF0`).
pub const GOAL_BITS: u32 = LW | LG | LC | LP;

/// Legal crossings per non-goal configuration, in enumeration order.
///
/// Rows are `(placement bits, crossing bits)`.
const LEGAL_MOVES: [(u32, &[u32]); 9] = [
    // | PCGW
    (START_BITS, &[LP | LG]),
    // PG | CW
    (LP | LG | RC | RW, &[RP, RP | RG]),
    // PCG | W
    (LP | LC | LG | RW, &[RP | RC, RP | RG]),
    // C | PGW
    (LC | RP | RG | RW, &[LP | LG, LP | LW]),
    // PCW | G
    (LP | LC | LW | RG, &[RP | RC, RP | RW, RP]),
    // W | PCG
    (LW | RP | RC | RG, &[LP | LC, LP | LG]),
    // CW | PG
    (LC | LW | RP | RG, &[LP, LP | LG]),
    // G | PCW
    (LG | RP | RC | RW, &[LP, LP | LC, LP | LW]),
    // PGW | C
    (LP | LG | LW | RC, &[RP | RG, RP | RW]),
];

/// The ten configurations in which nothing gets eaten.
pub const LEGAL_CONFIGURATIONS: [u32; 10] = [
    LEGAL_MOVES[0].0,
    LEGAL_MOVES[1].0,
    LEGAL_MOVES[2].0,
    LEGAL_MOVES[3].0,
    LEGAL_MOVES[4].0,
    LEGAL_MOVES[5].0,
    LEGAL_MOVES[6].0,
    LEGAL_MOVES[7].0,
    LEGAL_MOVES[8].0,
    GOAL_BITS,
];

/// Crossing bits legal in the configuration `bits`. Empty for the goal and
/// for anything outside the table.
#[must_use]
pub fn legal_moves(bits: u32) -> &'static [u32] {
    LEGAL_MOVES
        .iter()
        .find(|(state, _)| *state == bits)
        .map_or(&[] as &[u32], |&(_, moves)| moves)
}

/// Decode a row of the move table, keeping its order.
///
/// # Panics
///
/// Panics if an entry is not a valid crossing. The table is fixed, so this is
/// a bug in the table.
fn decode_moves(moves: &[u32]) -> Vec<Ferry> {
    moves
        .iter()
        .map(|&bits| {
            Ferry::from_bits(bits)
                .unwrap_or_else(|e| panic!("move table entry {bits:#04x} is not a crossing: {e}"))
        })
        .collect()
}

/// Whether nothing gets eaten on either bank.
///
/// The goat is in danger when the peasant is across the river and the wolf or
/// the cabbage shares its bank.
#[must_use]
pub fn is_safe(bank: &Bank) -> bool {
    let goat = bank.side_of(Entity::Goat.index());
    if bank.side_of(Entity::Peasant.index()) == goat {
        return true;
    }
    bank.side_of(Entity::Wolf.index()) != goat && bank.side_of(Entity::Cabbage.index()) != goat
}

/// The river crossing puzzle between two configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiverCrossingProblem {
    initial: Bank,
    goal: Bank,
}

impl RiverCrossingProblem {
    /// Puzzle from `initial` to `goal`.
    #[must_use]
    pub const fn new(initial: Bank, goal: Bank) -> Self {
        Self { initial, goal }
    }

    /// Everyone starts on the right bank and must reach the left.
    #[must_use]
    pub const fn classic() -> Self {
        Self::new(Bank::all_on(Side::Right), Bank::all_on(Side::Left))
    }
}

impl Default for RiverCrossingProblem {
    fn default() -> Self {
        Self::classic()
    }
}

impl SearchProblemV1 for RiverCrossingProblem {
    type State = Bank;
    type Action = Ferry;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "river_crossing"
    }

    fn initial_state(&self) -> Bank {
        self.initial
    }

    fn goal_state(&self) -> Bank {
        self.goal
    }

    fn actions(&self, state: &Bank) -> Vec<Ferry> {
        decode_moves(legal_moves(state.to_bits()))
    }

    fn result(&self, state: &Bank, action: &Ferry) -> Bank {
        state.apply(action)
    }
}
