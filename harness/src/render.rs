//! Human-readable rendering of river crossing solutions.
//!
//! Only the eight crossings the puzzle can make have a text. Anything else
//! renders as nothing, so a caller printing a solution never prints garbage.

use crate::worlds::river_crossing::{Ferry, LC, LG, LP, LW, RC, RG, RP, RW};

const PEASANT_RIGHT: u32 = RP;
const PEASANT_CABBAGE_RIGHT: u32 = RP | RC;
const PEASANT_GOAT_RIGHT: u32 = RP | RG;
const PEASANT_WOLF_RIGHT: u32 = RP | RW;
const PEASANT_LEFT: u32 = LP;
const PEASANT_CABBAGE_LEFT: u32 = LP | LC;
const PEASANT_GOAT_LEFT: u32 = LP | LG;
const PEASANT_WOLF_LEFT: u32 = LP | LW;

/// Text for the crossing encoded as `bits`, or `None` if it is not one of the
/// eight puzzle crossings.
#[must_use]
pub fn describe(bits: u32) -> Option<&'static str> {
    let text = match bits {
        PEASANT_RIGHT => "Peasant crosses right.",
        PEASANT_CABBAGE_RIGHT => "Peasant and cabbage crosses right.",
        PEASANT_GOAT_RIGHT => "Peasant and goat crosses right.",
        PEASANT_WOLF_RIGHT => "Peasant and wolf crosses right.",
        PEASANT_LEFT => "Peasant crosses left.",
        PEASANT_CABBAGE_LEFT => "Peasant and cabbage crosses left.",
        PEASANT_GOAT_LEFT => "Peasant and goat crosses left.",
        PEASANT_WOLF_LEFT => "Peasant and wolf crosses left.",
        _ => return None,
    };
    Some(text)
}

/// One line per recognized crossing, in solution order.
#[must_use]
pub fn render_solution(solution: &[Ferry]) -> Vec<&'static str> {
    solution
        .iter()
        .filter_map(|ferry| describe(ferry.to_bits()))
        .collect()
}
