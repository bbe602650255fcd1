//! Encounter rolls during warp and the opponents they produce.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, PoliticsDef};
use crate::constants::{
    BOUNTY_DIVISOR, ENCOUNTER_RANGE_BASE, ENCOUNTER_RANGE_PER_DIFFICULTY, MAX_BOUNTY,
    MAX_POLICE_RECORD_BOOST, MIN_BOUNTY,
};
use crate::crew::random_skill;
use crate::numbers::round_down_to;
use crate::rng::rand_up_to;

/// Who the player runs into between systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterKind {
    Pirate,
    Police,
    Trader,
}

impl EncounterKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pirate => "pirate",
            Self::Police => "police",
            Self::Trader => "trader",
        }
    }
}

/// The ship on the other side of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    pub kind: EncounterKind,
    pub ship_type: usize,
    pub hull: i64,
    pub weapon_power: i64,
    pub pilot: u8,
    pub fighter: u8,
}

impl Opponent {
    /// Reward for destroying this ship when it flies under a pirate flag.
    #[must_use]
    pub fn bounty(&self) -> i64 {
        let price = catalog::ship_type(self.ship_type).price;
        round_down_to(price / BOUNTY_DIVISOR, MIN_BOUNTY).clamp(MIN_BOUNTY, MAX_BOUNTY)
    }
}

/// Width of the encounter draw. Harder campaigns shrink the range, which
/// raises every encounter's odds.
#[must_use]
pub fn draw_range(difficulty_index: u8) -> u32 {
    ENCOUNTER_RANGE_BASE
        .saturating_sub(ENCOUNTER_RANGE_PER_DIFFICULTY * u32::from(difficulty_index))
        .max(1)
}

/// Police presence after factoring in the commander's record. A worse record
/// attracts more patrols, capped so saturation stays bounded.
#[must_use]
pub fn effective_police_strength(base: u8, police_record_score: i32) -> u32 {
    let mut strength = u32::from(base);
    if police_record_score < 0 {
        let boost =
            (police_record_score.unsigned_abs() * 2 / 100).min(MAX_POLICE_RECORD_BOOST);
        strength += boost;
    }
    strength
}

/// Odds (0..=100) that a given day of travel produces any encounter. Strength
/// totals above the draw range saturate at certainty; that is intended on
/// lawless high-difficulty routes.
#[must_use]
pub fn encounter_probability(
    politics: &PoliticsDef,
    difficulty_index: u8,
    police_record_score: i32,
) -> u32 {
    let range = draw_range(difficulty_index);
    let total = u32::from(politics.strength_pirates)
        + effective_police_strength(politics.strength_police, police_record_score)
        + u32::from(politics.strength_traders);
    (total * 100 / range).min(100)
}

/// Roll one day of travel toward a destination governed by `politics`.
///
/// The draw lands in consecutive pirate, police and trader bands; anything
/// past the last band means open space.
pub fn roll_encounter<R: Rng>(
    politics: &PoliticsDef,
    difficulty_index: u8,
    police_record_score: i32,
    rng: &mut R,
) -> Option<EncounterKind> {
    let range = i64::from(draw_range(difficulty_index));
    let pirates = i64::from(politics.strength_pirates);
    let police = i64::from(effective_police_strength(
        politics.strength_police,
        police_record_score,
    ));
    let traders = i64::from(politics.strength_traders);

    let draw = rand_up_to(rng, range);
    if draw < pirates {
        Some(EncounterKind::Pirate)
    } else if draw < pirates + police {
        Some(EncounterKind::Police)
    } else if draw < pirates + police + traders {
        Some(EncounterKind::Trader)
    } else {
        None
    }
}

/// Generate the opposing ship for an encounter, scaled by difficulty.
pub fn generate_opponent<R: Rng>(
    kind: EncounterKind,
    difficulty_index: u8,
    rng: &mut R,
) -> Opponent {
    // Tougher campaigns widen the pool toward heavier hulls; index 0 is the
    // pod class and never spawns as an opponent.
    let pool = (2 + usize::from(difficulty_index)).min(catalog::ship_type_count() - 1);
    let ship_type = 1 + usize::try_from(rand_up_to(rng, pool as i64)).unwrap_or(0);
    let def = catalog::ship_type(ship_type);

    let mounted = if def.weapon_slots == 0 {
        0
    } else {
        1 + rand_up_to(rng, def.weapon_slots as i64)
    };
    let weapon_power = mounted * catalog::weapon(0).power;

    Opponent {
        kind,
        ship_type,
        hull: def.hull_strength,
        weapon_power,
        pilot: random_skill(rng).saturating_add(difficulty_index / 2),
        fighter: random_skill(rng).saturating_add(difficulty_index / 2),
    }
}
