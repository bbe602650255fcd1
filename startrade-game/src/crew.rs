//! Crew members and mercenary generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, COMMANDER_INDEX, SPECIAL_CREW_INDEX};
use crate::constants::MAX_SKILL;
use crate::rng::rand_up_to;

/// One of the four crew skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Pilot,
    Fighter,
    Trader,
    Engineer,
}

impl Skill {
    pub const ALL: [Self; 4] = [Self::Pilot, Self::Fighter, Self::Trader, Self::Engineer];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pilot => "pilot",
            Self::Fighter => "fighter",
            Self::Trader => "trader",
            Self::Engineer => "engineer",
        }
    }
}

/// A commander or mercenary. The name comes from the shared name table; only
/// the index is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name_index: usize,
    pub pilot: u8,
    pub fighter: u8,
    pub trader: u8,
    pub engineer: u8,
    /// System where this mercenary waits for hire. `None` while aboard a
    /// ship or for the commander.
    #[serde(default)]
    pub cur_system: Option<usize>,
}

impl CrewMember {
    /// The commander starts with every skill at its floor; callers then
    /// distribute allocation points on top.
    #[must_use]
    pub fn new_commander() -> Self {
        Self {
            name_index: COMMANDER_INDEX,
            pilot: 1,
            fighter: 1,
            trader: 1,
            engineer: 1,
            cur_system: None,
        }
    }

    /// Roll a mercenary with uniformly mediocre skills.
    pub fn random<R: Rng>(name_index: usize, rng: &mut R) -> Self {
        Self {
            name_index,
            pilot: random_skill(rng),
            fighter: random_skill(rng),
            trader: random_skill(rng),
            engineer: random_skill(rng),
            cur_system: None,
        }
    }

    /// Roll the special mercenary whose skills complement the commander's
    /// weaknesses: maximum in the commander's weakest skill, strong in the
    /// second-weakest when it is strictly weaker than the rest, baseline
    /// elsewhere.
    #[must_use]
    pub fn weakness_targeted(commander: &Self) -> Self {
        let own = commander.skills();
        let mut lowest = 0;
        for i in 1..own.len() {
            if own[i] < own[lowest] {
                lowest = i;
            }
        }
        let mut second = usize::MAX;
        for i in 0..own.len() {
            if i != lowest && (second == usize::MAX || own[i] < own[second]) {
                second = i;
            }
        }

        let mut skills = [5_u8; 4];
        skills[lowest] = MAX_SKILL;
        if own[second] != own[lowest] {
            skills[second] = 8;
        }
        Self {
            name_index: SPECIAL_CREW_INDEX,
            pilot: skills[0],
            fighter: skills[1],
            trader: skills[2],
            engineer: skills[3],
            cur_system: None,
        }
    }

    #[must_use]
    pub const fn skills(&self) -> [u8; 4] {
        [self.pilot, self.fighter, self.trader, self.engineer]
    }

    #[must_use]
    pub const fn skill(&self, skill: Skill) -> u8 {
        match skill {
            Skill::Pilot => self.pilot,
            Skill::Fighter => self.fighter,
            Skill::Trader => self.trader,
            Skill::Engineer => self.engineer,
        }
    }

    /// Hiring price per day derived from total competence.
    #[must_use]
    pub fn hire_price(&self) -> i64 {
        let total: i64 = self.skills().iter().map(|&s| i64::from(s)).sum();
        total * 3
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        catalog::mercenary_name(self.name_index)
    }
}

/// Skill roll used for generated mercenaries: two small dice over a floor of
/// one, giving a 1..=10 range biased toward the middle.
pub fn random_skill<R: Rng>(rng: &mut R) -> u8 {
    let roll = 1 + rand_up_to(rng, 5) + rand_up_to(rng, 6);
    u8::try_from(roll).unwrap_or(MAX_SKILL)
}
