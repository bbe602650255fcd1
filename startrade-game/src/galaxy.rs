//! Galaxy generation: placing solar systems on the map and stocking their
//! markets deterministically.

use std::hash::Hasher;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use twox_hash::XxHash64;

use crate::catalog::{
    self, MAX_SOLAR_SYSTEM, SpecialResource, SystemStatus, TRADE_ITEM_COUNT,
};
use crate::constants::{
    GALAXY_HEIGHT, GALAXY_WIDTH, MIN_SYSTEM_DISTANCE, SYSTEM_PLACEMENT_ATTEMPTS,
};
use crate::rng::rand_up_to;

/// One solar system on the galaxy map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarSystem {
    pub name_index: usize,
    pub x: i32,
    pub y: i32,
    /// Population size class 0..=4; scales market stock.
    pub size: u8,
    pub tech_level: u8,
    pub politics_index: usize,
    #[serde(default)]
    pub special_resource: Option<SpecialResource>,
    #[serde(default)]
    pub status: SystemStatus,
    #[serde(default)]
    pub visited: bool,
    /// Units of each trade good currently on the local market.
    pub stock: [i32; TRADE_ITEM_COUNT],
}

impl SolarSystem {
    #[must_use]
    pub fn name(&self) -> &'static str {
        catalog::system_name(self.name_index)
    }

    /// Whether the local market trades this good at all, on the selling side.
    #[must_use]
    pub fn sells(&self, item_index: usize) -> bool {
        let item = catalog::trade_item(item_index);
        if self.tech_level < item.tech_production {
            return false;
        }
        legal_here(item_index, self.politics_index)
    }

    /// Whether the local market buys this good from the player.
    #[must_use]
    pub fn buys(&self, item_index: usize) -> bool {
        let item = catalog::trade_item(item_index);
        if self.tech_level < item.tech_usage {
            return false;
        }
        legal_here(item_index, self.politics_index)
    }
}

fn legal_here(item_index: usize, politics_index: usize) -> bool {
    let politics = catalog::politics(politics_index);
    match item_index {
        catalog::TRADE_ITEM_FIREARMS => politics.firearms_ok,
        catalog::TRADE_ITEM_NARCOTICS => politics.drugs_ok,
        _ => true,
    }
}

/// Integer distance between two systems, Euclidean and rounded down.
#[must_use]
pub fn distance(a: &SolarSystem, b: &SolarSystem) -> i64 {
    let dx = i64::from(a.x - b.x);
    let dy = i64::from(a.y - b.y);
    let squared = dx * dx + dy * dy;
    i64::try_from((squared as u64).isqrt()).unwrap_or(i64::MAX)
}

/// Generate the full set of solar systems for a new campaign.
///
/// Placement keeps systems at least `MIN_SYSTEM_DISTANCE` apart when it can;
/// after `SYSTEM_PLACEMENT_ATTEMPTS` failed tries the last candidate stands
/// so generation always terminates.
pub fn generate_galaxy<R: Rng>(rng: &mut R, galaxy_seed: u64) -> Vec<SolarSystem> {
    let mut systems: Vec<SolarSystem> = Vec::with_capacity(MAX_SOLAR_SYSTEM);

    for name_index in 0..MAX_SOLAR_SYSTEM {
        let (x, y) = place_system(rng, &systems);

        let politics_index =
            usize::try_from(rand_up_to(rng, catalog::politics_count() as i64)).unwrap_or(0);
        let politics = catalog::politics(politics_index);
        let band =
            i64::from(politics.max_tech_level) - i64::from(politics.min_tech_level) + 1;
        let tech_level =
            politics.min_tech_level + u8::try_from(rand_up_to(rng, band)).unwrap_or(0);

        let special_resource = if rand_up_to(rng, 5) >= 3 {
            let pick = rand_up_to(rng, SpecialResource::ALL.len() as i64);
            Some(SpecialResource::ALL[usize::try_from(pick).unwrap_or(0)])
        } else {
            None
        };

        let status = if rand_up_to(rng, 100) < 15 {
            let pick = rand_up_to(rng, SystemStatus::EVENTFUL.len() as i64);
            SystemStatus::EVENTFUL[usize::try_from(pick).unwrap_or(0)]
        } else {
            SystemStatus::Uneventful
        };

        let size = u8::try_from(rand_up_to(rng, 5)).unwrap_or(0);

        let mut system = SolarSystem {
            name_index,
            x,
            y,
            size,
            tech_level,
            politics_index,
            special_resource,
            status,
            visited: false,
            stock: [0; TRADE_ITEM_COUNT],
        };
        system.stock = initial_stock(&system, galaxy_seed);
        systems.push(system);
    }

    systems
}

fn place_system<R: Rng>(rng: &mut R, placed: &[SolarSystem]) -> (i32, i32) {
    let mut candidate = (0, 0);
    for _ in 0..SYSTEM_PLACEMENT_ATTEMPTS {
        let x = 1 + i32::try_from(rand_up_to(rng, i64::from(GALAXY_WIDTH) - 2)).unwrap_or(0);
        let y = 1 + i32::try_from(rand_up_to(rng, i64::from(GALAXY_HEIGHT) - 2)).unwrap_or(0);
        candidate = (x, y);
        let clear = placed.iter().all(|other| {
            let dx = i64::from(other.x - x);
            let dy = i64::from(other.y - y);
            dx * dx + dy * dy >= MIN_SYSTEM_DISTANCE * MIN_SYSTEM_DISTANCE
        });
        if clear {
            return candidate;
        }
    }
    candidate
}

/// Market stock for a fresh system, derived from the galaxy seed and the
/// system's slot so it replays identically for a given seed.
#[must_use]
pub fn initial_stock(system: &SolarSystem, galaxy_seed: u64) -> [i32; TRADE_ITEM_COUNT] {
    let mut hasher = XxHash64::with_seed(galaxy_seed);
    hasher.write_usize(system.name_index);
    let mut rng = SmallRng::seed_from_u64(hasher.finish());

    let mut stock = [0; TRADE_ITEM_COUNT];
    for (item_index, slot) in stock.iter_mut().enumerate() {
        let item = catalog::trade_item(item_index);
        if system.tech_level < item.tech_production || !legal_here(item_index, system.politics_index)
        {
            continue;
        }
        let spread = i64::from(system.tech_level).abs_diff(i64::from(item.tech_top_production));
        let mut quantity = (9 + rand_up_to(&mut rng, 5) - i64::try_from(spread).unwrap_or(0))
            * (1 + i64::from(system.size));
        if item.double_price_status == Some(system.status) {
            quantity /= 5;
        }
        if system.special_resource.is_some() && system.special_resource == item.cheap_resource {
            quantity = quantity * 4 / 3;
        }
        if system.special_resource.is_some() && system.special_resource == item.expensive_resource {
            quantity = quantity * 3 / 4;
        }
        *slot = i32::try_from(quantity.max(0)).unwrap_or(0);
    }
    stock
}
