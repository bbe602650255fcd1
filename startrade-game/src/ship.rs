//! The player's ship: hull, fuel, cargo and mounted equipment.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{self, GADGET_EXTRA_BAYS, ShipTypeDef, TRADE_ITEM_COUNT};
use crate::constants::EXTRA_BAYS_PER_GADGET;
use crate::numbers::mul_div;
use crate::pricing::equipment_sell_price;

/// Mounted equipment lists hold catalog indices; duplicates are legal for
/// weapons and shields but not gadgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub type_index: usize,
    pub hull: i64,
    pub fuel: i64,
    pub cargo: [i32; TRADE_ITEM_COUNT],
    #[serde(default)]
    pub weapons: SmallVec<[usize; 3]>,
    #[serde(default)]
    pub shields: SmallVec<[usize; 3]>,
    #[serde(default)]
    pub gadgets: SmallVec<[usize; 3]>,
    #[serde(default)]
    pub escape_pod: bool,
}

impl Ship {
    /// A factory-fresh hull with full tanks and empty bays.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range `type_index`.
    #[must_use]
    pub fn of_type(type_index: usize) -> Self {
        let def = catalog::ship_type(type_index);
        Self {
            type_index,
            hull: def.hull_strength,
            fuel: def.fuel_tanks,
            cargo: [0; TRADE_ITEM_COUNT],
            weapons: SmallVec::new(),
            shields: SmallVec::new(),
            gadgets: SmallVec::new(),
            escape_pod: false,
        }
    }

    #[must_use]
    pub fn type_def(&self) -> &'static ShipTypeDef {
        catalog::ship_type(self.type_index)
    }

    /// Bay count including the bonus from each extra-bays gadget.
    #[must_use]
    pub fn total_cargo_bays(&self) -> i32 {
        let extra = self
            .gadgets
            .iter()
            .filter(|&&g| g == GADGET_EXTRA_BAYS)
            .count();
        self.type_def().cargo_bays + EXTRA_BAYS_PER_GADGET * i32::try_from(extra).unwrap_or(0)
    }

    #[must_use]
    pub fn filled_cargo_bays(&self) -> i32 {
        self.cargo.iter().sum()
    }

    #[must_use]
    pub fn free_cargo_bays(&self) -> i32 {
        self.total_cargo_bays() - self.filled_cargo_bays()
    }

    #[must_use]
    pub fn weapon_power(&self) -> i64 {
        self.weapons.iter().map(|&w| catalog::weapon(w).power).sum()
    }

    #[must_use]
    pub fn shield_power(&self) -> i64 {
        self.shields.iter().map(|&s| catalog::shield(s).power).sum()
    }

    #[must_use]
    pub fn has_gadget(&self, gadget_index: usize) -> bool {
        self.gadgets.contains(&gadget_index)
    }

    /// Hull damage outstanding against the type's full strength.
    #[must_use]
    pub fn hull_deficit(&self) -> i64 {
        (self.type_def().hull_strength - self.hull).max(0)
    }

    #[must_use]
    pub fn fuel_deficit(&self) -> i64 {
        (self.type_def().fuel_tanks - self.fuel).max(0)
    }

    /// Value the shipyard credits when this hull is traded in: three quarters
    /// of list price, minus the cost of outstanding repairs, plus resale of
    /// everything mounted.
    #[must_use]
    pub fn trade_in_value(&self) -> i64 {
        let def = self.type_def();
        let mut value = mul_div(def.price, 3, 4);
        value -= self.hull_deficit() * def.repair_cost;
        value += self
            .weapons
            .iter()
            .map(|&w| equipment_sell_price(catalog::weapon(w).price))
            .sum::<i64>();
        value += self
            .shields
            .iter()
            .map(|&s| equipment_sell_price(catalog::shield(s).price))
            .sum::<i64>();
        value += self
            .gadgets
            .iter()
            .map(|&g| equipment_sell_price(catalog::gadget(g).price))
            .sum::<i64>();
        value
    }
}
