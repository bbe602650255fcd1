//! Action-driven game engine: validates each action against the current
//! state, commits it atomically, and reports the outcome.

use std::rc::Rc;

use rand::SeedableRng;
use serde_json::json;

use crate::action::{Action, ActionKind, ActionResult, EquipmentKind};
use crate::catalog::{
    self, COMMANDER_INDEX, GADGET_EXTRA_BAYS, MERCENARY_COUNT, SHIP_FLEA, SHIP_GNAT,
    SPECIAL_CREW_INDEX,
};
use crate::constants::{
    ATTACK_POLICE_SCORE, ATTACK_TRADER_SCORE, CLEAN_INSPECTION_SCORE, COMBAT_SKILL_ROLL_BONUS,
    ESCAPE_POD_COST, ESCAPE_POD_MIN_TECH, FINE_GRANULARITY, FINE_WORTH_DIVISOR,
    FLEE_FROM_INSPECTION_SCORE, KILL_PIRATE_SCORE, KILL_POLICE_SCORE,
    KILL_TRADER_SCORE, LOG_ACTION_UNAVAILABLE, LOG_BANK_DEBT_PAID, LOG_BANK_INSUFFICIENT_CREDITS,
    LOG_BANK_LOAN_EXCEEDS_LIMIT, LOG_BANK_LOAN_GRANTED, LOG_BANK_NO_DEBT, LOG_COMBAT_ESCAPE_POD,
    LOG_COMBAT_EXCHANGE, LOG_COMBAT_FLED, LOG_COMBAT_FLEE_FAILED, LOG_COMBAT_IGNORED,
    LOG_COMBAT_INSPECTED_CLEAN, LOG_COMBAT_INSPECTED_CONTRABAND, LOG_COMBAT_SHIP_DESTROYED,
    LOG_COMBAT_SURRENDERED, LOG_COMBAT_WON, LOG_CREW_ALREADY_ABOARD, LOG_CREW_FIRED,
    LOG_CREW_HIRED, LOG_CREW_NO_QUARTERS, LOG_CREW_NOT_ABOARD, LOG_CREW_NOT_FOR_HIRE,
    LOG_CREW_NOT_HERE, LOG_DOCKED, LOG_EQUIP_BOUGHT, LOG_EQUIP_INSUFFICIENT_CREDITS,
    LOG_EQUIP_NO_SLOTS, LOG_EQUIP_NO_SUCH_SLOT, LOG_EQUIP_NOT_AVAILABLE, LOG_EQUIP_SOLD,
    LOG_FUEL_BOUGHT, LOG_FUEL_INSUFFICIENT_CREDITS, LOG_FUEL_TANKS_FULL, LOG_GAME_OVER,
    LOG_INSURANCE_ALREADY_INSURED, LOG_INSURANCE_BOUGHT, LOG_INSURANCE_NOT_INSURED,
    LOG_INSURANCE_REQUIRES_POD, LOG_INSURANCE_STOPPED, LOG_MOON_ALREADY_OWNED, LOG_MOON_BOUGHT,
    LOG_MOON_INSUFFICIENT_CREDITS, LOG_POD_ALREADY_OWNED, LOG_POD_BOUGHT,
    LOG_POD_INSUFFICIENT_CREDITS, LOG_POD_NOT_AVAILABLE, LOG_REPAIR_DONE, LOG_REPAIR_HULL_INTACT,
    LOG_REPAIR_INSUFFICIENT_CREDITS, LOG_SHIP_ALREADY_OWN_TYPE, LOG_SHIP_BOUGHT,
    LOG_SHIP_CARGO_ABOARD, LOG_SHIP_INSUFFICIENT_CREDITS, LOG_SHIP_NO_QUARTERS,
    LOG_SHIP_NOT_AVAILABLE, LOG_TRADE_BOUGHT, LOG_TRADE_DUMPED, LOG_TRADE_INSUFFICIENT_CREDITS,
    LOG_TRADE_NO_CARGO, LOG_TRADE_NO_CARGO_SPACE, LOG_TRADE_NO_STOCK, LOG_TRADE_NOT_BOUGHT_HERE,
    LOG_TRADE_NOT_SOLD_HERE, LOG_TRADE_SOLD, LOG_WARP_ARRIVED, LOG_WARP_ENCOUNTER,
    LOG_WARP_INSUFFICIENT_CREDITS, LOG_WARP_OUT_OF_RANGE, LOG_WARP_SAME_SYSTEM,
    MIN_TRAFFICKING_FINE, MOON_COST, PIRATE_SURRENDER_CREDIT_CUT, PSYCHOPATH_SCORE,
    STARTING_CREDITS, TRAFFICKING_SCORE,
};
use crate::crew::{CrewMember, Skill};
use crate::encounter::{self, EncounterKind};
use crate::galaxy::{self, distance};
use crate::numbers::round_down_to;
use crate::pricing::{self, PricingConfig, PricingConfigError};
use crate::rng::{RngBundle, rand_up_to};
use crate::ship::Ship;
use crate::state::{ActiveEncounter, GameMode, GameState};

/// Engine-wide tuning knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub pricing: PricingConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        self.pricing.validate()
    }
}

/// A running campaign: state plus the deterministic RNG streams driving it.
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    cfg: EngineConfig,
    rng: Rc<RngBundle>,
}

impl Game {
    /// Start a fresh campaign on the default config.
    #[must_use]
    pub fn new(name: &str, difficulty: crate::state::Difficulty, seed: u64) -> Self {
        Self::with_config(name, difficulty, seed, EngineConfig::default())
    }

    /// Start a fresh campaign with explicit tuning.
    #[must_use]
    pub fn with_config(
        name: &str,
        difficulty: crate::state::Difficulty,
        seed: u64,
        cfg: EngineConfig,
    ) -> Self {
        let rng = Rc::new(RngBundle::from_user_seed(seed));

        // Map layout uses its own stream so bundle evolution never reshapes
        // existing galaxies.
        let mut map_rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
        let systems = galaxy::generate_galaxy(&mut map_rng, seed);
        let system_count = systems.len() as i64;

        let mut mercenaries = Vec::with_capacity(MERCENARY_COUNT);
        let commander = CrewMember::new_commander();
        mercenaries.push(commander);
        {
            let mut personnel = rng.personnel();
            for name_index in 1..SPECIAL_CREW_INDEX {
                let mut member = CrewMember::random(name_index, &mut *personnel);
                member.cur_system =
                    Some(usize::try_from(rand_up_to(&mut *personnel, system_count)).unwrap_or(0));
                mercenaries.push(member);
            }
            let mut special = CrewMember::weakness_targeted(&commander);
            special.cur_system =
                Some(usize::try_from(rand_up_to(&mut *personnel, system_count)).unwrap_or(0));
            mercenaries.push(special);
        }

        let cur_system =
            usize::try_from(rand_up_to(&mut *rng.galaxy(), system_count)).unwrap_or(0);

        let mut state = GameState {
            name: name.to_string(),
            difficulty,
            seed,
            credits: STARTING_CREDITS,
            cur_system,
            mercenaries,
            ship: Ship::of_type(SHIP_GNAT),
            systems,
            ..GameState::default()
        };
        state.systems[cur_system].visited = true;
        state.refresh_trade_prices(&cfg.pricing, &mut *rng.pricing());

        Self { state, cfg, rng }
    }

    /// Resume a saved campaign. The RNG streams are re-derived from the
    /// stored seed.
    #[must_use]
    pub fn from_state(state: GameState, cfg: EngineConfig) -> Self {
        let rng = Rc::new(RngBundle::from_user_seed(state.seed));
        Self { state, cfg, rng }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Availability of every action kind under the current mode.
    /// Availability is a mode gate only; an available action may still fail
    /// its own validation.
    #[must_use]
    pub fn available_actions(&self) -> Vec<(ActionKind, bool)> {
        ActionKind::ALL
            .iter()
            .map(|&kind| (kind, self.action_available(kind)))
            .collect()
    }

    fn action_available(&self, kind: ActionKind) -> bool {
        match self.state.mode {
            GameMode::GameOver => false,
            GameMode::InCombat => match kind {
                ActionKind::Attack | ActionKind::Flee => true,
                ActionKind::Surrender => self
                    .state
                    .encounter
                    .as_ref()
                    .is_some_and(|enc| enc.opponent.kind != EncounterKind::Trader),
                ActionKind::Ignore => {
                    self.state.encounter.as_ref().is_some_and(|enc| !enc.hostile)
                }
                _ => false,
            },
            GameMode::OnPlanet => !matches!(
                kind,
                ActionKind::Attack
                    | ActionKind::Flee
                    | ActionKind::Surrender
                    | ActionKind::Ignore
            ),
        }
    }

    /// Execute one action. Validation happens before any mutation, so a
    /// failed result means the state is exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics on contract violations: catalog or roster indices out of
    /// range, or non-positive quantities. Business-rule failures never
    /// panic; they return `success: false`.
    pub fn execute(&mut self, action: Action) -> ActionResult {
        if !self.action_available(action.kind()) {
            return ActionResult::fail(LOG_ACTION_UNAVAILABLE);
        }
        let result = match action {
            Action::WarpToSystem { system_index } => self.warp(system_index),
            Action::DockAtPlanet => self.dock(),
            Action::BuyCargo {
                item_index,
                quantity,
            } => self.buy_cargo(item_index, quantity),
            Action::SellCargo {
                item_index,
                quantity,
            } => self.sell_cargo(item_index, quantity),
            Action::DumpCargo {
                item_index,
                quantity,
            } => self.dump_cargo(item_index, quantity),
            Action::BuyFuel { units } => self.buy_fuel(units),
            Action::RepairShip { points } => self.repair_ship(points),
            Action::BuyEquipment { category, index } => self.buy_equipment(category, index),
            Action::SellEquipment { category, slot } => self.sell_equipment(category, slot),
            Action::BuyShip { type_index } => self.buy_ship(type_index),
            Action::BuyEscapePod => self.buy_escape_pod(),
            Action::HireCrew { roster_index } => self.hire_crew(roster_index),
            Action::FireCrew { roster_index } => self.fire_crew(roster_index),
            Action::GetLoan { amount } => self.get_loan(amount),
            Action::PayBack { amount } => self.pay_back(amount),
            Action::BuyInsurance => self.buy_insurance(),
            Action::StopInsurance => self.stop_insurance(),
            Action::BuyMoon => self.buy_moon(),
            Action::Attack => self.attack(),
            Action::Flee => self.flee(),
            Action::Surrender => self.surrender(),
            Action::Ignore => self.ignore_encounter(),
        };
        if result.state_changed {
            self.state.push_log(&result.message);
        }
        result
    }

    // -- travel ------------------------------------------------------------

    fn warp(&mut self, system_index: usize) -> ActionResult {
        assert!(
            system_index < self.state.systems.len(),
            "system index {system_index} out of range"
        );
        if system_index == self.state.cur_system {
            return ActionResult::fail(LOG_WARP_SAME_SYSTEM);
        }
        let dist = distance(self.state.current_system(), &self.state.systems[system_index]);
        if dist > self.state.ship.fuel {
            return ActionResult::fail(LOG_WARP_OUT_OF_RANGE);
        }
        let upfront = self.state.wages_per_day() + self.state.insurance_premium();
        if self.state.credits < upfront {
            return ActionResult::fail(LOG_WARP_INSUFFICIENT_CREDITS);
        }

        self.state.credits -= upfront;
        self.state.debt += pricing::daily_interest(self.state.debt);
        self.state.ship.fuel -= dist;
        self.state.day += 1;
        if self.state.insurance {
            self.state.no_claim += 1;
        }

        let destination = &self.state.systems[system_index];
        let politics = catalog::politics(destination.politics_index);
        let rolled = encounter::roll_encounter(
            politics,
            self.state.difficulty.index(),
            self.state.police_record_score,
            &mut *self.rng.encounter(),
        );
        if let Some(kind) = rolled {
            let opponent = encounter::generate_opponent(
                kind,
                self.state.difficulty.index(),
                &mut *self.rng.encounter(),
            );
            // Police attack psychopath-ranked commanders on sight.
            let hostile = kind == EncounterKind::Pirate
                || (kind == EncounterKind::Police
                    && self.state.police_record_score < PSYCHOPATH_SCORE);
            self.state.mode = GameMode::InCombat;
            self.state.encounter = Some(ActiveEncounter {
                opponent,
                destination: system_index,
                hostile,
            });
            return ActionResult::ok_with(LOG_WARP_ENCOUNTER, json!({ "kind": kind.key() }));
        }

        self.arrive(system_index);
        ActionResult::ok(LOG_WARP_ARRIVED)
    }

    fn arrive(&mut self, system_index: usize) {
        self.state.cur_system = system_index;
        self.state.mode = GameMode::OnPlanet;
        self.state.encounter = None;
        self.state.systems[system_index].visited = true;
        self.state
            .refresh_trade_prices(&self.cfg.pricing, &mut *self.rng.pricing());
        self.apply_arrival_options();
    }

    fn apply_arrival_options(&mut self) {
        if self.state.options.auto_fuel && self.state.ship.fuel_deficit() > 0 {
            let _ = self.buy_fuel(self.state.ship.fuel_deficit());
        }
        if self.state.options.auto_repair && self.state.ship.hull_deficit() > 0 {
            let _ = self.repair_ship(self.state.ship.hull_deficit());
        }
    }

    fn dock(&mut self) -> ActionResult {
        self.apply_arrival_options();
        ActionResult::ok(LOG_DOCKED)
    }

    // -- trade ---------------------------------------------------------------

    fn buy_cargo(&mut self, item_index: usize, quantity: i32) -> ActionResult {
        assert!(quantity > 0, "buy quantity must be positive");
        let _ = catalog::trade_item(item_index);

        let sell = self.state.trade_prices[item_index];
        if sell <= 0 {
            return ActionResult::fail(LOG_TRADE_NOT_SOLD_HERE);
        }
        if self.state.current_system().stock[item_index] < quantity {
            return ActionResult::fail(LOG_TRADE_NO_STOCK);
        }
        if self.state.ship.free_cargo_bays() < quantity {
            return ActionResult::fail(LOG_TRADE_NO_CARGO_SPACE);
        }
        let unit = pricing::buy_price(
            sell,
            self.state.best_skill(Skill::Trader),
            self.state.criminal(),
            &self.cfg.pricing,
        );
        let total = unit * i64::from(quantity);
        if self.state.credits < total {
            return ActionResult::fail(LOG_TRADE_INSUFFICIENT_CREDITS);
        }

        self.state.credits -= total;
        self.state.ship.cargo[item_index] += quantity;
        self.state.current_system_mut().stock[item_index] -= quantity;
        ActionResult::ok_with(LOG_TRADE_BOUGHT, json!({ "unit": unit, "total": total }))
    }

    fn sell_cargo(&mut self, item_index: usize, quantity: i32) -> ActionResult {
        assert!(quantity > 0, "sell quantity must be positive");
        let _ = catalog::trade_item(item_index);

        if self.state.ship.cargo[item_index] < quantity {
            return ActionResult::fail(LOG_TRADE_NO_CARGO);
        }
        let unit = self.state.trade_prices[item_index];
        if unit <= 0 || !self.state.current_system().buys(item_index) {
            return ActionResult::fail(LOG_TRADE_NOT_BOUGHT_HERE);
        }
        let total = unit * i64::from(quantity);

        self.state.ship.cargo[item_index] -= quantity;
        self.state.credits += total;
        self.state.current_system_mut().stock[item_index] += quantity;
        ActionResult::ok_with(LOG_TRADE_SOLD, json!({ "unit": unit, "total": total }))
    }

    fn dump_cargo(&mut self, item_index: usize, quantity: i32) -> ActionResult {
        assert!(quantity > 0, "dump quantity must be positive");
        let _ = catalog::trade_item(item_index);

        if self.state.ship.cargo[item_index] < quantity {
            return ActionResult::fail(LOG_TRADE_NO_CARGO);
        }
        let total =
            pricing::dump_cost(self.state.difficulty.index()) * i64::from(quantity);
        if self.state.credits < total {
            return ActionResult::fail(LOG_TRADE_INSUFFICIENT_CREDITS);
        }

        self.state.ship.cargo[item_index] -= quantity;
        self.state.credits -= total;
        ActionResult::ok_with(LOG_TRADE_DUMPED, json!({ "total": total }))
    }

    // -- shipyard ------------------------------------------------------------

    fn buy_fuel(&mut self, units: i64) -> ActionResult {
        assert!(units > 0, "fuel units must be positive");
        let deficit = self.state.ship.fuel_deficit();
        if deficit == 0 {
            return ActionResult::fail(LOG_FUEL_TANKS_FULL);
        }
        let unit_cost = self.state.ship.type_def().fuel_cost;
        let affordable = self.state.credits / unit_cost;
        if affordable == 0 {
            return ActionResult::fail(LOG_FUEL_INSUFFICIENT_CREDITS);
        }
        let bought = units.min(deficit).min(affordable);

        self.state.ship.fuel += bought;
        self.state.credits -= bought * unit_cost;
        ActionResult::ok_with(LOG_FUEL_BOUGHT, json!({ "units": bought }))
    }

    fn repair_ship(&mut self, points: i64) -> ActionResult {
        assert!(points > 0, "repair points must be positive");
        let deficit = self.state.ship.hull_deficit();
        if deficit == 0 {
            return ActionResult::fail(LOG_REPAIR_HULL_INTACT);
        }
        let unit_cost = self.state.ship.type_def().repair_cost;
        let affordable = self.state.credits / unit_cost;
        if affordable == 0 {
            return ActionResult::fail(LOG_REPAIR_INSUFFICIENT_CREDITS);
        }
        let repaired = points.min(deficit).min(affordable);

        self.state.ship.hull += repaired;
        self.state.credits -= repaired * unit_cost;
        ActionResult::ok_with(LOG_REPAIR_DONE, json!({ "points": repaired }))
    }

    fn buy_equipment(&mut self, kind: EquipmentKind, index: usize) -> ActionResult {
        let (list_price, min_tech) = match kind {
            EquipmentKind::Weapon => {
                let def = catalog::weapon(index);
                (def.price, def.min_tech_level)
            }
            EquipmentKind::Shield => {
                let def = catalog::shield(index);
                (def.price, def.min_tech_level)
            }
            EquipmentKind::Gadget => {
                let def = catalog::gadget(index);
                (def.price, def.min_tech_level)
            }
        };
        if self.state.current_system().tech_level < min_tech {
            return ActionResult::fail(LOG_EQUIP_NOT_AVAILABLE);
        }
        let ship_def = self.state.ship.type_def();
        let (mounted, slots) = match kind {
            EquipmentKind::Weapon => (self.state.ship.weapons.len(), ship_def.weapon_slots),
            EquipmentKind::Shield => (self.state.ship.shields.len(), ship_def.shield_slots),
            EquipmentKind::Gadget => (self.state.ship.gadgets.len(), ship_def.gadget_slots),
        };
        if mounted >= slots {
            return ActionResult::fail(LOG_EQUIP_NO_SLOTS);
        }
        // Extra cargo bays stack; every other gadget is one per ship.
        if kind == EquipmentKind::Gadget
            && index != GADGET_EXTRA_BAYS
            && self.state.ship.has_gadget(index)
        {
            return ActionResult::fail(LOG_EQUIP_NOT_AVAILABLE);
        }
        let price =
            pricing::equipment_buy_price(list_price, self.state.best_skill(Skill::Trader));
        if self.state.credits < price {
            return ActionResult::fail(LOG_EQUIP_INSUFFICIENT_CREDITS);
        }

        self.state.credits -= price;
        match kind {
            EquipmentKind::Weapon => self.state.ship.weapons.push(index),
            EquipmentKind::Shield => self.state.ship.shields.push(index),
            EquipmentKind::Gadget => self.state.ship.gadgets.push(index),
        }
        ActionResult::ok_with(LOG_EQUIP_BOUGHT, json!({ "price": price }))
    }

    fn sell_equipment(&mut self, kind: EquipmentKind, slot: usize) -> ActionResult {
        let removed = match kind {
            EquipmentKind::Weapon if slot < self.state.ship.weapons.len() => {
                Some(catalog::weapon(self.state.ship.weapons.remove(slot)).price)
            }
            EquipmentKind::Shield if slot < self.state.ship.shields.len() => {
                Some(catalog::shield(self.state.ship.shields.remove(slot)).price)
            }
            EquipmentKind::Gadget if slot < self.state.ship.gadgets.len() => {
                Some(catalog::gadget(self.state.ship.gadgets.remove(slot)).price)
            }
            _ => None,
        };
        let Some(list_price) = removed else {
            return ActionResult::fail(LOG_EQUIP_NO_SUCH_SLOT);
        };
        let proceeds = pricing::equipment_sell_price(list_price);
        self.state.credits += proceeds;
        ActionResult::ok_with(LOG_EQUIP_SOLD, json!({ "proceeds": proceeds }))
    }

    fn buy_ship(&mut self, type_index: usize) -> ActionResult {
        let def = catalog::ship_type(type_index);
        if self.state.current_system().tech_level < def.min_tech_level {
            return ActionResult::fail(LOG_SHIP_NOT_AVAILABLE);
        }
        if type_index == self.state.ship.type_index {
            return ActionResult::fail(LOG_SHIP_ALREADY_OWN_TYPE);
        }
        if self.state.ship.filled_cargo_bays() > 0 {
            return ActionResult::fail(LOG_SHIP_CARGO_ABOARD);
        }
        let aboard = 1 + self.state.crew.len();
        if usize::from(def.crew_quarters) < aboard {
            return ActionResult::fail(LOG_SHIP_NO_QUARTERS);
        }
        let net = def.price - self.state.ship.trade_in_value();
        if self.state.credits < net {
            return ActionResult::fail(LOG_SHIP_INSUFFICIENT_CREDITS);
        }

        let keep_pod = self.state.ship.escape_pod;
        self.state.credits -= net;
        self.state.ship = Ship::of_type(type_index);
        self.state.ship.escape_pod = keep_pod;
        ActionResult::ok_with(LOG_SHIP_BOUGHT, json!({ "net": net }))
    }

    fn buy_escape_pod(&mut self) -> ActionResult {
        if self.state.ship.escape_pod {
            return ActionResult::fail(LOG_POD_ALREADY_OWNED);
        }
        if self.state.current_system().tech_level < ESCAPE_POD_MIN_TECH {
            return ActionResult::fail(LOG_POD_NOT_AVAILABLE);
        }
        if self.state.credits < ESCAPE_POD_COST {
            return ActionResult::fail(LOG_POD_INSUFFICIENT_CREDITS);
        }
        self.state.credits -= ESCAPE_POD_COST;
        self.state.ship.escape_pod = true;
        ActionResult::ok(LOG_POD_BOUGHT)
    }

    // -- personnel -----------------------------------------------------------

    fn hire_crew(&mut self, roster_index: usize) -> ActionResult {
        assert!(
            roster_index < self.state.mercenaries.len(),
            "roster index {roster_index} out of range"
        );
        if roster_index == COMMANDER_INDEX {
            return ActionResult::fail(LOG_CREW_NOT_FOR_HIRE);
        }
        if self.state.crew.contains(&roster_index) {
            return ActionResult::fail(LOG_CREW_ALREADY_ABOARD);
        }
        if self.state.mercenaries[roster_index].cur_system != Some(self.state.cur_system) {
            return ActionResult::fail(LOG_CREW_NOT_HERE);
        }
        let quarters = usize::from(self.state.ship.type_def().crew_quarters);
        if 1 + self.state.crew.len() >= quarters {
            return ActionResult::fail(LOG_CREW_NO_QUARTERS);
        }

        self.state.crew.push(roster_index);
        self.state.mercenaries[roster_index].cur_system = None;
        ActionResult::ok_with(
            LOG_CREW_HIRED,
            json!({ "name": self.state.mercenaries[roster_index].name() }),
        )
    }

    fn fire_crew(&mut self, roster_index: usize) -> ActionResult {
        assert!(
            roster_index < self.state.mercenaries.len(),
            "roster index {roster_index} out of range"
        );
        let Some(position) = self.state.crew.iter().position(|&i| i == roster_index) else {
            return ActionResult::fail(LOG_CREW_NOT_ABOARD);
        };

        self.state.crew.remove(position);
        self.state.mercenaries[roster_index].cur_system = Some(self.state.cur_system);
        ActionResult::ok(LOG_CREW_FIRED)
    }

    // -- bank ----------------------------------------------------------------

    fn get_loan(&mut self, amount: i64) -> ActionResult {
        assert!(amount > 0, "loan amount must be positive");
        let ceiling =
            pricing::loan_ceiling(self.state.current_worth(), self.state.clean_record());
        if self.state.debt + amount > ceiling {
            return ActionResult::fail(LOG_BANK_LOAN_EXCEEDS_LIMIT);
        }
        self.state.credits += amount;
        self.state.debt += amount;
        ActionResult::ok_with(LOG_BANK_LOAN_GRANTED, json!({ "debt": self.state.debt }))
    }

    fn pay_back(&mut self, amount: i64) -> ActionResult {
        assert!(amount > 0, "payment amount must be positive");
        if self.state.debt == 0 {
            return ActionResult::fail(LOG_BANK_NO_DEBT);
        }
        let payment = amount.min(self.state.debt);
        if self.state.credits < payment {
            return ActionResult::fail(LOG_BANK_INSUFFICIENT_CREDITS);
        }
        self.state.credits -= payment;
        self.state.debt -= payment;
        ActionResult::ok_with(LOG_BANK_DEBT_PAID, json!({ "debt": self.state.debt }))
    }

    fn buy_insurance(&mut self) -> ActionResult {
        if self.state.insurance {
            return ActionResult::fail(LOG_INSURANCE_ALREADY_INSURED);
        }
        if !self.state.ship.escape_pod {
            return ActionResult::fail(LOG_INSURANCE_REQUIRES_POD);
        }
        self.state.insurance = true;
        self.state.no_claim = 0;
        ActionResult::ok(LOG_INSURANCE_BOUGHT)
    }

    fn stop_insurance(&mut self) -> ActionResult {
        if !self.state.insurance {
            return ActionResult::fail(LOG_INSURANCE_NOT_INSURED);
        }
        self.state.insurance = false;
        self.state.no_claim = 0;
        ActionResult::ok(LOG_INSURANCE_STOPPED)
    }

    fn buy_moon(&mut self) -> ActionResult {
        if self.state.moon_bought {
            return ActionResult::fail(LOG_MOON_ALREADY_OWNED);
        }
        if self.state.credits < MOON_COST {
            return ActionResult::fail(LOG_MOON_INSUFFICIENT_CREDITS);
        }
        self.state.credits -= MOON_COST;
        self.state.moon_bought = true;
        ActionResult::ok(LOG_MOON_BOUGHT)
    }

    // -- combat ----------------------------------------------------------------

    fn attack(&mut self) -> ActionResult {
        let Some(enc) = self.state.encounter.clone() else {
            return ActionResult::fail(LOG_ACTION_UNAVAILABLE);
        };
        if self.state.ship.weapon_power() == 0 {
            return ActionResult::fail(LOG_ACTION_UNAVAILABLE);
        }

        if !enc.hostile {
            // Opening fire on a lawful ship has consequences.
            match enc.opponent.kind {
                EncounterKind::Police => {
                    self.state.police_record_score += ATTACK_POLICE_SCORE;
                }
                EncounterKind::Trader => {
                    self.state.police_record_score += ATTACK_TRADER_SCORE;
                }
                EncounterKind::Pirate => {}
            }
        }
        let mut enc = enc;
        enc.hostile = true;

        // Player fires first.
        let fighter = self.state.best_skill(Skill::Fighter);
        if skill_roll_hits(fighter, enc.opponent.pilot, &mut *self.rng.combat()) {
            let damage =
                1 + rand_up_to(&mut *self.rng.combat(), self.state.ship.weapon_power());
            enc.opponent.hull -= damage;
        }
        if enc.opponent.hull <= 0 {
            return self.win_combat(&enc);
        }

        self.state.encounter = Some(enc.clone());
        self.opponent_return_fire(&enc, LOG_COMBAT_EXCHANGE)
    }

    fn flee(&mut self) -> ActionResult {
        let Some(enc) = self.state.encounter.clone() else {
            return ActionResult::fail(LOG_ACTION_UNAVAILABLE);
        };

        let pilot = self.state.best_skill(Skill::Pilot);
        let escaped = skill_roll_hits(pilot, enc.opponent.pilot, &mut *self.rng.combat());
        if escaped {
            if enc.opponent.kind == EncounterKind::Police && !enc.hostile {
                self.state.police_record_score += FLEE_FROM_INSPECTION_SCORE;
            }
            let destination = enc.destination;
            self.arrive(destination);
            return ActionResult::ok(LOG_COMBAT_FLED);
        }

        let mut enc = enc;
        if enc.opponent.kind != EncounterKind::Trader {
            enc.hostile = true;
        }
        self.state.encounter = Some(enc.clone());
        if enc.hostile {
            self.opponent_return_fire(&enc, LOG_COMBAT_FLEE_FAILED)
        } else {
            ActionResult::ok(LOG_COMBAT_FLEE_FAILED)
        }
    }

    fn surrender(&mut self) -> ActionResult {
        let Some(enc) = self.state.encounter.clone() else {
            return ActionResult::fail(LOG_ACTION_UNAVAILABLE);
        };
        match enc.opponent.kind {
            EncounterKind::Trader => ActionResult::fail(LOG_ACTION_UNAVAILABLE),
            EncounterKind::Pirate => {
                self.state.ship.cargo = [0; catalog::TRADE_ITEM_COUNT];
                self.state.credits -= self.state.credits / PIRATE_SURRENDER_CREDIT_CUT;
                let destination = enc.destination;
                self.arrive(destination);
                ActionResult::ok(LOG_COMBAT_SURRENDERED)
            }
            EncounterKind::Police => self.submit_to_inspection(enc.destination),
        }
    }

    fn submit_to_inspection(&mut self, destination: usize) -> ActionResult {
        let firearms = self.state.ship.cargo[catalog::TRADE_ITEM_FIREARMS];
        let narcotics = self.state.ship.cargo[catalog::TRADE_ITEM_NARCOTICS];
        if firearms == 0 && narcotics == 0 {
            self.state.police_record_score += CLEAN_INSPECTION_SCORE;
            self.arrive(destination);
            return ActionResult::ok(LOG_COMBAT_INSPECTED_CLEAN);
        }

        self.state.ship.cargo[catalog::TRADE_ITEM_FIREARMS] = 0;
        self.state.ship.cargo[catalog::TRADE_ITEM_NARCOTICS] = 0;
        let fine = round_down_to(
            self.state.current_worth().max(0) / FINE_WORTH_DIVISOR,
            FINE_GRANULARITY,
        )
        .max(MIN_TRAFFICKING_FINE)
        .min(self.state.credits.max(0));
        self.state.credits -= fine;
        self.state.police_record_score += TRAFFICKING_SCORE;
        self.arrive(destination);
        ActionResult::ok_with(LOG_COMBAT_INSPECTED_CONTRABAND, json!({ "fine": fine }))
    }

    fn ignore_encounter(&mut self) -> ActionResult {
        let Some(enc) = self.state.encounter.clone() else {
            return ActionResult::fail(LOG_ACTION_UNAVAILABLE);
        };
        if enc.hostile {
            return ActionResult::fail(LOG_ACTION_UNAVAILABLE);
        }
        let destination = enc.destination;
        self.arrive(destination);
        ActionResult::ok(LOG_COMBAT_IGNORED)
    }

    fn win_combat(&mut self, enc: &ActiveEncounter) -> ActionResult {
        let mut bounty = 0;
        match enc.opponent.kind {
            EncounterKind::Pirate => {
                bounty = enc.opponent.bounty();
                self.state.credits += bounty;
                self.state.police_record_score += KILL_PIRATE_SCORE;
            }
            EncounterKind::Police => {
                self.state.police_record_score += KILL_POLICE_SCORE;
            }
            EncounterKind::Trader => {
                self.state.police_record_score += KILL_TRADER_SCORE;
            }
        }
        self.state.reputation_score += 1;
        let destination = enc.destination;
        self.arrive(destination);
        ActionResult::ok_with(LOG_COMBAT_WON, json!({ "bounty": bounty }))
    }

    fn opponent_return_fire(&mut self, enc: &ActiveEncounter, message: &str) -> ActionResult {
        if enc.opponent.weapon_power > 0
            && skill_roll_hits(
                enc.opponent.fighter,
                self.state.best_skill(Skill::Pilot),
                &mut *self.rng.combat(),
            )
        {
            let raw = 1 + rand_up_to(&mut *self.rng.combat(), enc.opponent.weapon_power);
            let absorbed = rand_up_to(
                &mut *self.rng.combat(),
                self.state.ship.shield_power() + 1,
            );
            let damage = (raw - absorbed).max(1);
            self.state.ship.hull -= damage;
        }
        if self.state.ship.hull <= 0 {
            return self.ship_destroyed(enc);
        }
        ActionResult::ok_with(
            message,
            json!({
                "player_hull": self.state.ship.hull,
                "opponent_hull": enc.opponent.hull,
            }),
        )
    }

    fn ship_destroyed(&mut self, enc: &ActiveEncounter) -> ActionResult {
        if !self.state.ship.escape_pod {
            self.state.mode = GameMode::GameOver;
            self.state.encounter = None;
            self.state.push_log(LOG_GAME_OVER);
            return ActionResult::ok(LOG_COMBAT_SHIP_DESTROYED);
        }

        let payout = if self.state.insurance {
            self.state.ship.trade_in_value().max(0)
        } else {
            0
        };
        self.state.credits += payout;
        self.state.no_claim = 0;
        self.state.ship = Ship::of_type(SHIP_FLEA);
        // The pod seats one; hired crew scatter to the destination.
        let destination = enc.destination;
        for roster_index in self.state.crew.clone() {
            self.state.mercenaries[roster_index].cur_system = Some(destination);
        }
        self.state.crew.clear();
        self.arrive(destination);
        ActionResult::ok_with(LOG_COMBAT_ESCAPE_POD, json!({ "payout": payout }))
    }
}

/// Opposed skill roll used for hits and escapes: each side rolls uniformly
/// under skill plus a flat bonus; the acting side wins ties.
fn skill_roll_hits<R: rand::Rng>(actor_skill: u8, opposing_skill: u8, rng: &mut R) -> bool {
    let actor = rand_up_to(rng, i64::from(actor_skill) + i64::from(COMBAT_SKILL_ROLL_BONUS));
    let opposing = rand_up_to(
        rng,
        i64::from(opposing_skill) + i64::from(COMBAT_SKILL_ROLL_BONUS),
    );
    actor >= opposing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Difficulty;

    fn new_game(seed: u64) -> Game {
        Game::new("Test Commander", Difficulty::Normal, seed)
    }

    #[test]
    fn new_game_has_expected_shape() {
        let game = new_game(1);
        assert_eq!(game.state.credits, STARTING_CREDITS);
        assert_eq!(game.state.debt, 0);
        assert_eq!(game.state.day, 0);
        assert_eq!(game.state.mode, GameMode::OnPlanet);
        assert_eq!(game.state.mercenaries.len(), MERCENARY_COUNT);
        assert_eq!(game.state.ship.type_index, SHIP_GNAT);
        assert!(game.state.current_system().visited);
        assert_eq!(
            game.state.mercenaries[SPECIAL_CREW_INDEX].name_index,
            SPECIAL_CREW_INDEX
        );
    }

    #[test]
    fn same_seed_creates_identical_campaigns() {
        let a = new_game(99);
        let b = new_game(99);
        assert_eq!(a.state, b.state);
    }

    #[test]
    fn combat_actions_are_unavailable_on_planet() {
        let mut game = new_game(2);
        let result = game.execute(Action::Attack);
        assert!(!result.success);
        assert!(!result.state_changed);
        assert_eq!(result.message, LOG_ACTION_UNAVAILABLE);
    }

    #[test]
    fn failed_action_leaves_state_untouched() {
        let mut game = new_game(3);
        let before = game.state.clone();
        let result = game.execute(Action::BuyMoon);
        assert!(!result.success);
        assert_eq!(game.state, before);
    }

    #[test]
    fn warp_to_current_system_fails() {
        let mut game = new_game(4);
        let here = game.state.cur_system;
        let result = game.execute(Action::WarpToSystem { system_index: here });
        assert!(!result.success);
        assert_eq!(result.message, LOG_WARP_SAME_SYSTEM);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn warp_to_nonexistent_system_panics() {
        let mut game = new_game(5);
        let _ = game.execute(Action::WarpToSystem { system_index: 999 });
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn non_positive_quantity_panics() {
        let mut game = new_game(6);
        let _ = game.execute(Action::BuyCargo {
            item_index: 0,
            quantity: 0,
        });
    }

    #[test]
    fn loan_respects_the_ceiling() {
        let mut game = new_game(7);
        let ceiling =
            pricing::loan_ceiling(game.state.current_worth(), game.state.clean_record());
        let result = game.execute(Action::GetLoan { amount: ceiling });
        assert!(result.success);
        assert_eq!(game.state.debt, ceiling);

        let result = game.execute(Action::GetLoan { amount: 1 });
        assert!(!result.success);
        assert_eq!(result.message, LOG_BANK_LOAN_EXCEEDS_LIMIT);
    }

    #[test]
    fn pay_back_is_capped_at_debt() {
        let mut game = new_game(8);
        game.state.credits = 10_000;
        game.state.debt = 700;
        let result = game.execute(Action::PayBack { amount: 5_000 });
        assert!(result.success);
        assert_eq!(game.state.debt, 0);
        assert_eq!(game.state.credits, 10_000 - 700);
    }

    #[test]
    fn insurance_needs_a_pod_first() {
        let mut game = new_game(9);
        let result = game.execute(Action::BuyInsurance);
        assert!(!result.success);
        assert_eq!(result.message, LOG_INSURANCE_REQUIRES_POD);

        game.state.ship.escape_pod = true;
        assert!(game.execute(Action::BuyInsurance).success);
        assert!(!game.execute(Action::BuyInsurance).success);
        assert!(game.execute(Action::StopInsurance).success);
    }

    #[test]
    fn buying_and_selling_cargo_moves_stock_and_credits() {
        let mut game = new_game(10);
        game.state.credits = 100_000;
        game.state.trade_prices[0] = 40;
        game.state.current_system_mut().stock[0] = 50;

        let result = game.execute(Action::BuyCargo {
            item_index: 0,
            quantity: 5,
        });
        assert!(result.success, "{}", result.message);
        assert_eq!(game.state.ship.cargo[0], 5);
        assert_eq!(game.state.current_system().stock[0], 45);
        let unit =
            pricing::buy_price(40, game.state.best_skill(Skill::Trader), false, &game.config().pricing);
        assert_eq!(game.state.credits, 100_000 - unit * 5);

        // Water is legal and usable everywhere, so selling back succeeds
        let result = game.execute(Action::SellCargo {
            item_index: 0,
            quantity: 5,
        });
        assert!(result.success, "{}", result.message);
        assert_eq!(game.state.ship.cargo[0], 0);
    }

    #[test]
    fn hiring_requires_presence_and_quarters() {
        let mut game = new_game(11);
        let here = game.state.cur_system;
        game.state.mercenaries[3].cur_system = Some(here);

        // Gnat has a single crew quarter
        let result = game.execute(Action::HireCrew { roster_index: 3 });
        assert!(!result.success);
        assert_eq!(result.message, LOG_CREW_NO_QUARTERS);

        game.state.ship = Ship::of_type(5); // Beetle: three quarters
        let result = game.execute(Action::HireCrew { roster_index: 3 });
        assert!(result.success, "{}", result.message);
        assert_eq!(game.state.crew.as_slice(), &[3]);
        assert_eq!(game.state.mercenaries[3].cur_system, None);

        let result = game.execute(Action::FireCrew { roster_index: 3 });
        assert!(result.success);
        assert_eq!(game.state.mercenaries[3].cur_system, Some(here));
    }

    #[test]
    fn commander_is_never_for_hire() {
        let mut game = new_game(12);
        let result = game.execute(Action::HireCrew {
            roster_index: COMMANDER_INDEX,
        });
        assert!(!result.success);
        assert_eq!(result.message, LOG_CREW_NOT_FOR_HIRE);
    }

    #[test]
    fn moon_purchase_flips_the_flag_once() {
        let mut game = new_game(13);
        game.state.credits = MOON_COST + 5;
        assert!(game.execute(Action::BuyMoon).success);
        assert_eq!(game.state.credits, 5);
        assert!(!game.execute(Action::BuyMoon).success);
    }

    #[test]
    fn destroyed_ship_without_pod_ends_the_game() {
        let mut game = new_game(14);
        let enc = ActiveEncounter {
            opponent: encounter::generate_opponent(
                EncounterKind::Pirate,
                4,
                &mut rand::rngs::mock::StepRng::new(0, 1),
            ),
            destination: 0,
            hostile: true,
        };
        game.state.ship.hull = 0;
        let result = game.ship_destroyed(&enc);
        assert_eq!(result.message, LOG_COMBAT_SHIP_DESTROYED);
        assert_eq!(game.state.mode, GameMode::GameOver);
        assert!(
            game.available_actions()
                .iter()
                .all(|&(_, available)| !available)
        );
    }

    #[test]
    fn escape_pod_rescues_into_the_starter_class() {
        let mut game = new_game(15);
        game.state.ship.escape_pod = true;
        game.state.insurance = true;
        game.state.ship.hull = 0;
        let payout_basis = game.state.ship.trade_in_value();
        let credits_before = game.state.credits;
        let enc = ActiveEncounter {
            opponent: encounter::generate_opponent(
                EncounterKind::Pirate,
                4,
                &mut rand::rngs::mock::StepRng::new(0, 1),
            ),
            destination: 2,
            hostile: true,
        };
        let result = game.ship_destroyed(&enc);
        assert_eq!(result.message, LOG_COMBAT_ESCAPE_POD);
        assert_eq!(game.state.ship.type_index, SHIP_FLEA);
        assert_eq!(game.state.cur_system, 2);
        assert_eq!(game.state.mode, GameMode::OnPlanet);
        assert_eq!(game.state.credits, credits_before + payout_basis);
        assert_eq!(game.state.no_claim, 0);
    }

    #[test]
    fn surrender_to_pirates_costs_cargo_and_a_credit_cut() {
        let mut game = new_game(16);
        game.state.credits = 1_000;
        game.state.ship.cargo[2] = 7;
        game.state.mode = GameMode::InCombat;
        game.state.encounter = Some(ActiveEncounter {
            opponent: encounter::generate_opponent(
                EncounterKind::Pirate,
                0,
                &mut rand::rngs::mock::StepRng::new(0, 1),
            ),
            destination: 1,
            hostile: true,
        });
        let result = game.execute(Action::Surrender);
        assert!(result.success);
        assert_eq!(game.state.ship.cargo, [0; catalog::TRADE_ITEM_COUNT]);
        assert_eq!(game.state.credits, 900);
        assert_eq!(game.state.cur_system, 1);
    }

    #[test]
    fn inspection_seizes_contraband_and_fines() {
        let mut game = new_game(17);
        game.state.credits = 10_000;
        game.state.ship.cargo[catalog::TRADE_ITEM_NARCOTICS] = 3;
        let record_before = game.state.police_record_score;
        game.state.mode = GameMode::InCombat;
        game.state.encounter = Some(ActiveEncounter {
            opponent: encounter::generate_opponent(
                EncounterKind::Police,
                0,
                &mut rand::rngs::mock::StepRng::new(0, 1),
            ),
            destination: 1,
            hostile: false,
        });
        let result = game.execute(Action::Surrender);
        assert!(result.success);
        assert_eq!(result.message, LOG_COMBAT_INSPECTED_CONTRABAND);
        assert_eq!(game.state.ship.cargo[catalog::TRADE_ITEM_NARCOTICS], 0);
        assert!(game.state.credits < 10_000);
        assert_eq!(
            game.state.police_record_score,
            record_before + TRAFFICKING_SCORE
        );
    }

    #[test]
    fn clean_inspection_improves_the_record() {
        let mut game = new_game(18);
        game.state.mode = GameMode::InCombat;
        game.state.encounter = Some(ActiveEncounter {
            opponent: encounter::generate_opponent(
                EncounterKind::Police,
                0,
                &mut rand::rngs::mock::StepRng::new(0, 1),
            ),
            destination: 1,
            hostile: false,
        });
        let result = game.execute(Action::Surrender);
        assert!(result.success);
        assert_eq!(result.message, LOG_COMBAT_INSPECTED_CLEAN);
        assert_eq!(game.state.police_record_score, CLEAN_INSPECTION_SCORE);
    }

    #[test]
    fn police_meet_psychopaths_with_guns_drawn() {
        let mut game = new_game(20);
        game.state.credits = 1_000_000;
        let mut seen_police = false;
        for _ in 0..200 {
            match game.state.mode {
                GameMode::OnPlanet => {
                    game.state.police_record_score = PSYCHOPATH_SCORE - 30;
                    game.state.ship.fuel = 200;
                    let target = nearest_other_system(&game);
                    let result = game.execute(Action::WarpToSystem {
                        system_index: target,
                    });
                    assert!(result.success, "{}", result.message);
                }
                GameMode::InCombat => {
                    let enc = game.state.encounter.clone().unwrap();
                    if enc.opponent.kind == EncounterKind::Police {
                        assert!(enc.hostile);
                        seen_police = true;
                        break;
                    }
                    let result = if enc.hostile {
                        game.execute(Action::Surrender)
                    } else {
                        game.execute(Action::Ignore)
                    };
                    assert!(result.success, "{}", result.message);
                }
                GameMode::GameOver => unreachable!("no shots are ever exchanged"),
            }
        }
        assert!(seen_police, "no police encounter across the whole run");
    }

    #[test]
    fn availability_report_covers_every_kind() {
        let mut game = new_game(21);
        let report = game.available_actions();
        assert_eq!(report.len(), ActionKind::ALL.len());
        assert!(report.contains(&(ActionKind::BuyFuel, true)));
        assert!(report.contains(&(ActionKind::Flee, false)));

        game.state.mode = GameMode::InCombat;
        game.state.encounter = Some(ActiveEncounter {
            opponent: encounter::generate_opponent(
                EncounterKind::Trader,
                0,
                &mut rand::rngs::mock::StepRng::new(0, 1),
            ),
            destination: 1,
            hostile: false,
        });
        let report = game.available_actions();
        assert_eq!(report.len(), ActionKind::ALL.len());
        assert!(report.contains(&(ActionKind::Attack, true)));
        assert!(report.contains(&(ActionKind::Ignore, true)));
        assert!(report.contains(&(ActionKind::Surrender, false)));
        assert!(report.contains(&(ActionKind::BuyCargo, false)));
    }

    #[test]
    fn ignoring_a_hostile_encounter_is_unavailable() {
        let mut game = new_game(19);
        game.state.mode = GameMode::InCombat;
        game.state.encounter = Some(ActiveEncounter {
            opponent: encounter::generate_opponent(
                EncounterKind::Pirate,
                0,
                &mut rand::rngs::mock::StepRng::new(0, 1),
            ),
            destination: 1,
            hostile: true,
        });
        let result = game.execute(Action::Ignore);
        assert!(!result.success);
        assert_eq!(result.message, LOG_ACTION_UNAVAILABLE);
    }

    #[test]
    fn warp_advances_time_and_accrues_interest() {
        let mut game = new_game(20);
        game.state.debt = 1_000;
        game.state.ship.fuel = 1_000;
        let target = nearest_other_system(&game);
        let result = game.execute(Action::WarpToSystem {
            system_index: target,
        });
        assert!(result.success, "{}", result.message);
        assert_eq!(game.state.day, 1);
        assert_eq!(game.state.debt, 1_100);
    }

    fn nearest_other_system(game: &Game) -> usize {
        let here = game.state.current_system().clone();
        let mut best = usize::MAX;
        let mut best_dist = i64::MAX;
        for (index, system) in game.state.systems.iter().enumerate() {
            if index == game.state.cur_system {
                continue;
            }
            let d = galaxy::distance(&here, system);
            if d < best_dist {
                best_dist = d;
                best = index;
            }
        }
        best
    }
}
