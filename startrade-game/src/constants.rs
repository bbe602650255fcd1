//! Centralized balance and tuning constants for Startrade game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Result/log keys ----------------------------------------------------------
pub const LOG_ACTION_UNAVAILABLE: &str = "log.action.unavailable";
pub const LOG_GAME_OVER: &str = "log.game.over";
pub const LOG_WARP_SAME_SYSTEM: &str = "log.warp.same-system";
pub const LOG_WARP_OUT_OF_RANGE: &str = "log.warp.out-of-range";
pub const LOG_WARP_INSUFFICIENT_CREDITS: &str = "log.warp.insufficient-credits";
pub const LOG_WARP_ARRIVED: &str = "log.warp.arrived";
pub const LOG_WARP_ENCOUNTER: &str = "log.warp.encounter";
pub const LOG_DOCKED: &str = "log.docked";
pub const LOG_TRADE_BOUGHT: &str = "log.trade.bought";
pub const LOG_TRADE_SOLD: &str = "log.trade.sold";
pub const LOG_TRADE_DUMPED: &str = "log.trade.dumped";
pub const LOG_TRADE_NOT_SOLD_HERE: &str = "log.trade.not-sold-here";
pub const LOG_TRADE_NOT_BOUGHT_HERE: &str = "log.trade.not-bought-here";
pub const LOG_TRADE_NO_STOCK: &str = "log.trade.no-stock";
pub const LOG_TRADE_NO_CARGO: &str = "log.trade.no-cargo";
pub const LOG_TRADE_NO_CARGO_SPACE: &str = "log.trade.no-cargo-space";
pub const LOG_TRADE_INSUFFICIENT_CREDITS: &str = "log.trade.insufficient-credits";
pub const LOG_FUEL_BOUGHT: &str = "log.fuel.bought";
pub const LOG_FUEL_TANKS_FULL: &str = "log.fuel.tanks-full";
pub const LOG_FUEL_INSUFFICIENT_CREDITS: &str = "log.fuel.insufficient-credits";
pub const LOG_REPAIR_DONE: &str = "log.repair.done";
pub const LOG_REPAIR_HULL_INTACT: &str = "log.repair.hull-intact";
pub const LOG_REPAIR_INSUFFICIENT_CREDITS: &str = "log.repair.insufficient-credits";
pub const LOG_EQUIP_BOUGHT: &str = "log.equip.bought";
pub const LOG_EQUIP_SOLD: &str = "log.equip.sold";
pub const LOG_EQUIP_NOT_AVAILABLE: &str = "log.equip.not-available";
pub const LOG_EQUIP_NO_SLOTS: &str = "log.equip.no-slots";
pub const LOG_EQUIP_NO_SUCH_SLOT: &str = "log.equip.no-such-slot";
pub const LOG_EQUIP_INSUFFICIENT_CREDITS: &str = "log.equip.insufficient-credits";
pub const LOG_SHIP_BOUGHT: &str = "log.ship.bought";
pub const LOG_SHIP_NOT_AVAILABLE: &str = "log.ship.not-available";
pub const LOG_SHIP_ALREADY_OWN_TYPE: &str = "log.ship.already-own-type";
pub const LOG_SHIP_CARGO_ABOARD: &str = "log.ship.cargo-aboard";
pub const LOG_SHIP_NO_QUARTERS: &str = "log.ship.no-quarters";
pub const LOG_SHIP_INSUFFICIENT_CREDITS: &str = "log.ship.insufficient-credits";
pub const LOG_POD_BOUGHT: &str = "log.pod.bought";
pub const LOG_POD_ALREADY_OWNED: &str = "log.pod.already-owned";
pub const LOG_POD_NOT_AVAILABLE: &str = "log.pod.not-available";
pub const LOG_POD_INSUFFICIENT_CREDITS: &str = "log.pod.insufficient-credits";
pub const LOG_CREW_HIRED: &str = "log.crew.hired";
pub const LOG_CREW_FIRED: &str = "log.crew.fired";
pub const LOG_CREW_NOT_FOR_HIRE: &str = "log.crew.not-for-hire";
pub const LOG_CREW_NOT_HERE: &str = "log.crew.not-here";
pub const LOG_CREW_ALREADY_ABOARD: &str = "log.crew.already-aboard";
pub const LOG_CREW_NOT_ABOARD: &str = "log.crew.not-aboard";
pub const LOG_CREW_NO_QUARTERS: &str = "log.crew.no-quarters";
pub const LOG_BANK_LOAN_GRANTED: &str = "log.bank.loan-granted";
pub const LOG_BANK_LOAN_EXCEEDS_LIMIT: &str = "log.bank.loan-exceeds-limit";
pub const LOG_BANK_DEBT_PAID: &str = "log.bank.debt-paid";
pub const LOG_BANK_NO_DEBT: &str = "log.bank.no-debt";
pub const LOG_BANK_INSUFFICIENT_CREDITS: &str = "log.bank.insufficient-credits";
pub const LOG_INSURANCE_BOUGHT: &str = "log.insurance.bought";
pub const LOG_INSURANCE_STOPPED: &str = "log.insurance.stopped";
pub const LOG_INSURANCE_ALREADY_INSURED: &str = "log.insurance.already-insured";
pub const LOG_INSURANCE_NOT_INSURED: &str = "log.insurance.not-insured";
pub const LOG_INSURANCE_REQUIRES_POD: &str = "log.insurance.requires-pod";
pub const LOG_MOON_BOUGHT: &str = "log.moon.bought";
pub const LOG_MOON_ALREADY_OWNED: &str = "log.moon.already-owned";
pub const LOG_MOON_INSUFFICIENT_CREDITS: &str = "log.moon.insufficient-credits";
pub const LOG_COMBAT_EXCHANGE: &str = "log.combat.exchange";
pub const LOG_COMBAT_WON: &str = "log.combat.won";
pub const LOG_COMBAT_FLED: &str = "log.combat.fled";
pub const LOG_COMBAT_FLEE_FAILED: &str = "log.combat.flee-failed";
pub const LOG_COMBAT_ESCAPE_POD: &str = "log.combat.escape-pod";
pub const LOG_COMBAT_SHIP_DESTROYED: &str = "log.combat.ship-destroyed";
pub const LOG_COMBAT_SURRENDERED: &str = "log.combat.surrendered";
pub const LOG_COMBAT_INSPECTED_CLEAN: &str = "log.combat.inspected-clean";
pub const LOG_COMBAT_INSPECTED_CONTRABAND: &str = "log.combat.inspected-contraband";
pub const LOG_COMBAT_IGNORED: &str = "log.combat.ignored";

// Police record thresholds ---------------------------------------------------
// A score at or above CLEAN_SCORE is a clean record; below DUBIOUS_SCORE the
// commander counts as a criminal for pricing, loans and police reactions.
pub const PSYCHOPATH_SCORE: i32 = -70;
pub const VILLAIN_SCORE: i32 = -30;
pub const CRIMINAL_SCORE: i32 = -10;
pub const DUBIOUS_SCORE: i32 = -5;
pub const CLEAN_SCORE: i32 = 0;
pub const LAWFUL_SCORE: i32 = 5;

// Police record adjustments --------------------------------------------------
pub const ATTACK_POLICE_SCORE: i32 = -3;
pub const KILL_POLICE_SCORE: i32 = -6;
pub const ATTACK_TRADER_SCORE: i32 = -2;
pub const KILL_TRADER_SCORE: i32 = -4;
pub const KILL_PIRATE_SCORE: i32 = 1;
pub const FLEE_FROM_INSPECTION_SCORE: i32 = -2;
pub const TRAFFICKING_SCORE: i32 = -2;
pub const CLEAN_INSPECTION_SCORE: i32 = 1;

// Reputation thresholds --------------------------------------------------------
// Combat reputation ranks, lowest score each rank requires.
pub const MOSTLY_HARMLESS_REP: i32 = 10;
pub const POOR_REP: i32 = 20;
pub const AVERAGE_REP: i32 = 40;
pub const ABOVE_AVERAGE_REP: i32 = 80;
pub const COMPETENT_REP: i32 = 150;
pub const DANGEROUS_REP: i32 = 300;
pub const DEADLY_REP: i32 = 600;
pub const ELITE_REP: i32 = 1_500;

// Skills ---------------------------------------------------------------------
pub const MAX_SKILL: u8 = 10;

// Money ----------------------------------------------------------------------
pub const STARTING_CREDITS: i64 = 1_000;
pub const MAX_LOAN_CLEAN: i64 = 25_000;
pub const MIN_LOAN_CLEAN: i64 = 1_000;
pub const MAX_LOAN_CRIMINAL: i64 = 500;
pub const LOAN_GRANULARITY: i64 = 500;
pub const DEBT_INTEREST_DIVISOR: i64 = 10;
pub const DUMP_COST_PER_DIFFICULTY: i64 = 5;
pub const MOON_COST: i64 = 500_000;
pub const ESCAPE_POD_COST: i64 = 2_000;
pub const ESCAPE_POD_MIN_TECH: u8 = 4;

// Insurance ------------------------------------------------------------------
pub const INSURANCE_PREMIUM_DIVISOR: i64 = 2_000;
pub const MAX_NO_CLAIM: i32 = 90;

// Encounters -----------------------------------------------------------------
pub const ENCOUNTER_RANGE_BASE: u32 = 44;
pub const ENCOUNTER_RANGE_PER_DIFFICULTY: u32 = 2;
pub const MAX_POLICE_RECORD_BOOST: u32 = 5;

// Combat ---------------------------------------------------------------------
pub const COMBAT_SKILL_ROLL_BONUS: u32 = 10;
pub const MIN_BOUNTY: i64 = 25;
pub const MAX_BOUNTY: i64 = 2_500;
pub const BOUNTY_DIVISOR: i64 = 100;
pub const PIRATE_SURRENDER_CREDIT_CUT: i64 = 10;
pub const MIN_TRAFFICKING_FINE: i64 = 100;
pub const FINE_WORTH_DIVISOR: i64 = 20;
pub const FINE_GRANULARITY: i64 = 50;

// Ships ----------------------------------------------------------------------
pub const TRADE_IN_NUMERATOR: i64 = 3;
pub const TRADE_IN_DENOMINATOR: i64 = 4;
pub const EXTRA_BAYS_PER_GADGET: i32 = 5;

// Galaxy ---------------------------------------------------------------------
pub const GALAXY_WIDTH: i32 = 150;
pub const GALAXY_HEIGHT: i32 = 110;
pub const MIN_SYSTEM_DISTANCE: i64 = 6;
pub const SYSTEM_PLACEMENT_ATTEMPTS: u32 = 100;
