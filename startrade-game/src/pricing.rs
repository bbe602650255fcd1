//! Market pricing: what a system sells goods for, what it pays, loan limits
//! and the other credit formulas.
//!
//! All money math is integer `i64` with flooring division; the ratios applied
//! along the way are configurable so campaign variants can rebalance without
//! touching the formulas.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog;
use crate::constants::{
    DEBT_INTEREST_DIVISOR, DUMP_COST_PER_DIFFICULTY, LOAN_GRANULARITY, MAX_LOAN_CLEAN,
    MAX_LOAN_CRIMINAL, MAX_SKILL, MIN_LOAN_CLEAN, TRADE_IN_DENOMINATOR, TRADE_IN_NUMERATOR,
};
use crate::galaxy::SolarSystem;
use crate::numbers::{mul_div, round_down_to};
use crate::rng::rand_up_to;

/// Integer ratio applied with flooring division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub num: i64,
    pub den: i64,
}

impl Ratio {
    #[must_use]
    pub const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    #[must_use]
    pub fn apply(self, value: i64) -> i64 {
        mul_div(value, self.num, self.den)
    }
}

/// Tunable multipliers for the pricing formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Applied when the system status matches a good's surge condition.
    pub status_surge: Ratio,
    /// Applied where a special resource makes the good cheap.
    pub cheap_resource: Ratio,
    /// Applied where a special resource makes the good expensive.
    pub expensive_resource: Ratio,
    /// Markup charged to commanders with a criminal record.
    pub criminal_markup: Ratio,
    /// Percentage floor of the buy markup before the trader-skill rebate.
    pub base_markup_percent: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            status_surge: Ratio::new(2, 1),
            cheap_resource: Ratio::new(1, 2),
            expensive_resource: Ratio::new(2, 1),
            criminal_markup: Ratio::new(100, 90),
            base_markup_percent: 103,
        }
    }
}

/// Validation failures for a [`PricingConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingConfigError {
    #[error("{field} ratio must have positive numerator and denominator")]
    NonPositiveRatio { field: &'static str },
    #[error("base markup percent must be at least 100, got {got}")]
    MarkupBelowCost { got: i64 },
}

impl PricingConfig {
    /// Check the config for values that would corrupt the money math.
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        for (field, ratio) in [
            ("status_surge", self.status_surge),
            ("cheap_resource", self.cheap_resource),
            ("expensive_resource", self.expensive_resource),
            ("criminal_markup", self.criminal_markup),
        ] {
            if ratio.num <= 0 || ratio.den <= 0 {
                return Err(PricingConfigError::NonPositiveRatio { field });
            }
        }
        if self.base_markup_percent < 100 {
            return Err(PricingConfigError::MarkupBelowCost {
                got: self.base_markup_percent,
            });
        }
        Ok(())
    }
}

/// Price the local market pays the player for one unit of a good.
///
/// Returns 0 when the system cannot produce the good or the local law bans
/// it; a zero price means "not traded here".
///
/// # Panics
///
/// Panics on an out-of-range `item_index`.
pub fn sell_price<R: Rng>(
    item_index: usize,
    system: &SolarSystem,
    cfg: &PricingConfig,
    rng: &mut R,
) -> i64 {
    let item = catalog::trade_item(item_index);
    if !system.sells(item_index) {
        return 0;
    }

    let mut price = item.price_low_tech + i64::from(system.tech_level) * item.price_inc;
    price += rand_up_to(rng, item.variance * 2 + 1) - item.variance;

    if item.double_price_status == Some(system.status) {
        price = cfg.status_surge.apply(price);
    }
    if system.special_resource.is_some() {
        if system.special_resource == item.cheap_resource {
            price = cfg.cheap_resource.apply(price);
        }
        if system.special_resource == item.expensive_resource {
            price = cfg.expensive_resource.apply(price);
        }
    }

    price = price.clamp(item.min_trade_price, item.max_trade_price);
    round_down_to(price, item.round_off)
}

/// Price the player pays the market for one unit, derived from the sell
/// price. Always strictly above the sell price, so round trips on one
/// planet lose money.
///
/// # Panics
///
/// Panics when `trader_skill` exceeds the skill scale.
#[must_use]
pub fn buy_price(sell: i64, trader_skill: u8, criminal: bool, cfg: &PricingConfig) -> i64 {
    assert!(trader_skill <= MAX_SKILL, "trader skill out of range");
    if sell <= 0 {
        return 0;
    }
    let base = if criminal {
        cfg.criminal_markup.apply(sell)
    } else {
        sell
    };
    let markup = cfg.base_markup_percent + i64::from(MAX_SKILL - trader_skill);
    let price = mul_div(base, markup, 100);
    price.max(sell + 1)
}

/// What the player pays for a piece of equipment, discounted by trader skill.
#[must_use]
pub fn equipment_buy_price(base_price: i64, trader_skill: u8) -> i64 {
    assert!(trader_skill <= MAX_SKILL, "trader skill out of range");
    mul_div(base_price, 100 - i64::from(trader_skill), 100)
}

/// Resale value of equipment: three quarters of list price, rounded down.
#[must_use]
pub fn equipment_sell_price(base_price: i64) -> i64 {
    mul_div(base_price, TRADE_IN_NUMERATOR, TRADE_IN_DENOMINATOR)
}

/// Largest loan the bank extends, given net worth and record standing.
#[must_use]
pub fn loan_ceiling(current_worth: i64, clean_record: bool) -> i64 {
    if !clean_record {
        return MAX_LOAN_CRIMINAL;
    }
    let tithe = round_down_to((current_worth / 10).max(0), LOAN_GRANULARITY);
    tithe.clamp(MIN_LOAN_CLEAN, MAX_LOAN_CLEAN)
}

/// Interest accrued per day on outstanding debt; zero only when debt-free.
#[must_use]
pub fn daily_interest(debt: i64) -> i64 {
    if debt <= 0 {
        return 0;
    }
    (debt / DEBT_INTEREST_DIVISOR).max(1)
}

/// Port fee for jettisoning one cargo unit into space, by difficulty rank.
#[must_use]
pub fn dump_cost(difficulty_index: u8) -> i64 {
    DUMP_COST_PER_DIFFICULTY * (i64::from(difficulty_index) + 1)
}
