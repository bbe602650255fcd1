//! Campaign state: everything needed to persist and resume a game.
//!
//! The state is plain data. All mutation goes through action execution in
//! [`crate::game`], which keeps save/load a pure serde round trip.

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::TRADE_ITEM_COUNT;
use crate::constants::{
    ABOVE_AVERAGE_REP, AVERAGE_REP, CLEAN_SCORE, COMPETENT_REP, CRIMINAL_SCORE, DANGEROUS_REP,
    DEADLY_REP, DUBIOUS_SCORE, ELITE_REP, LAWFUL_SCORE, MAX_NO_CLAIM, MOON_COST,
    MOSTLY_HARMLESS_REP, POOR_REP, PSYCHOPATH_SCORE, VILLAIN_SCORE,
};
use crate::crew::{CrewMember, Skill};
use crate::encounter::Opponent;
use crate::galaxy::SolarSystem;
use crate::numbers::mul_div;
use crate::pricing::{self, PricingConfig};
use crate::ship::Ship;

/// Campaign difficulty rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Easy,
    #[default]
    Normal,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Impossible,
    ];

    /// Rank as a 0-based index used by the scaling formulas.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Easy => 1,
            Self::Normal => 2,
            Self::Hard => 3,
            Self::Impossible => 4,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Impossible => "impossible",
        }
    }
}

/// Which layer of the state machine the campaign sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    OnPlanet,
    InCombat,
    GameOver,
}

impl GameMode {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OnPlanet => "on_planet",
            Self::InCombat => "in_combat",
            Self::GameOver => "game_over",
        }
    }
}

/// Player conveniences applied automatically on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameOptions {
    pub auto_fuel: bool,
    pub auto_repair: bool,
}

/// A combat or inspection in progress, pausing the trip to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEncounter {
    pub opponent: Opponent,
    pub destination: usize,
    /// Set once either side has opened fire.
    #[serde(default)]
    pub hostile: bool,
}

/// Full campaign state. Serializable as a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub name: String,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub credits: i64,
    pub debt: i64,
    pub day: u32,
    pub police_record_score: i32,
    pub reputation_score: i32,
    pub cur_system: usize,
    /// Full roster; slot 0 is always the commander.
    pub mercenaries: Vec<CrewMember>,
    /// Roster indices of hired crew, commander excluded.
    pub crew: SmallVec<[usize; 3]>,
    pub ship: Ship,
    pub systems: Vec<SolarSystem>,
    pub mode: GameMode,
    pub encounter: Option<ActiveEncounter>,
    pub insurance: bool,
    /// Days of insured travel without a claim; discounts the premium.
    pub no_claim: i32,
    pub moon_bought: bool,
    pub options: GameOptions,
    /// Local sell prices, refreshed on every arrival.
    pub trade_prices: [i64; TRADE_ITEM_COUNT],
    pub logs: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            name: String::new(),
            difficulty: Difficulty::default(),
            seed: 0,
            credits: 0,
            debt: 0,
            day: 0,
            police_record_score: 0,
            reputation_score: 0,
            cur_system: 0,
            mercenaries: Vec::new(),
            crew: SmallVec::new(),
            ship: Ship::of_type(0),
            systems: Vec::new(),
            mode: GameMode::default(),
            encounter: None,
            insurance: false,
            no_claim: 0,
            moon_bought: false,
            options: GameOptions::default(),
            trade_prices: [0; TRADE_ITEM_COUNT],
            logs: Vec::new(),
        }
    }
}

impl GameState {
    /// The commander occupies roster slot 0 from campaign creation onward.
    ///
    /// # Panics
    ///
    /// Panics when called on a state without a roster.
    #[must_use]
    pub fn commander(&self) -> &CrewMember {
        self.mercenaries.first().expect("roster holds commander")
    }

    pub fn commander_mut(&mut self) -> &mut CrewMember {
        self.mercenaries.first_mut().expect("roster holds commander")
    }

    /// System the player is docked at or flying toward.
    ///
    /// # Panics
    ///
    /// Panics on a corrupt `cur_system` index.
    #[must_use]
    pub fn current_system(&self) -> &SolarSystem {
        &self.systems[self.cur_system]
    }

    pub fn current_system_mut(&mut self) -> &mut SolarSystem {
        &mut self.systems[self.cur_system]
    }

    #[must_use]
    pub fn criminal(&self) -> bool {
        self.police_record_score < DUBIOUS_SCORE
    }

    #[must_use]
    pub fn clean_record(&self) -> bool {
        self.police_record_score >= CLEAN_SCORE
    }

    /// Best value of a skill across the commander and hired crew.
    #[must_use]
    pub fn best_skill(&self, skill: Skill) -> u8 {
        let mut best = self.commander().skill(skill);
        for &roster_index in &self.crew {
            best = best.max(self.mercenaries[roster_index].skill(skill));
        }
        best
    }

    /// Display key for the police-record rank.
    #[must_use]
    pub const fn police_record_key(&self) -> &'static str {
        match self.police_record_score {
            s if s >= LAWFUL_SCORE => "lawful",
            s if s >= CLEAN_SCORE => "clean",
            s if s >= DUBIOUS_SCORE => "dubious",
            s if s >= CRIMINAL_SCORE => "criminal",
            s if s >= VILLAIN_SCORE => "villain",
            s if s >= PSYCHOPATH_SCORE => "villain",
            _ => "psychopath",
        }
    }

    /// Display key for the combat reputation rank.
    #[must_use]
    pub const fn reputation_key(&self) -> &'static str {
        match self.reputation_score {
            r if r >= ELITE_REP => "elite",
            r if r >= DEADLY_REP => "deadly",
            r if r >= DANGEROUS_REP => "dangerous",
            r if r >= COMPETENT_REP => "competent",
            r if r >= ABOVE_AVERAGE_REP => "above_average",
            r if r >= AVERAGE_REP => "average",
            r if r >= POOR_REP => "poor",
            r if r >= MOSTLY_HARMLESS_REP => "mostly_harmless",
            _ => "harmless",
        }
    }

    /// First mercenary waiting for hire at the current system, skipping the
    /// commander and anyone already aboard.
    #[must_use]
    pub fn mercenary_for_hire(&self) -> Option<usize> {
        (1..self.mercenaries.len()).find(|&roster_index| {
            !self.crew.contains(&roster_index)
                && self.mercenaries[roster_index].cur_system == Some(self.cur_system)
        })
    }

    /// Daily pay owed to hired crew.
    #[must_use]
    pub fn wages_per_day(&self) -> i64 {
        self.crew
            .iter()
            .map(|&roster_index| self.mercenaries[roster_index].hire_price())
            .sum()
    }

    /// Daily insurance premium: proportional to hull value, discounted by the
    /// accumulated no-claim streak, never free.
    #[must_use]
    pub fn insurance_premium(&self) -> i64 {
        if !self.insurance {
            return 0;
        }
        let discount = 100 - i64::from(self.no_claim.min(MAX_NO_CLAIM));
        let scaled = mul_div(self.ship.trade_in_value().max(0), discount, 100);
        (scaled / crate::constants::INSURANCE_PREMIUM_DIVISOR).max(1)
    }

    /// Net worth used by loan limits and fines.
    #[must_use]
    pub fn current_worth(&self) -> i64 {
        let moon = if self.moon_bought { MOON_COST } else { 0 };
        self.credits + self.ship.trade_in_value() - self.debt + moon
    }

    /// Recompute the local market prices from the pricing stream. Called on
    /// every arrival so prices stay fixed while docked.
    pub fn refresh_trade_prices<R: Rng>(&mut self, cfg: &PricingConfig, rng: &mut R) {
        let system = self.systems[self.cur_system].clone();
        for (item_index, price) in self.trade_prices.iter_mut().enumerate() {
            *price = pricing::sell_price(item_index, &system, cfg, rng);
        }
    }

    pub fn push_log(&mut self, key: &str) {
        self.logs.push(key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SHIP_GNAT;

    fn roster_state() -> GameState {
        let mut state = GameState {
            ship: Ship::of_type(SHIP_GNAT),
            ..GameState::default()
        };
        state.mercenaries.push(CrewMember::new_commander());
        state.mercenaries.push(CrewMember {
            name_index: 1,
            pilot: 9,
            fighter: 2,
            trader: 4,
            engineer: 6,
            cur_system: None,
        });
        state
    }

    #[test]
    fn best_skill_ignores_unhired_mercenaries() {
        let mut state = roster_state();
        assert_eq!(state.best_skill(Skill::Pilot), 1);
        state.crew.push(1);
        assert_eq!(state.best_skill(Skill::Pilot), 9);
    }

    #[test]
    fn record_classification_boundaries() {
        let mut state = roster_state();
        state.police_record_score = DUBIOUS_SCORE;
        assert!(!state.criminal());
        state.police_record_score = DUBIOUS_SCORE - 1;
        assert!(state.criminal());
        assert!(!state.clean_record());
        state.police_record_score = CLEAN_SCORE;
        assert!(state.clean_record());
    }

    #[test]
    fn rank_keys_follow_the_score_ladders() {
        let mut state = roster_state();
        for (score, key) in [
            (10, "lawful"),
            (0, "clean"),
            (-5, "dubious"),
            (-10, "criminal"),
            (-30, "villain"),
            (-70, "villain"),
            (-71, "psychopath"),
        ] {
            state.police_record_score = score;
            assert_eq!(state.police_record_key(), key, "score {score}");
        }
        for (score, key) in [(0, "harmless"), (40, "average"), (1_500, "elite")] {
            state.reputation_score = score;
            assert_eq!(state.reputation_key(), key, "score {score}");
        }
    }

    #[test]
    fn hire_scan_skips_commander_and_hired_crew() {
        let mut state = roster_state();
        assert_eq!(state.mercenary_for_hire(), None);
        state.mercenaries[1].cur_system = Some(state.cur_system);
        assert_eq!(state.mercenary_for_hire(), Some(1));
        state.crew.push(1);
        assert_eq!(state.mercenary_for_hire(), None);
    }

    #[test]
    fn premium_shrinks_with_no_claim_streak() {
        let mut state = roster_state();
        state.insurance = true;
        let fresh = state.insurance_premium();
        state.no_claim = MAX_NO_CLAIM;
        let discounted = state.insurance_premium();
        assert!(fresh >= discounted);
        assert!(discounted >= 1);
        state.insurance = false;
        assert_eq!(state.insurance_premium(), 0);
    }

    #[test]
    fn worth_counts_ship_debt_and_moon() {
        let mut state = roster_state();
        state.credits = 10_000;
        state.debt = 2_000;
        let base = state.current_worth();
        assert_eq!(base, 10_000 + state.ship.trade_in_value() - 2_000);
        state.moon_bought = true;
        assert_eq!(state.current_worth(), base + MOON_COST);
    }

    #[test]
    fn state_round_trips_through_serde() {
        let state = roster_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
