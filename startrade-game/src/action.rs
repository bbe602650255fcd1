//! The closed action vocabulary and the result type every action returns.
//!
//! Dispatch is an exhaustive match over this enum; there is no string-keyed
//! command table, so an unknown action cannot exist past deserialization.

use serde::{Deserialize, Serialize};

/// Equipment categories the shipyard deals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Weapon,
    Shield,
    Gadget,
}

impl EquipmentKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Shield => "shield",
            Self::Gadget => "gadget",
        }
    }
}

/// Everything a player can ask the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    WarpToSystem { system_index: usize },
    DockAtPlanet,
    BuyCargo { item_index: usize, quantity: i32 },
    SellCargo { item_index: usize, quantity: i32 },
    DumpCargo { item_index: usize, quantity: i32 },
    BuyFuel { units: i64 },
    RepairShip { points: i64 },
    // Field named `category` because `kind` is taken by the serde tag.
    BuyEquipment { category: EquipmentKind, index: usize },
    SellEquipment { category: EquipmentKind, slot: usize },
    BuyShip { type_index: usize },
    BuyEscapePod,
    HireCrew { roster_index: usize },
    FireCrew { roster_index: usize },
    GetLoan { amount: i64 },
    PayBack { amount: i64 },
    BuyInsurance,
    StopInsurance,
    BuyMoon,
    Attack,
    Flee,
    Surrender,
    Ignore,
}

impl Action {
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Self::WarpToSystem { .. } => ActionKind::WarpToSystem,
            Self::DockAtPlanet => ActionKind::DockAtPlanet,
            Self::BuyCargo { .. } => ActionKind::BuyCargo,
            Self::SellCargo { .. } => ActionKind::SellCargo,
            Self::DumpCargo { .. } => ActionKind::DumpCargo,
            Self::BuyFuel { .. } => ActionKind::BuyFuel,
            Self::RepairShip { .. } => ActionKind::RepairShip,
            Self::BuyEquipment { .. } => ActionKind::BuyEquipment,
            Self::SellEquipment { .. } => ActionKind::SellEquipment,
            Self::BuyShip { .. } => ActionKind::BuyShip,
            Self::BuyEscapePod => ActionKind::BuyEscapePod,
            Self::HireCrew { .. } => ActionKind::HireCrew,
            Self::FireCrew { .. } => ActionKind::FireCrew,
            Self::GetLoan { .. } => ActionKind::GetLoan,
            Self::PayBack { .. } => ActionKind::PayBack,
            Self::BuyInsurance => ActionKind::BuyInsurance,
            Self::StopInsurance => ActionKind::StopInsurance,
            Self::BuyMoon => ActionKind::BuyMoon,
            Self::Attack => ActionKind::Attack,
            Self::Flee => ActionKind::Flee,
            Self::Surrender => ActionKind::Surrender,
            Self::Ignore => ActionKind::Ignore,
        }
    }
}

/// Fieldless mirror of [`Action`] for availability queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    WarpToSystem,
    DockAtPlanet,
    BuyCargo,
    SellCargo,
    DumpCargo,
    BuyFuel,
    RepairShip,
    BuyEquipment,
    SellEquipment,
    BuyShip,
    BuyEscapePod,
    HireCrew,
    FireCrew,
    GetLoan,
    PayBack,
    BuyInsurance,
    StopInsurance,
    BuyMoon,
    Attack,
    Flee,
    Surrender,
    Ignore,
}

impl ActionKind {
    pub const ALL: [Self; 22] = [
        Self::WarpToSystem,
        Self::DockAtPlanet,
        Self::BuyCargo,
        Self::SellCargo,
        Self::DumpCargo,
        Self::BuyFuel,
        Self::RepairShip,
        Self::BuyEquipment,
        Self::SellEquipment,
        Self::BuyShip,
        Self::BuyEscapePod,
        Self::HireCrew,
        Self::FireCrew,
        Self::GetLoan,
        Self::PayBack,
        Self::BuyInsurance,
        Self::StopInsurance,
        Self::BuyMoon,
        Self::Attack,
        Self::Flee,
        Self::Surrender,
        Self::Ignore,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::WarpToSystem => "warp_to_system",
            Self::DockAtPlanet => "dock_at_planet",
            Self::BuyCargo => "buy_cargo",
            Self::SellCargo => "sell_cargo",
            Self::DumpCargo => "dump_cargo",
            Self::BuyFuel => "buy_fuel",
            Self::RepairShip => "repair_ship",
            Self::BuyEquipment => "buy_equipment",
            Self::SellEquipment => "sell_equipment",
            Self::BuyShip => "buy_ship",
            Self::BuyEscapePod => "buy_escape_pod",
            Self::HireCrew => "hire_crew",
            Self::FireCrew => "fire_crew",
            Self::GetLoan => "get_loan",
            Self::PayBack => "pay_back",
            Self::BuyInsurance => "buy_insurance",
            Self::StopInsurance => "stop_insurance",
            Self::BuyMoon => "buy_moon",
            Self::Attack => "attack",
            Self::Flee => "flee",
            Self::Surrender => "surrender",
            Self::Ignore => "ignore",
        }
    }
}

/// Outcome of executing an action. A failed action leaves the state
/// untouched and reports `state_changed: false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    /// Stable message key; presentation layers map it to display text.
    pub message: String,
    pub state_changed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ActionResult {
    #[must_use]
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            state_changed: true,
            data: None,
        }
    }

    #[must_use]
    pub fn ok_with(message: &str, data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            state_changed: true,
            data: Some(data),
        }
    }

    #[must_use]
    pub fn fail(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            state_changed: false,
            data: None,
        }
    }
}
