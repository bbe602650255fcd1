//! Immutable reference catalogs: trade items, political systems, equipment,
//! ship types and name tables.
//!
//! The tables are fixed at compile time and exposed only through indexed
//! accessors. An out-of-range index is a caller bug and panics; "not
//! available here" is a business outcome and never comes from this module.

use serde::{Deserialize, Serialize};

/// Number of distinct trade goods.
pub const TRADE_ITEM_COUNT: usize = 10;

pub const TRADE_ITEM_WATER: usize = 0;
pub const TRADE_ITEM_FURS: usize = 1;
pub const TRADE_ITEM_FOOD: usize = 2;
pub const TRADE_ITEM_ORE: usize = 3;
pub const TRADE_ITEM_GAMES: usize = 4;
pub const TRADE_ITEM_FIREARMS: usize = 5;
pub const TRADE_ITEM_MEDICINE: usize = 6;
pub const TRADE_ITEM_MACHINES: usize = 7;
pub const TRADE_ITEM_NARCOTICS: usize = 8;
pub const TRADE_ITEM_ROBOTS: usize = 9;

/// Mercenary name table size: commander slot, 29 regular names and the
/// weakness-targeted special member.
pub const MERCENARY_COUNT: usize = 31;
/// Roster slot reserved for the commander's display name.
pub const COMMANDER_INDEX: usize = 0;
/// Roster slot of the weakness-targeted special crew member.
pub const SPECIAL_CREW_INDEX: usize = 30;

/// Gadget slot 0 grants five extra cargo bays.
pub const GADGET_EXTRA_BAYS: usize = 0;
pub const GADGET_AUTO_REPAIR: usize = 1;

/// Starter-class pod granted after an escape-pod rescue.
pub const SHIP_FLEA: usize = 0;
/// Campaign starting ship.
pub const SHIP_GNAT: usize = 1;

/// Transient economic condition of a system; some conditions surge the price
/// of a matching trade item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    #[default]
    Uneventful,
    War,
    Plague,
    Drought,
    Boredom,
    ColdSpell,
    CropFailure,
    LackOfWorkers,
}

impl SystemStatus {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Uneventful => "uneventful",
            Self::War => "war",
            Self::Plague => "plague",
            Self::Drought => "drought",
            Self::Boredom => "boredom",
            Self::ColdSpell => "cold_spell",
            Self::CropFailure => "crop_failure",
            Self::LackOfWorkers => "lack_of_workers",
        }
    }

    /// Conditions other than `Uneventful`, in catalog order.
    pub const EVENTFUL: [Self; 7] = [
        Self::War,
        Self::Plague,
        Self::Drought,
        Self::Boredom,
        Self::ColdSpell,
        Self::CropFailure,
        Self::LackOfWorkers,
    ];
}

/// Permanent trait of a system that cheapens or inflates specific goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialResource {
    MineralRich,
    MineralPoor,
    Desert,
    LotsOfWater,
    RichSoil,
    PoorSoil,
    RichFauna,
    Lifeless,
    WeirdMushrooms,
    LotsOfHerbs,
    Artistic,
    Warlike,
}

impl SpecialResource {
    pub const ALL: [Self; 12] = [
        Self::MineralRich,
        Self::MineralPoor,
        Self::Desert,
        Self::LotsOfWater,
        Self::RichSoil,
        Self::PoorSoil,
        Self::RichFauna,
        Self::Lifeless,
        Self::WeirdMushrooms,
        Self::LotsOfHerbs,
        Self::Artistic,
        Self::Warlike,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MineralRich => "mineral_rich",
            Self::MineralPoor => "mineral_poor",
            Self::Desert => "desert",
            Self::LotsOfWater => "lots_of_water",
            Self::RichSoil => "rich_soil",
            Self::PoorSoil => "poor_soil",
            Self::RichFauna => "rich_fauna",
            Self::Lifeless => "lifeless",
            Self::WeirdMushrooms => "weird_mushrooms",
            Self::LotsOfHerbs => "lots_of_herbs",
            Self::Artistic => "artistic",
            Self::Warlike => "warlike",
        }
    }
}

/// Static definition of a tradeable good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeItemDef {
    pub name: &'static str,
    /// Minimum tech level for a system to produce (and therefore sell) it.
    pub tech_production: u8,
    /// Minimum tech level for a system to use it.
    pub tech_usage: u8,
    /// Tech level at which production peaks.
    pub tech_top_production: u8,
    pub price_low_tech: i64,
    /// Per-tech-level price increment; negative for high-tech goods.
    pub price_inc: i64,
    pub variance: i64,
    pub double_price_status: Option<SystemStatus>,
    pub cheap_resource: Option<SpecialResource>,
    pub expensive_resource: Option<SpecialResource>,
    pub min_trade_price: i64,
    pub max_trade_price: i64,
    pub round_off: i64,
    /// Restricted goods are unsellable where the jurisdiction forbids them.
    pub restricted: bool,
}

static TRADE_ITEMS: [TradeItemDef; TRADE_ITEM_COUNT] = [
    TradeItemDef {
        name: "Water",
        tech_production: 0,
        tech_usage: 0,
        tech_top_production: 2,
        price_low_tech: 30,
        price_inc: 3,
        variance: 4,
        double_price_status: Some(SystemStatus::Drought),
        cheap_resource: Some(SpecialResource::LotsOfWater),
        expensive_resource: Some(SpecialResource::Desert),
        min_trade_price: 30,
        max_trade_price: 50,
        round_off: 1,
        restricted: false,
    },
    TradeItemDef {
        name: "Furs",
        tech_production: 0,
        tech_usage: 0,
        tech_top_production: 0,
        price_low_tech: 250,
        price_inc: 10,
        variance: 10,
        double_price_status: Some(SystemStatus::ColdSpell),
        cheap_resource: Some(SpecialResource::RichFauna),
        expensive_resource: Some(SpecialResource::Lifeless),
        min_trade_price: 230,
        max_trade_price: 280,
        round_off: 5,
        restricted: false,
    },
    TradeItemDef {
        name: "Food",
        tech_production: 1,
        tech_usage: 0,
        tech_top_production: 1,
        price_low_tech: 100,
        price_inc: 5,
        variance: 5,
        double_price_status: Some(SystemStatus::CropFailure),
        cheap_resource: Some(SpecialResource::RichSoil),
        expensive_resource: Some(SpecialResource::PoorSoil),
        min_trade_price: 90,
        max_trade_price: 160,
        round_off: 5,
        restricted: false,
    },
    TradeItemDef {
        name: "Ore",
        tech_production: 2,
        tech_usage: 2,
        tech_top_production: 3,
        price_low_tech: 350,
        price_inc: 20,
        variance: 10,
        double_price_status: Some(SystemStatus::War),
        cheap_resource: Some(SpecialResource::MineralRich),
        expensive_resource: Some(SpecialResource::MineralPoor),
        min_trade_price: 350,
        max_trade_price: 420,
        round_off: 10,
        restricted: false,
    },
    TradeItemDef {
        name: "Games",
        tech_production: 3,
        tech_usage: 1,
        tech_top_production: 6,
        price_low_tech: 250,
        price_inc: -10,
        variance: 5,
        double_price_status: Some(SystemStatus::Boredom),
        cheap_resource: Some(SpecialResource::Artistic),
        expensive_resource: None,
        min_trade_price: 160,
        max_trade_price: 270,
        round_off: 5,
        restricted: false,
    },
    TradeItemDef {
        name: "Firearms",
        tech_production: 3,
        tech_usage: 1,
        tech_top_production: 5,
        price_low_tech: 1_250,
        price_inc: -75,
        variance: 100,
        double_price_status: Some(SystemStatus::War),
        cheap_resource: Some(SpecialResource::Warlike),
        expensive_resource: None,
        min_trade_price: 600,
        max_trade_price: 1_100,
        round_off: 25,
        restricted: true,
    },
    TradeItemDef {
        name: "Medicine",
        tech_production: 4,
        tech_usage: 1,
        tech_top_production: 6,
        price_low_tech: 650,
        price_inc: -20,
        variance: 10,
        double_price_status: Some(SystemStatus::Plague),
        cheap_resource: Some(SpecialResource::LotsOfHerbs),
        expensive_resource: None,
        min_trade_price: 400,
        max_trade_price: 700,
        round_off: 25,
        restricted: false,
    },
    TradeItemDef {
        name: "Machines",
        tech_production: 4,
        tech_usage: 3,
        tech_top_production: 5,
        price_low_tech: 900,
        price_inc: -30,
        variance: 5,
        double_price_status: Some(SystemStatus::LackOfWorkers),
        cheap_resource: None,
        expensive_resource: None,
        min_trade_price: 600,
        max_trade_price: 800,
        round_off: 25,
        restricted: false,
    },
    TradeItemDef {
        name: "Narcotics",
        tech_production: 5,
        tech_usage: 0,
        tech_top_production: 5,
        price_low_tech: 3_500,
        price_inc: -125,
        variance: 150,
        double_price_status: Some(SystemStatus::Boredom),
        cheap_resource: Some(SpecialResource::WeirdMushrooms),
        expensive_resource: None,
        min_trade_price: 2_000,
        max_trade_price: 3_000,
        round_off: 50,
        restricted: true,
    },
    TradeItemDef {
        name: "Robots",
        tech_production: 6,
        tech_usage: 4,
        tech_top_production: 7,
        price_low_tech: 5_000,
        price_inc: -150,
        variance: 100,
        double_price_status: Some(SystemStatus::LackOfWorkers),
        cheap_resource: None,
        expensive_resource: None,
        min_trade_price: 3_500,
        max_trade_price: 5_000,
        round_off: 100,
        restricted: false,
    },
];

/// Static definition of a political system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoliticsDef {
    pub name: &'static str,
    /// 0 means bribery is impossible; higher values make it easier.
    pub bribe_level: u8,
    pub strength_police: u8,
    pub strength_pirates: u8,
    pub strength_traders: u8,
    pub min_tech_level: u8,
    pub max_tech_level: u8,
    pub drugs_ok: bool,
    pub firearms_ok: bool,
    /// Trade item this kind of government pays a premium for.
    pub wanted_trade_item: Option<usize>,
}

static POLITICS: [PoliticsDef; 17] = [
    PoliticsDef { name: "Anarchy", bribe_level: 7, strength_police: 0, strength_pirates: 7, strength_traders: 1, min_tech_level: 0, max_tech_level: 5, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_FOOD) },
    PoliticsDef { name: "Capitalist State", bribe_level: 1, strength_police: 3, strength_pirates: 2, strength_traders: 7, min_tech_level: 4, max_tech_level: 7, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_ORE) },
    PoliticsDef { name: "Communist State", bribe_level: 5, strength_police: 6, strength_pirates: 4, strength_traders: 4, min_tech_level: 1, max_tech_level: 5, drugs_ok: true, firearms_ok: true, wanted_trade_item: None },
    PoliticsDef { name: "Confederacy", bribe_level: 3, strength_police: 4, strength_pirates: 3, strength_traders: 5, min_tech_level: 1, max_tech_level: 6, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_GAMES) },
    PoliticsDef { name: "Corporate State", bribe_level: 2, strength_police: 6, strength_pirates: 2, strength_traders: 7, min_tech_level: 4, max_tech_level: 7, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_ROBOTS) },
    PoliticsDef { name: "Cybernetic State", bribe_level: 0, strength_police: 7, strength_pirates: 7, strength_traders: 5, min_tech_level: 6, max_tech_level: 7, drugs_ok: false, firearms_ok: false, wanted_trade_item: Some(TRADE_ITEM_ORE) },
    PoliticsDef { name: "Democracy", bribe_level: 2, strength_police: 4, strength_pirates: 3, strength_traders: 5, min_tech_level: 3, max_tech_level: 7, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_GAMES) },
    PoliticsDef { name: "Dictatorship", bribe_level: 2, strength_police: 4, strength_pirates: 5, strength_traders: 3, min_tech_level: 0, max_tech_level: 7, drugs_ok: true, firearms_ok: true, wanted_trade_item: None },
    PoliticsDef { name: "Fascist State", bribe_level: 0, strength_police: 7, strength_pirates: 7, strength_traders: 1, min_tech_level: 4, max_tech_level: 7, drugs_ok: false, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_MACHINES) },
    PoliticsDef { name: "Feudal State", bribe_level: 6, strength_police: 1, strength_pirates: 6, strength_traders: 2, min_tech_level: 0, max_tech_level: 3, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_FIREARMS) },
    PoliticsDef { name: "Military State", bribe_level: 0, strength_police: 7, strength_pirates: 0, strength_traders: 6, min_tech_level: 2, max_tech_level: 7, drugs_ok: false, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_ROBOTS) },
    PoliticsDef { name: "Monarchy", bribe_level: 4, strength_police: 3, strength_pirates: 4, strength_traders: 4, min_tech_level: 0, max_tech_level: 5, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_MEDICINE) },
    PoliticsDef { name: "Pacifist State", bribe_level: 1, strength_police: 2, strength_pirates: 1, strength_traders: 5, min_tech_level: 0, max_tech_level: 3, drugs_ok: true, firearms_ok: false, wanted_trade_item: None },
    PoliticsDef { name: "Socialist State", bribe_level: 6, strength_police: 2, strength_pirates: 5, strength_traders: 3, min_tech_level: 0, max_tech_level: 5, drugs_ok: true, firearms_ok: true, wanted_trade_item: None },
    PoliticsDef { name: "State of Satori", bribe_level: 0, strength_police: 1, strength_pirates: 1, strength_traders: 1, min_tech_level: 0, max_tech_level: 1, drugs_ok: false, firearms_ok: false, wanted_trade_item: None },
    PoliticsDef { name: "Technocracy", bribe_level: 1, strength_police: 6, strength_pirates: 3, strength_traders: 6, min_tech_level: 4, max_tech_level: 7, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_WATER) },
    PoliticsDef { name: "Theocracy", bribe_level: 0, strength_police: 6, strength_pirates: 1, strength_traders: 4, min_tech_level: 0, max_tech_level: 4, drugs_ok: true, firearms_ok: true, wanted_trade_item: Some(TRADE_ITEM_NARCOTICS) },
];

/// Static definition of a ship-mounted weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponDef {
    pub name: &'static str,
    pub power: i64,
    pub price: i64,
    pub min_tech_level: u8,
}

static WEAPONS: [WeaponDef; 3] = [
    WeaponDef { name: "Pulse laser", power: 15, price: 2_000, min_tech_level: 5 },
    WeaponDef { name: "Beam laser", power: 25, price: 12_500, min_tech_level: 6 },
    WeaponDef { name: "Military laser", power: 35, price: 35_000, min_tech_level: 7 },
];

/// Static definition of a shield generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShieldDef {
    pub name: &'static str,
    pub power: i64,
    pub price: i64,
    pub min_tech_level: u8,
}

static SHIELDS: [ShieldDef; 2] = [
    ShieldDef { name: "Energy shield", power: 100, price: 5_000, min_tech_level: 5 },
    ShieldDef { name: "Reflective shield", power: 200, price: 20_000, min_tech_level: 6 },
];

/// Static definition of a gadget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GadgetDef {
    pub name: &'static str,
    pub price: i64,
    pub min_tech_level: u8,
}

static GADGETS: [GadgetDef; 5] = [
    GadgetDef { name: "5 extra cargo bays", price: 5_000, min_tech_level: 4 },
    GadgetDef { name: "Auto-repair system", price: 7_500, min_tech_level: 5 },
    GadgetDef { name: "Navigating system", price: 15_000, min_tech_level: 6 },
    GadgetDef { name: "Targeting system", price: 25_000, min_tech_level: 6 },
    GadgetDef { name: "Cloaking device", price: 100_000, min_tech_level: 7 },
];

/// Static definition of a ship hull type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipTypeDef {
    pub name: &'static str,
    pub cargo_bays: i32,
    pub weapon_slots: usize,
    pub shield_slots: usize,
    pub gadget_slots: usize,
    pub crew_quarters: u8,
    pub fuel_tanks: i64,
    /// Credits per fuel unit.
    pub fuel_cost: i64,
    pub hull_strength: i64,
    /// Credits per hull point repaired.
    pub repair_cost: i64,
    pub price: i64,
    /// Minimum system tech level at which this type is sold.
    pub min_tech_level: u8,
}

static SHIP_TYPES: [ShipTypeDef; 10] = [
    ShipTypeDef { name: "Flea", cargo_bays: 10, weapon_slots: 0, shield_slots: 0, gadget_slots: 0, crew_quarters: 1, fuel_tanks: 20, fuel_cost: 1, hull_strength: 25, repair_cost: 1, price: 2_000, min_tech_level: 4 },
    ShipTypeDef { name: "Gnat", cargo_bays: 15, weapon_slots: 1, shield_slots: 0, gadget_slots: 1, crew_quarters: 1, fuel_tanks: 14, fuel_cost: 2, hull_strength: 100, repair_cost: 1, price: 10_000, min_tech_level: 5 },
    ShipTypeDef { name: "Firefly", cargo_bays: 20, weapon_slots: 1, shield_slots: 1, gadget_slots: 1, crew_quarters: 1, fuel_tanks: 17, fuel_cost: 3, hull_strength: 100, repair_cost: 1, price: 25_000, min_tech_level: 5 },
    ShipTypeDef { name: "Mosquito", cargo_bays: 15, weapon_slots: 2, shield_slots: 1, gadget_slots: 1, crew_quarters: 1, fuel_tanks: 13, fuel_cost: 5, hull_strength: 100, repair_cost: 1, price: 30_000, min_tech_level: 5 },
    ShipTypeDef { name: "Bumblebee", cargo_bays: 25, weapon_slots: 1, shield_slots: 2, gadget_slots: 2, crew_quarters: 2, fuel_tanks: 15, fuel_cost: 7, hull_strength: 100, repair_cost: 1, price: 60_000, min_tech_level: 5 },
    ShipTypeDef { name: "Beetle", cargo_bays: 50, weapon_slots: 0, shield_slots: 1, gadget_slots: 1, crew_quarters: 3, fuel_tanks: 14, fuel_cost: 10, hull_strength: 50, repair_cost: 1, price: 80_000, min_tech_level: 5 },
    ShipTypeDef { name: "Hornet", cargo_bays: 20, weapon_slots: 3, shield_slots: 2, gadget_slots: 1, crew_quarters: 2, fuel_tanks: 16, fuel_cost: 15, hull_strength: 150, repair_cost: 2, price: 100_000, min_tech_level: 6 },
    ShipTypeDef { name: "Grasshopper", cargo_bays: 30, weapon_slots: 2, shield_slots: 2, gadget_slots: 3, crew_quarters: 3, fuel_tanks: 15, fuel_cost: 15, hull_strength: 150, repair_cost: 3, price: 150_000, min_tech_level: 6 },
    ShipTypeDef { name: "Termite", cargo_bays: 60, weapon_slots: 1, shield_slots: 3, gadget_slots: 2, crew_quarters: 3, fuel_tanks: 13, fuel_cost: 20, hull_strength: 200, repair_cost: 4, price: 225_000, min_tech_level: 7 },
    ShipTypeDef { name: "Wasp", cargo_bays: 35, weapon_slots: 3, shield_slots: 2, gadget_slots: 2, crew_quarters: 3, fuel_tanks: 14, fuel_cost: 20, hull_strength: 200, repair_cost: 5, price: 300_000, min_tech_level: 7 },
];

/// Mercenary display names. Slot 0 is the commander; slot 30 the special
/// weakness-targeted member, never hireable the normal way.
static MERCENARY_NAMES: [&str; MERCENARY_COUNT] = [
    "Jameson", "Alyssa", "Armatur", "Bentos", "C2U2", "Chi'Ti", "Crystal",
    "Dane", "Deirdre", "Doc", "Draco", "Iranda", "Jeremiah", "Jujubal",
    "Krydon", "Luis", "Mercedez", "Milete", "Muri-L", "Mystyc", "Nandi",
    "Orestes", "Pancho", "PS37", "Quarck", "Sosumi", "Tyrus", "Uma",
    "Wesley", "Wonton", "Zeethibal",
];

/// Number of solar systems in a generated galaxy.
pub const MAX_SOLAR_SYSTEM: usize = 64;

static SYSTEM_NAMES: [&str; MAX_SOLAR_SYSTEM] = [
    "Acamar", "Adahn", "Aldea", "Andevian", "Antedi", "Balosnee", "Baratas",
    "Brax", "Bretel", "Calondia", "Campor", "Capelle", "Carzon", "Castor",
    "Cestus", "Cheron", "Courten", "Daled", "Damast", "Davlos", "Deneb",
    "Deneva", "Devidia", "Draylon", "Drema", "Endor", "Esmee", "Exo",
    "Ferris", "Festen", "Fourmi", "Frolix", "Gemulon", "Guinifer", "Hades",
    "Hamlet", "Helena", "Hulst", "Iodine", "Iralius", "Janus", "Japori",
    "Jarada", "Jason", "Kaylon", "Khefka", "Kira", "Klaatu", "Klaestron",
    "Korma", "Kravat", "Krios", "Laertes", "Largo", "Lave", "Ligon",
    "Lowry", "Magrat", "Malcoria", "Melina", "Mentar", "Merik", "Mintaka",
    "Montor",
];

#[must_use]
pub fn trade_item(index: usize) -> &'static TradeItemDef {
    TRADE_ITEMS
        .get(index)
        .unwrap_or_else(|| panic!("trade item index {index} out of range"))
}

#[must_use]
pub const fn trade_item_count() -> usize {
    TRADE_ITEM_COUNT
}

#[must_use]
pub fn politics(index: usize) -> &'static PoliticsDef {
    POLITICS
        .get(index)
        .unwrap_or_else(|| panic!("politics index {index} out of range"))
}

#[must_use]
pub const fn politics_count() -> usize {
    POLITICS.len()
}

#[must_use]
pub fn weapon(index: usize) -> &'static WeaponDef {
    WEAPONS
        .get(index)
        .unwrap_or_else(|| panic!("weapon index {index} out of range"))
}

#[must_use]
pub const fn weapon_count() -> usize {
    WEAPONS.len()
}

#[must_use]
pub fn shield(index: usize) -> &'static ShieldDef {
    SHIELDS
        .get(index)
        .unwrap_or_else(|| panic!("shield index {index} out of range"))
}

#[must_use]
pub const fn shield_count() -> usize {
    SHIELDS.len()
}

#[must_use]
pub fn gadget(index: usize) -> &'static GadgetDef {
    GADGETS
        .get(index)
        .unwrap_or_else(|| panic!("gadget index {index} out of range"))
}

#[must_use]
pub const fn gadget_count() -> usize {
    GADGETS.len()
}

#[must_use]
pub fn ship_type(index: usize) -> &'static ShipTypeDef {
    SHIP_TYPES
        .get(index)
        .unwrap_or_else(|| panic!("ship type index {index} out of range"))
}

#[must_use]
pub const fn ship_type_count() -> usize {
    SHIP_TYPES.len()
}

#[must_use]
pub fn mercenary_name(index: usize) -> &'static str {
    MERCENARY_NAMES
        .get(index)
        .unwrap_or_else(|| panic!("mercenary name index {index} out of range"))
}

#[must_use]
pub const fn mercenary_name_count() -> usize {
    MERCENARY_COUNT
}

#[must_use]
pub fn system_name(index: usize) -> &'static str {
    SYSTEM_NAMES
        .get(index)
        .unwrap_or_else(|| panic!("system name index {index} out of range"))
}

#[must_use]
pub const fn system_name_count() -> usize {
    MAX_SOLAR_SYSTEM
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mercenary_catalog_shape() {
        assert_eq!(mercenary_name_count(), 31);
        assert_eq!(mercenary_name(COMMANDER_INDEX), "Jameson");
        assert_eq!(SPECIAL_CREW_INDEX, 30);
        let unique: HashSet<&str> = (0..mercenary_name_count()).map(mercenary_name).collect();
        assert_eq!(unique.len(), mercenary_name_count());
        assert!((0..mercenary_name_count()).all(|i| !mercenary_name(i).is_empty()));
    }

    #[test]
    fn politics_strengths_and_bands_are_valid() {
        for index in 0..politics_count() {
            let def = politics(index);
            assert!(def.strength_police <= 7, "{}", def.name);
            assert!(def.strength_pirates <= 7, "{}", def.name);
            assert!(def.strength_traders <= 7, "{}", def.name);
            assert!(def.min_tech_level <= def.max_tech_level, "{}", def.name);
            assert!(def.max_tech_level <= 7, "{}", def.name);
            if let Some(item) = def.wanted_trade_item {
                assert!(item < trade_item_count(), "{}", def.name);
            }
        }
    }

    #[test]
    fn trade_item_bounds_are_consistent() {
        for index in 0..trade_item_count() {
            let def = trade_item(index);
            assert!(def.min_trade_price <= def.max_trade_price, "{}", def.name);
            assert!(def.min_trade_price > 0, "{}", def.name);
            assert!(def.round_off >= 1, "{}", def.name);
            assert!(def.variance >= 0, "{}", def.name);
            assert!(def.tech_production <= 7, "{}", def.name);
        }
        assert!(trade_item(TRADE_ITEM_FIREARMS).restricted);
        assert!(trade_item(TRADE_ITEM_NARCOTICS).restricted);
    }

    #[test]
    fn ship_types_carry_sane_slots() {
        assert_eq!(ship_type_count(), 10);
        for index in 0..ship_type_count() {
            let def = ship_type(index);
            assert!(def.cargo_bays > 0, "{}", def.name);
            assert!(def.crew_quarters >= 1, "{}", def.name);
            assert!(def.hull_strength > 0, "{}", def.name);
            assert!(def.fuel_tanks > 0, "{}", def.name);
        }
        assert_eq!(ship_type(SHIP_FLEA).weapon_slots, 0);
    }

    #[test]
    #[should_panic(expected = "trade item index 10 out of range")]
    fn out_of_range_trade_item_panics() {
        let _ = trade_item(TRADE_ITEM_COUNT);
    }

    #[test]
    fn system_name_table_is_unique() {
        let unique: HashSet<&str> = (0..system_name_count()).map(system_name).collect();
        assert_eq!(unique.len(), system_name_count());
    }
}
