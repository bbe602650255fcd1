//! Startrade Game Engine
//!
//! Platform-agnostic core game logic for the Startrade space-trading game.
//! This crate provides all simulation mechanics without UI or
//! platform-specific dependencies.

pub mod action;
pub mod catalog;
pub mod constants;
pub mod crew;
pub mod encounter;
pub mod galaxy;
pub mod game;
pub mod numbers;
pub mod pricing;
pub mod rng;
pub mod ship;
pub mod state;

// Re-export commonly used types
pub use action::{Action, ActionKind, ActionResult, EquipmentKind};
pub use catalog::{
    GadgetDef, PoliticsDef, ShieldDef, ShipTypeDef, SpecialResource, SystemStatus, TradeItemDef,
    WeaponDef,
};
pub use crew::{CrewMember, Skill};
pub use encounter::{EncounterKind, Opponent};
pub use galaxy::{SolarSystem, distance, generate_galaxy};
pub use game::{EngineConfig, Game};
pub use pricing::{PricingConfig, PricingConfigError, Ratio};
pub use rng::{CountingRng, RngBundle};
pub use ship::Ship;
pub use state::{ActiveEncounter, Difficulty, GameMode, GameOptions, GameState};

/// Trait for abstracting configuration loading
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the engine configuration from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_engine_config(&self) -> Result<EngineConfig, Self::Error>;
}

/// Trait for abstracting save/load operations
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    fn save_game(&self, save_name: &str, game_state: &GameState) -> Result<(), Self::Error>;

    /// Load game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be loaded.
    fn load_game(&self, save_name: &str) -> Result<Option<GameState>, Self::Error>;

    /// Delete saved game
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn delete_save(&self, save_name: &str) -> Result<(), Self::Error>;
}

/// Main game engine for managing campaign instances
pub struct GameEngine<L, S>
where
    L: DataLoader,
    S: GameStorage,
{
    data_loader: L,
    storage: S,
}

impl<L, S> GameEngine<L, S>
where
    L: DataLoader,
    S: GameStorage,
{
    /// Create a new game engine with the provided data loader and storage
    pub const fn new(data_loader: L, storage: S) -> Self {
        Self {
            data_loader,
            storage,
        }
    }

    /// Start a new campaign with the specified name, difficulty and seed
    ///
    /// # Errors
    ///
    /// Returns an error if the engine configuration cannot be loaded or
    /// fails validation.
    pub fn create_game(
        &self,
        name: &str,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<Game, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let cfg = self.data_loader.load_engine_config().map_err(Into::into)?;
        cfg.validate()?;
        Ok(Game::with_config(name, difficulty, seed, cfg))
    }

    /// Save a campaign
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    pub fn save_game(&self, save_name: &str, game: &Game) -> Result<(), S::Error> {
        self.storage.save_game(save_name, &game.state)
    }

    /// Load a campaign and rehydrate its engine around the stored seed
    ///
    /// # Errors
    ///
    /// Returns an error if the save or the engine configuration cannot be
    /// loaded.
    pub fn load_game(&self, save_name: &str) -> Result<Option<Game>, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
        S::Error: Into<anyhow::Error>,
    {
        let Some(state) = self.storage.load_game(save_name).map_err(Into::into)? else {
            return Ok(None);
        };
        let cfg = self.data_loader.load_engine_config().map_err(Into::into)?;
        cfg.validate()?;
        Ok(Some(Game::from_state(state, cfg)))
    }

    /// Delete a saved campaign
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    pub fn delete_save(&self, save_name: &str) -> Result<(), S::Error> {
        self.storage.delete_save(save_name)
    }
}
