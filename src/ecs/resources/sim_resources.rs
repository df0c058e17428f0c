use std::collections::{BTreeMap, HashMap};

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::IdGenerator;
use crate::ecs::map::Cell;
use crate::model::action::{Action, ActionResult};

/// Deterministic RNG for the simulation.
#[derive(Resource)]
pub struct SimRng {
    pub rng: SmallRng,
    pub seed: u64,
}

/// Global ID generator for simulation entities and events.
#[derive(Resource, Default)]
pub struct SimIdGenerator(pub IdGenerator);

/// Actions queued for processing this tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingActions(pub Vec<Action>);

/// Results from processed actions.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResults(pub Vec<ActionResult>);

// ---------------------------------------------------------------------------
// Reservations
// ---------------------------------------------------------------------------

/// Exclusive claims on interaction targets, preventing two pawns from
/// heading for the same casket. One claimant per target.
#[derive(Resource, Debug, Clone, Default)]
pub struct ReservationBoard {
    claims: BTreeMap<Entity, Entity>,
}

impl ReservationBoard {
    pub fn can_reserve(&self, target: Entity, claimant: Entity, ignore_others: bool) -> bool {
        self.claims
            .get(&target)
            .is_none_or(|held| *held == claimant || ignore_others)
    }

    /// Claim the target. Returns false (and leaves the board unchanged) when
    /// another claimant holds it and the override is not set.
    pub fn reserve(&mut self, target: Entity, claimant: Entity, ignore_others: bool) -> bool {
        if !self.can_reserve(target, claimant, ignore_others) {
            return false;
        }
        self.claims.insert(target, claimant);
        true
    }

    pub fn is_held_by(&self, target: Entity, claimant: Entity) -> bool {
        self.claims.get(&target) == Some(&claimant)
    }

    /// Release the claimant's claim on the target, if it holds one.
    pub fn release(&mut self, target: Entity, claimant: Entity) {
        if self.is_held_by(target, claimant) {
            self.claims.remove(&target);
        }
    }

    /// Drop every claim on the target, whoever holds it.
    pub fn release_all_on(&mut self, target: Entity) {
        self.claims.remove(&target);
    }
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

/// A one-shot sound to play at a map location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundRequest {
    pub sound: String,
    pub at: Cell,
}

/// Queue of sounds for the embedding audio backend to drain.
#[derive(Resource, Debug, Clone, Default)]
pub struct SoundQueue {
    requests: Vec<SoundRequest>,
}

impl SoundQueue {
    pub fn play(&mut self, sound: &str, at: Cell) {
        self.requests.push(SoundRequest {
            sound: sound.to_string(),
            at,
        });
    }

    pub fn requests(&self) -> &[SoundRequest] {
        &self.requests
    }

    pub fn drain(&mut self) -> Vec<SoundRequest> {
        std::mem::take(&mut self.requests)
    }
}

// ---------------------------------------------------------------------------
// Localization
// ---------------------------------------------------------------------------

/// Keys for every label the module displays.
pub mod text_keys {
    pub const NO_POWER: &str = "cannot_use_no_power";
    pub const NO_PATH: &str = "cannot_use_no_path";
    pub const ENTER_CASKET: &str = "enter_conversion_casket";
    pub const EJECT: &str = "eject_contents";
    pub const EJECT_DESC: &str = "eject_contents_desc";
}

/// Opaque key → display string lookup. Unknown keys echo back so a missing
/// translation is visible instead of fatal.
#[derive(Resource, Debug, Clone, Default)]
pub struct TextCatalog {
    strings: HashMap<String, String>,
}

impl TextCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// English defaults for the stock labels.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.set(text_keys::NO_POWER, "Cannot use: no power");
        catalog.set(text_keys::NO_PATH, "Cannot use: no path");
        catalog.set(text_keys::ENTER_CASKET, "Enter conversion casket");
        catalog.set(text_keys::EJECT, "Eject contents");
        catalog.set(text_keys::EJECT_DESC, "Eject the current occupant");
        catalog
    }
}
