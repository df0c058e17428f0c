use bevy_ecs::component::Component;

use crate::ecs::map::Cell;

/// Core identity component present on every ECS entity that maps to a
/// simulation entity.
#[derive(Component, Debug, Clone)]
pub struct SimEntity {
    pub id: u64,
    pub name: String,
}

/// Map position of a spawned entity. Absent while held inside a container.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub Cell);

// ---------------------------------------------------------------------------
// Marker components — one per entity kind
// ---------------------------------------------------------------------------

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Pawn;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Casket;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Faction;

/// Marks the player-controlled faction.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct IsPlayer;
