use std::ops::Deref;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

// ---------------------------------------------------------------------------
// HeldBy — occupant → casket
// ---------------------------------------------------------------------------

/// The holding container of an entity that is inside one. The target side
/// (`HeldBySources`) is maintained by Bevy; capacity is enforced at accept
/// time, not here.
#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = HeldBySources)]
pub struct HeldBy(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = HeldBy)]
pub struct HeldBySources(Vec<Entity>);

impl Deref for HeldBySources {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// MemberOf — pawn/casket → faction
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = MemberOfSources)]
pub struct MemberOf(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = MemberOf)]
pub struct MemberOfSources(Vec<Entity>);

impl Deref for MemberOfSources {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
