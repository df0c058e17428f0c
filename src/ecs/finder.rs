//! Nearest-casket lookup for hauling and self-entry orders.

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::world::World;

use crate::ecs::components::{Casket, CasketState, Position};
use crate::ecs::map::{Cell, MapGrid};
use crate::ecs::relationships::HeldBySources;
use crate::ecs::resources::{DefRegistry, ReservationBoard};

struct Candidate {
    entity: Entity,
    def_name: String,
    cell: Cell,
    occupied: bool,
}

/// Find a casket for `seeker` that `traveler` can reach and reserve.
///
/// Variants are scanned in registry definition order; within a variant the
/// nearest qualifying casket (squared distance from the seeker) wins, and
/// the first variant with any hit short-circuits the scan. A nearer casket
/// of a later variant therefore does not win — callers that care about the
/// global nearest must register a single variant.
///
/// Returns `None` when nothing qualifies; an expected outcome, not an error.
pub fn find_casket_for(
    world: &mut World,
    seeker: Entity,
    traveler: Entity,
    ignore_other_reservations: bool,
) -> Option<Entity> {
    let seeker_cell = world.get::<Position>(seeker)?.0;
    let traveler_cell = world.get::<Position>(traveler)?.0;

    let mut query = world
        .query_filtered::<(Entity, &CasketState, &Position, Option<&HeldBySources>), With<Casket>>();
    let candidates: Vec<Candidate> = query
        .iter(world)
        .map(|(entity, state, position, held)| Candidate {
            entity,
            def_name: state.def_name.clone(),
            cell: position.0,
            occupied: held.is_some_and(|h| !h.is_empty()),
        })
        .collect();

    let defs = world.resource::<DefRegistry>();
    let map = world.resource::<MapGrid>();
    let reservations = world.resource::<ReservationBoard>();

    for def in defs.caskets() {
        let mut best: Option<(i64, Entity)> = None;
        for candidate in candidates.iter().filter(|c| c.def_name == def.def_name) {
            if candidate.occupied {
                continue;
            }
            if !reservations.can_reserve(candidate.entity, traveler, ignore_other_reservations) {
                continue;
            }
            let interaction = candidate.cell.offset(def.interaction_offset);
            if !map.reachable(traveler_cell, interaction) {
                continue;
            }
            let dist = seeker_cell.dist_sq(candidate.cell);
            if best.is_none_or(|(best_dist, _)| dist < best_dist) {
                best = Some((dist, candidate.entity));
            }
        }
        if let Some((_, entity)) = best {
            return Some(entity);
        }
    }
    None
}
