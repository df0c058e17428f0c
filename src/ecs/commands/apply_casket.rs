use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::Rng;
use serde_json::json;

use crate::ecs::components::{
    CasketState, JobDriver, Pawn, PawnHealth, PawnKind, Position, SimEntity, WoundOutcome,
};
use crate::ecs::events::SimReactiveEvent;
use crate::ecs::relationships::{HeldBy, HeldBySources, MemberOf};
use crate::model::event::{EventKind, ParticipantRole};
use crate::model::{BodyPartKind, CONVERSION_WOUND, CasketDef, CreatureKindDef, parts_to_damage};

use super::SimCommand;
use super::applicator::ApplyCtx;

/// Container-accept: move a pawn off the map and into the casket.
/// Refused (with a warning, no event) when the casket already holds someone.
pub(crate) fn apply_enter(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &SimCommand,
    casket: Entity,
    pawn: Entity,
    special_effects: bool,
) {
    let Some(state) = world.get::<CasketState>(casket) else {
        tracing::warn!("EnterCasket target {casket:?} is not a casket");
        return;
    };
    let def_name = state.def_name.clone();

    if world
        .get::<HeldBySources>(casket)
        .is_some_and(|held| !held.is_empty())
    {
        tracing::warn!("EnterCasket refused: {casket:?} already holds an occupant");
        return;
    }
    if world.get::<Pawn>(pawn).is_none() {
        tracing::warn!("EnterCasket refused: {pawn:?} is not a pawn");
        return;
    }

    world.entity_mut(pawn).remove::<Position>();
    world.entity_mut(pawn).insert(HeldBy(casket));

    let event_id = ctx.record_command(
        cmd,
        &[
            (pawn, ParticipantRole::Subject),
            (casket, ParticipantRole::Object),
        ],
    );

    if special_effects {
        if let (Some(def), Some(pos)) = (ctx.defs.casket(&def_name), world.get::<Position>(casket))
        {
            ctx.sounds.play(&def.accept_sound, pos.0);
        }
    }

    ctx.emit(SimReactiveEvent::OccupantAccepted {
        event_id,
        casket,
        occupant: pawn,
    });
}

/// Resolve the casket's cycle and empty it.
///
/// With the upgrade flag set, the occupant is destroyed and a fresh creature
/// of the variant's replacement kind takes their place at the casket.
/// Otherwise the occupant is wounded according to how far the interrupted
/// cycle got, then dropped near the interaction cell. Tolerates an empty
/// casket (no-op).
pub(crate) fn apply_eject(ctx: &mut ApplyCtx, world: &mut World, cmd: &SimCommand, casket: Entity) {
    let Some(state) = world.get::<CasketState>(casket) else {
        tracing::warn!("EjectContents target {casket:?} is not a casket");
        return;
    };
    let def_name = state.def_name.clone();
    let progress = state.progress;
    let upgrade_pending = state.upgrade_pending;

    let Some(def) = ctx.defs.casket(&def_name).cloned() else {
        tracing::warn!("casket {casket:?} has unknown def {def_name}");
        return;
    };

    let casket_cell = world.get::<Position>(casket).map(|p| p.0);
    let faction = world.get::<MemberOf>(casket).map(|m| m.0);
    let occupants: Vec<Entity> = world
        .get::<HeldBySources>(casket)
        .map(|held| held.iter().copied().collect())
        .unwrap_or_default();

    for occupant in occupants {
        let replacement_kind: Option<CreatureKindDef> = if upgrade_pending {
            let kind = ctx.defs.creature_kind(&def.replacement_kind).cloned();
            if kind.is_none() {
                tracing::warn!(
                    "unknown replacement kind {}; ejecting occupant intact",
                    def.replacement_kind
                );
            }
            kind
        } else {
            None
        };

        if let Some(kind) = replacement_kind {
            complete_conversion(ctx, world, cmd, casket, occupant, &kind, casket_cell, faction);
        } else {
            release_occupant(
                ctx,
                world,
                cmd,
                casket,
                occupant,
                &def,
                progress,
                upgrade_pending,
                casket_cell,
            );
        }

        // End of cycle: the flag is consumed, progress starts over, and the
        // player has seen what was inside.
        if let Some(mut state) = world.get_mut::<CasketState>(casket) {
            state.progress = 0;
            state.upgrade_pending = false;
            state.contents_known = true;
        }
    }

    if world.get_entity(casket).is_ok() {
        if let Some(cell) = casket_cell {
            ctx.sounds.play(&def.eject_sound, cell);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn complete_conversion(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &SimCommand,
    casket: Entity,
    occupant: Entity,
    kind: &CreatureKindDef,
    casket_cell: Option<crate::ecs::map::Cell>,
    faction: Option<Entity>,
) {
    let event_id = ctx.record(
        EventKind::Converted,
        cmd.description.clone(),
        cmd.caused_by,
        cmd.event_data.clone(),
        &[
            (casket, ParticipantRole::Subject),
            (occupant, ParticipantRole::Object),
        ],
    );

    let name = generated_name(ctx, kind);
    let id = ctx.id_gen.0.next_id();
    let replacement = world
        .spawn((
            SimEntity {
                id,
                name: name.clone(),
            },
            Pawn,
            PawnKind(kind.def_name.clone()),
            PawnHealth::from_plan(&kind.body),
            JobDriver::default(),
        ))
        .id();
    if let Some(cell) = casket_cell {
        world.entity_mut(replacement).insert(Position(cell));
    }
    if let Some(faction) = faction {
        world.entity_mut(replacement).insert(MemberOf(faction));
    }
    ctx.entity_map.insert(id, replacement);

    ctx.record(
        EventKind::Spawned,
        format!("{name} came online"),
        Some(event_id),
        json!({ "kind": kind.def_name }),
        &[(replacement, ParticipantRole::Subject)],
    );

    // The original is gone entirely: no body, no drops.
    world.despawn(occupant);
    ctx.entity_map.remove_entity(occupant);

    ctx.emit(SimReactiveEvent::ConversionCompleted {
        event_id,
        casket,
        replacement,
    });
}

#[allow(clippy::too_many_arguments)]
fn release_occupant(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &SimCommand,
    casket: Entity,
    occupant: Entity,
    def: &CasketDef,
    progress: u32,
    upgrade_pending: bool,
    casket_cell: Option<crate::ecs::map::Cell>,
) {
    let event_id = ctx.record_command(
        cmd,
        &[
            (casket, ParticipantRole::Subject),
            (occupant, ParticipantRole::Object),
        ],
    );

    if !upgrade_pending {
        let mut wounds: Vec<(BodyPartKind, WoundOutcome)> = Vec::new();
        if let Some(mut health) = world.get_mut::<PawnHealth>(occupant) {
            for kind in parts_to_damage(progress) {
                match health.apply_damage(*kind, CONVERSION_WOUND) {
                    Some(outcome) => wounds.push((*kind, outcome)),
                    None => tracing::warn!(
                        "{} already missing on {occupant:?}, skipping wound",
                        kind.label()
                    ),
                }
            }
        }
        for (kind, outcome) in wounds {
            let verb = if outcome.severed { "severed" } else { "wounded" };
            ctx.record(
                EventKind::Wounded,
                format!("{} {verb}", kind.label()),
                Some(event_id),
                json!({ "part": kind, "amount": outcome.applied, "severed": outcome.severed }),
                &[(occupant, ParticipantRole::Subject)],
            );
        }
    }

    world.entity_mut(occupant).remove::<HeldBy>();
    if let Some(cell) = casket_cell {
        let spot = ctx.map.drop_spot_near(cell.offset(def.interaction_offset));
        world.entity_mut(occupant).insert(Position(spot));
    }

    ctx.emit(SimReactiveEvent::OccupantEjected {
        event_id,
        casket,
        occupant,
    });
}

fn generated_name(ctx: &mut ApplyCtx, kind: &CreatureKindDef) -> String {
    if kind.names.is_empty() {
        return kind.label.clone();
    }
    let index = ctx.rng.rng.random_range(0..kind.names.len());
    kind.names[index].clone()
}
