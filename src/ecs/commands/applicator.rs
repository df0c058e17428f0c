use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::events::SimReactiveEvent;
use crate::ecs::map::MapGrid;
use crate::ecs::resources::event_log::SimEvent;
use crate::ecs::resources::{DefRegistry, EventLog, SimEntityMap, SimIdGenerator, SimRng, SoundQueue};
use crate::model::event::{EventKind, EventParticipant, ParticipantRole};

use super::apply_casket;
use super::{SimCommand, SimCommandKind};

/// Context passed to the `apply_*` functions: the extracted resources they
/// need, without direct World resource access.
pub(crate) struct ApplyCtx {
    pub event_log: EventLog,
    pub id_gen: SimIdGenerator,
    pub entity_map: SimEntityMap,
    pub defs: DefRegistry,
    pub rng: SimRng,
    pub sounds: SoundQueue,
    pub map: MapGrid,
    pub tick: u64,
    pub reactive_events: Vec<SimReactiveEvent>,
}

impl ApplyCtx {
    /// Record an event and its participants. Returns the event_id.
    pub(crate) fn record(
        &mut self,
        kind: EventKind,
        description: String,
        caused_by: Option<u64>,
        data: serde_json::Value,
        participants: &[(Entity, ParticipantRole)],
    ) -> u64 {
        let event_id = self.id_gen.0.next_id();
        self.event_log.events.push(SimEvent {
            id: event_id,
            kind,
            tick: self.tick,
            description,
            caused_by,
            data,
        });
        for (entity, role) in participants {
            if let Some(sim_id) = self.entity_map.get_sim(*entity) {
                self.event_log.participants.push(EventParticipant {
                    event_id,
                    entity_id: sim_id,
                    role: *role,
                });
            }
        }
        event_id
    }

    /// Record an event straight from a command, with extra participants
    /// appended to the ones the emitter attached.
    pub(crate) fn record_command(
        &mut self,
        cmd: &SimCommand,
        extra: &[(Entity, ParticipantRole)],
    ) -> u64 {
        let mut participants = cmd.participants.clone();
        participants.extend_from_slice(extra);
        self.record(
            cmd.event_kind.clone(),
            cmd.description.clone(),
            cmd.caused_by,
            cmd.event_data.clone(),
            &participants,
        )
    }

    /// Queue a reactive event for emission after all commands are processed.
    pub(crate) fn emit(&mut self, event: SimReactiveEvent) {
        self.reactive_events.push(event);
    }
}

/// Exclusive system that drains all pending `SimCommand` messages, applies
/// state changes, records the audit trail, and emits `SimReactiveEvent`
/// messages. Runs in the PostUpdate phase, so commands emitted during Update
/// resolve within the same tick.
pub fn apply_sim_commands(world: &mut World) {
    let commands: Vec<SimCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<SimCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let tick = world.resource::<SimClock>().tick;
    let mut ctx = ApplyCtx {
        event_log: world.remove_resource::<EventLog>().unwrap(),
        id_gen: world.remove_resource::<SimIdGenerator>().unwrap(),
        entity_map: world.remove_resource::<SimEntityMap>().unwrap(),
        defs: world.remove_resource::<DefRegistry>().unwrap(),
        rng: world.remove_resource::<SimRng>().unwrap(),
        sounds: world.remove_resource::<SoundQueue>().unwrap(),
        map: world.remove_resource::<MapGrid>().unwrap(),
        tick,
        reactive_events: Vec::new(),
    };

    for cmd in &commands {
        match &cmd.kind {
            SimCommandKind::EnterCasket {
                casket,
                pawn,
                special_effects,
            } => {
                apply_casket::apply_enter(&mut ctx, world, cmd, *casket, *pawn, *special_effects);
            }
            SimCommandKind::EjectContents { casket } => {
                apply_casket::apply_eject(&mut ctx, world, cmd, *casket);
            }
        }
    }

    let reactive_events = std::mem::take(&mut ctx.reactive_events);
    if let Some(mut messages) = world.get_resource_mut::<Messages<SimReactiveEvent>>() {
        messages.write_batch(reactive_events);
    }

    world.insert_resource(ctx.event_log);
    world.insert_resource(ctx.id_gen);
    world.insert_resource(ctx.entity_map);
    world.insert_resource(ctx.defs);
    world.insert_resource(ctx.rng);
    world.insert_resource(ctx.sounds);
    world.insert_resource(ctx.map);
}
