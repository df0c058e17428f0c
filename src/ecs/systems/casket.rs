//! Casket cycle systems.
//!
//! `tick_caskets` (Update phase, every tick): advances progress on every
//! powered, occupied casket and triggers completion past the threshold. The
//! ejection it requests is applied by the command applicator in PostUpdate
//! of the same tick, so `upgrade_pending` is only ever observable mid-tick.
//!
//! `release_casket_claims` (Reactions phase): drops reservations on a casket
//! whenever its occupancy changes.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, ResMut};

use crate::ecs::commands::{SimCommand, SimCommandKind};
use crate::ecs::components::{Casket, CasketState, PowerReceiver, SimEntity};
use crate::ecs::events::SimReactiveEvent;
use crate::ecs::relationships::HeldBySources;
use crate::ecs::resources::ReservationBoard;
use crate::model::ConversionPhase;
use crate::model::event::EventKind;

pub fn tick_caskets(
    mut caskets: Query<
        (
            Entity,
            &SimEntity,
            &mut CasketState,
            &PowerReceiver,
            Option<&HeldBySources>,
        ),
        With<Casket>,
    >,
    mut commands: MessageWriter<SimCommand>,
) {
    for (entity, sim, mut state, power, held) in caskets.iter_mut() {
        let occupied = held.is_some_and(|h| !h.is_empty());
        if !occupied || !power.on {
            // An outage pauses the cycle; progress neither advances nor decays.
            continue;
        }
        state.progress += 1;
        if ConversionPhase::of(state.progress) == ConversionPhase::Completing {
            state.upgrade_pending = true;
            commands.write(SimCommand::new(
                SimCommandKind::EjectContents { casket: entity },
                EventKind::Converted,
                format!("{} finished its conversion cycle", sim.name),
            ));
        }
    }
}

pub fn release_casket_claims(
    mut events: MessageReader<SimReactiveEvent>,
    mut reservations: ResMut<ReservationBoard>,
) {
    for event in events.read() {
        let casket = match event {
            SimReactiveEvent::OccupantAccepted { casket, .. }
            | SimReactiveEvent::OccupantEjected { casket, .. }
            | SimReactiveEvent::ConversionCompleted { casket, .. } => *casket,
        };
        reservations.release_all_on(casket);
    }
}
