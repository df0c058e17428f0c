//! Job resolution: one queued job per pawn per tick.
//!
//! The embedding game's AI owns real job scheduling and locomotion; this
//! system is the thin seam that resolves an enter-casket order once its
//! preconditions hold — target still empty, reserved by this pawn, and
//! reachable — then hands the pawn to the container via `EnterCasket`.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::commands::{SimCommand, SimCommandKind};
use crate::ecs::components::{Casket, CasketState, JobDriver, JobKind, Pawn, Position, SimEntity};
use crate::ecs::map::MapGrid;
use crate::ecs::relationships::HeldBySources;
use crate::ecs::resources::{DefRegistry, ReservationBoard};
use crate::model::event::EventKind;

#[allow(clippy::type_complexity)]
pub fn run_jobs(
    map: Res<MapGrid>,
    defs: Res<DefRegistry>,
    mut reservations: ResMut<ReservationBoard>,
    mut pawns: Query<
        (Entity, &SimEntity, &mut JobDriver, &mut Position),
        (With<Pawn>, Without<Casket>),
    >,
    caskets: Query<
        (&SimEntity, &CasketState, &Position, Option<&HeldBySources>),
        (With<Casket>, Without<Pawn>),
    >,
    mut commands: MessageWriter<SimCommand>,
) {
    for (pawn, pawn_sim, mut driver, mut position) in pawns.iter_mut() {
        let Some(job) = driver.queue.pop_front() else {
            continue;
        };
        match job.kind {
            JobKind::EnterCasket => {
                let target = job.target;
                let Ok((casket_sim, state, casket_pos, held)) = caskets.get(target) else {
                    tracing::warn!("{} dropped enter job: target is not a casket", pawn_sim.name);
                    reservations.release(target, pawn);
                    continue;
                };
                if held.is_some_and(|h| !h.is_empty()) {
                    tracing::warn!(
                        "{} dropped enter job: {} is occupied",
                        pawn_sim.name,
                        casket_sim.name
                    );
                    reservations.release(target, pawn);
                    continue;
                }
                if !reservations.is_held_by(target, pawn)
                    && !reservations.reserve(target, pawn, false)
                {
                    tracing::warn!(
                        "{} dropped enter job: {} is reserved by another pawn",
                        pawn_sim.name,
                        casket_sim.name
                    );
                    continue;
                }
                let Some(def) = defs.casket(&state.def_name) else {
                    tracing::warn!(
                        "{} dropped enter job: unknown casket def {}",
                        pawn_sim.name,
                        state.def_name
                    );
                    reservations.release(target, pawn);
                    continue;
                };
                let interaction = casket_pos.0.offset(def.interaction_offset);
                if !map.reachable(position.0, interaction) {
                    tracing::warn!(
                        "{} dropped enter job: no path to {}",
                        pawn_sim.name,
                        casket_sim.name
                    );
                    reservations.release(target, pawn);
                    continue;
                }

                position.0 = interaction;
                commands.write(SimCommand::new(
                    SimCommandKind::EnterCasket {
                        casket: target,
                        pawn,
                        special_effects: true,
                    },
                    EventKind::Accepted,
                    format!("{} entered {}", pawn_sim.name, casket_sim.name),
                ));
            }
        }
    }
}
