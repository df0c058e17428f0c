//! Action processing: drains `PendingActions` each tick, validates
//! preconditions via ECS queries, and either queues jobs or emits
//! `SimCommand`s. No direct structural mutation; all container changes flow
//! through the command pipeline.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::commands::{SimCommand, SimCommandKind};
use crate::ecs::components::{
    Casket, CasketState, Job, JobDriver, JobKind, Pawn, Position, PowerReceiver, SimEntity,
};
use crate::ecs::map::MapGrid;
use crate::ecs::relationships::HeldBySources;
use crate::ecs::resources::{ActionResults, DefRegistry, PendingActions, ReservationBoard};
use crate::model::action::{ActionKind, ActionOutcome, ActionResult};
use crate::model::event::EventKind;

type PawnQuery<'w, 's> =
    Query<'w, 's, (&'static Position, &'static mut JobDriver), (With<Pawn>, Without<Casket>)>;

type CasketQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static SimEntity,
        &'static CasketState,
        &'static Position,
        &'static PowerReceiver,
        Option<&'static HeldBySources>,
    ),
    (With<Casket>, Without<Pawn>),
>;

pub fn process_actions(
    map: Res<MapGrid>,
    defs: Res<DefRegistry>,
    mut pending: ResMut<PendingActions>,
    mut results: ResMut<ActionResults>,
    mut reservations: ResMut<ReservationBoard>,
    mut pawns: PawnQuery,
    caskets: CasketQuery,
    mut commands: MessageWriter<SimCommand>,
) {
    let actions = std::mem::take(&mut pending.0);
    for action in actions {
        let outcome = match action.kind {
            ActionKind::EnterCasket { pawn, casket } => queue_enter_job(
                &map,
                &defs,
                &mut reservations,
                &mut pawns,
                &caskets,
                pawn,
                casket,
            ),
            ActionKind::EjectContents { casket } => {
                order_eject(&caskets, &mut commands, casket)
            }
        };
        results.0.push(ActionResult {
            source: action.source,
            kind: action.kind,
            outcome,
        });
    }
}

fn queue_enter_job(
    map: &MapGrid,
    defs: &DefRegistry,
    reservations: &mut ReservationBoard,
    pawns: &mut PawnQuery,
    caskets: &CasketQuery,
    pawn: Entity,
    casket: Entity,
) -> ActionOutcome {
    let Ok((pawn_pos, mut driver)) = pawns.get_mut(pawn) else {
        return failed("actor is not a pawn");
    };
    let Ok((_, state, casket_pos, power, held)) = caskets.get(casket) else {
        return failed("target is not a casket");
    };
    if !power.on {
        return failed("no power");
    }
    if held.is_some_and(|h| !h.is_empty()) {
        return failed("occupied");
    }
    let Some(def) = defs.casket(&state.def_name) else {
        return failed("unknown casket def");
    };
    let interaction = casket_pos.0.offset(def.interaction_offset);
    if !map.reachable(pawn_pos.0, interaction) {
        return failed("no path");
    }
    if !reservations.reserve(casket, pawn, false) {
        return failed("reserved by another pawn");
    }

    driver.queue.push_back(Job {
        kind: JobKind::EnterCasket,
        target: casket,
    });
    ActionOutcome::Queued
}

fn order_eject(
    caskets: &CasketQuery,
    commands: &mut MessageWriter<SimCommand>,
    casket: Entity,
) -> ActionOutcome {
    let Ok((sim, ..)) = caskets.get(casket) else {
        return failed("target is not a casket");
    };
    commands.write(SimCommand::new(
        SimCommandKind::EjectContents { casket },
        EventKind::Ejected,
        format!("{} ordered to eject contents", sim.name),
    ));
    ActionOutcome::Queued
}

fn failed(reason: &str) -> ActionOutcome {
    ActionOutcome::Failed {
        reason: reason.to_string(),
    }
}
