//! Action types for the player/order queue.
//!
//! External code (UI glue, orders) queues `Action`s on the world; the action
//! system drains them each tick, validates preconditions, and produces
//! `ActionResult`s.

use bevy_ecs::entity::Entity;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSource {
    /// External player input.
    Player,
    /// An autonomous decision by a simulated actor.
    Autonomous,
}

#[derive(Debug, Clone)]
pub struct Action {
    pub source: ActionSource,
    pub kind: ActionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Send a pawn to climb into a casket.
    EnterCasket { pawn: Entity, casket: Entity },
    /// Order a casket to eject whatever it holds.
    EjectContents { casket: Entity },
}

#[derive(Debug, Clone)]
pub struct ActionResult {
    pub source: ActionSource,
    pub kind: ActionKind,
    pub outcome: ActionOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Queued,
    Failed { reason: String },
}
