pub mod applicator;
mod apply_casket;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::event::{EventKind, ParticipantRole};

pub use applicator::apply_sim_commands;

/// A command describing an intended state change.
///
/// Systems emit these via `MessageWriter<SimCommand>`. The centralized
/// applicator in the PostUpdate phase processes them in emission order:
/// applies state changes, records the audit trail in `EventLog`, and emits
/// `SimReactiveEvent` messages. An event is only recorded when the change
/// actually applies.
#[derive(Message, Clone, Debug)]
pub struct SimCommand {
    /// The intent — what state change to apply.
    pub kind: SimCommandKind,
    /// Human-readable description for the EventLog.
    pub description: String,
    /// Causal chain: event_id of the event that triggered this command.
    pub caused_by: Option<u64>,
    /// What EventKind to record (the eject applicator overrides this with
    /// `Converted` when the cycle has completed).
    pub event_kind: EventKind,
    /// Extra entities to attach to the recorded event.
    pub participants: Vec<(Entity, ParticipantRole)>,
    /// Structured metadata for the event's data field.
    pub event_data: serde_json::Value,
}

impl SimCommand {
    pub fn new(
        kind: SimCommandKind,
        event_kind: EventKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            caused_by: None,
            event_kind,
            participants: Vec::new(),
            event_data: serde_json::Value::Null,
        }
    }

    /// Set the causal chain event_id.
    pub fn caused_by(mut self, event_id: u64) -> Self {
        self.caused_by = Some(event_id);
        self
    }

    /// Add a participant.
    pub fn with_participant(mut self, entity: Entity, role: ParticipantRole) -> Self {
        self.participants.push((entity, role));
        self
    }

    /// Set the event data.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.event_data = data;
        self
    }
}

/// All state-change intents this module applies.
#[derive(Clone, Debug)]
pub enum SimCommandKind {
    /// Move a pawn from the map into a casket.
    EnterCasket {
        casket: Entity,
        pawn: Entity,
        /// Suppress the accept sound (e.g. when loading silently).
        special_effects: bool,
    },
    /// Resolve the casket's cycle and empty it: replace the occupant when
    /// the cycle completed, wound and release them otherwise.
    EjectContents { casket: Entity },
}
