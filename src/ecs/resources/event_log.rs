use bevy_ecs::resource::Resource;
use serde::Serialize;

use crate::model::event::{EventKind, EventParticipant};

/// One recorded event, stamped with the tick it happened on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimEvent {
    pub id: u64,
    pub kind: EventKind,
    pub tick: u64,
    pub description: String,
    /// Causal chain: id of the event that led to this one.
    pub caused_by: Option<u64>,
    pub data: serde_json::Value,
}

/// Accumulates events and participants between flushes.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<SimEvent>,
    pub participants: Vec<EventParticipant>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.participants.clear();
    }
}
