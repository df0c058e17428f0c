use serde::{Deserialize, Serialize};

/// Kinds of events the module records in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// An occupant was accepted into a casket.
    Accepted,
    /// Contents were ejected before the cycle completed.
    Ejected,
    /// A cycle completed and the occupant was replaced.
    Converted,
    /// A body part took a wound.
    Wounded,
    /// A fresh creature was generated and placed on the map.
    Spawned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Subject,
    Object,
}

/// Links an event to a simulation entity by its stable sim ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParticipant {
    pub event_id: u64,
    pub entity_id: u64,
    pub role: ParticipantRole,
}
