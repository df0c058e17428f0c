//! Definition records — templates the embedder registers at startup.
//!
//! These are plain data; the `DefRegistry` resource owns the live set.

use serde::{Deserialize, Serialize};

use super::body::BodyPartSpec;

/// One casket building variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasketDef {
    /// Unique registry key.
    pub def_name: String,
    pub label: String,
    /// Whether the player may order contents ejected mid-cycle.
    pub player_ejectable: bool,
    /// Creature kind spawned when a cycle completes.
    pub replacement_kind: String,
    /// Interaction cell, relative to the casket's own cell.
    pub interaction_offset: (i32, i32),
    pub accept_sound: String,
    pub eject_sound: String,
}

/// A creature-kind template: body plan plus a name pool for fresh spawns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureKindDef {
    /// Unique registry key.
    pub def_name: String,
    pub label: String,
    pub names: Vec<String>,
    pub body: Vec<BodyPartSpec>,
}
