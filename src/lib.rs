pub mod ecs;
pub mod flush;
pub mod id;
pub mod interaction;
pub mod model;

pub use id::IdGenerator;
pub use model::{
    Action, ActionKind, ActionOutcome, ActionResult, ActionSource, BodyPartKind, CasketDef,
    CreatureKindDef, DamageKind, EventKind, ParticipantRole,
};
