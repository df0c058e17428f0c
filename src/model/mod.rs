pub mod action;
pub mod body;
pub mod conversion;
pub mod defs;
pub mod event;

pub use action::{Action, ActionKind, ActionOutcome, ActionResult, ActionSource};
pub use body::{BodyPart, BodyPartKind, BodyPartSpec, DamageInfo, DamageKind, humanoid_plan};
pub use conversion::{CONVERSION_TICKS, CONVERSION_WOUND, ConversionPhase, parts_to_damage};
pub use defs::{CasketDef, CreatureKindDef};
pub use event::{EventKind, EventParticipant, ParticipantRole};
