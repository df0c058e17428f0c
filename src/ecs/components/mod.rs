pub mod casket;
pub mod common;
pub mod pawn;

pub use casket::{CasketState, PowerReceiver};
pub use common::{Casket, Faction, IsPlayer, Pawn, Position, SimEntity};
pub use pawn::{Job, JobDriver, JobKind, PawnHealth, PawnKind, WoundOutcome};
