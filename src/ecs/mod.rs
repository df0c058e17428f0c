pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod events;
pub mod finder;
pub mod map;
pub mod relationships;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::{build_sim_app, build_sim_app_deterministic, build_sim_app_seeded};
pub use clock::SimClock;
pub use commands::{SimCommand, SimCommandKind, apply_sim_commands};
pub use components::{
    Casket, CasketState, Faction, IsPlayer, Job, JobDriver, JobKind, Pawn, PawnHealth, PawnKind,
    Position, PowerReceiver, SimEntity,
};
pub use events::SimReactiveEvent;
pub use finder::find_casket_for;
pub use map::{Cell, MapGrid};
pub use relationships::{HeldBy, HeldBySources, MemberOf, MemberOfSources};
pub use resources::{
    ActionResults, DefRegistry, EventLog, PendingActions, ReservationBoard, SimEntityMap,
    SimIdGenerator, SimRng, SoundQueue, TextCatalog,
};
pub use schedule::{DomainSet, SimPhase, SimTick, configure_sim_schedule};
