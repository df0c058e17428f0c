use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for the main simulation tick.
/// Run manually each tick via `app.world_mut().run_schedule(SimTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered phases within each simulation tick.
///
/// Systems are assigned to phases via `.in_set(SimPhase::Update)` etc.
/// Phases run in declaration order: PreUpdate < Update < PostUpdate <
/// Reactions < Last. Commands emitted during Update are applied in
/// PostUpdate; reaction systems observe the resulting events in Reactions.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    PreUpdate,
    Update,
    PostUpdate,
    Reactions,
    Last,
}

/// Per-domain system sets within `SimPhase::Update`.
///
/// Ordering: Actions → Jobs → Caskets, so a player order issued this tick
/// becomes a job, the job can resolve, and the casket tick sees the result —
/// all within one tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DomainSet {
    Actions,
    Jobs,
    Caskets,
}

/// Build a configured `SimTick` schedule with phase and domain ordering.
pub fn configure_sim_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SimTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            SimPhase::PreUpdate,
            SimPhase::Update,
            SimPhase::PostUpdate,
            SimPhase::Reactions,
            SimPhase::Last,
        )
            .chain(),
    );
    schedule.configure_sets(
        (DomainSet::Actions, DomainSet::Jobs, DomainSet::Caskets)
            .chain()
            .in_set(SimPhase::Update),
    );
    schedule.add_systems(advance_clock.in_set(SimPhase::Last));
    schedule
}
