use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::clock::SimClock;
use super::commands::{SimCommand, apply_sim_commands};
use super::events::SimReactiveEvent;
use super::map::MapGrid;
use super::resources::{
    ActionResults, DefRegistry, EventLog, PendingActions, ReservationBoard, SimEntityMap,
    SimIdGenerator, SimRng, SoundQueue, TextCatalog,
};
use super::schedule::{DomainSet, SimPhase, configure_sim_schedule};
use super::systems::{process_actions, release_casket_claims, run_jobs, tick_caskets};

/// Build a headless Bevy app with the given definitions and map.
///
/// Manual tick control:
/// ```no_run
/// # use casket_sim::ecs::{build_sim_app, SimTick};
/// # use casket_sim::ecs::map::MapGrid;
/// # use casket_sim::ecs::resources::DefRegistry;
/// let mut app = build_sim_app(DefRegistry::builtin(), MapGrid::new(16, 16));
/// for _ in 0..2_600 {
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app(defs: DefRegistry, map: MapGrid) -> App {
    build_sim_app_seeded(defs, map, 42)
}

/// Build a headless app with a specific RNG seed and multi-threaded executor.
pub fn build_sim_app_seeded(defs: DefRegistry, map: MapGrid, seed: u64) -> App {
    build_sim_app_with_executor(defs, map, seed, ExecutorKind::MultiThreaded)
}

/// Build a headless app with a single-threaded executor for runs where exact
/// system interleaving must be identical across machines.
pub fn build_sim_app_deterministic(defs: DefRegistry, map: MapGrid, seed: u64) -> App {
    build_sim_app_with_executor(defs, map, seed, ExecutorKind::SingleThreaded)
}

/// Build a headless app with a specific executor kind.
pub fn build_sim_app_with_executor(
    defs: DefRegistry,
    map: MapGrid,
    seed: u64,
    executor: ExecutorKind,
) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SimClock::new());
    app.insert_resource(EventLog::new());
    app.insert_resource(SimIdGenerator::default());
    app.insert_resource(SimEntityMap::new());
    app.insert_resource(SimRng {
        rng: SmallRng::seed_from_u64(seed),
        seed,
    });
    app.insert_resource(defs);
    app.insert_resource(map);
    app.insert_resource(ReservationBoard::default());
    app.insert_resource(SoundQueue::default());
    app.insert_resource(TextCatalog::builtin());
    app.insert_resource(PendingActions::default());
    app.insert_resource(ActionResults::default());

    // Register message types
    MessageRegistry::register_message::<SimCommand>(app.world_mut());
    MessageRegistry::register_message::<SimReactiveEvent>(app.world_mut());

    // Build schedule: message rotation, domain systems, applicator, reactions
    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(process_actions.in_set(DomainSet::Actions));
    schedule.add_systems(run_jobs.in_set(DomainSet::Jobs));
    schedule.add_systems(tick_caskets.in_set(DomainSet::Caskets));
    schedule.add_systems(apply_sim_commands.in_set(SimPhase::PostUpdate));
    schedule.add_systems(release_casket_claims.in_set(SimPhase::Reactions));
    app.add_schedule(schedule);
    app
}
