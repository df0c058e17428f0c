use bevy_app::App;
use bevy_ecs::entity::Entity;

use casket_sim::ecs::map::{Cell, MapGrid};
use casket_sim::ecs::resources::DefRegistry;
use casket_sim::ecs::spawn::{spawn_casket, spawn_faction, spawn_pawn};
use casket_sim::ecs::{CasketState, HeldBySources, SimTick, build_sim_app_seeded};
use casket_sim::interaction::submit;
use casket_sim::model::{ActionKind, ActionSource};

pub struct Fixture {
    pub app: App,
    pub faction: Entity,
    pub pawn: Entity,
    pub casket: Entity,
}

/// 8x8 open map, one player faction, one colonist at (1,1), one powered
/// casket at (5,5) whose interaction cell is (5,4).
pub fn fixture() -> Fixture {
    let mut app = build_sim_app_seeded(DefRegistry::builtin(), MapGrid::new(8, 8), 7);
    let world = app.world_mut();
    let defs = world.resource::<DefRegistry>().clone();
    let colonist = defs.creature_kind("colonist").unwrap();
    let casket_def = defs.casket("conversion_casket").unwrap();

    let faction = spawn_faction(world, 1001, "Colony".into(), true);
    let pawn = spawn_pawn(world, 1002, "Mara".into(), colonist, Cell::new(1, 1), faction);
    let casket = spawn_casket(
        world,
        1003,
        "Casket".into(),
        casket_def,
        Cell::new(5, 5),
        faction,
        true,
    );

    Fixture {
        app,
        faction,
        pawn,
        casket,
    }
}

pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Spawn another colonist for multi-pawn scenarios.
pub fn add_pawn(app: &mut App, id: u64, name: &str, cell: Cell, faction: Entity) -> Entity {
    let world = app.world_mut();
    let defs = world.resource::<DefRegistry>().clone();
    let colonist = defs.creature_kind("colonist").unwrap();
    spawn_pawn(world, id, name.into(), colonist, cell, faction)
}

/// Order the pawn into the casket and run one tick, which is enough for the
/// action → job → accept chain to resolve.
pub fn enter(fix: &mut Fixture) {
    submit(
        fix.app.world_mut(),
        ActionSource::Player,
        ActionKind::EnterCasket {
            pawn: fix.pawn,
            casket: fix.casket,
        },
    );
    tick(&mut fix.app, 1);
}

/// Player-order an ejection and run one tick to apply it.
pub fn eject_now(app: &mut App, casket: Entity) {
    submit(
        app.world_mut(),
        ActionSource::Player,
        ActionKind::EjectContents { casket },
    );
    tick(app, 1);
}

pub fn occupant_of(app: &App, casket: Entity) -> Option<Entity> {
    app.world()
        .get::<HeldBySources>(casket)
        .and_then(|held| held.first().copied())
}

pub fn progress_of(app: &App, casket: Entity) -> u32 {
    app.world().get::<CasketState>(casket).unwrap().progress
}

pub fn set_progress(app: &mut App, casket: Entity, progress: u32) {
    app.world_mut()
        .get_mut::<CasketState>(casket)
        .unwrap()
        .progress = progress;
}
