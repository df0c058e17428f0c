mod common;

use bevy_app::App;
use bevy_ecs::entity::Entity;

use casket_sim::ecs::map::{Cell, MapGrid};
use casket_sim::ecs::resources::{DefRegistry, ReservationBoard};
use casket_sim::ecs::spawn::{spawn_casket, spawn_faction, spawn_pawn};
use casket_sim::ecs::{HeldBy, build_sim_app_seeded, find_casket_for};
use casket_sim::CasketDef;

use common::{add_pawn, fixture};

/// Open 12x12 map with a player faction and one pawn at (0,0); caskets are
/// added per test.
fn finder_world() -> (App, Entity, Entity) {
    let mut app = build_sim_app_seeded(DefRegistry::builtin(), MapGrid::new(12, 12), 7);
    let world = app.world_mut();
    let defs = world.resource::<DefRegistry>().clone();
    let faction = spawn_faction(world, 1001, "Colony".into(), true);
    let pawn = spawn_pawn(
        world,
        1002,
        "Mara".into(),
        defs.creature_kind("colonist").unwrap(),
        Cell::new(0, 0),
        faction,
    );
    (app, faction, pawn)
}

fn add_casket(app: &mut App, id: u64, def_name: &str, cell: Cell, faction: Entity) -> Entity {
    let world = app.world_mut();
    let defs = world.resource::<DefRegistry>().clone();
    let def = defs.casket(def_name).unwrap();
    spawn_casket(world, id, format!("Casket {id}"), def, cell, faction, true)
}

#[test]
fn prefers_the_empty_casket() {
    let (mut app, faction, pawn) = finder_world();
    let near = add_casket(&mut app, 1010, "conversion_casket", Cell::new(2, 2), faction);
    let far = add_casket(&mut app, 1011, "conversion_casket", Cell::new(9, 9), faction);

    // Occupy the near one.
    let sleeper = add_pawn(&mut app, 1020, "Tobin", Cell::new(4, 4), faction);
    app.world_mut().entity_mut(sleeper).insert(HeldBy(near));

    let found = find_casket_for(app.world_mut(), pawn, pawn, false);
    assert_eq!(found, Some(far));
}

#[test]
fn all_occupied_returns_none() {
    let (mut app, faction, pawn) = finder_world();
    let casket = add_casket(&mut app, 1010, "conversion_casket", Cell::new(2, 2), faction);
    let sleeper = add_pawn(&mut app, 1020, "Tobin", Cell::new(4, 4), faction);
    app.world_mut().entity_mut(sleeper).insert(HeldBy(casket));

    assert_eq!(find_casket_for(app.world_mut(), pawn, pawn, false), None);
}

#[test]
fn nearest_of_a_variant_wins() {
    let (mut app, faction, pawn) = finder_world();
    let far = add_casket(&mut app, 1010, "conversion_casket", Cell::new(10, 10), faction);
    let near = add_casket(&mut app, 1011, "conversion_casket", Cell::new(3, 3), faction);

    let found = find_casket_for(app.world_mut(), pawn, pawn, false);
    assert_eq!(found, Some(near));
    assert_ne!(found, Some(far));
}

#[test]
fn reserved_caskets_are_skipped_unless_overridden() {
    let (mut app, faction, pawn) = finder_world();
    let casket = add_casket(&mut app, 1010, "conversion_casket", Cell::new(2, 2), faction);
    let rival = add_pawn(&mut app, 1020, "Tobin", Cell::new(4, 4), faction);
    app.world_mut()
        .resource_mut::<ReservationBoard>()
        .reserve(casket, rival, false);

    assert_eq!(find_casket_for(app.world_mut(), pawn, pawn, false), None);
    assert_eq!(
        find_casket_for(app.world_mut(), pawn, pawn, true),
        Some(casket)
    );
}

#[test]
fn unreachable_caskets_are_skipped() {
    let (mut app, faction, pawn) = finder_world();
    let walled = add_casket(&mut app, 1010, "conversion_casket", Cell::new(10, 2), faction);
    let open = add_casket(&mut app, 1011, "conversion_casket", Cell::new(2, 8), faction);
    {
        let mut map = app.world_mut().resource_mut::<MapGrid>();
        // Box the first casket in, interaction cell included.
        for x in 8..12 {
            map.block(Cell::new(x, 4));
        }
        for y in 0..4 {
            map.block(Cell::new(8, y));
        }
    }

    let found = find_casket_for(app.world_mut(), pawn, pawn, false);
    assert_eq!(found, Some(open));
    assert_ne!(found, Some(walled));
}

#[test]
fn variant_scan_order_beats_distance() {
    // Two variants: the first-registered one only has a far casket, the
    // second a near one. The scan returns the far casket because its variant
    // is checked first — registry order, not global distance, decides.
    let defs = DefRegistry::builtin().with_casket(CasketDef {
        def_name: "refurbished_casket".to_string(),
        label: "refurbished casket".to_string(),
        player_ejectable: true,
        replacement_kind: "converted".to_string(),
        interaction_offset: (0, -1),
        accept_sound: "casket_accept".to_string(),
        eject_sound: "casket_eject".to_string(),
    });
    let mut app = build_sim_app_seeded(defs, MapGrid::new(12, 12), 7);
    let world = app.world_mut();
    let defs = world.resource::<DefRegistry>().clone();
    let faction = spawn_faction(world, 1001, "Colony".into(), true);
    let pawn = spawn_pawn(
        world,
        1002,
        "Mara".into(),
        defs.creature_kind("colonist").unwrap(),
        Cell::new(0, 0),
        faction,
    );

    let far_first_variant = add_casket(&mut app, 1010, "conversion_casket", Cell::new(11, 11), faction);
    let _near_second_variant = add_casket(&mut app, 1011, "refurbished_casket", Cell::new(1, 1), faction);

    let found = find_casket_for(app.world_mut(), pawn, pawn, false);
    assert_eq!(found, Some(far_first_variant));
}

#[test]
fn seeker_without_a_position_yields_none() {
    let mut fix = fixture();
    // A pawn already held inside something has no map position.
    common::enter(&mut fix);
    assert_eq!(
        find_casket_for(fix.app.world_mut(), fix.pawn, fix.pawn, false),
        None
    );
}
