use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::*;
use crate::ecs::map::Cell;
use crate::ecs::relationships::MemberOf;
use crate::ecs::resources::SimEntityMap;
use crate::model::{CasketDef, CreatureKindDef};

fn register(world: &mut World, id: u64, entity: Entity) {
    // Graceful when SimEntityMap is temporarily removed from the world
    // (during command application the applicator owns it and registers
    // spawns itself).
    if let Some(mut map) = world.get_resource_mut::<SimEntityMap>() {
        map.insert(id, entity);
    }
}

pub fn spawn_faction(world: &mut World, id: u64, name: String, player: bool) -> Entity {
    let entity = world.spawn((SimEntity { id, name }, Faction)).id();
    if player {
        world.entity_mut(entity).insert(IsPlayer);
    }
    register(world, id, entity);
    entity
}

pub fn spawn_pawn(
    world: &mut World,
    id: u64,
    name: String,
    kind: &CreatureKindDef,
    cell: Cell,
    faction: Entity,
) -> Entity {
    let entity = world
        .spawn((
            SimEntity { id, name },
            Pawn,
            PawnKind(kind.def_name.clone()),
            PawnHealth::from_plan(&kind.body),
            JobDriver::default(),
            Position(cell),
            MemberOf(faction),
        ))
        .id();
    register(world, id, entity);
    entity
}

pub fn spawn_casket(
    world: &mut World,
    id: u64,
    name: String,
    def: &CasketDef,
    cell: Cell,
    faction: Entity,
    powered: bool,
) -> Entity {
    let entity = world
        .spawn((
            SimEntity { id, name },
            Casket,
            CasketState::new(def.def_name.clone()),
            PowerReceiver { on: powered },
            Position(cell),
            MemberOf(faction),
        ))
        .id();
    register(world, id, entity);
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::resources::DefRegistry;
    use crate::model::BodyPartKind;

    fn test_world() -> World {
        let mut world = World::new();
        world.insert_resource(SimEntityMap::new());
        world
    }

    #[test]
    fn spawn_and_query_pawn() {
        let mut world = test_world();
        let defs = DefRegistry::builtin();
        let kind = defs.creature_kind("colonist").unwrap();
        let faction = spawn_faction(&mut world, 1, "Colony".into(), true);
        let pawn = spawn_pawn(&mut world, 2, "Mara".into(), kind, Cell::new(3, 3), faction);

        assert!(world.get::<Pawn>(pawn).is_some());
        assert_eq!(world.get::<SimEntity>(pawn).unwrap().name, "Mara");
        assert!(
            world
                .get::<PawnHealth>(pawn)
                .unwrap()
                .not_missing(BodyPartKind::LeftArm)
                .is_some()
        );
        assert_eq!(world.get::<MemberOf>(pawn).unwrap().0, faction);
        assert_eq!(world.resource::<SimEntityMap>().get_bevy(2), Some(pawn));
    }

    #[test]
    fn spawn_and_query_casket() {
        let mut world = test_world();
        let defs = DefRegistry::builtin();
        let def = defs.casket("conversion_casket").unwrap();
        let faction = spawn_faction(&mut world, 1, "Colony".into(), true);
        let casket = spawn_casket(
            &mut world,
            2,
            "Casket".into(),
            def,
            Cell::new(5, 5),
            faction,
            true,
        );

        assert!(world.get::<Casket>(casket).is_some());
        let state = world.get::<CasketState>(casket).unwrap();
        assert_eq!(state.def_name, "conversion_casket");
        assert_eq!(state.progress, 0);
        assert!(!state.upgrade_pending);
        assert!(world.get::<PowerReceiver>(casket).unwrap().on);
    }

    #[test]
    fn player_faction_is_marked() {
        let mut world = test_world();
        let player = spawn_faction(&mut world, 1, "Colony".into(), true);
        let rival = spawn_faction(&mut world, 2, "Raiders".into(), false);
        assert!(world.get::<IsPlayer>(player).is_some());
        assert!(world.get::<IsPlayer>(rival).is_none());
    }
}
