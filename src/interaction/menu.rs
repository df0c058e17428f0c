use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{CasketState, Position, PowerReceiver};
use crate::ecs::map::MapGrid;
use crate::ecs::relationships::HeldBySources;
use crate::ecs::resources::{DefRegistry, TextCatalog, text_keys};
use crate::model::action::ActionKind;

/// One selectable entry in a pawn's interaction menu. A missing action means
/// the entry is shown greyed out with the label explaining why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: Option<ActionKind>,
}

impl MenuOption {
    pub fn enabled(label: impl Into<String>, action: ActionKind) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
        }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.action.is_none()
    }
}

/// Interaction options a pawn sees when selecting a casket.
///
/// `base` is whatever the generic building surface already offers; an
/// unpowered casket suppresses it entirely, a powered one passes it through
/// and appends the enter option when the casket is empty.
pub fn interaction_options(
    world: &World,
    casket: Entity,
    pawn: Entity,
    base: Vec<MenuOption>,
) -> Vec<MenuOption> {
    let text = world.resource::<TextCatalog>();
    let (Some(state), Some(power)) = (
        world.get::<CasketState>(casket),
        world.get::<PowerReceiver>(casket),
    ) else {
        return base;
    };

    if !power.on {
        return vec![MenuOption::disabled(text.get(text_keys::NO_POWER))];
    }

    let mut options = base;

    let occupied = world
        .get::<HeldBySources>(casket)
        .is_some_and(|held| !held.is_empty());
    if occupied {
        return options;
    }

    let (Some(pawn_pos), Some(casket_pos)) = (
        world.get::<Position>(pawn),
        world.get::<Position>(casket),
    ) else {
        return options;
    };
    let Some(def) = world.resource::<DefRegistry>().casket(&state.def_name) else {
        return options;
    };

    let interaction = casket_pos.0.offset(def.interaction_offset);
    if world.resource::<MapGrid>().reachable(pawn_pos.0, interaction) {
        options.push(MenuOption::enabled(
            text.get(text_keys::ENTER_CASKET),
            ActionKind::EnterCasket { pawn, casket },
        ));
    } else {
        options.push(MenuOption::disabled(text.get(text_keys::NO_PATH)));
    }
    options
}
