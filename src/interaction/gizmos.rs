use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{CasketState, IsPlayer};
use crate::ecs::relationships::{HeldBySources, MemberOf};
use crate::ecs::resources::{DefRegistry, TextCatalog, text_keys};
use crate::model::action::ActionKind;

pub const EJECT_HOTKEY: &str = "misc_1";
pub const EJECT_ICON: &str = "ui/commands/eject";

/// A command button shown for a selected building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandButton {
    pub label: String,
    pub desc: String,
    pub hotkey: &'static str,
    pub icon: &'static str,
    pub action: ActionKind,
}

/// Command buttons for a selected casket, extending the base set.
///
/// The eject button is offered only for player-owned caskets whose variant
/// allows it and which currently hold an occupant — an empty casket simply
/// has no button rather than a disabled one.
pub fn command_buttons(
    world: &World,
    casket: Entity,
    base: Vec<CommandButton>,
) -> Vec<CommandButton> {
    let mut buttons = base;

    let Some(state) = world.get::<CasketState>(casket) else {
        return buttons;
    };
    let player_owned = world
        .get::<MemberOf>(casket)
        .is_some_and(|member| world.get::<IsPlayer>(member.0).is_some());
    let occupied = world
        .get::<HeldBySources>(casket)
        .is_some_and(|held| !held.is_empty());
    let ejectable = world
        .resource::<DefRegistry>()
        .casket(&state.def_name)
        .is_some_and(|def| def.player_ejectable);

    if player_owned && occupied && ejectable {
        let text = world.resource::<TextCatalog>();
        buttons.push(CommandButton {
            label: text.get(text_keys::EJECT),
            desc: text.get(text_keys::EJECT_DESC),
            hotkey: EJECT_HOTKEY,
            icon: EJECT_ICON,
            action: ActionKind::EjectContents { casket },
        });
    }
    buttons
}
