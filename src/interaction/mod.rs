//! Player-facing surfaces: interaction menu options and command buttons.
//!
//! Both providers are pure functions over `&World` — evaluated fresh on each
//! query, side-effect-free, safe for the UI to call every frame. Choosing an
//! option submits its action to the pending queue; the action system picks
//! it up on the next tick.

pub mod gizmos;
pub mod menu;

use bevy_ecs::world::World;

use crate::ecs::resources::PendingActions;
use crate::model::action::{Action, ActionKind, ActionSource};

pub use gizmos::{CommandButton, command_buttons};
pub use menu::{MenuOption, interaction_options};

/// Queue an action for the next tick's action processing.
pub fn submit(world: &mut World, source: ActionSource, kind: ActionKind) {
    world
        .resource_mut::<PendingActions>()
        .0
        .push(Action { source, kind });
}
