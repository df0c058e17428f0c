use bevy_ecs::component::Component;

/// Full casket cycle state — single component per casket entity.
///
/// `progress` advances one per tick while the casket is powered and holds an
/// occupant, and resets to zero whenever contents leave. `upgrade_pending` is
/// set when progress passes the completion threshold and is consumed by the
/// next ejection.
#[derive(Component, Debug, Clone)]
pub struct CasketState {
    pub def_name: String,
    pub progress: u32,
    pub upgrade_pending: bool,
    /// Whether the player has seen what the casket holds.
    pub contents_known: bool,
}

impl CasketState {
    pub fn new(def_name: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            progress: 0,
            upgrade_pending: false,
            contents_known: false,
        }
    }
}

/// Power hookup. The embedding power simulation writes `on`; the casket
/// systems only read it.
#[derive(Component, Debug, Clone, Copy)]
pub struct PowerReceiver {
    pub on: bool,
}
