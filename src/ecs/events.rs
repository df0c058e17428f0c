use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

/// Reactive events emitted by the command applicator for cross-system
/// reactions. Each variant carries the `event_id` of the EventLog entry that
/// caused it.
#[derive(Message, Clone, Debug)]
pub enum SimReactiveEvent {
    OccupantAccepted {
        event_id: u64,
        casket: Entity,
        occupant: Entity,
    },
    /// Contents left the casket before the cycle completed. `occupant` is
    /// back on the map.
    OccupantEjected {
        event_id: u64,
        casket: Entity,
        occupant: Entity,
    },
    /// The cycle completed: the occupant is gone and `replacement` stands at
    /// the casket.
    ConversionCompleted {
        event_id: u64,
        casket: Entity,
        replacement: Entity,
    },
}
