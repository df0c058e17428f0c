use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Simulation clock counting elapsed ticks.
///
/// The `advance_clock` system moves it forward at the end of each tick (the
/// Last phase), so every other system sees the current tick before it
/// advances.
#[derive(Resource, Debug, Default)]
pub struct SimClock {
    pub tick: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Bevy system that advances the simulation clock by one tick.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
