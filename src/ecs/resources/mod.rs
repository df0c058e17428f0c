pub mod defs;
pub mod entity_map;
pub mod event_log;
pub mod sim_resources;

pub use defs::DefRegistry;
pub use entity_map::SimEntityMap;
pub use event_log::{EventLog, SimEvent};
pub use sim_resources::{
    ActionResults, PendingActions, ReservationBoard, SimIdGenerator, SimRng, SoundQueue,
    SoundRequest, TextCatalog, text_keys,
};
