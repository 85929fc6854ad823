//! Filter synchronization: the coalescing state machine, the address-bar
//! collaborator, and the controller tying them to a fetcher

pub mod controller;
pub mod machine;
pub mod params;

pub use controller::{ListingsController, ViewState};
pub use machine::{Effect, Event, MachineState, Phase};
pub use params::{MemoryParams, ParamsStore};
