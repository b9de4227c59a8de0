//! Weather card
//!
//! Pick an Indian state, then one of its districts, and see the current
//! conditions for that district from OpenWeatherMap.
//!
//! Data flow:
//! 1. Event (keyboard) -> `Component::handle_event()` -> actions
//! 2. Actions dispatched to a `tui_dispatch::EffectStore`
//! 3. [`reducer::reducer`] updates state and returns effects
//! 4. Effects become keyed tasks on the runtime's `TaskManager`
//! 5. Task results come back as actions; if state changed, re-render

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod directory;
pub mod effect;
pub mod error;
pub mod logging;
pub mod reducer;
pub mod selection;
pub mod sprites;
pub mod state;
