//! Reducer - (state, action) -> DispatchResult<Effect>
//!
//! All state mutations happen here. Async work is requested by returning
//! effects; results come back as `WeatherDid*` actions tagged with the
//! request id that produced them.

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Field, RequestStatus};
use tui_dispatch::DispatchResult;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Selection actions =====
        Action::SelectionState(name) => {
            state
                .selection
                .select_state(name.as_deref(), &state.directory);

            // A pending fetch still resolves; its result is the latest one
            state.status.clear_error();
            state.focus = if state.selection.district_enabled() {
                Field::District
            } else {
                Field::State
            };
            DispatchResult::changed()
        }

        Action::SelectionDistrict(name) => {
            if let Err(err) = state.selection.select_district(name.as_deref()) {
                tracing::warn!(error = %err, "district selection rejected");
                return DispatchResult::unchanged();
            }

            let Some(district) = state.selection.district() else {
                state.status.clear_error();
                return DispatchResult::changed();
            };

            state.latest_request += 1;
            state.fetched_district = Some(district.to_owned());
            state.status = RequestStatus::Loading;
            DispatchResult::changed_with(Effect::FetchWeather {
                district: district.to_owned(),
                request_id: state.latest_request,
            })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad {
            request_id,
            reading,
        } => {
            if request_id != state.latest_request {
                tracing::debug!(request_id, latest = state.latest_request, "stale weather discarded");
                return DispatchResult::unchanged();
            }
            state.status = RequestStatus::Success(reading);
            DispatchResult::changed()
        }

        Action::WeatherDidError { request_id, error } => {
            if request_id != state.latest_request {
                tracing::debug!(request_id, latest = state.latest_request, "stale error discarded");
                return DispatchResult::unchanged();
            }
            state.status = RequestStatus::Error(error.to_string());
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiFocusNext => {
            let next = match state.focus {
                Field::State if state.selection.district_enabled() => Field::District,
                _ => Field::State,
            };
            if next == state.focus {
                return DispatchResult::unchanged();
            }
            state.focus = next;
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed() // re-render with new sprite size
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render if loading (for spinner animation)
            if state.status.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is handled in main loop, not here
        Action::Quit => DispatchResult::unchanged(),
    }
}
