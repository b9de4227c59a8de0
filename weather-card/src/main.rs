//! Weather card TUI
//!
//! Main loop:
//! 1. Event (keyboard) -> WeatherCard.handle_event() -> Actions
//! 2. Actions dispatched to EffectStore (with logging middleware)
//! 3. Reducer updates state and returns effects
//! 4. Effects handled by the runtime's TaskManager
//! 5. If state changed, re-render
//!
//! # Usage
//!
//! ```sh
//! OPENWEATHER_API_KEY=... cargo run -p weather-card
//!
//! # Start on a district right away, logging to a file
//! cargo run -p weather-card -- --state "Tamil Nadu" --district Chennai --log-file card.log
//! ```

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectRuntime, EffectStoreWithMiddleware, EventKind, EventOutcome,
    LoggingMiddleware, RenderContext,
};

use weather_card::action::Action;
use weather_card::api::WeatherClient;
use weather_card::components::{Component, WeatherCard, WeatherCardProps};
use weather_card::config::{Args, Config};
use weather_card::effect::{Effect, WEATHER_TASK};
use weather_card::logging;
use weather_card::reducer::reducer;
use weather_card::state::{AppState, LOADING_ANIM_TICK_MS};

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Validate everything before entering TUI mode
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    tracing::info!(
        states = config.directory.list_states().len(),
        base_url = %config.base_url,
        "starting weather card"
    );

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app and capture result
    let result = run_app(&mut terminal, config).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "weather card stopped with an error");
    }
    result
}

struct WeatherUi {
    card: WeatherCard,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            card: WeatherCard::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
    ) {
        let props = WeatherCardProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.card.render(frame, area, props);
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(width, height) = event {
            return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
        }

        let before = self.card.clone();
        let props = WeatherCardProps {
            state,
            is_focused: true,
        };
        let outcome = EventOutcome::from_actions(self.card.handle_event(event, props));

        // Opening, moving or closing a dropdown changes only local view state
        if self.card != before {
            outcome.with_render()
        } else {
            outcome
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
) -> io::Result<()> {
    let mut state = AppState::new(config.directory.clone(), Local::now().date_naive());
    let size = terminal.size()?;
    state.terminal_size = (size.width, size.height);

    let store = EffectStoreWithMiddleware::new(state, reducer, LoggingMiddleware::new());
    let mut runtime = EffectRuntime::from_store(store);

    // Tick timer for loading animation
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(LOADING_ANIM_TICK_MS), || {
            Action::Tick
        });

    // Preselection from the command line goes through the reducer like any pick
    if let Some(name) = config.initial_state {
        runtime.enqueue(Action::SelectionState(Some(name)));
    }
    if let Some(name) = config.initial_district {
        runtime.enqueue(Action::SelectionDistrict(Some(name)));
    }

    let client = WeatherClient::new(config.base_url, config.api_key);
    let ui = RefCell::new(WeatherUi::new());

    let result = runtime
        .run(
            terminal,
            |frame, area, state, render_ctx| {
                ui.borrow_mut().render(frame, area, state, render_ctx);
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await;

    tracing::info!("weather card closed");
    result
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather {
            district,
            request_id,
        } => {
            let client = client.clone();
            ctx.tasks().spawn(WEATHER_TASK, async move {
                match client.fetch(&district).await {
                    Ok(reading) => Action::WeatherDidLoad {
                        request_id,
                        reading,
                    },
                    Err(error) => Action::WeatherDidError { request_id, error },
                }
            });
        }
    }
}
