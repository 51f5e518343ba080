//! Weather Search TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_search::action::Action;
use weather_search::api;
use weather_search::components::{Component, WeatherSearch, WeatherSearchProps};
use weather_search::effect::Effect;
use weather_search::reducer::reducer;
use weather_search::state::AppState;

/// Weather Search TUI - look up current conditions for a city
#[derive(Parser, Debug)]
#[command(name = "weather-search")]
#[command(about = "Search for a city and display its current weather")]
struct Args {
    /// OpenWeather API key (falls back to OPENWEATHER_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum AppComponentId {
    Root,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum AppContext {
    Main,
}

impl EventRoutingState<AppComponentId, AppContext> for AppState {
    fn focused(&self) -> Option<AppComponentId> {
        Some(AppComponentId::Root)
    }

    fn modal(&self) -> Option<AppComponentId> {
        None
    }

    fn binding_context(&self, _id: AppComponentId) -> AppContext {
        AppContext::Main
    }

    fn default_context(&self) -> AppContext {
        AppContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        debug: debug_args,
    } = Args::parse();

    let Some(api_key) = api_key.or_else(|| std::env::var("OPENWEATHER_API_KEY").ok()) else {
        eprintln!("Error: no OpenWeather API key provided.");
        eprintln!("Pass --api-key or set OPENWEATHER_API_KEY.");
        std::process::exit(1);
    };

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, api_key, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    if use_alt_screen {
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct AppUi {
    root: WeatherSearch,
}

impl AppUi {
    fn new() -> Self {
        Self {
            root: WeatherSearch::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<AppComponentId>,
    ) {
        event_ctx.set_component_area(AppComponentId::Root, area);

        let props = WeatherSearchProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.root.render(frame, area, props);
    }

    fn handle_root_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherSearchProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.root.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    api_key: String,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(AppUi::new()));
    let mut bus: EventBus<AppState, Action, AppComponentId, AppContext> = EventBus::new();
    let keybindings: Keybindings<AppContext> = Keybindings::new();

    let ui_root = Rc::clone(&ui);
    bus.register(AppComponentId::Root, move |event, state| {
        ui_root.borrow_mut().handle_root_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            None::<Action>,
            Some(Action::Quit),
            |_runtime| {
                // No subscriptions: re-render is driven entirely by actions
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx: &mut EffectContext<Action>| {
                handle_effect(effect, ctx, &api_key);
            },
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, api_key: &str) {
    match effect {
        Effect::FetchWeather { city } => {
            let api_key = api_key.to_string();
            ctx.tasks().spawn("weather_fetch", async move {
                match api::fetch_current_weather(&city, &api_key).await {
                    Ok(data) => Action::WeatherDidLoad(data),
                    Err(_) => Action::WeatherDidError(city),
                }
            });
        }
    }
}
