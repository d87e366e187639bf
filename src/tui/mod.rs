mod dashboard;
pub mod input;
pub mod keybindings;
mod message;
pub mod search;
mod ui;

use crate::config::Config;
use crate::data::{Dataset, PlantId};
use crate::map::TerminalMap;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub use dashboard::{Dashboard, MapView, ModalState, Pane};
pub use message::Message;

/// Run the dashboard until the user quits.
///
/// `initial_plant` pre-selects a plant as if its marker had been clicked.
pub fn run(config: Config, dataset: Dataset, initial_plant: Option<PlantId>) -> Result<()> {
    // Check if stdout is a terminal
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("plantmap requires an interactive terminal");
    }

    let map = TerminalMap::new(config.map.detail);
    let mut dashboard = Dashboard::new(config, dataset, map);
    if let Some(plant_id) = initial_plant {
        if dashboard.dataset().plant(plant_id).is_some() {
            dashboard.update(Message::PlantMarkerActivated(plant_id));
        } else {
            tracing::warn!(plant = %plant_id, "Unknown plant requested on command line");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut dashboard);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dashboard: &mut Dashboard<TerminalMap>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut input_state = input::InputState::new();

    loop {
        terminal.draw(|f| ui::draw(f, dashboard))?;

        if event::poll(tick_rate)? {
            let msg = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    keybindings::dispatch(dashboard, &mut input_state, key)
                }
                Event::Mouse(mouse) => mouse_message(dashboard, mouse),
                _ => Message::None,
            };
            if dashboard.update(msg) {
                return Ok(()); // Quit requested
            }
        }

        // Handle pending chord timeout (non-blocking)
        if input_state.has_timed_out() {
            input_state.clear();
        }
    }
}

/// Left click on a marker clicks it; the wheel moves the project selection.
fn mouse_message(dashboard: &Dashboard<TerminalMap>, mouse: MouseEvent) -> Message {
    if !dashboard.modal.is_none() {
        return Message::None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if dashboard.map_ready() => dashboard
            .map()
            .marker_at(mouse.column, mouse.row)
            .map(Message::MarkerClicked)
            .unwrap_or(Message::None),
        MouseEventKind::ScrollDown => Message::MoveDown,
        MouseEventKind::ScrollUp => Message::MoveUp,
        _ => Message::None,
    }
}
