use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fdx_core::FdxError;

use crate::tui_actions::handle_key;
use crate::tui_render::render_view;
use crate::tui_state::ViewUiState;
use crate::{map_tui_io, LoadedScreenplay};

const EVENT_POLL_MS: u64 = 200;

struct TuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiTerminal {
    fn new() -> Result<Self, FdxError> {
        enable_raw_mode().map_err(map_tui_io)?;
        io::stdout()
            .execute(EnterAlternateScreen)
            .map_err(map_tui_io)?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).map_err(map_tui_io)?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TuiTerminal {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}

pub(crate) fn run_view_mode(loaded: &LoadedScreenplay) -> Result<i32, FdxError> {
    if loaded.screenplay.is_empty() {
        return Err(FdxError::new(
            "EMPTY_DOCUMENT",
            format!(
                "{} parsed cleanly but contains no scenes to browse",
                loaded.path.display()
            ),
        ));
    }

    let mut terminal = TuiTerminal::new()?;
    let mut ui = ViewUiState {
        status: "ready".to_string(),
        ..ViewUiState::default()
    };

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| render_view(frame, &ui, loaded))
            .map_err(map_tui_io)?;

        if !event::poll(Duration::from_millis(EVENT_POLL_MS)).map_err(map_tui_io)? {
            continue;
        }
        if let Event::Key(key) = event::read().map_err(map_tui_io)? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(key, &loaded.screenplay.scenes, &mut ui) {
                return Ok(0);
            }
        }
    }
}
