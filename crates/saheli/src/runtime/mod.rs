//! Terminal lifecycle and the draw/poll event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::app::App;
use crate::ui;

pub(crate) mod mode;

const TICK_RATE: Duration = Duration::from_millis(100);

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Outcome of handling one key event.
#[derive(Debug, Eq, PartialEq)]
pub enum EventResult {
    Continue,
    Quit,
}

/// Runs the UI until the user quits.
///
/// Must be called from within a tokio runtime context; agent calls are
/// spawned onto it.
///
/// # Errors
/// Returns an error when the terminal cannot be set up, drawn, polled or
/// restored.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let loop_result = run_loop(&mut terminal, app);
    let restore_result = restore_terminal(&mut terminal);

    loop_result.and(restore_result)
}

fn setup_terminal() -> io::Result<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);

    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut AppTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run_loop(terminal: &mut AppTerminal, app: &mut App) -> io::Result<()> {
    info!(session_id = app.session_id(), "ui started");
    app.load_reminder();

    loop {
        app.process_pending_app_events();
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()?
            && handle_key(app, key) == EventResult::Quit
        {
            info!("ui quit");

            return Ok(());
        }
    }
}

/// Routes one key event to the overlay or the active screen's handler.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Continue;
    }
    if mode::is_quit_chord(key) {
        return EventResult::Quit;
    }
    if !app.notifications().is_empty() {
        return mode::notification::handle(app, key);
    }

    mode::handle_screen(app, key)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;
    use crate::app::notification::NotificationKind;
    use crate::domain::agent::AgentDirectory;
    use crate::domain::screen::Screen;
    use crate::infra::agent::{AgentClient, AgentSessionId};
    use crate::infra::transport::MockAgentTransport;

    fn new_test_app() -> App {
        App::new(AgentClient::new(
            Arc::new(MockAgentTransport::new()),
            AgentDirectory::default(),
            AgentSessionId::from("session_test"),
        ))
    }

    #[tokio::test]
    async fn test_handle_key_ctrl_c_quits_from_any_screen() {
        // Arrange
        let mut app = new_test_app();
        app.navigate(Screen::Settings);

        // Act
        let event_result = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );

        // Assert
        assert_eq!(event_result, EventResult::Quit);
    }

    #[tokio::test]
    async fn test_handle_key_ignores_release_events() {
        // Arrange
        let mut app = new_test_app();
        let key = KeyEvent {
            code: KeyCode::Char('h'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        // Act
        let event_result = handle_key(&mut app, key);

        // Assert
        assert_eq!(event_result, EventResult::Continue);
        assert_eq!(app.screen(), Screen::Home);
    }

    #[tokio::test]
    async fn test_handle_key_notification_blocks_screen_keys() {
        // Arrange
        let mut app = new_test_app();
        app.notifications_mut()
            .push(NotificationKind::Info, "Voice input will be available soon!");

        // Act
        let blocked = handle_key(&mut app, KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
        let screen_while_blocked = app.screen();
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));

        // Assert
        assert_eq!(blocked, EventResult::Continue);
        assert_eq!(screen_while_blocked, Screen::Home);
        assert!(app.notifications().is_empty());
        assert_eq!(app.screen(), Screen::History);
    }
}
