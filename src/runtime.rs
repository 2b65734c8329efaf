//! Terminal host loop
//!
//! Owns the terminal while a question is asked: draws the question's view,
//! turns crossterm events and ticks into messages, and stops when the
//! question asks to quit.

use crate::components::nav_bar::NavBar;
use crate::error::{terminal_error, QuestionError};
use crate::question::{Cmd, KeyKind, Msg, Question};
use crossterm::event::{Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

/// Default interval between tick messages
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Host loop settings
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Interval between tick messages when no input arrives
    pub tick_rate: Duration,
    /// Title drawn on the question's border
    pub title: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            title: "Launch confirmation".to_string(),
        }
    }
}

/// Raw mode and alternate screen, restored when dropped
struct TerminalGuard<W: Write> {
    out: W,
    restore_raw_mode: fn() -> std::io::Result<()>,
    alternate_screen: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self, QuestionError> {
        Self::enter_with(out, enable_raw_mode, disable_raw_mode)
    }

    fn enter_with(
        out: W,
        raw_mode: fn() -> std::io::Result<()>,
        restore_raw_mode: fn() -> std::io::Result<()>,
    ) -> Result<Self, QuestionError> {
        raw_mode().map_err(|e| terminal_error(format!("Failed to enable raw mode: {}", e)))?;

        // From here on a failure drops the guard, which leaves raw mode
        let mut guard = Self {
            out,
            restore_raw_mode,
            alternate_screen: false,
        };
        crossterm::execute!(guard.out, crossterm::terminal::EnterAlternateScreen)
            .map_err(|e| terminal_error(format!("Failed to enter alternate screen: {}", e)))?;
        guard.alternate_screen = true;

        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore_raw_mode)() {
            log::warn!("Failed to disable raw mode: {}", e);
        }
        if self.alternate_screen {
            let _ = crossterm::execute!(self.out, crossterm::terminal::LeaveAlternateScreen);
        }
    }
}

/// Run a question on the real terminal and return its answer
pub fn run_question<Q: Question>(
    question: &mut Q,
    config: &RuntimeConfig,
) -> Result<String, QuestionError> {
    let _guard = TerminalGuard::enter(stdout())?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| terminal_error(format!("Failed to create terminal: {}", e)))?;
    drive(&mut terminal, question, config, poll_crossterm)
}

/// Width and height left for the question inside the border and above the nav bar
fn question_area(width: u16, height: u16) -> (u16, u16) {
    (
        width.saturating_sub(2),
        height.saturating_sub(2 + NavBar::height()),
    )
}

/// Wait up to `timeout` for the next terminal event
fn poll_crossterm(timeout: Duration) -> std::io::Result<Option<Event>> {
    if crossterm::event::poll(timeout)? {
        crossterm::event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Drive `question` on `terminal` until it quits.
///
/// `next_event` waits up to the given timeout and yields `None` when nothing
/// arrived. Read and draw failures are handed to the question as
/// [`Msg::Error`] so it decides how to end.
pub fn drive<B, Q, F>(
    terminal: &mut Terminal<B>,
    question: &mut Q,
    config: &RuntimeConfig,
    mut next_event: F,
) -> Result<String, QuestionError>
where
    B: Backend,
    Q: Question,
    F: FnMut(Duration) -> std::io::Result<Option<Event>>,
{
    let nav_bar = NavBar::for_confirmation();
    let size = terminal.size()?;
    let (width, height) = question_area(size.width, size.height);
    question.set_viewport(width, height);

    let mut quit = question.init() == Some(Cmd::Quit);
    let mut last_tick = Instant::now();

    while !quit {
        let view = question.view();
        if let Err(e) = terminal.draw(|f| render(f, &config.title, &view, &nav_bar)) {
            let msg = Msg::Error(terminal_error(format!("Failed to draw question: {}", e)));
            quit = question.update(msg) == Cmd::Quit;
            continue;
        }

        let timeout = config.tick_rate.saturating_sub(last_tick.elapsed());
        let msg = match next_event(timeout) {
            Ok(Some(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                let kind = KeyKind::from(key_event);
                log::debug!("Key pressed: {}", kind);
                Some(Msg::Key(kind))
            }
            Ok(Some(Event::Resize(width, height))) => {
                let (width, height) = question_area(width, height);
                question.set_viewport(width, height);
                Some(Msg::Resize { width, height })
            }
            Ok(_) => None,
            Err(e) => Some(Msg::Error(e.into())),
        };

        let msg = match msg {
            Some(msg) => Some(msg),
            None if last_tick.elapsed() >= config.tick_rate => {
                last_tick = Instant::now();
                Some(Msg::Tick)
            }
            None => None,
        };

        if let Some(msg) = msg {
            quit = question.update(msg) == Cmd::Quit;
        }
    }

    match question.take_error() {
        Some(err) => Err(err),
        None => Ok(question.choice().to_string()),
    }
}

fn render(f: &mut Frame, title: &str, view: &str, nav_bar: &NavBar) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(NavBar::height())])
        .split(f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan));
    let question = Paragraph::new(view.to_string()).block(block);

    f.render_widget(question, chunks[0]);
    nav_bar.render(f, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Confirmation, QuestionInput};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    fn question() -> Confirmation {
        Confirmation::new(&QuestionInput {
            rows: vec![vec!["Region".into(), "us-east-2".into()]],
            indexed_options: vec!["region".into()],
            ..QuestionInput::default()
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Replays `events`, then reports a read failure so the loop always ends
    fn scripted(events: Vec<Event>) -> impl FnMut(Duration) -> std::io::Result<Option<Event>> {
        let mut events: VecDeque<Event> = events.into();
        move |_| match events.pop_front() {
            Some(event) => Ok(Some(event)),
            None => Err(std::io::Error::other("script exhausted")),
        }
    }

    fn config() -> RuntimeConfig {
        RuntimeConfig {
            tick_rate: Duration::from_secs(60),
            ..RuntimeConfig::default()
        }
    }

    #[test]
    fn test_enter_returns_default_answer() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut confirmation = question();
        let answer = drive(
            &mut terminal,
            &mut confirmation,
            &config(),
            scripted(vec![key(KeyCode::Enter)]),
        );
        assert_eq!(answer.unwrap(), "No");
    }

    #[test]
    fn test_resize_and_navigation_reach_question() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut confirmation = question();
        let answer = drive(
            &mut terminal,
            &mut confirmation,
            &config(),
            scripted(vec![
                Event::Resize(100, 20),
                key(KeyCode::Up),
                key(KeyCode::Enter),
            ]),
        );
        assert_eq!(answer.unwrap(), "Yes");
    }

    #[test]
    fn test_ctrl_c_returns_cancelled() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut confirmation = question();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let err = drive(&mut terminal, &mut confirmation, &config(), scripted(vec![ctrl_c]))
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_read_failure_ends_question_with_error() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut confirmation = question();
        let err = drive(&mut terminal, &mut confirmation, &config(), scripted(vec![]))
            .unwrap_err();
        assert!(matches!(err, QuestionError::Io(_)));
    }

    fn long_question(rows: usize) -> Confirmation {
        Confirmation::new(&QuestionInput {
            rows: (0..rows)
                .map(|i| vec![format!("Setting {}", i), format!("value-{}", i)])
                .collect(),
            indexed_options: (0..rows).map(|i| format!("edit-{}", i)).collect(),
            ..QuestionInput::default()
        })
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_long_summary_leaves_answers_on_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut confirmation = long_question(20);
        drive(
            &mut terminal,
            &mut confirmation,
            &config(),
            scripted(vec![key(KeyCode::Enter)]),
        )
        .unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("> No"));
        assert!(screen.contains("Yes"));
        assert!(screen.contains("(page 1/2)"));
    }

    #[test]
    fn test_resize_keeps_answers_on_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut confirmation = long_question(20);
        let answer = drive(
            &mut terminal,
            &mut confirmation,
            &config(),
            scripted(vec![Event::Resize(80, 24), key(KeyCode::Enter)]),
        );
        assert_eq!(answer.unwrap(), "No");

        let screen = screen_text(&terminal);
        assert!(screen.contains("> No"));
        assert!(screen.contains("Yes"));
        assert_eq!(confirmation.view().lines().count(), 21);
    }

    #[test]
    fn test_guard_leaves_raw_mode_when_alternate_screen_fails() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("broken pipe"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Err(std::io::Error::other("broken pipe"))
            }
        }

        thread_local! {
            static RAW_MODE: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
        }
        fn raw_on() -> std::io::Result<()> {
            RAW_MODE.with(|raw| raw.set(true));
            Ok(())
        }
        fn raw_off() -> std::io::Result<()> {
            RAW_MODE.with(|raw| raw.set(false));
            Ok(())
        }

        let result = TerminalGuard::enter_with(BrokenPipe, raw_on, raw_off);
        assert!(result.is_err());
        assert!(!RAW_MODE.with(|raw| raw.get()));
    }

    #[test]
    fn test_guard_restores_terminal_on_drop() {
        thread_local! {
            static RAW_MODE: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
        }
        fn raw_on() -> std::io::Result<()> {
            RAW_MODE.with(|raw| raw.set(true));
            Ok(())
        }
        fn raw_off() -> std::io::Result<()> {
            RAW_MODE.with(|raw| raw.set(false));
            Ok(())
        }

        let mut out: Vec<u8> = Vec::new();
        {
            let guard = TerminalGuard::enter_with(&mut out, raw_on, raw_off);
            assert!(guard.is_ok());
            assert!(RAW_MODE.with(|raw| raw.get()));
        }
        assert!(!RAW_MODE.with(|raw| raw.get()));

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049h"));
        assert!(written.ends_with("\x1b[?1049l"));
    }

    #[test]
    fn test_view_is_drawn() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut confirmation = question();
        drive(
            &mut terminal,
            &mut confirmation,
            &config(),
            scripted(vec![key(KeyCode::Enter)]),
        )
        .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Launch confirmation"));
        assert!(screen.contains("Region"));
        assert!(screen.contains("> No"));
        assert!(screen.contains("[Enter] Select"));
    }
}
