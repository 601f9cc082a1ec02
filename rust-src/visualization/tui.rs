//! Interactive section browser.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::config::{APP_SUBTITLE, APP_TITLE, PAGE_ICON};
use crate::pages::SECTIONS;

use super::terminal::render_page;
use super::theme::Theme;


const SIDEBAR_WIDTH: u16 = 42;
const PAGE_STEP: u16 = 10;


/// Browser state: selected section and body scroll offset.
pub struct App {
    titles: Vec<&'static str>,
    bodies: Vec<String>,
    list: ListState,
    scroll: u16,
}


impl App {
    pub fn new() -> Self {
        let theme = Theme::plain();
        let bodies = SECTIONS
            .iter()
            .map(|s| render_page(&(s.render)(), &theme))
            .collect();

        let mut list = ListState::default();
        list.select(Some(0));

        Self {
            titles: SECTIONS.iter().map(|s| s.name).collect(),
            bodies,
            list,
            scroll: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.list.selected().unwrap_or(0)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn body_height(&self) -> u16 {
        let lines = self.bodies[self.selected()].lines().count();
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    fn select(&mut self, idx: usize) {
        self.list.select(Some(idx));
        self.scroll = 0;
        debug!(section = self.titles[idx], "selected section");
    }

    /// Apply a key press. Returns `false` when the browser should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let count = self.titles.len();
        let current = self.selected();

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Down | KeyCode::Char('j') => self.select((current + 1) % count),
            KeyCode::Up | KeyCode::Char('k') => self.select((current + count - 1) % count),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                let limit = self.body_height().saturating_sub(1);
                self.scroll = self.scroll.saturating_add(PAGE_STEP).min(limit);
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }

        true
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [sidebar, body] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(frame.area());

        let items: Vec<ListItem> = self
            .titles
            .iter()
            .map(|t| ListItem::new(Line::from(*t)))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {PAGE_ICON} {APP_TITLE} ")),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Rgb(255, 135, 0))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, sidebar, &mut self.list);

        let page = Paragraph::new(self.bodies[self.selected()].as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {APP_SUBTITLE} "))
                    .title_bottom(" ↑/↓ section  PgUp/PgDn scroll  q quit "),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll(), 0));
        frame.render_widget(page, body);
    }
}


impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}


/// Run the browser until the user quits, restoring the terminal afterwards.
pub fn run_browser() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to initialise terminal");
        }
    };

    let result = event_loop(&mut terminal, &mut App::new());

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}


fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut app = App::new();
        assert_eq!(app.selected(), 0);

        assert!(app.handle_key(KeyCode::Up));
        assert_eq!(app.selected(), SECTIONS.len() - 1);

        assert!(app.handle_key(KeyCode::Char('j')));
        assert_eq!(app.selected(), 0);

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char('k'));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_scroll_resets_on_selection() {
        let mut app = App::new();
        app.handle_key(KeyCode::PageDown);
        assert_eq!(app.scroll(), PAGE_STEP);

        app.handle_key(KeyCode::PageUp);
        app.handle_key(KeyCode::PageUp);
        assert_eq!(app.scroll(), 0);

        app.handle_key(KeyCode::PageDown);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Esc));
        assert!(app.handle_key(KeyCode::Char('x')));
    }
}
