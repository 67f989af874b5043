use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::handlers::DEFAULT_FILE;
use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::{config_io, snapshot_io};
use crate::model::config::Config;
use crate::model::list::{Selection, TodoList};
use crate::ops::list_ops;

use super::{input, render};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new item into the input row
    Insert,
    /// Quit requested with unsaved changes
    ConfirmQuit,
}

/// Main application state
pub struct App {
    pub path: PathBuf,
    pub config: Config,
    pub list: TodoList,
    /// Cursor into the list (the current selection)
    pub cursor: Selection,
    /// First visible row of the list view
    pub scroll_offset: usize,
    pub mode: Mode,
    /// Input buffer for insert mode
    pub input: String,
    /// Transient message for the status row
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(path: PathBuf, config: Config, list: TodoList, warning: Option<String>) -> Self {
        let cursor = if list.is_empty() { None } else { Some(0) };
        App {
            path,
            config,
            list,
            cursor,
            scroll_offset: 0,
            mode: Mode::Navigate,
            input: String::new(),
            status: warning,
            should_quit: false,
        }
    }

    /// Keep the cursor valid against the current list length. Called every
    /// render so a stale cursor can never point past the end.
    pub fn clamp_cursor(&mut self) {
        self.cursor = match self.cursor {
            _ if self.list.is_empty() => None,
            Some(i) => Some(i.min(self.list.len() - 1)),
            None => None,
        };
    }

    pub fn select_next(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.cursor = match self.cursor {
            None => Some(0),
            Some(i) => Some((i + 1).min(self.list.len() - 1)),
        };
    }

    pub fn select_prev(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.cursor = match self.cursor {
            None => Some(0),
            Some(i) => Some(i.saturating_sub(1)),
        };
    }

    /// Save the list. A failed save keeps the in-memory list as it is, logs
    /// the failure, and reports it in the status row; the session continues.
    pub fn save(&mut self) -> bool {
        match snapshot_io::save_list(&self.path, &self.list) {
            Ok(()) => {
                self.list.mark_clean();
                self.status = Some(format!("saved {}", self.path.display()));
                true
            }
            Err(e) => {
                log_recovery(
                    &self.path,
                    RecoveryEntry::new(
                        RecoveryCategory::WriteFailed,
                        e.to_string(),
                        crate::parse::serialize_snapshot(&self.list),
                    ),
                );
                self.status = Some(format!("save failed: {e}"));
                false
            }
        }
    }

    /// Quit, asking about unsaved changes first when configured to.
    pub fn request_quit(&mut self) {
        if self.list.is_dirty() && self.config.confirm_exit {
            self.mode = Mode::ConfirmQuit;
        } else {
            self.should_quit = true;
        }
    }

    pub fn apply(&mut self, op: fn(&mut TodoList, Selection) -> Selection) {
        self.cursor = op(&mut self.list, self.cursor);
    }

    pub fn commit_input(&mut self) {
        let before = self.list.len();
        let sel = list_ops::insert_front(&mut self.list, self.cursor, &self.input);
        if self.list.len() > before {
            self.cursor = sel;
            self.input.clear();
            self.mode = Mode::Navigate;
        } else {
            // Engine rejected blank input; leave the buffer for editing
            self.status = Some("blank item not added".to_string());
        }
    }
}

pub fn run(file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = match config_io::read_config(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {e}; using defaults");
            Config::default()
        }
    };
    let path = match file {
        Some(f) => PathBuf::from(f),
        None => PathBuf::from(config.file.as_deref().unwrap_or(DEFAULT_FILE)),
    };
    let (list, warning) = snapshot_io::load_or_recover(&path)?;
    let mut app = App::new(path, config, list, warning);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
