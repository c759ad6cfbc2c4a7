//! Main TUI application state and logic

use crate::algorithms::{self, pseudocode, Algorithm, AlgorithmKind, RunConfig};
use crate::bst::session::BstSession;
use crate::bst::{local, BstOperation, BstService};
use crate::config::{Config, DEMO_TREE};
use crate::errors::BstError;
use crate::input;
use crate::player::{Player, PlayerState, Toggle};
use crate::visual::{bar_states, BarMode, VisualState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait between redraws while idle
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Space presses closer together than this are key repeat
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Which text prompt, if any, owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Array,
    Target,
    TreeValue(BstOperation),
}

impl InputMode {
    fn label(self) -> &'static str {
        match self {
            InputMode::Normal => "",
            InputMode::Array => "Array (comma-separated)",
            InputMode::Target => "Search target",
            InputMode::TreeValue(BstOperation::Insert) => "Insert value",
            InputMode::TreeValue(BstOperation::Search) => "Search value",
            InputMode::TreeValue(BstOperation::Delete) => "Delete value",
        }
    }
}

/// The main application state
pub struct App {
    pub algorithm: Algorithm,
    pub array: Vec<u32>,
    pub target: u32,

    /// Playback of the last array run
    pub player: Player,

    /// Algorithm that produced the loaded steps
    pub loaded: Option<Algorithm>,

    pub bst: BstSession,
    service: Box<dyn BstService>,

    pub input_mode: InputMode,
    pub input_buffer: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(config: &Config, service: Box<dyn BstService>) -> Self {
        App {
            algorithm: config.algorithm,
            array: config.array.clone(),
            target: config.target,
            player: Player::new(config.speed),
            loaded: None,
            bst: BstSession::with_tree(local::build_tree(&DEMO_TREE)),
            service,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            should_quit: false,
            status_message: String::from("Ready! Press r to run."),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    pub fn is_tree_view(&self) -> bool {
        self.algorithm.kind() == AlgorithmKind::Tree
    }

    /// Whether the player of the active view is auto-playing
    fn is_playing(&self) -> bool {
        if self.is_tree_view() {
            self.bst.player().is_playing()
        } else {
            self.player.is_playing()
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        tracing::info!(algorithm = self.algorithm.id(), "tui started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            self.tick(now);

            // Wake for the next playback tick or to redraw, whichever is first
            let timeout = [self.player.deadline(), self.bst.player().deadline()]
                .into_iter()
                .flatten()
                .map(|d| d.saturating_duration_since(now))
                .fold(POLL_INTERVAL, Duration::min);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        tracing::info!("tui stopped");
        Ok(())
    }

    /// Advance whichever player has a due tick
    pub fn tick(&mut self, now: Instant) {
        if self.player.poll(now) && self.player.state() == PlayerState::Complete {
            self.set_status("Playback complete");
        }
        self.bst.poll(now);
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(columns[0]);

        let title = self.algorithm.label();

        if self.is_tree_view() {
            let step = self.bst.current_step();
            super::panes::render_tree_pane(
                frame,
                left_rows[0],
                title,
                self.bst.display_tree(),
                step,
                true,
            );
            super::panes::render_pseudocode_pane(
                frame,
                columns[1],
                self.tree_pseudocode(),
                step.and_then(|s| s.code_line),
                false,
            );
            let action = step.map_or("Waiting for an operation", |s| s.action.as_str());
            let mut details = vec![(
                "nodes",
                self.bst.display_tree().map_or(0, |t| t.len()).to_string(),
            )];
            if let Some(step) = step {
                let path: Vec<String> = step.path.iter().map(|v| v.to_string()).collect();
                details.push(("path", path.join(" → ")));
            }
            details.push((
                "speed",
                format!("{} ms", self.bst.player().interval().as_millis()),
            ));
            super::panes::render_info_pane(frame, left_rows[1], "Tree", action, &details, false);
        } else {
            let (values, states) = self.bar_view();
            super::panes::render_bars_pane(frame, left_rows[0], title, &values, &states, true);
            super::panes::render_pseudocode_pane(
                frame,
                columns[1],
                self.algorithm.pseudocode(),
                None,
                false,
            );
            let (action, details) = match self.loaded_step() {
                Some(step) => (step.action.as_str(), super::panes::step_details(step)),
                None => (
                    "Press r to generate steps",
                    vec![
                        ("length", self.array.len().to_string()),
                        ("target", self.target.to_string()),
                    ],
                ),
            };
            let mut details = details;
            details.push(("speed", format!("{} ms", self.player.interval().as_millis())));
            super::panes::render_info_pane(frame, left_rows[1], "Step", action, &details, false);
        }

        let (position, state, message, is_error) = if self.is_tree_view() {
            let player = self.bst.player();
            (
                (!player.is_empty()).then(|| (player.index(), player.len())),
                player.state(),
                self.bst.message(),
                self.bst.message().starts_with("Error"),
            )
        } else {
            (
                (!self.player.is_empty()).then(|| (self.player.index(), self.player.len())),
                self.player.state(),
                self.status_message.as_str(),
                self.status_is_error,
            )
        };

        let prompt = match self.input_mode {
            InputMode::Normal => None,
            mode => Some((mode.label(), self.input_buffer.as_str())),
        };

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message,
                position,
                state,
                prompt,
                is_error,
                tree_view: self.is_tree_view(),
            },
        );
    }

    fn tree_pseudocode(&self) -> &'static [&'static str] {
        match self.bst.operation() {
            Some(operation) => pseudocode::for_bst_operation(operation),
            None => self.algorithm.pseudocode(),
        }
    }

    /// Current step of the array player, if it belongs to the selected algorithm
    fn loaded_step(&self) -> Option<&crate::step::Step> {
        if self.loaded != Some(self.algorithm) {
            return None;
        }
        self.player.current()
    }

    /// Values and states for the bars pane
    pub fn bar_view(&self) -> (Vec<u32>, Vec<VisualState>) {
        let mode = BarMode::for_algorithm(self.algorithm).unwrap_or(BarMode::Sort);
        match self.loaded_step() {
            Some(step) => {
                let complete = self.player.state() == PlayerState::Complete;
                (step.array.clone(), bar_states(step, mode, complete))
            }
            None => (
                self.array.clone(),
                vec![VisualState::Idle; self.array.len()],
            ),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Generate steps for the selected array algorithm and start playback
    pub fn run_algorithm(&mut self, now: Instant) {
        let config = RunConfig::new(self.algorithm, self.array.clone(), self.target);
        match algorithms::run(&config) {
            Ok(steps) => {
                let count = steps.len();
                self.player.load(steps, now);
                self.loaded = Some(self.algorithm);
                let note = if self.algorithm == Algorithm::BinarySearch {
                    " on the sorted array"
                } else {
                    ""
                };
                self.set_status(format!(
                    "Running {}{} ({} steps)",
                    self.algorithm.label(),
                    note,
                    count
                ));
            }
            Err(e) => {
                tracing::error!(algorithm = self.algorithm.id(), error = %e, "run failed");
                self.set_error(format!("Error: {}", e));
            }
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.player.reset();
        self.loaded = None;
        self.set_status(format!("Selected {}", algorithm.label()));
        tracing::debug!(algorithm = algorithm.id(), "algorithm selected");
    }

    fn open_prompt(&mut self, mode: InputMode) {
        self.player.pause();
        self.input_mode = mode;
        self.input_buffer = match mode {
            InputMode::Array => self
                .array
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(","),
            InputMode::Target => self.target.to_string(),
            InputMode::TreeValue(_) | InputMode::Normal => String::new(),
        };
    }

    fn submit_prompt(&mut self, now: Instant) {
        let mode = std::mem::replace(&mut self.input_mode, InputMode::Normal);
        let text = std::mem::take(&mut self.input_buffer);

        match mode {
            InputMode::Normal => {}
            InputMode::Array => match input::parse_custom_array(&text) {
                Ok(array) => {
                    self.array = array;
                    self.player.reset();
                    self.loaded = None;
                    self.set_status(format!("Array set ({} values)", self.array.len()));
                }
                Err(e) => self.set_error(format!("Error: {}", e)),
            },
            InputMode::Target => match input::parse_target(&text) {
                Ok(target) => {
                    self.target = target;
                    if self.algorithm.kind() == AlgorithmKind::Search {
                        self.player.reset();
                        self.loaded = None;
                    }
                    self.set_status(format!("Target set to {}", target));
                }
                Err(e) => self.set_error(format!("Error: {}", e)),
            },
            InputMode::TreeValue(operation) => {
                if !self.is_tree_view() {
                    self.algorithm = match operation {
                        BstOperation::Search => Algorithm::BstSearch,
                        BstOperation::Insert | BstOperation::Delete => Algorithm::BstInsert,
                    };
                }
                match input::parse_integer(&text) {
                    Ok(value) => {
                        if let Err(e) =
                            self.bst
                                .operate(operation, value, self.service.as_mut(), now)
                        {
                            tracing::debug!(%operation, error = %e, "tree operation failed");
                        }
                    }
                    Err(e) => {
                        tracing::warn!(%operation, error = %e, "tree value rejected");
                        self.bst.report_error(&BstError::InvalidValue(e));
                    }
                }
            }
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter => self.submit_prompt(now),
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ',' | ' ' | '-') => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.input_mode != InputMode::Normal {
            self.handle_prompt_key(key, now);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.select_algorithm(self.algorithm.next()),
            KeyCode::BackTab => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Char('e') => self.open_prompt(InputMode::Array),
            KeyCode::Char('t') => self.open_prompt(InputMode::Target),
            KeyCode::Char('i') => self.open_prompt(InputMode::TreeValue(BstOperation::Insert)),
            KeyCode::Char('s') => self.open_prompt(InputMode::TreeValue(BstOperation::Search)),
            KeyCode::Char('d') => self.open_prompt(InputMode::TreeValue(BstOperation::Delete)),
            KeyCode::Char('c') => self.bst.clear_tree(),
            KeyCode::Char('r') => {
                if self.is_tree_view() {
                    let operation = match self.algorithm {
                        Algorithm::BstSearch => BstOperation::Search,
                        _ => BstOperation::Insert,
                    };
                    self.open_prompt(InputMode::TreeValue(operation));
                } else {
                    self.run_algorithm(now);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(true, now),
            KeyCode::Char('-') | KeyCode::Char('_') => self.change_speed(false, now),
            KeyCode::Left => {
                let moved = if self.is_tree_view() {
                    self.bst.step_backward()
                } else {
                    self.player.step_backward()
                };
                if moved {
                    self.set_status("Stepped backward");
                } else if self.is_playing() {
                    self.set_status("Pause before stepping");
                } else {
                    self.set_status("Already at the first step");
                }
            }
            KeyCode::Right => {
                let moved = if self.is_tree_view() {
                    self.bst.step_forward()
                } else {
                    self.player.step_forward()
                };
                if moved {
                    self.set_status("Stepped forward");
                } else if self.is_playing() {
                    self.set_status("Pause before stepping");
                } else {
                    self.set_status("No further steps");
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if now.saturating_duration_since(self.last_space_press) >= SPACE_DEBOUNCE {
                    self.last_space_press = now;
                    self.toggle_playback(now);
                }
            }
            KeyCode::Enter => {
                let moved = if self.is_tree_view() {
                    self.bst.seek_end()
                } else {
                    self.player.seek_end()
                };
                if moved {
                    self.set_status("Jumped to end");
                }
            }
            KeyCode::Backspace => {
                let moved = if self.is_tree_view() {
                    self.bst.seek_start()
                } else {
                    self.player.seek_start()
                };
                if moved {
                    self.set_status("Jumped to start");
                }
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.player.reset();
                self.loaded = None;
                self.set_status("Visualization reset");
            }
            _ => {}
        }
    }

    fn toggle_playback(&mut self, now: Instant) {
        let outcome = if self.is_tree_view() {
            self.bst.toggle(now)
        } else {
            self.player.toggle(now)
        };

        match outcome {
            Toggle::NeedsRun if self.is_tree_view() => {
                self.open_prompt(InputMode::TreeValue(BstOperation::Insert))
            }
            Toggle::NeedsRun => self.run_algorithm(now),
            Toggle::Playing => self.set_status("Playing..."),
            Toggle::Paused => self.set_status("Paused"),
            Toggle::Complete => self.set_status("Playback complete"),
        }
    }

    /// `+` halves the interval, `-` doubles it, for the active view's player
    fn change_speed(&mut self, faster: bool, now: Instant) {
        let scale = |current: Duration| if faster { current / 2 } else { current * 2 };
        let interval = if self.is_tree_view() {
            let next = scale(self.bst.player().interval());
            self.bst.set_interval(next, now);
            self.bst.player().interval()
        } else {
            let next = scale(self.player.interval());
            self.player.set_interval(next, now);
            self.player.interval()
        };
        self.set_status(format!("Speed: {} ms per step", interval.as_millis()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::local::LocalBstService;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let config = Config {
            array: vec![5, 3, 1, 4, 2],
            ..Config::default()
        };
        App::new(&config, Box::new(LocalBstService::new()))
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn test_space_with_nothing_loaded_runs() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char(' '), now);
        assert_eq!(app.loaded, Some(Algorithm::BubbleSort));
        assert_eq!(app.player.state(), PlayerState::Playing);
    }

    #[test]
    fn test_space_is_debounced() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char(' '), now);
        press(&mut app, KeyCode::Char(' '), now + Duration::from_millis(50));
        assert_eq!(app.player.state(), PlayerState::Playing);
        press(&mut app, KeyCode::Char(' '), now + SPACE_DEBOUNCE);
        assert_eq!(app.player.state(), PlayerState::Paused);
    }

    #[test]
    fn test_bad_array_keeps_previous() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('e'), now);
        app.input_buffer.clear();
        type_text(&mut app, "-3,-4", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.array, vec![5, 3, 1, 4, 2]);
        assert!(app.status_is_error);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_array_prompt_replaces_input() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('e'), now);
        app.input_buffer.clear();
        type_text(&mut app, "9, 8, 7", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.array, vec![9, 8, 7]);
        assert!(!app.status_is_error);
    }

    #[test]
    fn test_tab_cycles_and_resets() {
        let mut app = app();
        let now = Instant::now();
        app.run_algorithm(now);
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.algorithm, Algorithm::SelectionSort);
        assert_eq!(app.player.state(), PlayerState::Empty);
        press(&mut app, KeyCode::BackTab, now);
        assert_eq!(app.algorithm, Algorithm::BubbleSort);
    }

    #[test]
    fn test_tree_insert_prompt() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('i'), now);
        type_text(&mut app, "42", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.is_tree_view());
        assert_eq!(app.bst.operation(), Some(BstOperation::Insert));
        assert!(!app.bst.player().is_empty());
    }

    #[test]
    fn test_tree_value_out_of_range() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('d'), now);
        type_text(&mut app, "5000", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.bst.message().starts_with("Error"));
        assert_eq!(app.bst.tree().map(|t| t.len()), Some(DEMO_TREE.len()));
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut app = app();
        let now = Instant::now();
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('-'), now);
        }
        assert_eq!(app.player.interval(), Duration::from_millis(2000));
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('+'), now);
        }
        assert_eq!(app.player.interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_speed_keys_follow_tree_view() {
        let mut app = app();
        let now = Instant::now();
        app.select_algorithm(Algorithm::BstInsert);
        press(&mut app, KeyCode::Char('+'), now);
        assert_eq!(app.bst.player().interval(), Duration::from_millis(250));
        assert_eq!(app.player.interval(), Config::default().speed);
        assert_eq!(app.status_message, "Speed: 250 ms per step");
    }

    #[test]
    fn test_step_back_while_playing_is_refused() {
        let mut app = app();
        let now = Instant::now();
        app.run_algorithm(now);
        app.tick(now + app.player.interval());
        assert_eq!(app.player.index(), 1);

        press(&mut app, KeyCode::Left, now);
        assert_eq!(app.player.index(), 1);
        assert_eq!(app.player.state(), PlayerState::Playing);
        assert_eq!(app.status_message, "Pause before stepping");
    }

    #[test]
    fn test_renders_both_views() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        app.run_algorithm(Instant::now());
        terminal.draw(|f| app.render(f)).unwrap();

        press(&mut app, KeyCode::Char('c'), Instant::now());
        app.select_algorithm(Algorithm::BstInsert);
        terminal.draw(|f| app.render(f)).unwrap();
    }
}
