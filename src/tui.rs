//! TUI (Terminal User Interface) for the candidate filter
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringGuess` → `MarkingFeedback` → `ConfirmingFeedback` → back to `EnteringGuess`
//! - `GameOver` once the answers pool is down to one word or empty; only
//!   new game, undo and quit are accepted there.
//!
//! The board is rebuilt from the session history after every solve, so an
//! undo on the session side is reflected here without extra bookkeeping.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::history::{History, HistoryStep};
use crate::report::SolveReport;
use crate::session::{GameInterface, PoolInfo, UserAction};
use crate::word::Word;
use crate::{WORD_LENGTH, debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Debug)]
enum LetterState {
    Empty,
    Entered,
    Hit,
    Present,
    Absent,
}

impl LetterState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Hit => (Color::Green, Color::Black),
            Self::Present => (Color::Yellow, Color::Black),
            Self::Absent => (Color::Gray, Color::White),
        }
    }

    fn to_feedback(self) -> Option<Feedback> {
        match self {
            Self::Hit => Some(Feedback::Hit),
            Self::Present => Some(Feedback::Present),
            Self::Absent => Some(Feedback::Absent),
            Self::Empty | Self::Entered => None,
        }
    }
}

impl From<Feedback> for LetterState {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Hit => Self::Hit,
            Feedback::Present => Self::Present,
            Feedback::Absent => Self::Absent,
        }
    }
}

#[derive(Debug, Clone)]
struct GuessRow {
    letters: [char; WORD_LENGTH],
    states: [LetterState; WORD_LENGTH],
}

impl GuessRow {
    fn from_word(word: &Word) -> Self {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, &b) in letters.iter_mut().zip(word.letters()) {
            *slot = (b as char).to_ascii_uppercase();
        }
        Self {
            letters,
            states: [LetterState::Entered; WORD_LENGTH],
        }
    }

    fn from_step(step: &HistoryStep) -> Self {
        let mut row = Self::from_word(&step.guess);
        for (state, &fb) in row.states.iter_mut().zip(step.feedback.symbols()) {
            *state = fb.into();
        }
        row
    }

    fn from_input(input: &str) -> Self {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(input.chars()) {
            *slot = ch;
        }
        Self {
            letters,
            states: [LetterState::Empty; WORD_LENGTH],
        }
    }

    /// The marked pattern, once every letter has a color.
    fn pattern(&self) -> Option<FeedbackPattern> {
        let mut symbols = [Feedback::Absent; WORD_LENGTH];
        for (slot, state) in symbols.iter_mut().zip(self.states) {
            *slot = state.to_feedback()?;
        }
        Some(FeedbackPattern(symbols))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    MarkingFeedback { marking_index: usize },
    ConfirmingFeedback,
    GameOver,
}

enum FeedbackOutcome {
    Pending,
    Done(FeedbackPattern),
    Cancel,
}

/// Groups what a frame needs so rendering stays a pure function of state.
struct RenderContext<'a> {
    rows: &'a [GuessRow],
    pending: Option<&'a GuessRow>,
    current_input: &'a str,
    state: TuiState,
    report: Option<&'a SolveReport>,
    pool_info: Option<&'a PoolInfo>,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Terminal front end for the interactive session.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<GuessRow>,
    pending: Option<GuessRow>,
    current_input: String,
    state: TuiState,
    report: Option<SolveReport>,
    pool_info: Option<PoolInfo>,
    message: String,
    error_message: String,
    status: String,
    exit_requested: bool,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal ready: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            rows: Vec::new(),
            pending: None,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            report: None,
            pool_info: None,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
            exit_requested: false,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            rows: &self.rows,
            pending: self.pending.as_ref(),
            current_input: &self.current_input,
            state: self.state,
            report: self.report.as_ref(),
            pool_info: self.pool_info.as_ref(),
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Board
                Constraint::Min(8),     // Candidates
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE SIEVE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut visible: Vec<GuessRow> = ctx.rows.to_vec();
        if let Some(pending) = ctx.pending {
            visible.push(pending.clone());
        } else if ctx.state == TuiState::EnteringGuess {
            visible.push(GuessRow::from_input(ctx.current_input));
        }

        // Most recent rows win when the board is too short.
        let available_rows = (inner.height / ROW_SPACING) as usize;
        let skip_count = visible.len().saturating_sub(available_rows);
        let marking_row = visible.len().saturating_sub(skip_count + 1);

        for (display_index, row) in visible.iter().skip(skip_count).enumerate() {
            let marking = match ctx.state {
                TuiState::MarkingFeedback { marking_index } if display_index == marking_row => {
                    Some(marking_index)
                }
                _ => None,
            };
            Self::render_guess_row(f, row, display_index, inner, marking);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_guess_row(
        f: &mut Frame,
        row: &GuessRow,
        row_index: usize,
        area: Rect,
        marking: Option<usize>,
    ) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for (letter, state) in row.letters.iter().zip(row.states) {
            let (bg_color, fg_color) = state.colors();
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        if let Some(index) = marking {
            spans.push(Span::raw(format!(" <- Marking letter {} (G/Y/B)", index + 1)));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        match (ctx.report, ctx.pool_info) {
            (Some(report), _) => {
                lines.push(Line::from(vec![Span::styled(
                    format!("Remaining: {}", report.remaining_count),
                    SUCCESS_STYLE,
                )]));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![Span::styled("Try this:", INFO_STYLE)]));
                lines.push(Line::from(format!("  {}", report.answers.join(", "))));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![Span::styled(
                    format!("Possible solutions ({}):", report.allowed_count),
                    INFO_STYLE,
                )]));
                lines.push(Line::from(format!("  {}", report.allowed.join(", "))));
                lines.push(Line::from(""));
            }
            (None, Some(info)) => {
                lines.push(Line::from(vec![Span::styled(
                    format!(
                        "{} possible answers, {} allowed guesses",
                        info.answers, info.allowed
                    ),
                    HEADER_STYLE,
                )]));
                lines.push(Line::from(""));
            }
            (None, None) => {}
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Candidates").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type a 5-letter guess | ENTER: Submit | BACKSPACE on empty row: Undo round | ESC: Quit"
            }
            TuiState::MarkingFeedback { .. } => {
                "G: Green (hit) | Y: Yellow (present) | B/X: Gray (absent) | BACKSPACE: Back | ESC: Cancel guess"
            }
            TuiState::ConfirmingFeedback => "ENTER: Confirm feedback | BACKSPACE: Go back and edit",
            TuiState::GameOver => "N: New game | U: Undo last round | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Next key press, or `None` if nothing usable arrived within the poll window.
    fn next_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Release and Repeat events would double every keystroke.
                if key.kind != KeyEventKind::Press {
                    return Ok(None);
                }
                // Alt-tab can leak escape sequence garbage as characters.
                if let KeyCode::Char(c) = key.code {
                    if c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD {
                        debug_log!("next_key() - Ignoring invalid character {:?}", c);
                        return Ok(None);
                    }
                }
                if has_modifier_keys(&key) {
                    debug_log!("next_key() - Ignoring key with modifier {:?}", key.modifiers);
                    return Ok(None);
                }
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && self.current_input.len() < WORD_LENGTH => {
                self.current_input.push(c.to_ascii_uppercase());
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace if !self.current_input.is_empty() => {
                self.current_input.pop();
            }
            KeyCode::Backspace => return Some(UserAction::Undo),
            KeyCode::Enter if self.current_input.len() == WORD_LENGTH => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_key() - Submitting guess '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = "Guess must be exactly 5 letters!".to_string();
            }
            KeyCode::Esc => return Some(UserAction::Exit),
            _ => {
                debug_log!("handle_guess_key() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_game_over_key(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Char('u' | 'U') | KeyCode::Backspace => Some(UserAction::Undo),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn handle_feedback_key(&mut self, key: KeyEvent) -> FeedbackOutcome {
        self.error_message.clear();
        let Some(row) = self.pending.as_mut() else {
            return FeedbackOutcome::Cancel;
        };

        match (self.state, key.code) {
            (_, KeyCode::Esc) => return FeedbackOutcome::Cancel,
            (TuiState::MarkingFeedback { marking_index }, KeyCode::Char(c)) => {
                match Feedback::from_char(c) {
                    Some(fb) => {
                        row.states[marking_index] = fb.into();
                        self.state = if marking_index + 1 < WORD_LENGTH {
                            TuiState::MarkingFeedback {
                                marking_index: marking_index + 1,
                            }
                        } else {
                            TuiState::ConfirmingFeedback
                        };
                    }
                    None => {
                        self.error_message = format!(
                            "Invalid feedback! Use G (green), Y (yellow) or B (gray). ('{}' is not valid)",
                            c.to_ascii_uppercase()
                        );
                    }
                }
            }
            (TuiState::MarkingFeedback { marking_index }, KeyCode::Backspace) if marking_index > 0 => {
                row.states[marking_index - 1] = LetterState::Entered;
                self.state = TuiState::MarkingFeedback {
                    marking_index: marking_index - 1,
                };
            }
            (TuiState::ConfirmingFeedback, KeyCode::Backspace) => {
                row.states[WORD_LENGTH - 1] = LetterState::Entered;
                self.state = TuiState::MarkingFeedback {
                    marking_index: WORD_LENGTH - 1,
                };
            }
            (TuiState::ConfirmingFeedback, KeyCode::Enter) => {
                if let Some(pattern) = row.pattern() {
                    return FeedbackOutcome::Done(pattern);
                }
            }
            _ => {
                debug_log!("handle_feedback_key() - Ignoring key: {:?}", key.code);
            }
        }
        FeedbackOutcome::Pending
    }
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self, info: &PoolInfo) {
        self.pool_info = Some(*info);
        self.message = "Enter your first guess.".to_string();
        self.status = "Ready - Enter your first 5-letter guess".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        if self.exit_requested {
            return Some(UserAction::Exit);
        }
        if self.state != TuiState::GameOver {
            self.state = TuiState::EnteringGuess;
        }

        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            let key = match Self::next_key() {
                Ok(Some(key)) => key,
                Ok(None) => continue,
                Err(_e) => {
                    info_log!("read_guess() - Input error, returning Exit");
                    return Some(UserAction::Exit);
                }
            };

            let action = if self.state == TuiState::GameOver {
                Self::handle_game_over_key(key)
            } else {
                self.handle_guess_key(key)
            };
            if let Some(action) = action {
                info_log!("read_guess() - Action received: {:?}", action);
                return Some(action);
            }
        }
    }

    fn read_feedback(&mut self, guess: &Word) -> Option<FeedbackPattern> {
        self.pending = Some(GuessRow::from_word(guess));
        self.state = TuiState::MarkingFeedback { marking_index: 0 };
        self.status = format!("Guess entered: {} - Now mark feedback", guess.as_str().to_ascii_uppercase());

        loop {
            if self.state == TuiState::ConfirmingFeedback {
                self.status = "Press ENTER to confirm feedback".to_string();
            }
            if self.draw().is_err() {
                debug_log!("read_feedback() - Draw failed");
                self.exit_requested = true;
                return None;
            }

            let key = match Self::next_key() {
                Ok(Some(key)) => key,
                Ok(None) => continue,
                Err(e) => {
                    debug_log!("read_feedback() - Input error: {}", e);
                    self.exit_requested = true;
                    return None;
                }
            };

            match self.handle_feedback_key(key) {
                FeedbackOutcome::Pending => {}
                FeedbackOutcome::Done(pattern) => {
                    self.status = "Filtering candidates...".to_string();
                    return Some(pattern);
                }
                FeedbackOutcome::Cancel => {
                    self.pending = None;
                    self.state = TuiState::EnteringGuess;
                    self.status = "Guess cancelled".to_string();
                    return None;
                }
            }
        }
    }

    fn display_report(&mut self, history: &History, report: &SolveReport) {
        self.rows = history.iter().map(GuessRow::from_step).collect();
        self.pending = None;
        self.report = Some(report.clone());
        self.state = TuiState::EnteringGuess;
        self.message.clear();
        self.status = format!("{} possible answers remaining", report.remaining_count);
        self.draw_or_log();
    }

    fn display_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.draw_or_log();
    }

    fn display_no_candidates_message(&mut self) {
        self.state = TuiState::GameOver;
        self.message = "No candidates remain. Check your inputs.".to_string();
        self.status = "Error: No valid candidates found".to_string();
        self.draw_or_log();
    }

    fn display_solution_found(&mut self, solution: &str) {
        self.state = TuiState::GameOver;
        self.message = format!("✓ Solution found: {}", solution.to_ascii_uppercase());
        self.status = format!("Game Over - Solution: {solution}");
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, info: &PoolInfo) {
        self.rows.clear();
        self.pending = None;
        self.current_input.clear();
        self.report = None;
        self.pool_info = Some(*info);
        self.state = TuiState::EnteringGuess;
        self.message = format!("New game started. {} possible answers.", info.answers);
        self.status = "New game - Enter your first guess".to_string();
        self.error_message.clear();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
