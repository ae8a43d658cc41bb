//! Interactive game loop shared by the CLI and terminal front ends.

use crate::config::DisplayLimits;
use crate::feedback::FeedbackPattern;
use crate::history::{History, HistoryStep};
use crate::report::SolveReport;
use crate::solver::Solver;
use crate::word::Word;
use log::{debug, info};

/// What the player asked for at the guess prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Undo,
    NewGame,
    Exit,
}

/// Pool sizes shown when a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolInfo {
    pub answers: usize,
    pub allowed: usize,
}

/// Front end for an interactive session (line-based CLI or TUI).
pub trait GameInterface {
    fn display_welcome(&mut self, info: &PoolInfo);
    /// `None` means the input was unusable and the prompt should be repeated.
    fn read_guess(&mut self) -> Option<UserAction>;
    /// `None` means the round was abandoned; the guess is discarded.
    fn read_feedback(&mut self, guess: &Word) -> Option<FeedbackPattern>;
    fn display_report(&mut self, history: &History, report: &SolveReport);
    fn display_error(&mut self, message: &str);
    fn display_no_candidates_message(&mut self);
    fn display_solution_found(&mut self, solution: &str);
    fn display_exit_message(&mut self);
    fn display_new_game_message(&mut self, info: &PoolInfo);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Continue,
    Solved,
    NoSolution,
}

impl GameState {
    fn is_over(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// The history of one game plus the solver that interprets it.
pub struct Session<'a> {
    solver: &'a Solver,
    limits: DisplayLimits,
    history: History,
}

impl<'a> Session<'a> {
    pub fn new(solver: &'a Solver, limits: DisplayLimits) -> Self {
        Self {
            solver,
            limits,
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn pool_info(&self) -> PoolInfo {
        PoolInfo {
            answers: self.solver.answers().len(),
            allowed: self.solver.allowed().len(),
        }
    }

    /// Record a round and re-solve the whole history.
    pub fn record(&mut self, step: HistoryStep) -> SolveReport {
        info!("round {}: {} -> {}", self.history.len() + 1, step.guess, step.feedback);
        self.history.push(step);
        self.report()
    }

    /// Forget the last round. `None` if there was nothing to forget.
    pub fn undo(&mut self) -> Option<SolveReport> {
        let step = self.history.pop()?;
        info!("undo: dropped {} -> {}", step.guess, step.feedback);
        Some(self.report())
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn report(&self) -> SolveReport {
        SolveReport::new(&self.solver.solve(&self.history), &self.limits)
    }

    pub fn state(&self, report: &SolveReport) -> GameState {
        if report.remaining_count == 0 {
            GameState::NoSolution
        } else if report.solved_word().is_some()
            || self.history.last().is_some_and(|step| step.feedback.is_win())
        {
            GameState::Solved
        } else {
            GameState::Continue
        }
    }
}

fn announce<I: GameInterface + ?Sized>(
    interface: &mut I,
    session: &Session,
    report: &SolveReport,
) -> GameState {
    interface.display_report(session.history(), report);
    let state = session.state(report);
    match state {
        GameState::NoSolution => interface.display_no_candidates_message(),
        GameState::Solved => {
            let solution = session
                .history()
                .last()
                .filter(|step| step.feedback.is_win())
                .map(|step| step.guess.to_string())
                .or_else(|| report.solved_word().map(str::to_string))
                .unwrap_or_default();
            interface.display_solution_found(&solution);
        }
        GameState::Continue => {}
    }
    state
}

/// Run rounds until the player exits.
///
/// After a game ends (solved or no candidates left) further guesses are
/// refused until the player starts a new game or undoes the last round.
pub fn game_loop<I: GameInterface + ?Sized>(solver: &Solver, limits: DisplayLimits, interface: &mut I) {
    let mut session = Session::new(solver, limits);
    interface.display_welcome(&session.pool_info());
    let mut state = GameState::Continue;

    loop {
        let guess = match interface.read_guess() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::NewGame) => {
                session.reset();
                state = GameState::Continue;
                interface.display_new_game_message(&session.pool_info());
                continue;
            }
            Some(UserAction::Undo) => {
                match session.undo() {
                    Some(report) => state = announce(interface, &session, &report),
                    None => interface.display_error("Nothing to undo."),
                }
                continue;
            }
            Some(UserAction::Guess(g)) => g,
            None => continue,
        };

        if state.is_over() {
            interface.display_error("This game is over. Type 'next' for a new game or 'undo'.");
            continue;
        }

        let guess = match Word::parse(guess.trim()) {
            Ok(word) => word,
            Err(e) => {
                interface.display_error(&format!("Invalid guess: {e}"));
                continue;
            }
        };

        let Some(feedback) = interface.read_feedback(&guess) else {
            debug!("feedback for {guess} abandoned");
            continue;
        };

        let report = session.record(HistoryStep::new(guess, feedback));
        state = announce(interface, &session, &report);
    }
}
