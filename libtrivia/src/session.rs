//! Quiz session state machine
//!
//! A session moves through three phases:
//!
//! ```text
//! Selecting --start--> InProgress --answer (last)--> Finished
//!     ^                 |      ^                         |
//!     |                 +------+ answer (not last)       |
//!     +----restart------+-------------restart------------+
//! ```
//!
//! Per-phase data lives inside the phase variant, so a finished game can't
//! exist without questions and a half-chosen selection can't leak into a
//! running game. Categories are reference data and sit outside the phase:
//! they survive restarts.
//!
//! Intents that don't belong to the current phase are ignored.

use crate::types::{Category, Difficulty, Question};

/// Filters chosen on the selection screen. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

/// A game in progress or finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
}

impl Game {
    fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn score_message(&self) -> String {
        format!("You scored {} out of {}", self.score, self.questions.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Selecting(Selection),
    InProgress(Game),
    Finished(Game),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Selecting(_) => "selecting",
            Phase::InProgress(_) => "in_progress",
            Phase::Finished(_) => "finished",
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Selecting(Selection::default())
    }
}

/// Result of answering a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the question at this index
    Advanced(usize),
    /// That was the last question
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    categories: Vec<Category>,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Install the category list.
    ///
    /// Categories are loaded once; a second list is ignored. Returns whether
    /// the list was applied.
    pub fn set_categories(&mut self, categories: Vec<Category>) -> bool {
        if !self.categories.is_empty() {
            tracing::debug!("Ignoring category list, already loaded");
            return false;
        }
        self.categories = categories;
        true
    }

    /// Current filters, only while selecting
    pub fn selection(&self) -> Option<&Selection> {
        match &self.phase {
            Phase::Selecting(selection) => Some(selection),
            _ => None,
        }
    }

    /// Overwrite the category filter. The id isn't checked against the
    /// loaded categories.
    pub fn select_category(&mut self, category: Option<u32>) {
        if let Phase::Selecting(selection) = &mut self.phase {
            selection.category = category;
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Option<Difficulty>) {
        if let Phase::Selecting(selection) = &mut self.phase {
            selection.difficulty = difficulty;
        }
    }

    /// Begin a game with a freshly fetched batch.
    ///
    /// Applied from any phase so a late fetch result still lands. An empty
    /// batch is rejected and leaves the session unchanged.
    pub fn start(&mut self, questions: Vec<Question>) -> bool {
        if questions.is_empty() {
            tracing::warn!("Refusing to start a game without questions");
            return false;
        }
        self.phase = Phase::InProgress(Game::new(questions));
        true
    }

    /// Record an answer to the current question and move on.
    ///
    /// Returns `None` when no game is in progress.
    pub fn answer(&mut self, is_correct: bool) -> Option<AnswerOutcome> {
        let game = match &mut self.phase {
            Phase::InProgress(game) => game,
            _ => return None,
        };

        if is_correct {
            game.score += 1;
        }

        if game.current_index + 1 < game.questions.len() {
            game.current_index += 1;
            Some(AnswerOutcome::Advanced(game.current_index))
        } else {
            let finished = std::mem::replace(game, Game::new(Vec::new()));
            self.phase = Phase::Finished(finished);
            Some(AnswerOutcome::Finished)
        }
    }

    /// Drop the current game and filters, keep categories
    pub fn restart(&mut self) {
        self.phase = Phase::default();
    }

    pub fn game(&self) -> Option<&Game> {
        match &self.phase {
            Phase::InProgress(game) | Phase::Finished(game) => Some(game),
            Phase::Selecting(_) => None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        self.game().map(Game::questions).unwrap_or(&[])
    }

    pub fn current_index(&self) -> usize {
        self.game().map(Game::current_index).unwrap_or(0)
    }

    pub fn score(&self) -> usize {
        self.game().map(Game::score).unwrap_or(0)
    }

    /// The question on screen, only while in progress
    pub fn current_question(&self) -> Option<&Question> {
        match &self.phase {
            Phase::InProgress(game) => game.current_question(),
            _ => None,
        }
    }

    /// `(question number, total)` while in progress
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.phase {
            Phase::InProgress(game) => Some((game.current_index + 1, game.questions.len())),
            _ => None,
        }
    }

    pub fn score_message(&self) -> Option<String> {
        match &self.phase {
            Phase::Finished(game) => Some(game.score_message()),
            _ => None,
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.phase, Phase::Selecting(_))
    }
}
