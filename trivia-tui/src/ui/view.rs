//! View models
//!
//! Plain data derived from [`AppState`], one variant per phase. Rendering
//! only ever reads these, which keeps layout code free of session logic and
//! lets tests check what would be shown without a terminal.

use libtrivia::{Difficulty, Phase};

use crate::app::{AppState, Focus};

pub const CATEGORY_PLACEHOLDER: &str = "Select Category";
pub const DIFFICULTY_PLACEHOLDER: &str = "Select Difficulty";
pub const START_LABEL: &str = "Start Quiz";
pub const RESTART_LABEL: &str = "Start Over";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Selection(SelectionView),
    Question(QuestionView),
    Score(ScoreView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    /// Placeholder first, then categories in provider order
    pub category_items: Vec<String>,
    pub selected_category: usize,

    /// Placeholder first, then Easy/Medium/Hard
    pub difficulty_items: Vec<String>,
    pub selected_difficulty: usize,

    pub focus: Focus,
    pub loading_categories: bool,
    pub loading_questions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// "Question n/total"
    pub progress: String,
    pub text: String,
    pub category: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    /// Numbered label, e.g. "1. Paris"
    pub label: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    pub message: String,
}

#[must_use]
pub fn screen_view(state: &AppState) -> ScreenView {
    match state.session.phase() {
        Phase::Selecting(_) => ScreenView::Selection(selection_view(state)),
        Phase::InProgress(game) => {
            let Some(question) = game.current_question() else {
                // Session never holds an empty game
                return ScreenView::Selection(selection_view(state));
            };
            let options = question
                .display_options()
                .into_iter()
                .enumerate()
                .map(|(i, option)| OptionView {
                    label: format!("{}. {}", i + 1, option.text),
                    highlighted: i == state.option_cursor,
                })
                .collect();

            ScreenView::Question(QuestionView {
                progress: format!("Question {}/{}", game.current_index() + 1, game.len()),
                text: question.text.clone(),
                category: question.category.clone(),
                options,
            })
        }
        Phase::Finished(game) => ScreenView::Score(ScoreView {
            message: game.score_message(),
        }),
    }
}

/// Restart control is offered on every screen except selection
#[must_use]
pub fn show_restart(state: &AppState) -> bool {
    !state.session.is_selecting()
}

fn selection_view(state: &AppState) -> SelectionView {
    let category_items = std::iter::once(CATEGORY_PLACEHOLDER.to_string())
        .chain(state.session.categories().iter().map(|c| c.name.clone()))
        .collect();

    let difficulty_items = std::iter::once(DIFFICULTY_PLACEHOLDER.to_string())
        .chain(Difficulty::ALL.iter().map(|d| d.label().to_string()))
        .collect();

    SelectionView {
        category_items,
        selected_category: state.category_index(),
        difficulty_items,
        selected_difficulty: state.difficulty_index(),
        focus: state.focus,
        loading_categories: state.loading_categories,
        loading_questions: state.loading_questions,
    }
}
