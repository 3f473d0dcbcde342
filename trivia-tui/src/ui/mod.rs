//! UI rendering
//!
//! Pure rendering functions that draw a [`view`] model into a frame.

pub mod view;

use libtrivia::{Notification, NotificationKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Focus};
use view::{QuestionView, ScoreView, ScreenView, SelectionView, RESTART_LABEL, START_LABEL};

/// Widest a toast gets, borders included
const TOAST_WIDTH: u16 = 40;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_title(frame, chunks[0], state);

    match view::screen_view(state) {
        ScreenView::Selection(v) => render_selection(frame, chunks[1], &v, state),
        ScreenView::Question(v) => render_question(frame, chunks[1], &v, state),
        ScreenView::Score(v) => render_score(frame, chunks[1], &v, state),
    }

    render_footer(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    render_toasts(frame, area, &state.toasts, state);
}

/// Colored style, or plain when colors are disabled
fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn highlight(state: &AppState) -> Style {
    if state.config.colors_enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Trivia Quiz",
        fg(state, Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, area);
}

fn render_selection(frame: &mut Frame, area: Rect, view: &SelectionView, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    let category_title = if view.loading_categories {
        " Category (loading...) "
    } else {
        " Category "
    };
    render_selector(
        frame,
        columns[0],
        category_title,
        &view.category_items,
        view.selected_category,
        view.focus == Focus::Category,
        state,
    );
    render_selector(
        frame,
        columns[1],
        " Difficulty ",
        &view.difficulty_items,
        view.selected_difficulty,
        view.focus == Focus::Difficulty,
        state,
    );

    let start_text = if view.loading_questions {
        "Loading questions...".to_string()
    } else {
        format!("[ {} ]", START_LABEL)
    };
    let start_style = if view.focus == Focus::Start {
        highlight(state)
    } else {
        fg(state, Color::Green)
    };
    let start = Paragraph::new(Line::from(Span::styled(start_text, start_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(start, rows[1]);
}

fn render_selector(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[String],
    selected: usize,
    focused: bool,
    state: &AppState,
) {
    // Keep the selected entry visible in short terminals
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible > 0 && selected >= visible {
        selected + 1 - visible
    } else {
        0
    };

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, item)| {
            if i == selected {
                Line::from(Span::styled(format!("> {}", item), highlight(state)))
            } else {
                Line::from(format!("  {}", item))
            }
        })
        .collect();

    let border = if focused {
        fg(state, Color::Cyan)
    } else {
        Style::default()
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border),
    );

    frame.render_widget(widget, area);
}

fn render_question(frame: &mut Frame, area: Rect, view: &QuestionView, state: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            view.text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for option in &view.options {
        if option.highlighted {
            lines.push(Line::from(Span::styled(
                format!("> {}", option.label),
                highlight(state),
            )));
        } else {
            lines.push(Line::from(format!("  {}", option.label)));
        }
    }

    let title = if view.category.is_empty() {
        format!(" {} ", view.progress)
    } else {
        format!(" {} | {} ", view.progress, view.category)
    };

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(widget, area);
}

fn render_score(frame: &mut Frame, area: Rect, view: &ScoreView, state: &AppState) {
    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            view.message.clone(),
            fg(state, Color::Green).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title(" Results ").borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();

    if view::show_restart(state) {
        spans.push(Span::styled(
            format!("[r] {}", RESTART_LABEL),
            fg(state, Color::Magenta).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" | "));
    }

    let hints = if state.session.is_selecting() {
        "Tab: Focus | Up/Down: Choose | Enter: Start | F1: Help | q: Quit"
    } else if state.session.current_question().is_some() {
        "Up/Down: Move | Enter/1-9: Answer | F1: Help | q: Quit"
    } else {
        "Enter: Play again | F1: Help | q: Quit"
    };
    spans.push(Span::styled(hints, fg(state, Color::Gray)));

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Stack toasts in the top-right corner, oldest on top
fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Notification], state: &AppState) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;

    for (i, toast) in toasts.iter().enumerate() {
        let y = area.y + (i as u16).saturating_mul(3);
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, 3);

        let (title, color) = match toast.kind {
            NotificationKind::Error => (" Error ", Color::Red),
            NotificationKind::Info => (" Info ", Color::Blue),
        };

        let widget = Paragraph::new(toast.message.clone()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(fg(state, color)),
        );

        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q / Ctrl+C  - Quit"),
        Line::from("  F1          - Toggle help"),
        Line::from("  Esc         - Close help / dismiss messages"),
        Line::from(""),
        Line::from("Selection:"),
        Line::from("  Tab         - Next control"),
        Line::from("  Up/Down     - Change category or difficulty"),
        Line::from("  Enter       - Start quiz"),
        Line::from("  r           - Retry loading categories"),
        Line::from(""),
        Line::from("Question:"),
        Line::from("  Up/Down     - Move between answers"),
        Line::from("  Enter, 1-9  - Answer"),
        Line::from("  r           - Start over"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
