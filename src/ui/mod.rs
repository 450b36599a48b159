//! UI rendering for the issue dashboard
//!
//! Layout, top to bottom:
//! - Header with title and theme hint
//! - Search box
//! - Add-issue form
//! - Issue table
//! - Status chart
//! - Footer with key hints and backend URL
//!
//! The edit dialog, the notification toast and the startup splash draw on
//! top of the dashboard.

pub mod forms;
pub mod helpers;
pub mod issue_table;
pub mod status_chart;
pub mod theme;
pub mod toast;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::error::PendingTarget;
use theme::Palette;

/// Height of the add form: two rows plus borders
const ADD_FORM_HEIGHT: u16 = 4;
/// Height of the status chart: bar, legend and borders
const CHART_HEIGHT: u16 = 4;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    if app.splash_visible {
        render_splash(frame, area, app, &palette);
        return;
    }

    let [header, search, add_form, table, chart, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(ADD_FORM_HEIGHT),
        Constraint::Min(5),
        Constraint::Length(CHART_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, app, &palette);
    render_search(frame, search, app, &palette);
    forms::render_add_form(frame, add_form, app, &palette);
    issue_table::render(frame, table, app, &palette);
    status_chart::render(frame, chart, &app.store.status_counts(), &palette);
    render_footer(frame, footer, app, &palette);

    if app.focus == Focus::EditForm {
        forms::render_edit_dialog(frame, area, app, &palette);
    }
    if let Some(notification) = app.store.notification() {
        toast::render(frame, area, notification, &palette);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::styled(
        " Bug Tracker",
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    )];
    if app.store.is_pending(&PendingTarget::Collection) {
        spans.push(Span::styled("  loading...", Style::default().fg(palette.dim)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let hint = Line::from(Span::styled(
        format!("t: {} ", app.theme.switch_label()),
        Style::default().fg(palette.dim),
    ));
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Right), area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(focused));

    let term = app.store.search();
    let line = if term.is_empty() && !focused {
        Line::from(Span::styled(
            "Press / to search by title",
            Style::default().fg(palette.dim),
        ))
    } else if focused {
        Line::from(vec![
            Span::styled(term, Style::default().fg(palette.text)),
            Span::styled("\u{258F}", Style::default().fg(palette.accent)),
        ])
    } else {
        Line::from(Span::styled(term, Style::default().fg(palette.text)))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Key hints for the focused component.
pub fn footer_hint(app: &App) -> String {
    if let Some(id) = &app.delete_armed {
        return format!("Press d again to delete issue #{}, any other key cancels", id);
    }
    match app.focus {
        Focus::Table => {
            "/ search  a add  n quick add  e edit  d delete  r refresh  t theme  q quit".to_string()
        }
        Focus::Search => "type to filter  Enter done  Esc clear".to_string(),
        Focus::AddForm => {
            "Tab next field  \u{2190}/\u{2192} change  Enter add  Esc back".to_string()
        }
        Focus::EditForm => "Enter save  Esc cancel".to_string(),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hint_style = if app.delete_armed.is_some() {
        Style::default().fg(theme::COLOR_ERROR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let hint = Line::from(Span::styled(format!(" {}", footer_hint(app)), hint_style));
    frame.render_widget(Paragraph::new(hint), area);

    let mut status = Vec::new();
    if app.store.is_busy() {
        status.push(Span::styled("syncing  ", Style::default().fg(palette.accent)));
    }
    status.push(Span::styled(
        format!("{} ", app.api_url),
        Style::default().fg(palette.dim),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        area,
    );
}

fn render_splash(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let box_area = helpers::centered_rect(40, 7, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent));

    let status = if app.store.is_pending(&PendingTarget::Collection) {
        "Loading issues...".to_string()
    } else {
        format!("{} issues loaded", app.store.issues().len())
    };
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Bug Tracker",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(status, Style::default().fg(palette.text))),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(palette.dim),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        box_area,
    );
}
