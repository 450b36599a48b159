//! Issue table panel.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::Issue;
use crate::ui::helpers::{format_optional_timestamp, format_timestamp, or_placeholder, truncate_string};
use crate::ui::theme::{priority_color, status_color, Palette};

pub const COLUMNS: [&str; 8] = [
    "ID",
    "Title",
    "Description",
    "Status",
    "Priority",
    "Assigned",
    "Created At",
    "Updated At",
];

const WIDTHS: [Constraint; 8] = [
    Constraint::Length(6),
    Constraint::Fill(2),
    Constraint::Fill(3),
    Constraint::Length(12),
    Constraint::Length(9),
    Constraint::Length(12),
    Constraint::Length(16),
    Constraint::Length(16),
];

const DESCRIPTION_MAX: usize = 60;

fn issue_row<'a>(issue: &'a Issue) -> Row<'a> {
    let badge = |label: &'static str, color: Color| {
        Cell::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    };
    let assigned = issue.assigned_to.as_deref().unwrap_or_default();

    Row::new(vec![
        Cell::from(issue.id.to_string()),
        Cell::from(issue.title.as_str()),
        Cell::from(truncate_string(or_placeholder(&issue.description), DESCRIPTION_MAX)),
        badge(issue.status.label(), status_color(issue.status)),
        badge(issue.priority.label(), priority_color(issue.priority)),
        Cell::from(or_placeholder(assigned).to_string()),
        Cell::from(format_timestamp(&issue.created_at)),
        Cell::from(format_optional_timestamp(issue.updated_at.as_ref())),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let issues = app.store.filtered();
    let total = app.store.issues().len();

    let title = if app.store.search().is_empty() {
        format!(" Issues ({}) ", total)
    } else {
        format!(" Issues ({} of {}) ", issues.len(), total)
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(app.focus == Focus::Table));

    if issues.is_empty() {
        let message = if total == 0 {
            "No issues yet. Press a to add one.".to_string()
        } else {
            format!("No issues match \"{}\"", app.store.search())
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(palette.dim),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(COLUMNS.map(Cell::from)).style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = issues.iter().map(|issue| issue_row(issue)).collect();
    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .style(palette.base())
        .row_highlight_style(Style::default().bg(palette.highlight).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let selected = app.selected_row.min(issues.len() - 1);
    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}
