//! Add-issue panel and edit dialog.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::error::PendingTarget;
use crate::models::{EditableFields, IssueField};
use crate::ui::helpers::centered_rect;
use crate::ui::theme::Palette;

/// Width and height of the edit dialog, borders included
const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 14;

/// Text cursor drawn after the focused text field
const CURSOR: &str = "\u{258F}";

/// Value as shown in a form: choice fields get arrows, the focused text
/// field gets a cursor.
fn display_value(field: IssueField, value: &str, focused: bool) -> String {
    if field.is_choice() {
        if focused {
            format!("\u{25C2} {} \u{25B8}", value)
        } else {
            value.to_string()
        }
    } else if focused {
        format!("{}{}", value, CURSOR)
    } else {
        value.to_string()
    }
}

fn field_label(field: IssueField, focused: bool, palette: &Palette) -> Span<'static> {
    let style = if focused {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    Span::styled(field.label(), style)
}

fn value_style(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    }
}

fn panel_block<'a>(title: String, focused: bool, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(focused))
}

/// Render the add form as a single row of fields.
pub fn render_add_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let active = app.focus == Focus::AddForm;
    let title = if app.store.is_pending(&PendingTarget::NewIssue) {
        " Add New Issue (saving...) ".to_string()
    } else {
        " Add New Issue ".to_string()
    };
    let block = panel_block(title, active, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Length(15),
        Constraint::Length(12),
        Constraint::Fill(2),
    ])
    .spacing(1)
    .split(inner);

    let draft = app.store.draft();
    for (field, column) in IssueField::ALL.iter().zip(columns.iter()) {
        let focused = active && app.add_field == *field;
        let value = display_value(*field, &draft.field_value(*field), focused);
        let lines = vec![
            Line::from(field_label(*field, focused, palette)),
            Line::from(Span::styled(value, value_style(focused, palette))),
        ];
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

/// Render the edit dialog over the dashboard while an issue is selected.
pub fn render_edit_dialog(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(issue) = app.store.selection() else {
        return;
    };

    let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog);

    let saving = app.store.is_pending(&PendingTarget::Issue(issue.id.clone()));
    let title = if saving {
        format!(" Edit Issue #{} (saving...) ", issue.id)
    } else {
        format!(" Edit Issue #{} ", issue.id)
    };
    let block = panel_block(title, true, palette).style(palette.base());
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let mut lines = Vec::with_capacity(IssueField::ALL.len() * 2 + 2);
    for field in IssueField::ALL {
        let focused = app.edit_field == field;
        let value = display_value(field, &issue.field_value(field), focused);
        lines.push(Line::from(field_label(field, focused, palette)));
        lines.push(Line::from(Span::styled(
            format!("  {}", value),
            value_style(focused, palette),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Enter save \u{00B7} Esc cancel \u{00B7} Tab next field \u{00B7} \u{2190}/\u{2192} change",
        Style::default().fg(palette.dim),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_markers() {
        assert_eq!(display_value(IssueField::Title, "Bug", false), "Bug");
        assert_eq!(display_value(IssueField::Title, "Bug", true), "Bug\u{258F}");
        assert_eq!(
            display_value(IssueField::Status, "Open", true),
            "\u{25C2} Open \u{25B8}"
        );
    }
}
