//! Notification toast in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::{Notification, NotificationKind};
use crate::ui::theme::{notification_color, Palette};

const MIN_WIDTH: u16 = 24;

/// Where the toast for `message` goes inside `area`.
pub fn toast_area(message: &str, area: Rect) -> Rect {
    let wanted = (message.chars().count() as u16).saturating_add(6).max(MIN_WIDTH);
    let width = wanted.min(area.width);
    let height = 3.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + 1.min(area.height - height),
        width,
        height,
    }
}

pub fn render(frame: &mut Frame, area: Rect, notification: &Notification, palette: &Palette) {
    let color = notification_color(notification.kind);
    let icon = match notification.kind {
        NotificationKind::Success => "\u{2713}",
        NotificationKind::Error => "\u{2717}",
    };

    let toast = toast_area(&notification.message, area);
    frame.render_widget(Clear, toast);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(palette.base());
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(notification.message.as_str(), Style::default().fg(palette.text)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), toast);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_area_hugs_right_edge() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = toast_area("Issue added successfully!", area);
        assert_eq!(rect.x + rect.width, 100);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.height, 3);
        assert!(rect.width >= MIN_WIDTH);
    }

    #[test]
    fn test_toast_area_clips_to_small_terminal() {
        let area = Rect::new(0, 0, 10, 2);
        let rect = toast_area("a very long message that does not fit", area);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 2);
        assert_eq!(rect.y, 0);
    }
}
