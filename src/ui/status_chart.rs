//! Status chart panel
//!
//! Renders a proportional bar with one segment per status and a legend with
//! counts and shares underneath.
//!
//! ```text
//! ████████████████████▓▓▓▓▓▓▓▓▓▓░░░░░░░░░░
//! ■ Open 2 (50%)   ■ In Progress 1 (25%)   ■ Resolved 1 (25%)
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::IssueStatus;
use crate::ui::theme::{status_color, Palette};
use crate::views::StatusCounts;

// ============================================================================
// Block Characters
// ============================================================================

const BLOCK_FILLED: char = '\u{2588}'; // Full block
const BLOCK_EMPTY: char = '\u{2591}'; // Light shade
const LEGEND_MARKER: &str = "\u{25A0}"; // Black square

// ============================================================================
// Segment Math
// ============================================================================

/// Split `width` cells between the three statuses in proportion to `counts`.
///
/// Widths always add up to `width` when there is at least one issue. Every
/// non-zero status gets at least one cell if `width` allows it, so a single
/// issue never disappears from the bar.
pub fn segment_widths(counts: &StatusCounts, width: u16) -> [u16; 3] {
    let total = counts.total();
    if total == 0 || width == 0 {
        return [0; 3];
    }

    let entries = counts.entries();
    let mut widths = [0u16; 3];
    for (slot, (_, count)) in widths.iter_mut().zip(entries.iter()) {
        *slot = ((*count as u64 * width as u64) / total as u64) as u16;
    }

    // Rounding remainder goes to the largest status
    let largest = largest_index(&entries);
    let used: u16 = widths.iter().sum();
    widths[largest] += width - used;

    for i in 0..widths.len() {
        if entries[i].1 > 0 && widths[i] == 0 {
            let donor = (0..widths.len())
                .filter(|&j| widths[j] > 1)
                .max_by_key(|&j| widths[j]);
            if let Some(donor) = donor {
                widths[donor] -= 1;
                widths[i] = 1;
            }
        }
    }
    widths
}

fn largest_index(entries: &[(IssueStatus, usize); 3]) -> usize {
    let mut best = 0;
    for (i, (_, count)) in entries.iter().enumerate() {
        if *count > entries[best].1 {
            best = i;
        }
    }
    best
}

/// Legend text for one status, e.g. `Open 2 (50%)`.
pub fn legend_label(counts: &StatusCounts, status: IssueStatus) -> String {
    let percent = (counts.share(status) * 100.0).round() as u32;
    format!("{} {} ({}%)", status.label(), counts.get(status), percent)
}

// ============================================================================
// Rendering
// ============================================================================

pub fn render(frame: &mut Frame, area: Rect, counts: &StatusCounts, palette: &Palette) {
    let block = Block::default()
        .title(Span::styled(
            " Status Statistics ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if counts.total() == 0 {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No issues yet",
            Style::default().fg(palette.dim),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let widths = segment_widths(counts, inner.width);
    let mut bar = Vec::with_capacity(3);
    for ((status, _), width) in counts.entries().iter().zip(widths) {
        if width > 0 {
            bar.push(Span::styled(
                BLOCK_FILLED.to_string().repeat(width as usize),
                Style::default().fg(status_color(*status)),
            ));
        }
    }
    let filled: u16 = widths.iter().sum();
    if filled < inner.width {
        bar.push(Span::styled(
            BLOCK_EMPTY.to_string().repeat((inner.width - filled) as usize),
            Style::default().fg(palette.dim),
        ));
    }

    let mut legend = Vec::new();
    for (i, (status, _)) in counts.entries().iter().enumerate() {
        if i > 0 {
            legend.push(Span::raw("   "));
        }
        legend.push(Span::styled(
            format!("{} ", LEGEND_MARKER),
            Style::default().fg(status_color(*status)),
        ));
        legend.push(Span::styled(
            legend_label(counts, *status),
            Style::default().fg(palette.text),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(bar), Line::from(legend)]);
    frame.render_widget(paragraph, inner);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(open: usize, in_progress: usize, resolved: usize) -> StatusCounts {
        StatusCounts {
            open,
            in_progress,
            resolved,
        }
    }

    #[test]
    fn test_segment_widths_proportional() {
        assert_eq!(segment_widths(&counts(2, 1, 1), 40), [20, 10, 10]);
    }

    #[test]
    fn test_segment_widths_fill_full_width() {
        let widths = segment_widths(&counts(1, 1, 1), 10);
        assert_eq!(widths.iter().sum::<u16>(), 10);
        assert!(widths.iter().all(|w| *w >= 3));
    }

    #[test]
    fn test_segment_widths_empty() {
        assert_eq!(segment_widths(&counts(0, 0, 0), 40), [0, 0, 0]);
        assert_eq!(segment_widths(&counts(3, 0, 0), 0), [0, 0, 0]);
    }

    #[test]
    fn test_small_status_keeps_one_cell() {
        let widths = segment_widths(&counts(100, 1, 0), 20);
        assert_eq!(widths, [19, 1, 0]);
    }

    #[test]
    fn test_legend_label() {
        let c = counts(2, 1, 1);
        assert_eq!(legend_label(&c, IssueStatus::Open), "Open 2 (50%)");
        assert_eq!(legend_label(&c, IssueStatus::InProgress), "In Progress 1 (25%)");
    }
}
