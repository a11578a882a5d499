use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;

/// Renders the score and key-help strip below the field; returns the
/// remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    score_line: &str,
    high_score: u32,
    theme: &Theme,
) -> Rect {
    let [play_area, score_area, help_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(score_line.to_owned(), Style::new().fg(theme.hud_score)),
            Span::raw("   "),
            Span::styled(
                format!("Hi: {high_score}"),
                Style::new().fg(theme.menu_footer),
            ),
        ]))
        .alignment(Alignment::Center),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from("[h] left  [l] right  [s] straight  [q] quit"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.menu_footer)),
        help_area,
    );

    play_area
}
