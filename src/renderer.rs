use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::board::{StyleTag, TextFrame};
use crate::config::{BORDER_HALF_BLOCK, Theme};
use crate::game::{GameSession, GameStatus};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu, render_victory_menu};

/// Renders the full game frame from immutable session state.
pub fn render(
    frame: &mut Frame<'_>,
    session: &GameSession,
    theme: &Theme,
    high_score: u32,
    on_start_screen: bool,
) {
    let area = frame.area();
    let text_frame = session.render();
    let play_area = render_hud(frame, area, &text_frame.score_line, high_score, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_field(frame, inner, &text_frame, theme);

    if on_start_screen {
        render_start_menu(frame, play_area, high_score, theme);
        return;
    }

    match session.status {
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            session.score,
            high_score,
            session.collision,
            theme,
        ),
        GameStatus::Victory => render_victory_menu(frame, play_area, session.score, theme),
        GameStatus::Playing => {}
    }
}

/// Draws the styled text frame produced by the board into `inner`.
///
/// Every row has the same cell count, so center-aligning each line keeps
/// the columns vertically aligned.
fn render_field(frame: &mut Frame<'_>, inner: Rect, text_frame: &TextFrame, theme: &Theme) {
    let lines: Vec<Line<'_>> = text_frame
        .rows
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|span| Span::styled(span.text.clone(), style_for(span.tag, theme)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn style_for(tag: StyleTag, theme: &Theme) -> Style {
    match tag {
        StyleTag::Default => Style::new().fg(theme.field),
        StyleTag::Snake => Style::new().fg(theme.snake).add_modifier(Modifier::BOLD),
        StyleTag::Bean => Style::new().fg(theme.bean),
    }
}
