use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameSession;

/// Renders the one-line HUD and returns the remaining play area below it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    best_score: u32,
    theme: &Theme,
) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!(" Score: {}", session.snake.score),
            Style::new().fg(theme.hud_fg),
        ),
        Span::styled(
            format!("  Level: {}", session.level),
            Style::new().fg(theme.hud_fg),
        ),
        Span::styled(
            format!("  Length: {}", session.snake.len()),
            Style::new().fg(theme.menu_footer),
        ),
        Span::styled(
            format!("  Best: {best_score}"),
            Style::new().fg(theme.menu_footer),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), hud_area);

    play_area
}
