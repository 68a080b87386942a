use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_BONUS_FOOD, GLYPH_FOOD, GLYPH_OBSTACLE, GLYPH_OBSTACLE_DIM,
    GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GLYPH_SNAKE_TAIL, GridSize, Theme,
};
use crate::game::GameSession;
use crate::snake::Position;
use crate::ui::hud::render_hud;

/// Renders the full playing frame from immutable session state.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, theme: &Theme, best_score: u32) {
    let area = frame.area();
    let play_area = render_hud(frame, area, session, best_score, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_obstacles(frame, inner, session, theme);
    render_food(frame, inner, session, theme);
    render_snake(frame, inner, session, theme);
}

fn render_obstacles(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for obstacle in &session.obstacles {
        let Some((x, y)) = cell_to_terminal(inner, session.bounds(), obstacle.position) else {
            continue;
        };

        // Cosmetic phase picks the shading variant.
        let (glyph, color) = if obstacle.pattern_offset % 2 == 0 {
            (GLYPH_OBSTACLE, theme.obstacle)
        } else {
            (GLYPH_OBSTACLE_DIM, theme.obstacle_dim)
        };
        buffer.set_string(x, y, glyph, Style::new().fg(color));
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let bounds = session.bounds();
    let buffer = frame.buffer_mut();

    if let Some((x, y)) = cell_to_terminal(inner, bounds, session.food.position) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
    }

    if let Some(position) = session.bonus_food.position() {
        if let Some((x, y)) = cell_to_terminal(inner, bounds, position) {
            buffer.set_string(
                x,
                y,
                GLYPH_BONUS_FOOD,
                Style::new()
                    .fg(theme.bonus_food)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let bounds = session.bounds();
    let rendered = session.snake.render_segments();
    let last = rendered.len().saturating_sub(1);

    let buffer = frame.buffer_mut();
    for (i, (fx, fy)) in rendered.iter().enumerate() {
        let Some((x, y)) = sub_position_to_terminal(inner, bounds, *fx, *fy) else {
            continue;
        };

        if i == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if i == last {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

/// Maps an interpolated sub-position onto a terminal cell.
///
/// The terminal has no sub-cell resolution, so the sub-position is rounded to
/// the nearest cell and wrapped back into bounds (rounding at the seam can
/// land one past the edge).
fn sub_position_to_terminal(inner: Rect, bounds: GridSize, x: f32, y: f32) -> Option<(u16, u16)> {
    let cell = Position {
        x: x.round() as i32,
        y: y.round() as i32,
    }
    .wrapped(bounds);
    cell_to_terminal(inner, bounds, cell)
}

fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
