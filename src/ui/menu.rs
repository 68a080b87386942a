use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::history::History;
use crate::score::BestRecord;

/// Main menu options in display order.
pub const MENU_OPTIONS: &[&str] = &["Start Game", "History", "Exit"];

/// Draws the main menu as a centered popup.
pub fn render_main_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: usize,
    best: &BestRecord,
    theme: &Theme,
) {
    let popup = centered_popup(area, 60, 60);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let mut body = Vec::new();
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        let line = if i == selected {
            Line::from(format!("> {option} <")).style(
                Style::default()
                    .fg(theme.menu_selected)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Line::from(option.to_string())
        };
        body.push(line);
        body.push(Line::from(""));
    }
    body.push(Line::from(format!(
        "Best: {} (level {})",
        best.score, best.level
    )));

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" menu ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Arrows/WASD move · [Enter] select · [Q] quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        footer_row,
    );
}

/// Draws the recent-results screen.
pub fn render_history(frame: &mut Frame<'_>, area: Rect, history: &History, theme: &Theme) {
    let popup = centered_popup(area, 70, 80);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("GAME HISTORY"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body: Vec<Line<'_>> = if history.entries().is_empty() {
        vec![Line::from("No games played yet")]
    } else {
        history
            .entries()
            .iter()
            .map(|entry| Line::from(entry.to_string()))
            .collect()
    };

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" recent games ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("[Esc]/[Enter] Back"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        footer_row,
    );
}

/// Draws the game-over popup.
pub fn render_game_over(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    level: u32,
    new_best: bool,
    theme: &Theme,
) {
    let popup = centered_popup(area, 60, 45);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("Level: {level}")),
        Line::from(if new_best { "New best score!" } else { "" }),
        Line::from(""),
        Line::from("[Enter] Menu   [Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_fg))
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
