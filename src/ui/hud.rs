use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let boost_tag = if state.speed_boost_active() { " ⚡" } else { "" };
    let line = Line::from(vec![
        Span::styled(
            format!("Score {}", state.score),
            Style::new().fg(theme.hud_fg),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Level {}", state.level),
            Style::new().fg(theme.hud_fg),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Length {}", state.snake.len()),
            Style::new().fg(theme.hud_fg),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{}ms{boost_tag}", state.tick_interval_ms),
            Style::new().fg(theme.menu_footer),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}
