use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::food::SpecialKind;
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_level_notice, render_pause_menu, render_start_menu,
};

/// Renders the full game frame from immutable state.
///
/// The renderer never mutates engine state; it reads the post-tick snapshot
/// and draws it.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.status {
        GameStatus::NotStarted => render_start_menu(frame, play_area, theme),
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => render_game_over_menu(frame, play_area, state.score, theme),
        GameStatus::Running => {
            if let Some(notice) = state.level_notice {
                render_level_notice(frame, play_area, notice.level, theme);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    if let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food.position) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
    }

    let Some(special) = state.special_food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), special.position) else {
        return;
    };

    let color = match special.kind {
        SpecialKind::Speed => theme.special_speed,
        SpecialKind::Points => theme.special_points,
        SpecialKind::Shrink => theme.special_shrink,
    };
    buffer.set_string(
        x,
        y,
        special.kind.marker(),
        Style::new().fg(color).add_modifier(Modifier::BOLD),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if position.x < 0
        || position.y < 0
        || position.x >= i32::from(bounds.width)
        || position.y >= i32::from(bounds.height)
    {
        return None;
    }

    let x = inner.x.saturating_add(u16::try_from(position.x).ok()?);
    let y = inner.y.saturating_add(u16::try_from(position.y).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
