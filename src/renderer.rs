use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::{
    COLOR_APPLE, COLOR_BANANA, COLOR_SKULL, COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD, COLOR_STRAWBERRY,
    GLYPH_FRUIT, GLYPH_SKULL, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GridSize,
};
use crate::fruit::FruitKind;
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [status_row, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(frame.area());

    render_status_line(frame, status_row, state);

    let block = Block::bordered().title(" skull snake ");
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_skulls(frame, inner, state);
    render_fruits(frame, inner, state);
    render_snake(frame, inner, state);

    match state.status {
        GameStatus::Paused => render_pause_popup(frame, play_area),
        GameStatus::GameOver => render_game_over_popup(frame, play_area, state.score),
        GameStatus::Victory => render_victory_popup(frame, play_area, state.score),
        GameStatus::Playing => {}
    }
}

fn render_status_line(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let text = format!(
        " Score: {}  Walls: {}  [space] pause  [q] quit",
        state.score,
        state.wall_mode.label()
    );
    frame.render_widget(
        Paragraph::new(Line::from(text)).style(Style::default().fg(Color::White)),
        area,
    );
}

fn render_skulls(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();
    for skull in &state.skulls {
        let Some((x, y)) = logical_to_terminal(inner, state.size(), *skull) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_SKULL, Style::new().fg(COLOR_SKULL));
    }
}

fn render_fruits(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();
    for fruit in &state.fruits {
        let Some((x, y)) = logical_to_terminal(inner, state.size(), fruit.position) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_FRUIT, Style::new().fg(fruit_color(fruit.kind)));
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.size(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.direction),
                Style::new()
                    .fg(COLOR_SNAKE_HEAD)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(COLOR_SNAKE_BODY));
        }
    }
}

fn fruit_color(kind: FruitKind) -> Color {
    match kind {
        FruitKind::Banana => COLOR_BANANA,
        FruitKind::Apple => COLOR_APPLE,
        FruitKind::Strawberry => COLOR_STRAWBERRY,
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

fn logical_to_terminal(inner: Rect, size: GridSize, position: Position) -> Option<(u16, u16)> {
    if position.x < 0
        || position.y < 0
        || position.x >= i32::from(size.cols)
        || position.y >= i32::from(size.rows)
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

fn render_pause_popup(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[space] resume"),
        Line::from("[q] quit"),
    ];
    render_popup(frame, area, " pause ", Color::Cyan, lines);
}

fn render_game_over_popup(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from("[enter] restart  [q] quit"),
    ];
    render_popup(frame, area, " game over ", Color::Red, lines);
}

fn render_victory_popup(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let lines = vec![
        Line::from("YOU WIN"),
        Line::from(""),
        Line::from(format!("Board filled. Score: {score}")),
        Line::from("[enter] restart  [q] quit"),
    ];
    render_popup(frame, area, " victory ", Color::Green, lines);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    accent: Color,
    lines: Vec<Line<'static>>,
) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(accent))
            .block(Block::bordered().title(title.to_string())),
        popup,
    );
}

fn centered_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);

    horizontal
}
